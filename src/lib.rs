//! dirmap - deterministic directory-tree snapshots.
//!
//! Walks a directory tree depth-first, drops a fixed set of ignored names,
//! and renders what remains as a Unicode tree diagram:
//!
//! ```text
//! project/
//! ├── Cargo.toml
//! └── src
//!     ├── lib.rs
//!     └── main.rs
//! ```
//!
//! # Architecture
//!
//! ```text
//! Discovery → Rendering → Driver
//!     ↓           ↓          ↓
//!  read_dir    pointers   output file
//!  + filter    + prefix   + preview
//!  + sort      glyphs
//! ```
//!
//! Output is deterministic for a given directory snapshot: entries are
//! sorted by name at every level, so two runs against an unchanged tree
//! produce byte-identical text.

pub mod config;
pub mod discovery;
pub mod rendering;

// Re-export core types
pub use config::{IgnoreSet, DEFAULT_IGNORES, OUTPUT_FILENAME};
pub use discovery::Child;
pub use rendering::TreeRenderer;
