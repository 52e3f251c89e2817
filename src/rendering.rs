//! Tree rendering - from a directory walk to ordered text lines.
//!
//! Produces the classic box-drawing layout:
//!
//! ```text
//! root/
//! ├── a.txt
//! ├── b.txt
//! └── sub
//!     └── c.txt
//! ```
//!
//! The header names the root; every other line is `<prefix><pointer><name>`.
//! The prefix accumulates one four-column cell per ancestor level, carrying
//! a continuation bar exactly where an ancestor was a non-last sibling.

use std::path::Path;

use anyhow::Result;

use crate::config::IgnoreSet;
use crate::discovery;

/// Pointer for a sibling with more siblings after it.
pub const BRANCH_POINTER: &str = "├── ";
/// Pointer for the last sibling of its directory.
pub const LAST_POINTER: &str = "└── ";

/// Prefix cell below a non-last sibling: deeper lines keep its bar.
const BRANCH_EXTENSION: &str = "│   ";
/// Prefix cell below the last sibling: nothing left to connect to.
const LAST_EXTENSION: &str = "    ";

/// Depth-first tree renderer over a filtered, sorted directory walk.
///
/// The ignore set is injected at construction; the renderer itself holds no
/// other state and never mutates the filesystem, so the same instance can
/// render any number of roots.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    ignores: IgnoreSet,
}

impl TreeRenderer {
    pub fn new(ignores: IgnoreSet) -> Self {
        Self { ignores }
    }

    /// Render the tree rooted at `root` as one newline-joined string.
    ///
    /// No trailing newline: the output ends with its final line.
    pub fn render(&self, root: &Path) -> Result<String> {
        Ok(self.render_lines(root)?.join("\n"))
    }

    /// Render the tree rooted at `root` as an ordered line sequence.
    ///
    /// The first line is the header `"<root base name>/"`; the rest follow
    /// in depth-first order, siblings ascending by name. `root` should be
    /// an absolute path so the header carries a meaningful name.
    ///
    /// A subdirectory that disappears between its parent's listing and the
    /// recursion into it keeps its own line and contributes no descendants;
    /// any other traversal failure aborts the render.
    pub fn render_lines(&self, root: &Path) -> Result<Vec<String>> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let mut lines = vec![format!("{}/", name)];
        self.walk(root, "", &mut lines)?;
        Ok(lines)
    }

    fn walk(&self, dir: &Path, prefix: &str, lines: &mut Vec<String>) -> Result<()> {
        let children = match discovery::list_children(dir, &self.ignores)? {
            Some(children) => children,
            // Branch vanished since the parent listed it: emit nothing.
            None => return Ok(()),
        };

        let count = children.len();
        for (index, child) in children.iter().enumerate() {
            let is_last = index + 1 == count;
            let pointer = if is_last { LAST_POINTER } else { BRANCH_POINTER };
            lines.push(format!("{}{}{}", prefix, pointer, child.name));

            if child.is_dir {
                let extension = if is_last { LAST_EXTENSION } else { BRANCH_EXTENSION };
                self.walk(&child.path, &format!("{}{}", prefix, extension), lines)?;
            }
        }

        Ok(())
    }
}
