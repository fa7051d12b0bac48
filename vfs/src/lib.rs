//! # Virtual File System
//!
//! This crate provides the read-only, in-memory file tree backing the
//! PixxelOps terminal.
//!
//! ## Philosophy
//!
//! - **The disk is a value**: the whole tree is built up front and never
//!   mutated afterwards
//! - **Resolution is total**: turning user input into an absolute path
//!   cannot fail; only looking the path up can
//! - **Order is meaningful**: directory listings follow insertion order,
//!   never a sort
//! - **Errors are data**: lookup failures are typed so callers can pick
//!   the right diagnostic
//!
//! ## Design
//!
//! - A [`Node`] is either a directory (ordered child entries) or a file
//!   (its contents)
//! - [`path::resolve`] normalizes `.` / `..` / absolute-vs-relative input
//!   against a base directory
//! - [`VirtualFs`] walks the tree and exposes `lookup`, `list_directory`
//!   and `read_file`

pub mod node;
pub mod path;
pub mod seed;

pub use node::{DirEntry, ListEntry, Node, NodeKind};
pub use seed::{pixxelops_disk, HOME_DIR};

use thiserror::Error;

/// Errors that can occur while walking the tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VfsError {
    /// A path segment does not exist, or traversal passed through a file
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path names a file where a directory was required
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// The path names a directory where a file was required
    #[error("Is a directory: {0}")]
    IsADirectory(String),
}

/// Read-only view over a seeded file tree.
///
/// All accessors take normalized absolute paths as produced by
/// [`path::resolve`].
pub struct VirtualFs {
    root: Node,
}

impl VirtualFs {
    /// Wraps a root node. The root is expected to be a directory.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// The root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walks an absolute path down to its node.
    ///
    /// Every intermediate segment must name a directory entry; a missing
    /// segment or a file in the middle of the path yields
    /// [`VfsError::NotFound`].
    pub fn lookup(&self, abs_path: &str) -> Result<&Node, VfsError> {
        let mut current = &self.root;
        for segment in path::segments(abs_path) {
            match current.child(segment) {
                Some(node) => current = node,
                None => return Err(VfsError::NotFound(abs_path.to_string())),
            }
        }
        Ok(current)
    }

    /// Lists a directory: subdirectories first, then files, each group in
    /// insertion order.
    pub fn list_directory(&self, abs_path: &str) -> Result<Vec<ListEntry>, VfsError> {
        let node = self.lookup(abs_path)?;
        let entries = match node.entries() {
            Some(entries) => entries,
            None => return Err(VfsError::NotADirectory(abs_path.to_string())),
        };

        let mut listing = Vec::with_capacity(entries.len());
        for entry in entries.iter().filter(|e| e.node.is_directory()) {
            listing.push(ListEntry::directory(&entry.name));
        }
        for entry in entries.iter().filter(|e| !e.node.is_directory()) {
            listing.push(ListEntry::file(&entry.name));
        }
        Ok(listing)
    }

    /// Returns the contents of a file.
    pub fn read_file(&self, abs_path: &str) -> Result<&str, VfsError> {
        match self.lookup(abs_path)? {
            Node::File(contents) => Ok(contents),
            Node::Directory(_) => Err(VfsError::IsADirectory(abs_path.to_string())),
        }
    }
}
