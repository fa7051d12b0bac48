//! File tree nodes
//!
//! The tree is built once at startup with the builder methods and stays
//! immutable for the life of the session.

/// A single node in the tree: a directory with ordered children, or a
/// file with its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Vec<DirEntry>),
    File(String),
}

/// A named child inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub node: Node,
}

impl Node {
    /// A directory with no entries.
    pub fn empty_dir() -> Self {
        Node::Directory(Vec::new())
    }

    /// A file with the given contents.
    pub fn file(contents: impl Into<String>) -> Self {
        Node::File(contents.into())
    }

    /// Builder: appends a child entry and returns the directory.
    ///
    /// Re-using a name replaces the earlier entry in place, keeping its
    /// position. Calling this on a file replaces the file with a
    /// single-entry directory.
    pub fn with_entry(self, name: impl Into<String>, node: Node) -> Self {
        let name = name.into();
        let mut entries = match self {
            Node::Directory(entries) => entries,
            Node::File(_) => Vec::new(),
        };
        match entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.node = node,
            None => entries.push(DirEntry { name, node }),
        }
        Node::Directory(entries)
    }

    /// True for directory nodes.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Looks up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory(entries) => {
                entries.iter().find(|e| e.name == name).map(|e| &e.node)
            }
            Node::File(_) => None,
        }
    }

    /// The child entries of a directory, `None` for files.
    pub fn entries(&self) -> Option<&[DirEntry]> {
        match self {
            Node::Directory(entries) => Some(entries),
            Node::File(_) => None,
        }
    }
}

/// What kind of node a listing entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub kind: NodeKind,
}

impl ListEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_insertion_order() {
        let dir = Node::empty_dir()
            .with_entry("zeta", Node::empty_dir())
            .with_entry("alpha", Node::file("a"))
            .with_entry("mid", Node::empty_dir());

        let names: Vec<&str> = dir
            .entries()
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_builder_replaces_duplicate_in_place() {
        let dir = Node::empty_dir()
            .with_entry("a", Node::file("one"))
            .with_entry("b", Node::file("two"))
            .with_entry("a", Node::file("three"));

        let entries = dir.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a");
        assert_eq!(entries[0].node, Node::file("three"));
    }

    #[test]
    fn test_child_lookup() {
        let dir = Node::empty_dir().with_entry("readme", Node::file("hi"));
        assert!(dir.child("readme").is_some());
        assert!(dir.child("absent").is_none());
    }

    #[test]
    fn test_file_has_no_children() {
        let file = Node::file("contents");
        assert!(file.child("anything").is_none());
        assert!(file.entries().is_none());
        assert!(!file.is_directory());
    }
}
