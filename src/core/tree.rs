//! Repository file tree construction.
//!
//! Folds the flat entry list returned by `GET /tree` into a nested forest
//! for the viewer. Construction is a single left-to-right pass over the
//! entries, so rebuilding from the same input always yields the same tree.

use crate::models::{EntryKind, TreeEntry};

/// Split a raw path into its non-empty segments.
///
/// Empty components from leading, trailing, or doubled slashes are dropped,
/// so a malformed path degrades to fewer segments rather than erroring.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// One node of the repository tree: a file or directory at a unique path.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Last path segment.
    pub name: String,
    /// Full `/`-joined path from the root; unique within the tree.
    pub full_path: String,
    pub kind: EntryKind,
    /// Blob size in bytes, when the backend reported one.
    pub size: Option<u64>,
    /// Child nodes in first-seen order, so rendering is stable across
    /// rebuilds.
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: &str, full_path: String, kind: EntryKind) -> Self {
        Self {
            name: name.to_string(),
            full_path,
            kind,
            size: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }
}

/// Forest of root-level nodes built from a flat entry list. Top-level files
/// and directories coexist as separate roots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileTree {
    roots: Vec<TreeNode>,
}

impl FileTree {
    /// Build the forest from entries in input order.
    ///
    /// For each entry the path segments are walked from the root, creating
    /// any missing node along the way. Intermediate segments are created as
    /// directories, and an existing node traversed as an intermediate is
    /// promoted to a directory. The terminal segment unconditionally adopts
    /// the entry's kind and size, so for duplicate paths the last entry
    /// wins.
    pub fn build(entries: &[TreeEntry]) -> Self {
        let mut roots: Vec<TreeNode> = Vec::new();

        for entry in entries {
            let segments = split_segments(&entry.path);
            if segments.is_empty() {
                continue;
            }

            let mut level = &mut roots;
            let mut prefix = String::new();
            let last_index = segments.len() - 1;

            for (i, segment) in segments.iter().enumerate() {
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(segment);

                let is_last = i == last_index;
                let position = level.iter().position(|n| n.name == *segment);
                let index = match position {
                    Some(index) => index,
                    None => {
                        let kind = if is_last {
                            entry.kind
                        } else {
                            EntryKind::Directory
                        };
                        level.push(TreeNode::new(segment, prefix.clone(), kind));
                        level.len() - 1
                    }
                };

                let node = &mut level[index];
                if is_last {
                    node.kind = entry.kind;
                    node.size = entry.size;
                } else if !node.is_dir() {
                    node.kind = EntryKind::Directory;
                }
                level = &mut node.children;
            }
        }

        Self { roots }
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Look up a node by its full path.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let mut level = self.roots.as_slice();
        let mut found = None;
        for segment in split_segments(path) {
            let node = level.iter().find(|n| n.name == segment)?;
            level = node.children();
            found = Some(node);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind: EntryKind::File,
            size: None,
        }
    }

    fn dir(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind: EntryKind::Directory,
            size: None,
        }
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(split_segments("/a//b/"), vec!["a", "b"]);
        assert_eq!(split_segments("readme.md"), vec!["readme.md"]);
        assert!(split_segments("").is_empty());
        assert!(split_segments("///").is_empty());
    }

    #[test]
    fn test_root_forest() {
        let tree = FileTree::build(&[file("readme.md"), dir("src"), file("src/index.ts")]);

        assert_eq!(tree.roots().len(), 2);
        let readme = &tree.roots()[0];
        assert_eq!(readme.name, "readme.md");
        assert!(!readme.is_dir());
        assert!(readme.children().is_empty());

        let src = &tree.roots()[1];
        assert_eq!(src.name, "src");
        assert!(src.is_dir());
        assert_eq!(src.children().len(), 1);
        assert_eq!(src.children()[0].full_path, "src/index.ts");
    }

    #[test]
    fn test_idempotent_construction() {
        let entries = vec![
            dir("src"),
            file("src/main.rs"),
            file("src/lib.rs"),
            dir("tests"),
            file("tests/it.rs"),
            file("Cargo.toml"),
        ];
        assert_eq!(FileTree::build(&entries), FileTree::build(&entries));
    }

    #[test]
    fn test_last_kind_wins_for_duplicate_paths() {
        let tree = FileTree::build(&[file("a/b"), dir("a/b")]);
        let node = tree.find("a/b").unwrap();
        assert_eq!(node.kind, EntryKind::Directory);

        let tree = FileTree::build(&[dir("a/b"), file("a/b")]);
        assert_eq!(tree.find("a/b").unwrap().kind, EntryKind::File);
    }

    #[test]
    fn test_intermediate_promotion() {
        // "a/b" arrives as a file, then turns out to be a parent
        let tree = FileTree::build(&[file("a/b"), file("a/b/c")]);
        let node = tree.find("a/b").unwrap();
        assert!(node.is_dir());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_missing_intermediates_are_directories() {
        let tree = FileTree::build(&[file("deep/er/leaf.txt")]);
        assert!(tree.find("deep").unwrap().is_dir());
        assert!(tree.find("deep/er").unwrap().is_dir());
        assert!(!tree.find("deep/er/leaf.txt").unwrap().is_dir());
    }

    #[test]
    fn test_child_insertion_order_preserved() {
        let tree = FileTree::build(&[
            file("src/zeta.rs"),
            file("src/alpha.rs"),
            file("src/mid.rs"),
        ]);
        let names: Vec<_> = tree
            .find("src")
            .unwrap()
            .children()
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta.rs", "alpha.rs", "mid.rs"]);
    }

    #[test]
    fn test_empty_input() {
        let tree = FileTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn test_size_carried_to_leaf() {
        let entries = vec![TreeEntry {
            path: "src/main.rs".to_string(),
            kind: EntryKind::File,
            size: Some(2048),
        }];
        let tree = FileTree::build(&entries);
        assert_eq!(tree.find("src/main.rs").unwrap().size, Some(2048));
        assert_eq!(tree.find("src").unwrap().size, None);
    }

    #[test]
    fn test_find_missing() {
        let tree = FileTree::build(&[file("src/main.rs")]);
        assert!(tree.find("src/other.rs").is_none());
        assert!(tree.find("nope").is_none());
        assert!(tree.find("").is_none());
    }
}
