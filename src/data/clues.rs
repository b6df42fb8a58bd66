//! Clue index
//!
//! Every distinct clue text the player has found, kept in a binary search
//! tree so the final report can list them alphabetically.

use std::cmp::Ordering;

#[derive(Debug)]
struct ClueEntry {
    text: String,
    left: Option<Box<ClueEntry>>,
    right: Option<Box<ClueEntry>>,
}

impl ClueEntry {
    fn leaf(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Binary search tree of clue texts, ordered byte-wise
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueEntry>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text`, returning `false` if it was already indexed
    pub fn insert(&mut self, text: &str) -> bool {
        let mut slot = &mut self.root;
        while let Some(entry) = slot {
            slot = match text.cmp(entry.text.as_str()) {
                Ordering::Less => &mut entry.left,
                Ordering::Greater => &mut entry.right,
                Ordering::Equal => {
                    tracing::trace!(clue = text, "clue already indexed");
                    return false;
                }
            };
        }
        *slot = Some(ClueEntry::leaf(text));
        self.len += 1;
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(entry) = cursor {
            cursor = match text.cmp(entry.text.as_str()) {
                Ordering::Less => entry.left.as_deref(),
                Ordering::Greater => entry.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clues in ascending order, or `None` when nothing has been collected yet
    ///
    /// Each call starts a fresh traversal.
    pub fn list_in_order(&self) -> Option<InOrder<'_>> {
        self.root.as_deref().map(InOrder::from_root)
    }

    pub fn iter(&self) -> InOrder<'_> {
        self.list_in_order().unwrap_or_default()
    }
}

impl Drop for ClueIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<ClueEntry>> = self.root.take().into_iter().collect();
        while let Some(mut entry) = stack.pop() {
            stack.extend(entry.left.take());
            stack.extend(entry.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order traversal: left subtree, entry, right subtree
#[derive(Debug, Default)]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueEntry>,
}

impl<'a> InOrder<'a> {
    fn from_root(root: &'a ClueEntry) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(Some(root));
        walk
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a ClueEntry>) {
        while let Some(entry) = cursor {
            self.stack.push(entry);
            cursor = entry.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.push_left_spine(entry.right.as_deref());
        Some(entry.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_signals_no_clues() {
        let index = ClueIndex::new();
        assert!(index.is_empty());
        assert!(index.list_in_order().is_none());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn lists_alphabetically() {
        let mut index = ClueIndex::new();
        for clue in [
            "O porteiro viu um carro vermelho.",
            "Um bilhete rasgado sob o sofa.",
            "O Abajur esta ligado, ha impressao digital.",
            "A porta da dispensa foi forcada.",
        ] {
            assert!(index.insert(clue));
        }

        let listed: Vec<&str> = index.list_in_order().unwrap().collect();
        assert_eq!(
            listed,
            vec![
                "A porta da dispensa foi forcada.",
                "O Abajur esta ligado, ha impressao digital.",
                "O porteiro viu um carro vermelho.",
                "Um bilhete rasgado sob o sofa.",
            ]
        );
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn duplicate_text_is_absorbed() {
        let mut index = ClueIndex::new();
        assert!(index.insert("Facas organizadas, exceto uma."));
        assert!(!index.insert("Facas organizadas, exceto uma."));
        assert!(!index.insert("Facas organizadas, exceto uma."));
        assert_eq!(index.len(), 1);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["Facas organizadas, exceto uma."]);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let mut index = ClueIndex::new();
        index.insert("abajur");
        index.insert("Zebra");
        index.insert("Abajur");
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["Abajur", "Zebra", "abajur"]);
    }

    #[test]
    fn listing_is_restartable() {
        let mut index = ClueIndex::new();
        index.insert("b");
        index.insert("a");
        index.insert("c");

        let mut first = index.list_in_order().unwrap();
        assert_eq!(first.next(), Some("a"));
        let second: Vec<&str> = index.list_in_order().unwrap().collect();
        assert_eq!(second, vec!["a", "b", "c"]);
        assert_eq!(first.collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn contains_follows_the_ordering() {
        let mut index = ClueIndex::new();
        for word in ["m", "c", "x", "a", "e"] {
            index.insert(word);
        }
        assert!(index.contains("e"));
        assert!(index.contains("x"));
        assert!(!index.contains("d"));
    }

    #[test]
    fn sorted_insertions_do_not_overflow_on_drop() {
        let mut index = ClueIndex::new();
        for i in 0..10_000 {
            index.insert(&format!("{i:08}"));
        }
        assert_eq!(index.len(), 10_000);
        assert_eq!(index.iter().next(), Some("00000000"));
        drop(index);
    }
}
