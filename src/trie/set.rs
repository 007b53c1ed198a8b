use crate::trie::node::TrieNode;
use crate::trie::tree;
use serde::{Serialize, Serializer};
use std::iter::FromIterator;

/// A set of words stored in a prefix tree.
///
/// Every edge of the tree is labeled by a single `char` and every node records whether a stored
/// word ends there. Words that share a prefix share the nodes of that prefix. The children of a
/// node are kept in an ordered map, so the structure of two tries holding the same words is
/// identical regardless of insertion order.
///
/// Words can be removed in two ways. A logical deletion only clears the end-of-word marker of the
/// word and leaves every node in place. A physical deletion also unlinks the trailing nodes that no
/// longer lead to a stored word, stopping at the first node that is shared with another word or
/// that terminates a shorter one.
///
/// # Examples
///
/// ```
/// use prefix_trie::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("apple");
/// trie.insert("app");
///
/// assert!(trie.search("apple"));
/// assert!(trie.starts_with("appl"));
/// assert!(!trie.search("appl"));
///
/// trie.delete_physically("app");
/// assert!(!trie.search("app"));
/// assert!(trie.search("apple"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "TrieNode")]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Constructs a new, empty `Trie`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts a word into the trie, creating one node for every character that is not already
    /// on the path. Returns `true` if the word was not stored before. Inserting the empty string
    /// marks the root as a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("foo"));
    /// assert!(!trie.insert("foo"));
    /// assert!(trie.search("foo"));
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        let (inserted, created) = tree::insert(&mut self.root, word);
        trace!("insert {:?} created {} node(s)", word, created);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns `true` if the word is stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("there");
    /// assert!(trie.search("there"));
    /// assert!(!trie.search("the"));
    /// ```
    pub fn search(&self, word: &str) -> bool {
        self.search_prefix(word).map_or(false, |node| node.end_of_word)
    }

    /// Returns `true` if the path for `prefix` exists, whether or not a word ends there.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("there");
    /// assert!(trie.starts_with("th"));
    /// assert!(trie.starts_with("there"));
    /// assert!(!trie.starts_with("thy"));
    /// ```
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.search_prefix(prefix).is_some()
    }

    pub(crate) fn search_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        tree::search_prefix(&self.root, prefix)
    }

    /// Clears the end-of-word marker of `word` without removing any node. If the path for `word`
    /// is incomplete the trie is left unchanged. Returns `true` if the word was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("apple");
    /// trie.insert("app");
    /// assert!(trie.delete_logically("app"));
    /// assert!(!trie.search("app"));
    /// assert!(trie.starts_with("app"));
    /// assert!(trie.search("apple"));
    /// ```
    pub fn delete_logically(&mut self, word: &str) -> bool {
        let deleted = tree::delete_logically(&mut self.root, word);
        debug!("logical delete {:?}: deleted={}", word, deleted);
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Removes `word` and unlinks every trailing node of its path that has no children and does
    /// not terminate another word. Nodes shared with other words are never removed. If the word is
    /// not stored the trie is left unchanged. Returns `true` if the word was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("bye");
    /// assert!(trie.delete_physically("bye"));
    /// assert!(!trie.starts_with("b"));
    /// assert!(!trie.delete_physically("bye"));
    /// ```
    pub fn delete_physically(&mut self, word: &str) -> bool {
        let mut pruned = 0;
        let result = tree::delete_physically(&mut self.root, word.chars(), &mut pruned);
        debug!(
            "physical delete {:?}: deleted={}, pruned {} node(s)",
            word, result.was_word, pruned
        );
        if result.was_word {
            self.len -= 1;
        }
        result.was_word
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("foo");
    /// trie.insert("foobar");
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie stores no words. A trie emptied by logical deletions may still
    /// hold nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes in the trie, including the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("any");
    /// trie.insert("answer");
    /// assert_eq!(trie.node_count(), 8);
    /// ```
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Clears the trie, removing every word and node.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("foo");
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }
}

// Only the root is serialized. The word count is recomputed on deserialization so that it always
// matches the end-of-word markers of the loaded tree.
impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl From<TrieNode> for Trie {
    fn from(root: TrieNode) -> Self {
        let len = root.count_words();
        Trie { root, len }
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl Extend<String> for Trie {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.insert(&word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl FromIterator<String> for Trie {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
