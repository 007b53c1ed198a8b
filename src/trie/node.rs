use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::mem;

/// A single node of the trie. The edge leading into a node is the key it is stored under in its
/// parent's `children`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    pub end_of_word: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            end_of_word: false,
        }
    }

    pub fn get(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    pub fn get_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&ch)
    }

    /// Returns the child for `ch`, creating an empty one if it does not exist. The flag is `true`
    /// if the child was created.
    pub fn get_or_insert(&mut self, ch: char) -> (&mut TrieNode, bool) {
        match self.children.entry(ch) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(TrieNode::new()), true),
        }
    }

    pub fn remove_child(&mut self, ch: char) -> Option<TrieNode> {
        self.children.remove(&ch)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted at this node, including itself.
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Number of nodes in the subtree rooted at this node that are marked as the end of a word.
    pub fn count_words(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.end_of_word {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }
}

// Children are detached onto a work stack so that a long chain of nodes does not drop recursively.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = mem::replace(&mut self.children, BTreeMap::new())
            .into_iter()
            .map(|(_, child)| child)
            .collect();
        while let Some(mut node) = stack.pop() {
            let children = mem::replace(&mut node.children, BTreeMap::new());
            stack.extend(children.into_iter().map(|(_, child)| child));
        }
    }
}
