use crate::trie::node::TrieNode;
use std::mem;
use std::str::Chars;

/// Outcome of a recursive physical deletion at one level of the trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteResult {
    /// The full word was stored and its end-of-word marker has been cleared.
    pub was_word: bool,
    /// The node this result was reported for has no children left, so its parent may unlink it.
    pub safe_to_unlink: bool,
}

impl DeleteResult {
    fn not_found() -> Self {
        DeleteResult {
            was_word: false,
            safe_to_unlink: false,
        }
    }
}

/// Marks `word` as stored below `node`, creating any missing nodes along the way. Returns whether
/// the word was newly stored together with the number of nodes created.
pub fn insert(node: &mut TrieNode, word: &str) -> (bool, usize) {
    let mut created = 0;
    let mut curr = node;
    for ch in word.chars() {
        let (next, is_new) = curr.get_or_insert(ch);
        if is_new {
            created += 1;
        }
        curr = next;
    }
    (!mem::replace(&mut curr.end_of_word, true), created)
}

pub fn search_prefix<'a>(node: &'a TrieNode, prefix: &str) -> Option<&'a TrieNode> {
    let mut curr = node;
    for ch in prefix.chars() {
        curr = curr.get(ch)?;
    }
    Some(curr)
}

/// Clears the end-of-word marker of `word` without removing any node. Stops silently if the path
/// for `word` is incomplete. Returns whether a marker was cleared.
pub fn delete_logically(node: &mut TrieNode, word: &str) -> bool {
    let mut curr = node;
    for ch in word.chars() {
        curr = match curr.get_mut(ch) {
            Some(next) => next,
            None => return false,
        };
    }
    mem::replace(&mut curr.end_of_word, false)
}

/// Removes the remaining characters of a word below `node` and prunes every trailing node that
/// ends up childless and unmarked. `pruned` is incremented once per unlinked node.
pub fn delete_physically(
    node: &mut TrieNode,
    mut chars: Chars,
    pruned: &mut usize,
) -> DeleteResult {
    let ch = match chars.next() {
        Some(ch) => ch,
        None => {
            if !node.end_of_word {
                return DeleteResult::not_found();
            }
            node.end_of_word = false;
            return DeleteResult {
                was_word: true,
                safe_to_unlink: node.is_leaf(),
            };
        },
    };

    let (result, child_is_word) = match node.get_mut(ch) {
        Some(child) => (delete_physically(child, chars, pruned), child.end_of_word),
        None => return DeleteResult::not_found(),
    };

    // a child still marked as a word terminates a shorter stored key
    if result.safe_to_unlink && !child_is_word {
        node.remove_child(ch);
        *pruned += 1;
        DeleteResult {
            was_word: result.was_word,
            safe_to_unlink: node.is_leaf(),
        }
    } else {
        DeleteResult {
            was_word: result.was_word,
            safe_to_unlink: false,
        }
    }
}
