//! Prefix tree over `char` keys with logical and physical deletion.

mod node;
mod set;
mod tree;

pub use self::set::Trie;
