//! A prefix tree (trie) storing words keyed by `char`, with both logical and physical deletion.
//!
//! Logical deletion only clears the end-of-word marker of a word. Physical deletion additionally
//! prunes the nodes of the deleted word that no longer lead to any stored word.

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_test;

pub mod command;
pub mod trie;
