// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lexicon Trie.
//!
//! Nodes do not own each other. Each child edge is a [`NodeId`] into the
//! trie's [`NodeArena`](super::arena::NodeArena), so every node has exactly
//! one owner (the arena) and exactly one parent edge.

use super::alphabet::{Letter, ALPHABET_SIZE};

/// Stable handle to a node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Slot index of this node in allocation order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A node in the Lexicon Trie.
///
/// Each node stands for one prefix. A terminal node marks a complete word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Child edges indexed by letter
    children: [Option<NodeId>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells an inserted word
    pub terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `letter`, if any.
    pub fn child(&self, letter: Letter) -> Option<NodeId> {
        self.children[letter.index()]
    }

    pub(crate) fn set_child(&mut self, letter: Letter, child: NodeId) {
        self.children[letter.index()] = Some(child);
    }

    pub(crate) fn take_child(&mut self, letter: Letter) -> Option<NodeId> {
        self.children[letter.index()].take()
    }

    /// Whether any word continues past this node.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// A dead node has no children and is not terminal. It must not stay
    /// attached to its parent.
    pub fn is_dead(&self) -> bool {
        !self.terminal && !self.has_children()
    }

    /// Iterates over present children in alphabet order.
    pub fn children(&self) -> impl Iterator<Item = (Letter, NodeId)> + '_ {
        self.children_from(0)
    }

    /// Iterates over present children whose letter index is at least `start`.
    pub(crate) fn children_from(&self, start: usize) -> impl Iterator<Item = (Letter, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .skip(start)
            .filter_map(|(index, child)| Some((Letter::from_index(index)?, (*child)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_new_node_is_dead() {
        let node = TrieNode::new();
        assert!(!node.terminal);
        assert!(!node.has_children());
        assert!(node.is_dead());
    }

    #[test]
    fn test_child_edges() {
        let mut node = TrieNode::new();
        node.set_child(letter('q'), NodeId::new(7));
        node.set_child(letter('b'), NodeId::new(3));

        assert_eq!(node.child(letter('q')), Some(NodeId::new(7)));
        assert_eq!(node.child(letter('a')), None);
        assert!(!node.is_dead());

        let order: Vec<char> = node.children().map(|(l, _)| l.as_char()).collect();
        assert_eq!(order, vec!['b', 'q']);

        let tail: Vec<char> = node.children_from(2).map(|(l, _)| l.as_char()).collect();
        assert_eq!(tail, vec!['q']);

        assert_eq!(node.take_child(letter('b')), Some(NodeId::new(3)));
        assert_eq!(node.take_child(letter('b')), None);
    }

    #[test]
    fn test_terminal_node_is_not_dead() {
        let node = TrieNode {
            terminal: true,
            ..TrieNode::default()
        };
        assert!(!node.is_dead());
    }
}
