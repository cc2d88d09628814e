// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot arena that owns every node of a Lexicon Trie.
//!
//! The arena doubles as the node registry: slots are laid out in allocation
//! order, a pruned node's slot is cleared in place and remembered on a free
//! list, and dropping the arena releases every remaining node exactly once.
//! Live slots are never moved, so a [`NodeId`] stays valid until its node is
//! released.

use std::ops::{Index, IndexMut};

use super::node::{NodeId, TrieNode};

/// Owner of all trie nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    /// Node slots in allocation order; `None` marks a released node
    slots: Vec<Option<TrieNode>>,

    /// Released slots available for reuse, most recent last
    free: Vec<NodeId>,

    /// Number of occupied slots
    live: usize,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh, empty node and returns its id.
    ///
    /// Vacant slots are reused before the arena grows.
    pub fn alloc(&mut self) -> NodeId {
        self.live += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(TrieNode::new());
            return id;
        }
        self.slots.push(Some(TrieNode::new()));
        NodeId::new(self.slots.len() - 1)
    }

    /// Releases the node in `id`, clearing its slot.
    ///
    /// Returns the released node, or `None` if the slot was already vacant.
    pub fn release(&mut self, id: NodeId) -> Option<TrieNode> {
        let node = self.slots.get_mut(id.index())?.take()?;
        self.live -= 1;
        self.free.push(id);
        Some(node)
    }

    /// Returns the node in `id` if the slot is occupied.
    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.slots.get(id.index())?.as_ref()
    }

    /// Returns the node in `id` mutably if the slot is occupied.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    /// Number of live nodes.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Number of slots ever allocated, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    /// # Panics
    ///
    /// Panics if the slot is vacant. Ids held by a trie always point at live
    /// nodes, so this only fires on a broken ownership invariant.
    fn index(&self, id: NodeId) -> &TrieNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {id:?} is not live in the arena"),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node {id:?} is not live in the arena"),
        }
    }
}
