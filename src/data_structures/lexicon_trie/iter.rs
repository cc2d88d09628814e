// Copyright (c) 2025 Lexicon Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy depth-first enumeration of stored words.

use std::iter::FusedIterator;

use super::arena::NodeArena;
use super::node::NodeId;

/// Iterator over the words below a node, in lexicographic order.
///
/// Children are visited `a` to `z` and a word is yielded as soon as its
/// terminal node is entered, so shorter words come before their extensions.
/// The traversal reuses one path buffer and only allocates for yielded words.
/// Cloning the iterator snapshots its position.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    arena: &'a NodeArena,
    stack: Vec<Frame>,
    path: String,
    pending_start: bool,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next_letter: usize,
}

impl<'a> Words<'a> {
    /// Enumerates the subtree of `start`, prefixing every word with `prefix`.
    pub(crate) fn from_node(arena: &'a NodeArena, start: NodeId, prefix: String) -> Self {
        Self {
            arena,
            stack: vec![Frame {
                node: start,
                next_letter: 0,
            }],
            pending_start: arena[start].terminal,
            path: prefix,
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty(arena: &'a NodeArena) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            path: String::new(),
            pending_start: false,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pending_start {
            self.pending_start = false;
            return Some(self.path.clone());
        }

        let arena = self.arena;
        while let Some(frame) = self.stack.last_mut() {
            match arena[frame.node].children_from(frame.next_letter).next() {
                Some((letter, child)) => {
                    frame.next_letter = letter.index() + 1;
                    self.path.push(letter.as_char());
                    self.stack.push(Frame {
                        node: child,
                        next_letter: 0,
                    });
                    if arena[child].terminal {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start frame owns the prefix, every other frame one letter
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}
