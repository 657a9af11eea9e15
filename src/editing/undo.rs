// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Undo/redo state.
//!
//! A linear two-stack history of whole-state snapshots. The caller pushes
//! the state *before* a mutation with `add_undo_group`; `undo` and `redo`
//! take the current state and hand back the one to restore.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct UndoState<T> {
    undo_stack: VecDeque<T>,
    redo_stack: Vec<T>,
    /// Maximum number of undo snapshots kept; `None` keeps everything
    limit: Option<usize>,
}

impl<T> UndoState<T> {
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Record the state preceding a new edit. Clears the redo stack.
    pub fn add_undo_group(&mut self, previous: T) {
        self.undo_stack.push_back(previous);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
        self.redo_stack.clear();
    }

    /// Step back. Returns the state to restore, or `None` if there is
    /// nothing to undo (in which case `current` is dropped unchanged).
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward after an undo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<T> Default for UndoState<T> {
    fn default() -> Self {
        Self::new()
    }
}
