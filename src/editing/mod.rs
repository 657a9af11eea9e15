// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod eraser;
pub mod session;
pub mod undo;

pub use eraser::EraseReport;
pub use session::{EditSession, LayerMove};
pub use undo::UndoState;
