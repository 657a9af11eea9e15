// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types

use crate::model::LayerId;
use thiserror::Error;

/// Rejected layer-management edits.
///
/// A rejected edit leaves the session and its history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A glyph must keep at least one layer
    #[error("cannot delete the last layer of a glyph")]
    LastLayer,

    #[error("no layer with id {0}")]
    UnknownLayer(LayerId),
}

/// Failures reading or writing project data.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid path data {data:?}: {reason}")]
    PathData { data: String, reason: String },
}
