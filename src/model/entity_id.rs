// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for layers.
//!
//! Each `LayerId` is a monotonically increasing `u64` generated from a global
//! atomic counter. The active layer, undo snapshots and layer-management edits
//! all refer to layers by id, so reordering never invalidates a reference.
//! Ids read back from project files are fed to [`LayerId::observe`], which
//! moves the counter past them so freshly minted ids never collide.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u64);

static LAYER_COUNTER: AtomicU64 = AtomicU64::new(1);

impl LayerId {
    /// Create a new unique layer ID
    pub fn next() -> Self {
        Self(LAYER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Adopt an id read from stored data.
    pub fn observe(raw: u64) -> Self {
        LAYER_COUNTER.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

impl Serialize for LayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for LayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LayerIdVisitor)
    }
}

struct LayerIdVisitor;

impl Visitor<'_> for LayerIdVisitor {
    type Value = LayerId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a layer id number or string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LayerId, E> {
        Ok(LayerId::observe(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LayerId, E> {
        u64::try_from(v)
            .map(LayerId::observe)
            .map_err(|_| E::custom(format!("negative layer id {v}")))
    }

    // Older projects use ids such as "layer-base-1712345678901".
    fn visit_str<E: de::Error>(self, v: &str) -> Result<LayerId, E> {
        let digits_start = v
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);
        let parsed = digits_start.and_then(|i| v[i..].parse::<u64>().ok());
        Ok(parsed.map(LayerId::observe).unwrap_or_else(LayerId::next))
    }
}
