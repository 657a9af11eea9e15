// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The glyph set: every authored glyph of a script, keyed by character.
//!
//! Lookups try the literal character first and the glyph alias second.
//! Storage is a `BTreeMap` so iteration and serialization order are stable.

use super::Glyph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Glyph>", into = "Vec<Glyph>")]
pub struct GlyphSet {
    glyphs: BTreeMap<char, Glyph>,
    /// alias -> character
    aliases: BTreeMap<char, char>,
}

impl GlyphSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Resolve a character, literal mapping first, alias second
    pub fn lookup(&self, c: char) -> Option<&Glyph> {
        self.glyphs
            .get(&c)
            .or_else(|| self.aliases.get(&c).and_then(|owner| self.glyphs.get(owner)))
    }

    /// Glyph stored for exactly this character
    pub fn get(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Insert or replace the glyph for its character
    pub fn insert(&mut self, glyph: Glyph) -> Option<Glyph> {
        let previous = self.remove(glyph.character);
        if let Some(alias) = glyph.alias {
            self.aliases.insert(alias, glyph.character);
        }
        self.glyphs.insert(glyph.character, glyph);
        previous
    }

    pub fn remove(&mut self, c: char) -> Option<Glyph> {
        let glyph = self.glyphs.remove(&c)?;
        if let Some(alias) = glyph.alias {
            if self.aliases.get(&alias) == Some(&c) {
                self.aliases.remove(&alias);
            }
        }
        Some(glyph)
    }

    /// Glyphs ordered by character
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }
}

impl From<Vec<Glyph>> for GlyphSet {
    fn from(glyphs: Vec<Glyph>) -> Self {
        let mut set = Self::new();
        for mut glyph in glyphs {
            glyph.normalize();
            set.insert(glyph);
        }
        set
    }
}

impl From<GlyphSet> for Vec<Glyph> {
    fn from(set: GlyphSet) -> Self {
        set.glyphs.into_values().collect()
    }
}

impl FromIterator<Glyph> for GlyphSet {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
