// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Script project files: a `ScriptConfig` stored as JSON

use crate::model::ScriptConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a script project from disk
pub fn load_script_config(path: &Path) -> Result<ScriptConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script project {}", path.display()))?;
    let config = ScriptConfig::from_json(&json)
        .with_context(|| format!("Failed to parse script project {}", path.display()))?;

    tracing::info!(
        "Loaded script project {} ({} glyphs, {}, {:?})",
        path.display(),
        config.glyph_set.len(),
        config.direction.short_name(),
        config.spacing_mode
    );
    Ok(config)
}

/// Write a script project to disk as pretty-printed JSON
pub fn save_script_config(path: &Path, config: &ScriptConfig) -> Result<()> {
    let json = config
        .to_json()
        .context("Failed to serialize script project")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to save script project to {}", path.display()))?;

    tracing::info!(
        "Saved script project {} ({} glyphs)",
        path.display(),
        config.glyph_set.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, Glyph, GlyphSet, SpacingMode};
    use std::io::Write;

    #[test]
    fn save_then_load_keeps_the_project() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        let glyphs: GlyphSet = [Glyph::blank('a'), Glyph::blank('b')].into_iter().collect();
        let config = ScriptConfig::new(glyphs, Direction::TopToBottomLtr, SpacingMode::Proportional);

        save_script_config(&path, &config).unwrap();
        let loaded = load_script_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn loads_legacy_projects() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "glyphs": [{{
                    "char": "x",
                    "pua": "\\uE078",
                    "strokes": [{{
                        "type": "path",
                        "id": "layer-1700000000000",
                        "d": "M10 10 L120 10",
                        "strokeWidth": 12
                    }}]
                }}],
                "direction": "ttb"
            }}"#
        )
        .unwrap();

        let config = load_script_config(file.path()).unwrap();
        assert_eq!(config.direction, Direction::TopToBottomRtl);
        assert_eq!(config.spacing_mode, SpacingMode::Mono);
        let glyph = config.glyph_set.lookup('\u{E078}').unwrap();
        assert_eq!(glyph.character, 'x');
        assert_eq!(glyph.bounding_width, 120.0);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_script_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"glyphs\": 3 }}").unwrap();
        assert!(load_script_config(file.path()).is_err());
    }
}
