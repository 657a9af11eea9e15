// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Conscript: glyph authoring and direction-aware layout for constructed
//! scripts

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

pub mod config;
pub mod editing;
pub mod error;
pub mod layout;
pub mod model;
pub mod path;
pub mod project;
pub mod settings;
pub mod tools;

pub use config::EditorConfig;
pub use editing::EditSession;
pub use error::{EditError, ProjectError};
pub use layout::{LayoutMetrics, LayoutResult, render_text, render_text_with};
pub use model::{Direction, Glyph, GlyphPatch, GlyphSet, ScriptConfig, SpacingMode};

/// Environment variable naming a TOML editor config
pub const CONFIG_ENV: &str = "CONSCRIPT_CONFIG";

/// Open an edit session on `character`, starting from its stored glyph
/// (looked up by literal character only) or a fresh base layer.
pub fn load_glyph(script: &ScriptConfig, character: char, config: &EditorConfig) -> EditSession {
    EditSession::new(character, script.glyph_set.get(character), config)
}

/// Commit the session's working copy; apply the patch with
/// [`ScriptConfig::apply`].
pub fn save_glyph(session: &mut EditSession) -> GlyphPatch {
    session.save()
}

/// Entry point for the conscript command line tool
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("conscript=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        tracing::error!("Usage: conscript <script.json> [text]");
        anyhow::bail!("missing script project path");
    };

    let script = project::load_script_config(&script_path)?;
    let metrics = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let config = EditorConfig::load_or_default(std::path::Path::new(&path));
            LayoutMetrics::from(config.layout)
        }
        None => LayoutMetrics::default(),
    };

    let text = match args.next() {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            text.strip_suffix('\n').map(str::to_owned).unwrap_or(text)
        }
    };

    let result = render_text_with(
        &text,
        &script.glyph_set,
        script.direction,
        script.spacing_mode,
        metrics,
    );
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize layout")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn edit_save_apply_render() {
        let mut script = ScriptConfig::default();
        let config = EditorConfig::default();

        let mut session = load_glyph(&script, 'a', &config);
        session.begin_gesture(Point::new(20.0, 20.0));
        session.move_gesture(Point::new(200.0, 40.0));
        session.end_gesture();

        let before = script.glyph_set.clone();
        script.apply(save_glyph(&mut session));
        assert!(before.is_empty());
        assert_eq!(script.glyph_set.len(), 1);

        script.spacing_mode = SpacingMode::Proportional;
        let result = render_text("a\u{E061}b", &script);
        let advances: Vec<f64> = result.cells().map(|cell| cell.advance).collect();
        assert_eq!(advances, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn package_metadata_describes_conscript() {
        assert_eq!(env!("CARGO_PKG_NAME"), "conscript");
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "The Conscript Authors");
        assert_eq!(env!("CARGO_PKG_REPOSITORY"), "");
    }

    #[test]
    fn reopening_a_saved_glyph_starts_clean() {
        let mut script = ScriptConfig::default();
        let config = EditorConfig::default();
        let mut session = load_glyph(&script, 'z', &config);
        session.add_layer();
        script.apply(save_glyph(&mut session));

        let reopened = load_glyph(&script, 'z', &config);
        assert_eq!(reopened.layers().len(), 2);
        assert!(!reopened.can_undo());
        assert!(!reopened.is_dirty());
    }
}
