// File: crates/chart-core/src/config.rs
// Summary: TOML render configuration with defaults matching `RenderOptions::default()`.

use serde::Deserialize;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::chart::RenderOptions;
use crate::error::ConfigError;
use crate::state::MAX_VIEWPORT;
use crate::theme;
use crate::types::{
    Insets, BAR_FILL_RATIO, HEIGHT, MAX_BAR_WIDTH, MAX_CATEGORY_LABELS, PADDING, TICK_COUNT, WIDTH,
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub theme: String,
    /// Replaces the theme palette when set and non-empty.
    pub palette: Option<Vec<String>>,
    pub draw_labels: bool,
    pub tick_count: usize,
    pub max_bar_width: f64,
    pub bar_fill_ratio: f64,
    pub max_category_labels: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            theme: "light".to_string(),
            palette: None,
            draw_labels: true,
            tick_count: TICK_COUNT,
            max_bar_width: MAX_BAR_WIDTH,
            bar_fill_ratio: BAR_FILL_RATIO,
            max_category_labels: MAX_CATEGORY_LABELS,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn into_options(self) -> RenderOptions {
        let mut theme = theme::find(&self.theme);
        if let Some(palette) = self.palette.filter(|p| !p.is_empty()) {
            theme.palette = palette;
        }
        RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            insets: Insets::uniform(self.padding.min(MAX_VIEWPORT / 2)),
            theme,
            draw_labels: self.draw_labels,
            tick_count: self.tick_count.max(1),
            max_bar_width: self.max_bar_width,
            bar_fill_ratio: self.bar_fill_ratio,
            max_category_labels: self.max_category_labels.max(1),
        }
    }
}

/// Load and parse a render configuration file.
pub fn load_config(path: &Path) -> Result<RenderConfig, ConfigError> {
    debug!(path = %path.display(), "Reading render configuration file");

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound { path: path.to_path_buf() }
        } else {
            ConfigError::Io { path: path.to_path_buf(), source }
        }
    })?;

    RenderConfig::from_toml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
