// File: crates/chart-render/src/lib.rs
// Summary: Renderer crate entry point; replays chart-core scenes as SVG or (feature `skia`) PNG.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chart_core::Scene;
use tracing::debug;

pub mod svg;
#[cfg(feature = "skia")]
pub mod raster;

pub use svg::SvgRenderer;
#[cfg(feature = "skia")]
pub use raster::SkiaRenderer;

/// Output encodings a scene can be written as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    /// Whether this build can produce the format.
    pub fn is_available(&self) -> bool {
        match self {
            OutputFormat::Svg => true,
            OutputFormat::Png => cfg!(feature = "skia"),
        }
    }
}

/// Encode `scene` in `format`.
pub fn render_bytes(scene: &Scene, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => Ok(SvgRenderer::new().render(scene).into_bytes()),
        #[cfg(feature = "skia")]
        OutputFormat::Png => SkiaRenderer::new().render_png(scene),
        #[cfg(not(feature = "skia"))]
        OutputFormat::Png => bail!("PNG output requires the `skia` feature"),
    }
}

/// Write `scene` to `path`, choosing the encoding from the extension.
pub fn write_scene(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let Some(format) = OutputFormat::from_path(path) else {
        bail!("unsupported output extension for {}", path.display());
    };
    let bytes = render_bytes(scene, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), ?format, bytes = bytes.len(), "scene written");
    Ok(())
}
