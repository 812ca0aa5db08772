// File: crates/chart-core/src/resource.rs
// Summary: Descriptor and loader for the static HTML app the tools link to.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ResourceError;

/// Logical URI the tools advertise in `_meta.ui.resourceUri`.
pub const RESOURCE_URI: &str = "ui://line-chart/mcp-app.html";
/// MIME type declared for the app document.
pub const RESOURCE_MIME_TYPE: &str = "text/html;profile=mcp-app";
/// Default asset location, relative to the working directory.
pub const DEFAULT_ASSET_PATH: &str = "assets/mcp-app.html";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiResource {
    pub uri: String,
    pub mime_type: String,
    pub path: PathBuf,
}

impl Default for UiResource {
    fn default() -> Self {
        Self::at(DEFAULT_ASSET_PATH)
    }
}

impl UiResource {
    /// The standard resource served from `path`.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            uri: RESOURCE_URI.to_string(),
            mime_type: RESOURCE_MIME_TYPE.to_string(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the document. The content is passed through untouched.
    pub fn read(&self) -> Result<ResourceContents, ResourceError> {
        debug!(uri = %self.uri, path = %self.path.display(), "reading UI resource");
        let text = std::fs::read_to_string(&self.path).map_err(|source| ResourceError::Read {
            uri: self.uri.clone(),
            path: self.path.clone(),
            source,
        })?;
        Ok(ResourceContents { uri: self.uri.clone(), mime_type: self.mime_type.clone(), text })
    }
}
