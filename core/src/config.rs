#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Settings for one generation run. Loaded from YAML (kebab-case keys) and then
//! overridden field by field from the command line.
//!
//! ```yaml
//! namespace: org.acme.petstore
//! output-mode: sources-only
//! api-name: PetStore
//! snippets:
//!   - "public static final String VERSION = \"1\";"
//! ```

use crate::error::{AppError, AppResult};
use crate::oas::models::ApiInfo;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fallback when the document declares no version.
pub const DEFAULT_VERSION: &str = "1.0";

/// Fallback when the title has no usable characters.
pub const DEFAULT_API_NAME: &str = "Api";

/// What gets written besides the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Source files only, directly under the output directory.
    SourcesOnly,
    /// A buildable project: sources under `src/main/java` plus a manifest.
    #[default]
    FullProject,
}

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root package of the generated code.
    pub namespace: String,
    /// Output layout.
    pub output_mode: OutputMode,
    /// Root artifact name override.
    pub api_name: Option<String>,
    /// Manifest group id override.
    pub group_id: Option<String>,
    /// Manifest artifact id override.
    pub artifact_id: Option<String>,
    /// Manifest version override.
    pub version: Option<String>,
    /// Verbatim fragments injected into the root client, in order.
    pub snippets: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "com.example".to_string(),
            output_mode: OutputMode::default(),
            api_name: None,
            group_id: None,
            artifact_id: None,
            version: None,
            snippets: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a YAML configuration. Missing keys keep their defaults.
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| AppError::Parse(format!("Invalid generator configuration: {}", e)))
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// The root artifact name: the override, else the title's ASCII alphanumerics.
    pub fn resolve_api_name(&self, info: &ApiInfo) -> String {
        if let Some(name) = self.api_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let filtered: String = info
            .title
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if filtered.is_empty() {
            DEFAULT_API_NAME.to_string()
        } else {
            filtered
        }
    }

    /// Manifest group id, defaulting to the namespace.
    pub fn resolve_group_id(&self) -> String {
        self.group_id
            .clone()
            .unwrap_or_else(|| self.namespace.clone())
    }

    /// Manifest artifact id, defaulting to the api name.
    pub fn resolve_artifact_id(&self, api_name: &str) -> String {
        self.artifact_id
            .clone()
            .unwrap_or_else(|| api_name.to_string())
    }

    /// Manifest version: override, then document version, then `1.0`.
    pub fn resolve_version(&self, info: &ApiInfo) -> String {
        self.version
            .clone()
            .or_else(|| info.version.clone())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }
}
