//! Configuration for a validation pass
//!
//! Option names follow the HTML Tidy configuration vocabulary
//! (`accessibility-check`, `alt-text`, `output-xml`, `show-warnings`), so an
//! existing Tidy config written as `key: value` lines loads as YAML.
//!
//! Reads configuration from:
//! - `.tagcheckrc.yaml` / `.tagcheckrc.json` (project-level)
//! - `~/.tagcheckrc.yaml` (user-level)

use crate::diagnostic::{DiagnosticKind, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which diagnostics reach the sink, and at what severity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Diagnostic codes that are never delivered (e.g. `MISSING_ATTRIBUTE`)
    pub disabled: Vec<String>,

    /// Severity overrides (code -> severity)
    pub severity: HashMap<String, Severity>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Accessibility check level; 0 runs the classic checks (table
    /// summary, image-map link alt)
    pub accessibility_check: u8,

    /// Default `alt` text inserted on images that lack one
    pub alt_text: Option<String>,

    /// Output is XML/XHTML
    pub output_xml: bool,

    /// Deliver warning-level diagnostics
    pub show_warnings: bool,

    pub diagnostics: DiagnosticsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accessibility_check: 0,
            alt_text: None,
            output_xml: false,
            show_warnings: true,
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

const CONFIG_NAMES: [&str; 4] = [
    ".tagcheckrc.yaml",
    ".tagcheckrc.yml",
    ".tagcheckrc.json",
    "tagcheck.yaml",
];

impl Config {
    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "Unknown config file format: {}",
                    ext
                )))
            }
        };

        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<Self, ConfigError> {
        for name in &CONFIG_NAMES {
            let path = PathBuf::from(name);
            if path.exists() {
                return Self::load(&path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            for name in &CONFIG_NAMES {
                let path = home.join(name);
                if path.exists() {
                    return Self::load(&path);
                }
            }
        }

        Ok(Self::default())
    }

    /// Reject diagnostic codes that do not exist
    fn validate(&self) -> Result<(), ConfigError> {
        let codes = self
            .diagnostics
            .disabled
            .iter()
            .chain(self.diagnostics.severity.keys());
        for code in codes {
            if DiagnosticKind::from_code(code).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "Unknown diagnostic code: {}",
                    code
                )));
            }
        }
        Ok(())
    }

    /// Merge CLI arguments into configuration
    pub fn merge_cli(
        &mut self,
        alt_text: Option<String>,
        output_xml: Option<bool>,
        accessibility_check: Option<u8>,
    ) {
        if let Some(alt) = alt_text {
            self.alt_text = Some(alt);
        }
        if let Some(xml) = output_xml {
            self.output_xml = xml;
        }
        if let Some(level) = accessibility_check {
            self.accessibility_check = level;
        }
    }

    /// Apply one `CODE=level` severity override from the command line
    pub fn apply_severity_override(&mut self, spec: &str) -> Result<(), ConfigError> {
        let (code, level) = spec.split_once('=').ok_or_else(|| {
            ConfigError::Invalid(format!("Expected CODE=level, got: {}", spec))
        })?;
        let code = code.trim().to_uppercase();

        let kind = DiagnosticKind::from_code(&code)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown diagnostic code: {}", code)))?;
        let severity: Severity = level.trim().parse().map_err(ConfigError::Invalid)?;

        log::debug!("{} severity set to {}", kind.code(), severity);
        self.diagnostics.severity.insert(code, severity);
        Ok(())
    }

    /// The configured fallback alt text, if it is non-empty
    pub fn fallback_alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref().filter(|s| !s.is_empty())
    }

    /// True when the classic accessibility checks run
    pub fn strict_accessibility(&self) -> bool {
        self.accessibility_check == 0
    }

    /// Severity a diagnostic of `kind` is delivered with, or `None` when it
    /// is filtered out
    pub fn effective_severity(&self, kind: DiagnosticKind) -> Option<Severity> {
        let code = kind.code();
        if self.diagnostics.disabled.iter().any(|c| c == code) {
            return None;
        }
        let severity = self
            .diagnostics
            .severity
            .get(code)
            .copied()
            .unwrap_or_else(|| kind.default_severity());
        if severity == Severity::Warning && !self.show_warnings {
            return None;
        }
        Some(severity)
    }
}
