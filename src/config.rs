//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the project root. All
//! options have stock defaults, so the file is optional and sparse — override
//! just the values you want:
//!
//! ```toml
//! # Only switch media discovery to a fixed filename
//! [media]
//! strategy = "fixed-filename"
//! fixed_filename = "cover.jpg"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! asset_dir = "asset"                  # Directory of per-episode folders
//! page = "index.html"                  # Host page to splice into
//! description_file = "description.txt" # Per-episode source file name
//! container_class = "container"        # Class of the owned container div
//! read_more_threshold = 140            # Description length that shows "Read more"
//!
//! [media]
//! strategy = "scan-extensions"         # or "fixed-filename"
//! fixed_filename = "cover.jpg"         # Used by the fixed-filename strategy
//!
//! [tags]                               # Description-file field labels (before the colon)
//! title = "Title"
//! description = "Description"
//! designer = "Designer"
//! link = "Link"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; user config files need only specify overrides.
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory containing one subdirectory per episode.
    pub asset_dir: String,
    /// Host HTML page, relative to the project root. Mutated in place.
    pub page: String,
    /// Name of the per-episode description file.
    pub description_file: String,
    /// Class of the `div` whose interior the generator owns.
    pub container_class: String,
    /// Description length (in chars) beyond which the read-more control appears.
    pub read_more_threshold: usize,
    /// Media discovery settings.
    pub media: MediaConfig,
    /// Description-file field labels.
    pub tags: TagConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            asset_dir: "asset".to_string(),
            page: "index.html".to_string(),
            description_file: "description.txt".to_string(),
            container_class: "container".to_string(),
            read_more_threshold: 140,
            media: MediaConfig::default(),
            tags: TagConfig::default(),
        }
    }
}

/// How the per-episode media file is discovered.
///
/// The two strategies are alternatives, never merged: a pass uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaStrategy {
    /// First file in directory-listing order with a recognized image extension.
    ScanExtensions,
    /// A single well-known filename, used iff it exists.
    FixedFilename,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    pub strategy: MediaStrategy,
    /// Filename checked by the `fixed-filename` strategy.
    pub fixed_filename: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            strategy: MediaStrategy::ScanExtensions,
            fixed_filename: "cover.jpg".to_string(),
        }
    }
}

/// Field labels recognized in description files.
///
/// Each is matched as a line prefix `label:` — prefix matching on the literal
/// string, not a general key:value grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
    pub title: String,
    pub description: String,
    pub designer: String,
    pub link: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            description: "Description".to_string(),
            designer: "Designer".to_string(),
            link: "Link".to_string(),
        }
    }
}

impl SiteConfig {
    /// The literal open tag that starts the owned container region.
    ///
    /// Must match the host page byte-for-byte, including attribute quoting.
    pub fn container_marker(&self) -> String {
        format!("<div class=\"{}\">", self.container_class)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("asset_dir", &self.asset_dir),
            ("page", &self.page),
            ("description_file", &self.description_file),
            ("container_class", &self.container_class),
            ("tags.title", &self.tags.title),
            ("tags.description", &self.tags.description),
            ("tags.designer", &self.tags.designer),
            ("tags.link", &self.tags.link),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{field} must not be empty"
                )));
            }
        }
        if self.media.strategy == MediaStrategy::FixedFilename
            && self.media.fixed_filename.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "media.fixed_filename must not be empty with the fixed-filename strategy".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from the project root, falling back to defaults when
/// the file doesn't exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option at its default, documented.
pub fn stock_config_toml() -> String {
    r#"# epigen configuration. Every value shown is the default; the file and
# all keys are optional.

# Directory of per-episode folders, each holding a description file and
# optional media files.
asset_dir = "asset"

# Host HTML page. Only the interior of the container div is rewritten;
# everything else is preserved byte-for-byte.
page = "index.html"

# Per-episode source file name. Folders without it are skipped.
description_file = "description.txt"

# Class of the div whose interior the generator owns. The open tag must
# appear literally as: <div class="container">
container_class = "container"

# Description length (in characters) beyond which the hidden "Read more"
# control is emitted. A designer credit also triggers it.
read_more_threshold = 140

[media]
# "scan-extensions": first image file found in the episode folder.
# "fixed-filename": use fixed_filename iff it exists in the folder.
strategy = "scan-extensions"
fixed_filename = "cover.jpg"

[tags]
# Field labels recognized in description files, matched as "label:" line
# prefixes.
title = "Title"
description = "Description"
designer = "Designer"
link = "Link"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_pass_validation() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            "[media]\nstrategy = \"fixed-filename\"\nfixed_filename = \"thumb.png\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.media.strategy, MediaStrategy::FixedFilename);
        assert_eq!(config.media.fixed_filename, "thumb.png");
        assert_eq!(config.page, "index.html");
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "asset_dirr = \"oops\"\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_required_field_rejected() {
        let config = SiteConfig {
            container_class: "  ".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn fixed_strategy_requires_filename() {
        let mut config = SiteConfig::default();
        config.media.strategy = MediaStrategy::FixedFilename;
        config.media.fixed_filename = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn container_marker_uses_class() {
        let config = SiteConfig {
            container_class: "episodes".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.container_marker(), "<div class=\"episodes\">");
    }
}
