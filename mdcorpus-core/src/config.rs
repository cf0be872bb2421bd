//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the mdcorpus.yml schema.
///
/// Every field has a conventional default, so the indexer runs with no
/// config file at all. The depth fields index into a document's path as
/// spelled from the configured root: the root's own relative segments
/// count, so with the default root `src/content/blog` a document at
/// `src/content/blog/tech/post.md` has segments
/// `[src, content, blog, tech, post.md]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    /// Index of the path segment used as the record's group label.
    #[serde(default = "default_group_depth")]
    pub group_depth: usize,

    /// Number of leading path segments dropped when deriving a slug
    /// from a document's path.
    #[serde(default = "default_content_depth")]
    pub content_depth: usize,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the content tree.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory the JSON artifacts are written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from("src/content/blog")
}

fn default_output() -> PathBuf {
    PathBuf::from(".json")
}

fn default_group_depth() -> usize {
    2
}

fn default_content_depth() -> usize {
    2
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            group_depth: default_group_depth(),
            content_depth: default_content_depth(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Get the content root directory, resolved relative to the config file
    pub fn root_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.root)
    }

    /// Get the output directory, resolved relative to the config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Path segments of the content root as spelled in the config.
    ///
    /// These prefix every document's segment list, so `group_depth` and
    /// `content_depth` can address the root's own segments.
    pub fn root_segments(&self) -> Vec<String> {
        self.paths
            .root
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => s.to_str().map(|s| s.to_string()),
                _ => None,
            })
            .collect()
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_ref().and_then(|p| p.parent()) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }
}
