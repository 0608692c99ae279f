//! Copier configuration for fontcopy-core (made by FontLab https://www.fontlab.com/)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory the container image ships its fonts in.
pub const DEFAULT_SOURCE: &str = "/fonts";

/// Shared volume other containers read fonts from.
pub const DEFAULT_DESTINATION: &str = "/font_volume";

/// Everything a single copy run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopierConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Replace same-named files in the destination.
    pub overwrite: bool,
    /// Record failed copies and carry on instead of aborting the batch.
    pub keep_going: bool,
    /// List what would be copied without writing anything.
    pub dry_run: bool,
    /// Treat symlinks in the source as the files they point at.
    pub follow_symlinks: bool,
}

impl Default for CopierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_DESTINATION)
    }
}

impl CopierConfig {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            overwrite: true,
            keep_going: false,
            dry_run: false,
            follow_symlinks: true,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_container_paths() {
        let config = CopierConfig::default();
        assert_eq!(config.source, PathBuf::from("/fonts"));
        assert_eq!(config.destination, PathBuf::from("/font_volume"));
        assert!(config.overwrite);
        assert!(!config.keep_going);
        assert!(!config.dry_run);
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: CopierConfig =
            serde_json::from_str(r#"{"destination": "/tmp/out", "keep_going": true}"#)
                .expect("parse config");

        assert_eq!(config.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(config.destination, PathBuf::from("/tmp/out"));
        assert!(config.keep_going);
        assert!(config.overwrite);
    }
}
