//! Run configuration.
//!
//! Defaults reproduce the one-shot regeneration of `api/query.go` from the
//! EhTagTranslation release database; the CLI can override each field.

use std::path::PathBuf;

/// Published release of the EhTagTranslation database (text flavour).
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/EhTagTranslation/Database/refs/heads/release/db.text.json";

/// Source file holding the generated table, relative to the working directory.
pub const DEFAULT_TARGET_PATH: &str = "api/query.go";

/// Identifier of the table declaration used as the anchor.
pub const DEFAULT_VAR_NAME: &str = "tagMap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub source_url: String,
    pub target_path: PathBuf,
    pub var_name: String,
    /// Print the patched buffer instead of writing it back.
    pub dry_run: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            var_name: DEFAULT_VAR_NAME.to_string(),
            dry_run: false,
        }
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_target_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_path = path.into();
        self
    }

    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = name.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_release_database() {
        let config = SyncConfig::default();
        assert!(config.source_url.ends_with("/release/db.text.json"));
        assert_eq!(config.target_path, PathBuf::from("api/query.go"));
        assert_eq!(config.var_name, "tagMap");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SyncConfig::new()
            .with_source_url("http://127.0.0.1:8080/db.json")
            .with_target_path("gen/tags.go")
            .with_var_name("tags")
            .with_dry_run(true);
        assert_eq!(config.source_url, "http://127.0.0.1:8080/db.json");
        assert_eq!(config.target_path, PathBuf::from("gen/tags.go"));
        assert_eq!(config.var_name, "tags");
        assert!(config.dry_run);
    }
}
