//! Linear regeneration pipeline: fetch, decode, normalize, render, patch.
//!
//! Each stage runs to completion before the next one starts and the first
//! error ends the run. The target is written only after the new buffer has
//! been assembled in memory.

use crate::config::SyncConfig;
use crate::emit::render_table;
use crate::error::Result;
use crate::fetch::TaxonomySource;
use crate::model::TaxonomyDocument;
use crate::normalize::NormalizedTable;
use crate::patch::{patch_file, prepare_patch, Anchor};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub categories: usize,
    pub tags: usize,
    /// Full patched contents of the target.
    pub patched: String,
    /// False in dry-run mode.
    pub written: bool,
}

pub async fn run<S>(config: &SyncConfig, source: &S) -> Result<SyncReport>
where
    S: TaxonomySource + ?Sized,
{
    // Validate the anchor before any network traffic.
    let anchor = Anchor::new(&config.var_name)?;

    let raw = source.fetch(&config.source_url).await?;
    let document = TaxonomyDocument::decode(&raw)?;
    let table = NormalizedTable::from_document(&document);
    let fragment = render_table(&table);

    let (patched, written) = if config.dry_run {
        let patched = prepare_patch(&config.target_path, &anchor, &fragment)?;
        tracing::info!(path = %config.target_path.display(), "dry run, target not written");
        (patched, false)
    } else {
        (patch_file(&config.target_path, &anchor, &fragment)?, true)
    };

    Ok(SyncReport {
        categories: table.category_count(),
        tags: table.tag_count(),
        patched,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    struct StaticSource {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TaxonomySource for StaticSource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const DOC: &str = r#"{"data": [
        {"frontMatters": {"key": "female"}, "data": {"fc01": {"name": "Loli"}, "fc02": {}}}
    ]}"#;

    const TARGET: &str = "package api\n\nvar tagMap = map[string]map[string]string{\n}\n";

    #[tokio::test]
    async fn test_run_patches_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.go");
        fs::write(&path, TARGET).unwrap();

        let config = SyncConfig::new().with_target_path(&path);
        let report = run(&config, &StaticSource::new(DOC)).await.unwrap();

        let expected = "package api\n\nvar tagMap = map[string]map[string]string{\n\
            \t\"female\": {\n\t\t\"fc01\": \"Loli\",\n\t\t\"fc02\": \"fc02\",\n\t},\n}\n";
        assert_eq!(report.categories, 1);
        assert_eq!(report.tags, 2);
        assert!(report.written);
        assert_eq!(report.patched, expected);
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_dry_run_leaves_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.go");
        fs::write(&path, TARGET).unwrap();

        let config = SyncConfig::new().with_target_path(&path).with_dry_run(true);
        let report = run(&config, &StaticSource::new(DOC)).await.unwrap();

        assert!(!report.written);
        assert!(report.patched.contains("\"fc01\": \"Loli\""));
        assert_eq!(fs::read_to_string(&path).unwrap(), TARGET);
    }

    #[tokio::test]
    async fn test_malformed_document_stops_before_patch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.go");
        fs::write(&path, TARGET).unwrap();

        let config = SyncConfig::new().with_target_path(&path);
        let err = run(&config, &StaticSource::new("{\"data\": 7}"))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::MalformedData(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), TARGET);
    }

    #[tokio::test]
    async fn test_missing_anchor_fails_closed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.go");
        fs::write(&path, "package api\n").unwrap();

        let config = SyncConfig::new().with_target_path(&path);
        let err = run(&config, &StaticSource::new(DOC)).await.unwrap_err();

        assert!(matches!(err, SyncError::AnchorNotFound { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "package api\n");
    }

    #[tokio::test]
    async fn test_fetch_happens_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.go");
        fs::write(&path, TARGET).unwrap();

        let source = StaticSource::new(DOC);
        let config = SyncConfig::new().with_target_path(&path);
        run(&config, &source).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
