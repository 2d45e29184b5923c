//! tagmap-gen - regenerates the embedded tag translation table
//!
//! Downloads the EhTagTranslation release database, collapses it into a
//! category -> (tag -> label) table and rewrites the body of the
//! `var tagMap = map[string]map[string]string{` declaration in the target
//! source file.
//!
//! ## Pipeline
//! Fetch -> Decode -> Normalize -> Render -> Patch, strictly in that order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tagmap_gen::{pipeline, HttpSource, SyncConfig};
//!
//! # async fn demo() -> tagmap_gen::Result<()> {
//! let config = SyncConfig::default();
//! let report = pipeline::run(&config, &HttpSource::new()).await?;
//! println!("{} categories, {} tags", report.categories, report.tags);
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Run configuration
pub mod config;

// Pipeline stages
pub mod emit;
pub mod fetch;
pub mod model;
pub mod normalize;
pub mod patch;

pub mod pipeline;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use fetch::{HttpSource, TaxonomySource};
pub use model::{TaxonomyCategory, TaxonomyDocument, TaxonomyEntry};
pub use normalize::NormalizedTable;
pub use patch::Anchor;
pub use pipeline::SyncReport;
