//! Domain layer for qaha
//!
//! This crate contains the core entities and pure logic of the archive
//! viewer. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Model**: a named translation/interpretation source, one CSV table
//!   per model, with a static display-name catalog.
//! - **Corpus**: the merged, normalized table of all verse records across
//!   all models, built once per load and then only read.
//! - **Selection**: a chapter/verse choice plus the model subset to show.

pub mod core;
pub mod verse;

// Re-export commonly used types
pub use self::core::model::Model;
pub use verse::{
    corpus::{Corpus, CorpusBuilder},
    parser::{ParseError, TableRow, coerce_index, normalize_header, parse_table},
    record::VerseRecord,
    report::{LoadFailure, LoadReport},
    selection::Selection,
    source::{SourceList, VerseSource},
};
