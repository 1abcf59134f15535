//! Verse corpus — records, parsing, and selection

pub mod corpus;
pub mod parser;
pub mod record;
pub mod report;
pub mod selection;
pub mod source;
