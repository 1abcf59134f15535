//! Use cases — application-level orchestration

pub mod load_corpus;

pub use load_corpus::{LoadCorpusError, LoadCorpusUseCase, LoadOutcome};
