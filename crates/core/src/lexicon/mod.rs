//! Static lexicon tables and the grammar rule catalog.
//!
//! Everything here is `const` data: immutable, process-wide, safe to read
//! from any number of threads. Analyzers never mutate these tables.

pub mod grammar_rules;
pub mod word_lists;
