//! Orchestration: the single entry point that sequences every analyzer
//! into one immutable [`report::AnalysisResult`].

pub mod analyze_use_case;
pub mod report;
