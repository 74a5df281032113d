//! Enrichment sources consulted while building the report

pub mod grades;

pub use grades::{GradeError, GradeSource, GradeTable, Grader};
