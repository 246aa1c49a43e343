//! Fetch problems from open.kattis.com: title, resource limits, difficulty
//! and sample test data, with optional writing of the samples and an empty
//! solution stub to a per-problem directory.

pub mod error;
pub mod kattis;
pub mod language;
pub mod write;

pub use error::ScrapeError;
pub use kattis::{KattisScraper, KattisScraperBuilder, ProblemRecord, SampleCase, PROBLEM_URL};
pub use language::Language;
pub use write::{create_empty_code_file, write_sample_data};
