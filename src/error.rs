//! Error types for scraping and writing problem data.

use thiserror::Error;

/// Errors raised while scraping a problem or writing its data.
///
/// None of these abort a batch run; the orchestrator reports them per
/// identifier and moves on to the next one.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The fetched page is not a problem page (its heading reads "404: Not Found").
    #[error("{problem} is not a valid Problem ID")]
    NotFound {
        /// The identifier that resolved to a non-problem page
        problem: String,
    },

    /// A code stub was requested for a language outside the supported table.
    #[error("language {name} is not a supported language")]
    UnsupportedLanguage {
        /// The offending language name, as given
        name: String,
    },

    /// The HTTP request failed (connect, timeout, non-success body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A sample file or code stub could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
