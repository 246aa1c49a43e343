//! Writes extracted sample data and empty solution stubs to disk.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::ScrapeError;
use crate::kattis::SampleCase;
use crate::language::Language;

/// Writes each sample case into `dir` as a `sample{i}` / `sample{i}_ans`
/// pair (1-based), creating the directory if needed. Existing files of the
/// same name are overwritten.
pub fn write_sample_data(dir: &Path, samples: &[SampleCase]) -> Result<(), ScrapeError> {
    fs::create_dir_all(dir)?;
    for (i, sample) in samples.iter().enumerate() {
        let n = i + 1;
        fs::write(dir.join(format!("sample{n}")), &sample.input)?;
        fs::write(dir.join(format!("sample{n}_ans")), &sample.answer)?;
    }
    Ok(())
}

/// Creates an empty `{problem}{ext}` stub in `dir` for the given language
/// name, returning its path.
///
/// The language is validated (case-insensitively) before anything touches
/// the filesystem; an unknown name yields [`ScrapeError::UnsupportedLanguage`]
/// with no side effect. An existing stub is left untouched, content included.
pub fn create_empty_code_file(
    dir: &Path,
    problem: &str,
    language: &str,
) -> Result<PathBuf, ScrapeError> {
    let lang: Language = language
        .parse()
        .map_err(|_| ScrapeError::UnsupportedLanguage {
            name: language.to_string(),
        })?;

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{problem}{}", lang.extension()));
    // Append mode so a second run never truncates work in progress.
    OpenOptions::new().append(true).create(true).open(&path)?;
    Ok(path)
}
