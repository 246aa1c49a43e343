//! Scrapes problem pages from open.kattis.com.
//!
//! One pass per problem ID: fetch the page, check it is a real problem
//! (a bad ID serves a page titled "404: Not Found"), pull the title,
//! resource limits, difficulty and sample tables out of the markup, then
//! optionally write the samples and an empty solution stub to disk.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use derive_builder::Builder;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScrapeError;
use crate::write::{create_empty_code_file, write_sample_data};

/// Base URL for problem pages; the problem ID is appended directly.
pub const PROBLEM_URL: &str = "https://open.kattis.com/problems/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Pause cadence for batch runs, to keep the request rate polite.
const PACE_BATCH: usize = 10;
const PACE_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Builder)]
pub struct KattisScraper {
    /// Problem IDs to process, in order.
    problems: Vec<String>,
    /// Write sample data (and the optional stub) under `out_dir`.
    #[builder(default)]
    write: bool,
    /// Language for the empty solution stub; only used together with `write`.
    #[builder(default)]
    language: Option<String>,
    #[builder(setter(into), default = "PROBLEM_URL.to_string()")]
    base_url: String,
    /// Parent directory for the per-problem directories.
    #[builder(setter(into), default = "PathBuf::from(\".\")")]
    out_dir: PathBuf,
}

/// Everything extracted from one problem page. Limits and difficulty stay
/// as the display text the page carries ("1 second", "1024 MB", "2.1");
/// a field missing from the page is simply `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub title: String,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub difficulty: Option<String>,
    pub samples: Vec<SampleCase>,
}

/// One sample table: the input block and the expected-output block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCase {
    pub input: String,
    pub answer: String,
}

impl KattisScraper {
    /// Processes every configured problem ID in order, returning the
    /// records that resolved to real problems.
    ///
    /// A bad ID or a failed request is reported and skipped; it never
    /// aborts the rest of the batch.
    pub async fn scrape(&self) -> Result<Vec<ProblemRecord>> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let mut records = Vec::new();

        for problem in &self.problems {
            println!("Parsing: {problem}\n");
            match self.scrape_one(&client, problem).await {
                Ok(record) => {
                    records.push(record);
                    if records.len() % PACE_BATCH == 0 {
                        debug!(delay = ?PACE_DELAY, "pausing to rate limit");
                        tokio::time::sleep(PACE_DELAY).await;
                    }
                }
                Err(ScrapeError::NotFound { problem }) => {
                    println!("{problem} is not a valid Problem ID.");
                }
                Err(err) => {
                    warn!(%problem, %err, "skipping problem");
                }
            }
        }

        Ok(records)
    }

    async fn scrape_one(
        &self,
        client: &Client,
        problem: &str,
    ) -> Result<ProblemRecord, ScrapeError> {
        let url = get_url(&self.base_url, problem);
        let body = client.get(&url).send().await?.text().await?;
        let record = parse_problem(problem, &body)?;

        println!("Title: {}", record.title);
        println!("ID: {problem}");
        println!("CPU Time Limit: {}", field(&record.cpu));
        println!("Memory Limit: {}", field(&record.memory));
        println!("Difficulty: {}\n", field(&record.difficulty));

        if self.write {
            let dir = self.out_dir.join(problem);
            if !record.samples.is_empty() {
                println!("Writing sample data.");
                write_sample_data(&dir, &record.samples)?;
            }
            if let Some(language) = &self.language {
                println!("Creating empty code file.");
                match create_empty_code_file(&dir, problem, language) {
                    Ok(_) => {}
                    // The stub is optional; samples already written stay put.
                    Err(err @ ScrapeError::UnsupportedLanguage { .. }) => {
                        eprintln!("ERROR: {err}. Continuing without creating code file.");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(record)
    }
}

/// Checks whether a fetched page is a real problem page. Bad IDs serve a
/// page whose heading reads exactly "404: Not Found"; a page without any
/// heading is not a problem page either.
pub fn is_problem_page(doc: &Html) -> bool {
    match heading(doc) {
        Some(title) => title != "404: Not Found",
        None => false,
    }
}

/// Parses a fetched page body into a [`ProblemRecord`], rejecting
/// non-problem pages with [`ScrapeError::NotFound`].
pub fn parse_problem(problem: &str, html: &str) -> Result<ProblemRecord, ScrapeError> {
    let doc = Html::parse_document(html);
    if !is_problem_page(&doc) {
        return Err(ScrapeError::NotFound {
            problem: problem.to_string(),
        });
    }
    Ok(extract_problem(&doc))
}

fn extract_problem(doc: &Html) -> ProblemRecord {
    let metadata = Selector::parse("div.metadata_list-item[data-name]").unwrap();
    let span = Selector::parse("span").unwrap();
    let table = Selector::parse(r#"table[summary="sample data"]"#).unwrap();
    let pre = Selector::parse("pre").unwrap();

    let mut record = ProblemRecord {
        title: heading(doc).unwrap_or_default(),
        cpu: None,
        memory: None,
        difficulty: None,
        samples: Vec::new(),
    };

    for item in doc.select(&metadata) {
        // data-name is "<prefix>-<field>", e.g. "problem-cpu_limit"; the
        // value sits in the last nested span.
        let Some(name) = item.value().attr("data-name").and_then(|n| n.split('-').nth(1)) else {
            continue;
        };
        let Some(value) = item.select(&span).last().map(element_text) else {
            continue;
        };
        match name {
            "cpu_limit" => record.cpu = Some(value),
            "mem_limit" => record.memory = Some(value),
            "difficulty" => record.difficulty = Some(value),
            _ => {}
        }
    }

    for t in doc.select(&table) {
        let blocks: Vec<String> = t.select(&pre).map(|p| p.text().collect()).collect();
        match <[String; 2]>::try_from(blocks) {
            Ok([input, answer]) => record.samples.push(SampleCase { input, answer }),
            Err(blocks) => {
                warn!(
                    count = blocks.len(),
                    "skipping sample table without an input/answer pair"
                );
            }
        }
    }

    record
}

fn heading(doc: &Html) -> Option<String> {
    doc.select(&Selector::parse("h1").unwrap())
        .next()
        .map(element_text)
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

fn get_url(base: &str, problem: &str) -> String {
    format!("{base}{problem}")
}
