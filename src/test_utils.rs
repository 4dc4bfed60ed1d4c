use crate::flair::SplitRule;
use crate::http::{HTTPError, HTTPResult};
use crate::reddit::Subreddit;
use crate::reddit::service::{Params, Service};
use crate::tally::ResultSet;
use reqwest::StatusCode;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .expect(&format!("could not load test data from {filename}"))
            .trim_end(),
    )
}

/// A deterministic service that answers requests from fixture files.
///
/// Resources resolve to `tests/data/{resource}_{suffix}.json`; a request
/// carrying an `after` cursor resolves to
/// `tests/data/{resource}_{suffix}_{cursor}.json`. A missing fixture plays
/// the part of an HTTP 404.
#[derive(Debug)]
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl Service for TestService<'_> {
    async fn get_resource(
        &self,
        _subreddit: &str,
        resource: &str,
        params: &Params,
    ) -> HTTPResult<String> {
        let cursor = params
            .iter()
            .find(|(key, _)| *key == "after")
            .map(|(_, token)| format!("_{token}"))
            .unwrap_or_default();
        let filename = format!("tests/data/{resource}_{}{cursor}.json", self.suffix);
        fs::read_to_string(&filename).map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

impl Subreddit<TestService<'static>> {
    /// Returns a subreddit with seven matching posts spread over two
    /// search pages that can be used for testing purposes.
    pub async fn test() -> Self {
        Subreddit::new_with_service("CFB", TestService::new("cfb"))
            .await
            .unwrap()
    }

    /// Returns a subreddit with no matching posts that can be used for
    /// testing purposes.
    pub async fn test_empty() -> Self {
        Subreddit::new_with_service("emptytestsub", TestService::new("empty"))
            .await
            .unwrap()
    }

    /// Returns a non-existent subreddit.
    pub async fn test_none() -> Option<Self> {
        Subreddit::new_with_service("doesnotexist", TestService::new("404"))
            .await
            .ok()
    }
}

/// Builds the result set for the test subreddit's full search results,
/// decomposed with the default split rule.
pub async fn cfb_result_set() -> ResultSet {
    let subreddit = Subreddit::test().await;
    let posts = subreddit
        .search("ohio state", None)
        .await
        .expect("could not search test subreddit");
    let mut results = ResultSet::new(SplitRule::default());
    for post in &posts {
        results.ingest(post.title(), &post.flair_text());
    }
    results
}
