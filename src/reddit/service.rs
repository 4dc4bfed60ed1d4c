// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Anthony Torres <torresam@umich.edu>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for subreddit searches.

use crate::http::{HTTPError, HTTPResult, HTTPService};
use reqwest::{Client, header};

/// Query parameters attached to an API request.
pub type Params = [(&'static str, String)];

/// A service for retrieving information about a subreddit.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request to the `resource` associated with the given
    /// `subreddit` and returns the raw JSON response.
    fn get_resource(
        &self,
        subreddit: &str,
        resource: &str,
        params: &Params,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
}

impl Default for RedditService {
    /// Creates a new Reddit service.
    fn default() -> Self {
        Self {
            client: Self::client(),
        }
    }
}

impl HTTPService for RedditService {}

impl RedditService {
    fn uri(&self, subreddit: &str, resource: &str) -> String {
        format!("https://www.reddit.com/r/{subreddit}/{resource}.json")
    }

    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    async fn get(&self, uri: &str, params: &Params) -> HTTPResult<String> {
        let resp = self.client.get(uri).query(params).send().await?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                Ok(resp.text().await?)
            }
        }
    }
}

impl Service for RedditService {
    async fn get_resource(
        &self,
        subreddit: &str,
        resource: &str,
        params: &Params,
    ) -> HTTPResult<String> {
        let uri = self.uri(subreddit, resource);
        self.get(&uri, params).await
    }
}
