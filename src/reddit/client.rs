// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Anthony Torres <torresam@umich.edu>

//! Clients for reading data from the Reddit API.

use crate::http::HTTPError;
use crate::reddit::service::{RedditService, Service};
use crate::reddit::thing::{self, Listing, Post};
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

// Largest page the search endpoint will return.
const MAX_PAGE_SIZE: usize = 100;

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// The named subreddit does not exist.
    #[error("{0} is not a valid subreddit name.")]
    NoSuchSubreddit(String),

    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}

/// Represents a subreddit whose posts can be searched.
#[derive(Debug)]
pub struct Subreddit<S: Service> {
    name: String,
    service: S,
}

impl Subreddit<RedditService> {
    /// Creates a new client for searching the given subreddit.
    ///
    /// The subreddit's existence is verified before any search runs;
    /// [`Error::NoSuchSubreddit`] is returned for a name Reddit does not
    /// know about.
    pub async fn new(name: impl Into<String>) -> Result<Self, Error> {
        Self::new_with_service(name, RedditService::default()).await
    }
}

impl<S: Service> Subreddit<S> {
    /// Creates a new client for searching the given subreddit.
    ///
    /// `service` is the actual service implementation that will be used to
    /// retrieve information about the subreddit.
    pub(crate) async fn new_with_service(
        name: impl Into<String>,
        service: S,
    ) -> Result<Self, Error> {
        let name = name.into();
        match service.get_resource(&name, "about", &[]).await {
            Ok(_) => Ok(Self { name, service }),
            Err(HTTPError::Http(status)) if status == StatusCode::NOT_FOUND => {
                Err(Error::NoSuchSubreddit(name))
            }
            Err(error) => Err(Error::Service(error)),
        }
    }

    /// The subreddit's name.
    pub fn name(&self) -> String {
        self.name.to_string()
    }

    /// Searches the subreddit for posts matching `query`, newest first.
    ///
    /// Pages through the listing until the results are exhausted or
    /// `limit` posts have been collected. Posts are returned in the order
    /// the API delivered them.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<Post>, Error> {
        let mut posts: Vec<Post> = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let remaining = limit.map(|n| n as usize - posts.len());
            let page_size = remaining.map_or(MAX_PAGE_SIZE, |r| r.min(MAX_PAGE_SIZE));
            if page_size == 0 {
                break;
            }

            let mut params = vec![
                ("q", query.to_string()),
                ("restrict_sr", String::from("on")),
                ("sort", String::from("new")),
                ("limit", page_size.to_string()),
            ];
            if let Some(token) = &after {
                params.push(("after", token.clone()));
            }

            let body = self.service.get_resource(&self.name, "search", &params).await?;
            let listing = Listing::parse(&body)?;
            after = listing.after();

            let page = listing.into_posts();
            debug!("retrieved {} posts from r/{}", page.len(), self.name);
            if page.is_empty() {
                break;
            }
            posts.extend(page);

            if let Some(n) = limit {
                if posts.len() >= n as usize {
                    posts.truncate(n as usize);
                    break;
                }
            }
            if after.is_none() {
                break;
            }
        }

        Ok(posts)
    }
}
