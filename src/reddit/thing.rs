// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Anthony Torres <torresam@umich.edu>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. This
//! module holds the slice of that model a subreddit search returns.

use crate::text::convert_html_entities;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

// What Python's str() made of a missing flair; kept so unflaired authors
// still show up in the tallies under a recognizable label.
const NO_FLAIR: &str = "None";

/// A parsing error.
#[derive(Debug, Error)]
pub enum Error {
    /// The response body was not a well-formed listing.
    #[error("could not parse listing: {0}")]
    Json(#[from] serde_json::Error),
}

/// One page of search results from the Reddit API.
#[derive(Debug, Deserialize)]
pub struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    after: Option<String>,
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

/// A post returned by a subreddit search.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    title: String,
    author_flair_text: Option<String>,
}

impl Listing {
    /// Parses a raw JSON search response into a listing of posts.
    pub fn parse(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }

    /// The pagination token for the next page, if there is one.
    pub fn after(&self) -> Option<String> {
        self.data.after.clone()
    }

    /// Consumes the listing, returning its posts in arrival order.
    pub fn into_posts(self) -> Vec<Post> {
        self.data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect()
    }
}

impl Post {
    /// The post's title, with HTML entities decoded.
    pub fn title(&self) -> String {
        convert_html_entities(&self.title)
    }

    /// The author's flair text, with HTML entities decoded.
    ///
    /// A post whose author has no flair set yields the literal string
    /// `"None"`, which is tallied like any other one-part flair.
    pub fn flair_text(&self) -> String {
        match &self.author_flair_text {
            Some(text) => convert_html_entities(text),
            None => {
                debug!("post {:?} has no author flair", self.title);
                NO_FLAIR.to_string()
            }
        }
    }
}
