// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Anthony Torres <torresam@umich.edu>

//! flairtally is a command-line tool for surveying the user flairs of a
//! subreddit. It searches a subreddit for posts matching a query, splits
//! each author's flair into its primary and secondary components, and
//! tallies how often each component appears. The tallies can be printed
//! as ranked text tables, exported to a file, or rendered as a horizontal
//! bar chart.
//!
//! # Examples
//!
//! Count the flairs of everyone posting about Ohio State on /r/CFB and
//! print the ranked tallies:
//!
//! ```bash
//! flairtally CFB "ohio state" --print
//! ```
//!
//! Include the matching post titles alongside each author's flair:
//!
//! ```bash
//! flairtally CFB "ohio state" --print --title
//! ```
//!
//! Grab at most 200 posts and export the report to a file:
//!
//! ```bash
//! flairtally CFB "ohio state" -l 200 -e report.txt
//! ```
//!
//! Render a bar chart of the primary flair counts:
//!
//! ```bash
//! flairtally CFB "ohio state" -g flairs.png
//! ```
//!
//! Subreddits encode their two-level flairs differently; the separator and
//! the prefix marker are plain options:
//!
//! ```bash
//! flairtally CFB "rivalry week" --delimiter " / "
//! ```
//!
//! # License
//!
//! flairtally is licensed under the terms of the [Apache License 2.0].
//! Please see the LICENSE file accompanying this source code or visit the
//! previous link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod chart;
pub mod cli;
pub mod count;
pub mod flair;
pub mod http;
pub mod reddit;
pub mod tally;
pub mod text;
pub mod view;

#[cfg(test)]
mod test_utils;
