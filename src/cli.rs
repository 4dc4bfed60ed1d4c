//! Drives the command-line program.

use crate::chart::{self, RenderError};
use crate::flair::SplitRule;
use crate::reddit::{Subreddit, client};
use crate::tally::ResultSet;
use crate::view::{self, Viewable, ViewOptions};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

/// Prints `message` to standard error and terminates the process with
/// `error_code`.
pub fn die(error_code: i32, message: &str) {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// A fatal program error.
#[derive(Debug, Error)]
pub enum Error {
    /// The subreddit could not be reached or searched.
    #[error(transparent)]
    Reddit(#[from] client::Error),

    /// The report could not be written to the export destination.
    #[error("could not export data: {0}")]
    Export(#[from] std::io::Error),

    /// The chart could not be rendered.
    #[error(transparent)]
    Chart(#[from] RenderError),
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Tallies the user flairs of Redditors posting in a subreddit", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Name of the subreddit to search
    subreddit: String,

    /// Search query; see https://www.reddit.com/wiki/search for how to
    /// form search queries
    query: String,

    /// Print out detailed flair tallies
    #[arg(short, long, default_value_t = false)]
    print: bool,

    /// Include post titles in the data
    #[arg(short, long, default_value_t = false)]
    title: bool,

    /// Number of posts to grab; default is as many as possible
    #[arg(short, long, value_name = "AMOUNT")]
    limit: Option<u32>,

    /// Export the data to FILENAME
    #[arg(short, long, value_name = "FILENAME")]
    export: Option<PathBuf>,

    /// Export a bar chart of the primary flair counts to FILENAME
    #[arg(short, long, value_name = "FILENAME")]
    graph: Option<PathBuf>,

    /// Substring separating the primary and secondary flair components
    #[arg(long, value_name = "SEP", default_value = SplitRule::DEFAULT_DELIMITER)]
    delimiter: String,

    /// Prefix marker; only text after its last occurrence is treated as
    /// the flair
    #[arg(long, value_name = "PREFIX", default_value = SplitRule::DEFAULT_MARKER)]
    marker: String,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity.clone()
    }

    fn split_rule(&self) -> SplitRule {
        SplitRule::new(&self.marker, &self.delimiter)
    }
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Runner {
        Self { config }
    }

    /// Run the command-line program using its stored configuration options.
    ///
    /// Verifies that the subreddit exists, streams the matching posts into
    /// a [`ResultSet`], and hands the frozen set to each requested sink.
    pub async fn run(&self) -> Result<(), Error> {
        let subreddit = Subreddit::new(self.config.subreddit.as_str()).await?;
        let posts = subreddit
            .search(&self.config.query, self.config.limit)
            .await?;

        let mut results = ResultSet::new(self.config.split_rule());
        for post in &posts {
            results.ingest(post.title(), &post.flair_text());
        }

        let opts = ViewOptions::build()
            .titles(self.config.title)
            .details(self.config.print)
            .build();
        print!("{}", results.view(&opts));

        if let Some(path) = &self.config.export {
            debug!("exporting report to {}", path.display());
            // The export always carries the ranked sections, like the
            // report the console prints with --print.
            let opts = ViewOptions::build()
                .titles(self.config.title)
                .details(true)
                .build();
            view::export_to_path(path, &results, &opts)?;
        }

        if let Some(path) = &self.config.graph {
            debug!("rendering flair chart to {}", path.display());
            chart::render(results.primary(), path)?;
        }

        Ok(())
    }
}
