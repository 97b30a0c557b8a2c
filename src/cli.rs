// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::conf::{self, Credentials, CredentialsError};
use crate::filter::KeywordSet;
use crate::pipeline::{Discovery, Variant};
use crate::reddit::Subreddits;
use crate::reddit::client;
use crate::retrieve::Mode;
use crate::sort::Sort;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::num::{NonZeroU32, NonZeroUsize};
use std::process;
use thiserror::Error;

pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Discovers discussions across subreddits", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// Comma-separated list of subreddits to read
    #[arg(short, long, default_value = "python")]
    subreddits: String,

    /// Number of posts to fetch from each subreddit
    #[arg(short, long, default_value = "10")]
    limit: NonZeroU32,

    /// Comma-separated list of keywords; only posts containing one are shown
    #[arg(short, long, default_value = "")]
    keywords: String,

    /// Order in which posts are fetched
    #[arg(long, value_enum, default_value_t = Sort::Hot)]
    sort: Sort,

    /// Search each subreddit for QUERY instead of browsing it
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Which flavor of discovery to run
    #[arg(long, value_enum, default_value_t = Variant::Discover)]
    variant: Variant,

    /// Maximum number of subreddits fetched at once
    #[arg(short, long, default_value = "4")]
    jobs: NonZeroUsize,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity<InfoLevel> {
        self.verbosity
    }

    /// How posts are retrieved: searched when a non-blank query was
    /// given, browsed otherwise.
    pub fn mode(&self) -> Mode {
        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => Mode::Search {
                query: query.to_string(),
                sort: self.sort.into(),
            },
            _ => Mode::Browse(self.sort.into()),
        }
    }

    /// Builds the discovery pipeline options from the command line.
    pub fn discovery(&self) -> Discovery {
        Discovery::build(self.subreddits.split(','))
            .mode(self.mode())
            .limit(self.limit)
            .keywords(KeywordSet::parse(&self.keywords))
            .variant(self.variant)
            .concurrency(self.jobs)
            .build()
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
    /// Credentials are read from the environment, or from a `.env` file,
    /// before anything is fetched. The report is printed only once every
    /// subreddit has been read successfully.
    pub async fn run(&self) -> Result<(), Error> {
        conf::load_dotenv();
        let credentials = Credentials::from_env()?;
        let source = Subreddits::connect(&credentials).await?;

        let discovery = self.config.discovery();
        let posts = discovery.run(&source).await?;
        print!("{}", discovery.report(&posts));
        Ok(())
    }
}

/// An error that stops the program.
#[derive(Debug, Error)]
pub enum Error {
    /// Reddit credentials are missing from the environment.
    #[error("Configuration error: {0}")]
    Config(#[from] CredentialsError),

    /// Posts could not be retrieved from Reddit.
    #[error("{0}")]
    Client(#[from] client::Error),
}
