// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! The discovery pipeline: retrieve, filter, report.
//!
//! A [`Discovery`] holds every option for a single run. It is built once,
//! up front, and then handed a [`Source`] to read from, so nothing in the
//! pipeline depends on global state.
//!
//! # Examples
//!
//! ```no_run
//! use subfind::conf::Credentials;
//! use subfind::filter::KeywordSet;
//! use subfind::pipeline::Discovery;
//! use subfind::reddit::Subreddits;
//! use subfind::retrieve::Mode;
//! use subfind::sort::SearchSort;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let discovery = Discovery::build(["python", "learnpython"])
//!     .mode(Mode::Search {
//!         query: String::from("async python"),
//!         sort: SearchSort::Top,
//!     })
//!     .keywords(KeywordSet::parse("asyncio,trio"))
//!     .build();
//!
//! let source = Subreddits::connect(&Credentials::from_env()?).await?;
//! let posts = discovery.run(&source).await?;
//! print!("{}", discovery.report(&posts));
//! # Ok(())
//! # }
//! ```

use crate::filter::{FilterScope, KeywordFilter, KeywordSet};
use crate::reddit::client::{Error, Source};
use crate::retrieve::{DEFAULT_CONCURRENCY, Mode, Retriever};
use crate::thing::Post;
use crate::view::{EmptyStyle, Report, ViewOptions, Viewable};
use clap::ValueEnum;
use log::debug;
use std::num::{NonZeroU32, NonZeroUsize};

/// Number of posts requested from each subreddit unless configured otherwise.
pub const DEFAULT_LIMIT: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// Flavors of the discovery tool, which differ in what they filter on
/// and in how they report an empty result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Filter on titles and bodies; print a notice when nothing is found.
    #[default]
    Discover,

    /// Filter on titles only; print an empty report when nothing is found.
    Browse,
}

impl Variant {
    /// Which parts of a post this variant searches for keywords.
    pub fn filter_scope(&self) -> FilterScope {
        match self {
            Variant::Discover => FilterScope::TitleAndBody,
            Variant::Browse => FilterScope::Title,
        }
    }

    /// How this variant reports an empty result.
    pub fn empty_style(&self) -> EmptyStyle {
        match self {
            Variant::Discover => EmptyStyle::Notice,
            Variant::Browse => EmptyStyle::Framed,
        }
    }
}

/// Options for one run of the discovery pipeline.
#[derive(Clone, Debug)]
pub struct Discovery {
    communities: Vec<String>,
    mode: Mode,
    limit: NonZeroU32,
    keywords: KeywordSet,
    variant: Variant,
    concurrency: NonZeroUsize,
}

impl Discovery {
    /// Incrementally builds the options for a run over `communities`.
    pub fn build<I, S>(communities: I) -> DiscoveryBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DiscoveryBuilder::new(communities.into_iter().map(Into::into).collect())
    }

    /// The subreddits to read, as given.
    pub fn communities(&self) -> &[String] {
        &self.communities
    }

    /// Whether subreddits are browsed or searched.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Number of posts requested from each subreddit.
    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Keywords posts are filtered on.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// The flavor of the tool being run.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Retrieves posts from `source` and filters them by keyword.
    ///
    /// Returns the first error encountered while retrieving; no posts are
    /// returned at all in that case.
    pub async fn run<S: Source>(&self, source: &S) -> Result<Vec<Post>, Error> {
        debug!("Running discovery: {self:?}");
        let posts = Retriever::new(source)
            .concurrency(self.concurrency)
            .retrieve(&self.communities, &self.mode, self.limit)
            .await?;
        let posts = KeywordFilter::new(&self.keywords)
            .scope(self.variant.filter_scope())
            .apply(posts);
        Ok(posts)
    }

    /// Renders `posts` as a report, as this run's variant prescribes.
    pub fn report(&self, posts: &[Post]) -> String {
        let opts = ViewOptions::build()
            .empty_style(self.variant.empty_style())
            .build();
        Report::new(posts).view(&opts)
    }
}

/// A builder for [`Discovery`] options.
///
/// Call [`Discovery::build()`] instead of using this directly.
#[derive(Debug)]
#[must_use]
pub struct DiscoveryBuilder {
    discovery: Discovery,
}

impl DiscoveryBuilder {
    fn new(communities: Vec<String>) -> Self {
        let discovery = Discovery {
            communities,
            mode: Mode::default(),
            limit: DEFAULT_LIMIT,
            keywords: KeywordSet::default(),
            variant: Variant::default(),
            concurrency: DEFAULT_CONCURRENCY,
        };
        Self { discovery }
    }

    /// Sets whether subreddits are browsed or searched.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.discovery.mode = mode;
        self
    }

    /// Sets the number of posts requested from each subreddit.
    pub fn limit(mut self, limit: NonZeroU32) -> Self {
        self.discovery.limit = limit;
        self
    }

    /// Sets the keywords posts are filtered on.
    pub fn keywords(mut self, keywords: KeywordSet) -> Self {
        self.discovery.keywords = keywords;
        self
    }

    /// Sets the flavor of the tool.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.discovery.variant = variant;
        self
    }

    /// Sets the maximum number of subreddits fetched at once.
    pub fn concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.discovery.concurrency = concurrency;
        self
    }

    /// Finalizes the [`Discovery`].
    pub fn build(self) -> Discovery {
        self.discovery
    }
}
