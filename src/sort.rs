// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Sort orders understood by Reddit listings and searches.
//!
//! Listings and searches accept different sort orders. A requested
//! [`Sort`] is resolved into a [`ListingSort`] or [`SearchSort`]
//! depending on the retrieval mode, silently falling back to a sensible
//! default when the request makes no sense for that mode.

use clap::ValueEnum;
use std::fmt;

/// A sort order requested by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Sort {
    /// Currently popular posts.
    #[default]
    Hot,

    /// Most recent posts.
    New,

    /// Highest scoring posts of all time.
    Top,

    /// Posts gaining popularity quickly.
    Rising,

    /// Best match for a search query.
    Relevance,
}

/// Sort orders for browsing a subreddit listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingSort {
    #[default]
    Hot,
    New,
    Top,
    Rising,
}

impl ListingSort {
    /// Resolves a sort name, falling back to [`ListingSort::Hot`] for
    /// anything that is not a listing sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use subfind::sort::ListingSort;
    /// assert_eq!(ListingSort::resolve("top"), ListingSort::Top);
    /// assert_eq!(ListingSort::resolve("invalid"), ListingSort::Hot);
    /// ```
    pub fn resolve(name: &str) -> Self {
        match name {
            "new" => ListingSort::New,
            "top" => ListingSort::Top,
            "rising" => ListingSort::Rising,
            _ => ListingSort::Hot,
        }
    }

    /// The name Reddit uses for this sort, which is also the last
    /// component of the listing's path.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingSort::Hot => "hot",
            ListingSort::New => "new",
            ListingSort::Top => "top",
            ListingSort::Rising => "rising",
        }
    }
}

impl From<Sort> for ListingSort {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::New => ListingSort::New,
            Sort::Top => ListingSort::Top,
            Sort::Rising => ListingSort::Rising,
            Sort::Hot | Sort::Relevance => ListingSort::Hot,
        }
    }
}

impl fmt::Display for ListingSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort orders for searching a subreddit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchSort {
    #[default]
    Relevance,
    Hot,
    Top,
    New,
}

impl SearchSort {
    /// Resolves a sort name, falling back to [`SearchSort::Relevance`]
    /// for anything that is not a search sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use subfind::sort::SearchSort;
    /// assert_eq!(SearchSort::resolve("new"), SearchSort::New);
    /// assert_eq!(SearchSort::resolve("rising"), SearchSort::Relevance);
    /// ```
    pub fn resolve(name: &str) -> Self {
        match name {
            "hot" => SearchSort::Hot,
            "top" => SearchSort::Top,
            "new" => SearchSort::New,
            _ => SearchSort::Relevance,
        }
    }

    /// The value Reddit expects in the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSort::Relevance => "relevance",
            SearchSort::Hot => "hot",
            SearchSort::Top => "top",
            SearchSort::New => "new",
        }
    }
}

impl From<Sort> for SearchSort {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Hot => SearchSort::Hot,
            Sort::New => SearchSort::New,
            Sort::Top => SearchSort::Top,
            Sort::Rising | Sort::Relevance => SearchSort::Relevance,
        }
    }
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    mod listing_sort {
        use crate::sort::{ListingSort, Sort};

        #[test]
        fn it_resolves_every_listing_sort() {
            for sort in [
                ListingSort::Hot,
                ListingSort::New,
                ListingSort::Top,
                ListingSort::Rising,
            ] {
                assert_eq!(ListingSort::resolve(sort.as_str()), sort);
            }
        }

        #[test]
        fn it_falls_back_to_hot() {
            assert_eq!(ListingSort::resolve("relevance"), ListingSort::Hot);
            assert_eq!(ListingSort::resolve(""), ListingSort::Hot);
            assert_eq!(ListingSort::resolve("HOT"), ListingSort::Hot);
        }

        #[test]
        fn it_converts_relevance_to_hot() {
            assert_eq!(ListingSort::from(Sort::Relevance), ListingSort::Hot);
        }

        #[test]
        fn it_converts_listing_sorts_unchanged() {
            assert_eq!(ListingSort::from(Sort::Rising), ListingSort::Rising);
            assert_eq!(ListingSort::from(Sort::Top), ListingSort::Top);
        }
    }

    mod search_sort {
        use crate::sort::{SearchSort, Sort};

        #[test]
        fn it_resolves_every_search_sort() {
            for sort in [
                SearchSort::Relevance,
                SearchSort::Hot,
                SearchSort::Top,
                SearchSort::New,
            ] {
                assert_eq!(SearchSort::resolve(sort.as_str()), sort);
            }
        }

        #[test]
        fn it_falls_back_to_relevance() {
            assert_eq!(SearchSort::resolve("rising"), SearchSort::Relevance);
            assert_eq!(SearchSort::resolve("bogus"), SearchSort::Relevance);
        }

        #[test]
        fn it_converts_rising_to_relevance() {
            assert_eq!(SearchSort::from(Sort::Rising), SearchSort::Relevance);
        }

        #[test]
        fn it_keeps_hot_for_searches() {
            assert_eq!(SearchSort::from(Sort::Hot), SearchSort::Hot);
        }
    }
}
