// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Keyword filtering for discovered posts.

use log::info;

/// A thing that can be searched for keywords.
pub trait Searchable {
    /// The thing's title, which is always searched.
    fn title(&self) -> &str;

    /// The thing's body text, which is searched only when the
    /// [`FilterScope`] includes it. May be empty.
    fn body(&self) -> &str;

    /// True if `keyword` can be found in the searchable text.
    ///
    /// The search is case-insensitive and matches substrings, so "as"
    /// matches "async". `keyword` is expected to be lower-cased already,
    /// which is always true for keywords taken from a [`KeywordSet`].
    fn matches(&self, keyword: &str, scope: FilterScope) -> bool {
        let in_title = self.title().to_lowercase().contains(keyword);
        match scope {
            FilterScope::Title => in_title,
            FilterScope::TitleAndBody => {
                in_title || self.body().to_lowercase().contains(keyword)
            }
        }
    }
}

/// Which parts of a post are searched for keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterScope {
    /// Only search titles.
    Title,

    /// Search titles and body text.
    #[default]
    TitleAndBody,
}

/// A normalized set of keywords.
///
/// Keywords are trimmed and lower-cased, and blank keywords are dropped.
/// An empty set means no filtering at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Parses a comma-separated list of keywords.
    ///
    /// # Examples
    ///
    /// ```
    /// use subfind::filter::KeywordSet;
    /// let keywords = KeywordSet::parse(" Async,, typing ,PEP");
    /// assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["async", "typing", "pep"]);
    /// ```
    ///
    /// ```
    /// use subfind::filter::KeywordSet;
    /// assert!(KeywordSet::parse("").is_empty());
    /// assert!(KeywordSet::parse(" , ").is_empty());
    /// ```
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// True if there are no keywords, meaning everything passes the filter.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// The normalized keywords, in the order given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let keywords = iter
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }
}

/// Filters searchable things by keyword.
///
/// # Examples
///
/// ```
/// use subfind::filter::{FilterScope, KeywordFilter, KeywordSet};
/// use subfind::thing::Post;
///
/// let posts = vec![
///     Post::build("1", "AsyncIO tips", "python").build(),
///     Post::build("2", "Packaging woes", "python").body("pip and async").build(),
/// ];
///
/// let keywords = KeywordSet::parse("ASYNC");
/// let titles_only = KeywordFilter::new(&keywords)
///     .scope(FilterScope::Title)
///     .apply(posts.clone());
/// assert_eq!(titles_only.len(), 1);
///
/// let everything = KeywordFilter::new(&keywords).apply(posts);
/// assert_eq!(everything.len(), 2);
/// ```
#[derive(Debug)]
pub struct KeywordFilter<'a> {
    keywords: &'a KeywordSet,
    scope: FilterScope,
}

impl<'a> KeywordFilter<'a> {
    /// Creates a filter for the given keywords that searches titles and bodies.
    pub fn new(keywords: &'a KeywordSet) -> Self {
        let scope = FilterScope::default();
        Self { keywords, scope }
    }

    /// Sets which parts of each item are searched.
    pub fn scope(self, scope: FilterScope) -> Self {
        Self { scope, ..self }
    }

    /// True if `item` contains at least one keyword, or if there are no keywords.
    pub fn accepts<T: Searchable>(&self, item: &T) -> bool {
        self.keywords.is_empty()
            || self
                .keywords
                .iter()
                .any(|keyword| item.matches(keyword, self.scope))
    }

    /// Keeps only the items that contain at least one keyword, preserving
    /// their order.
    ///
    /// With an empty keyword set, `items` is returned untouched.
    pub fn apply<T: Searchable>(&self, items: Vec<T>) -> Vec<T> {
        if self.keywords.is_empty() {
            return items;
        }

        let total = items.len();
        let matched: Vec<T> = items.into_iter().filter(|item| self.accepts(item)).collect();
        info!(
            "Keyword filter: {}/{} posts matched keywords {:?}",
            matched.len(),
            total,
            self.keywords.iter().collect::<Vec<_>>(),
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    mod searchable {
        use crate::filter::*;

        #[derive(Default, Debug)]
        struct TestSearchable;

        impl Searchable for TestSearchable {
            fn title(&self) -> &str {
                "Peter Piper picked a peck"
            }

            fn body(&self) -> &str {
                "of pickled peppers"
            }
        }

        #[test]
        fn it_matches_titles() {
            let t = TestSearchable::default();
            assert!(t.matches("peck", FilterScope::Title));
        }

        #[test]
        fn it_matches_case_insensitively() {
            let t = TestSearchable::default();
            assert!(t.matches("peter piper", FilterScope::Title));
        }

        #[test]
        fn it_matches_substrings() {
            let t = TestSearchable::default();
            assert!(t.matches("pip", FilterScope::Title));
        }

        #[test]
        fn it_matches_bodies_when_in_scope() {
            let t = TestSearchable::default();
            assert!(t.matches("pickled", FilterScope::TitleAndBody));
        }

        #[test]
        fn it_ignores_bodies_when_out_of_scope() {
            let t = TestSearchable::default();
            assert!(!t.matches("pickled", FilterScope::Title));
        }

        #[test]
        fn it_returns_false_if_there_are_no_matches() {
            let t = TestSearchable::default();
            assert!(!t.matches("subfind", FilterScope::TitleAndBody));
        }
    }

    mod keyword_set {
        use crate::filter::KeywordSet;

        #[test]
        fn it_normalizes_keywords() {
            let keywords: KeywordSet = vec!["  Rust ", "ASYNC"].into_iter().collect();
            assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["rust", "async"]);
        }

        #[test]
        fn it_drops_blank_keywords() {
            let keywords = KeywordSet::parse("a,,  ,b");
            assert_eq!(keywords.len(), 2);
        }

        #[test]
        fn it_does_not_fold_accents() {
            let keywords = KeywordSet::parse("Café");
            assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["café"]);
        }
    }

    mod keyword_filter {
        use crate::filter::{FilterScope, KeywordFilter, KeywordSet};
        use crate::thing::Post;
        use pretty_assertions::assert_eq;

        fn posts() -> Vec<Post> {
            vec![
                Post::build("1", "AsyncIO in practice", "python").build(),
                Post::build("2", "Type hints", "python")
                    .body("PEP 484 made typing official")
                    .build(),
                Post::build("3", "Weekly thread", "python").build(),
                Post::build("4", "Why I love Python", "python").build(),
                Post::build("5", "Async cancellation", "rust").build(),
            ]
        }

        fn ids(posts: &[Post]) -> Vec<&str> {
            posts.iter().map(|post| post.id()).collect()
        }

        #[test]
        fn it_passes_everything_through_with_no_keywords() {
            let keywords = KeywordSet::default();
            let actual = KeywordFilter::new(&keywords).apply(posts());
            assert_eq!(actual, posts());
        }

        #[test]
        fn it_passes_everything_through_with_no_keywords_in_title_scope() {
            let keywords = KeywordSet::parse("");
            let actual = KeywordFilter::new(&keywords)
                .scope(FilterScope::Title)
                .apply(posts());
            assert_eq!(actual, posts());
        }

        #[test]
        fn it_preserves_order() {
            let keywords = KeywordSet::parse("python,async");
            let actual = KeywordFilter::new(&keywords).apply(posts());
            assert_eq!(ids(&actual), vec!["1", "4", "5"]);
        }

        #[test]
        fn it_matches_keywords_regardless_of_case() {
            for keyword in ["async", "ASYNC", "AsYnC"] {
                let keywords = KeywordSet::parse(keyword);
                let actual = KeywordFilter::new(&keywords).apply(posts());
                assert_eq!(ids(&actual), vec!["1", "5"], "keyword: {keyword}");
            }
        }

        #[test]
        fn it_matches_keywords_inside_words() {
            let keywords = KeywordSet::parse("yp");
            let actual = KeywordFilter::new(&keywords)
                .scope(FilterScope::Title)
                .apply(posts());
            assert_eq!(ids(&actual), vec!["2"]);

            let keywords = KeywordSet::parse("yth");
            let actual = KeywordFilter::new(&keywords)
                .scope(FilterScope::Title)
                .apply(posts());
            assert_eq!(ids(&actual), vec!["4"]);
        }

        #[test]
        fn it_searches_bodies_by_default() {
            let keywords = KeywordSet::parse("pep");
            let actual = KeywordFilter::new(&keywords).apply(posts());
            assert_eq!(ids(&actual), vec!["2"]);
        }

        #[test]
        fn it_only_searches_titles_in_title_scope() {
            let keywords = KeywordSet::parse("pep");
            let actual = KeywordFilter::new(&keywords)
                .scope(FilterScope::Title)
                .apply(posts());
            assert!(actual.is_empty());
        }

        #[test]
        fn it_never_matches_empty_bodies() {
            let keywords = KeywordSet::parse("thread");
            let post = Post::build("6", "Nothing here", "python").build();
            let actual = KeywordFilter::new(&keywords).apply(vec![post]);
            assert!(actual.is_empty());
        }

        #[test]
        fn it_keeps_duplicates() {
            let mut input = posts();
            input.push(posts().remove(0));
            let keywords = KeywordSet::parse("asyncio");
            let actual = KeywordFilter::new(&keywords).apply(input);
            assert_eq!(ids(&actual), vec!["1", "1"]);
        }
    }
}
