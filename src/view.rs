// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::text;
use crate::thing::Post;
use indoc::formatdoc;
use textwrap::{Options, WordSeparator, WrapAlgorithm};

/// Width of the report banner and separators.
pub const REPORT_WIDTH: usize = 72;

/// Column at which body previews are wrapped.
pub const PREVIEW_WIDTH: usize = 64;

/// Maximum number of characters shown from a post's body.
pub const BODY_PREVIEW_LENGTH: usize = 200;

/// Title shown in the report banner.
pub const REPORT_TITLE: &str = "DISCOVERED DISCUSSIONS";

/// Notice shown in place of a report when nothing was found.
pub const NO_RESULTS: &str = "No discussions found matching your criteria.";

/// Shown in place of the author's username when the account was deleted.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// Determines what is shown when there are no posts to report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyStyle {
    /// Print a short "nothing found" notice instead of a report.
    #[default]
    Notice,

    /// Print the usual report header and footer around zero posts.
    Framed,
}

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    empty_style: EmptyStyle,
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use subfind::view::{EmptyStyle, ViewOptions};
    /// let opts = ViewOptions::build().empty_style(EmptyStyle::Framed).build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct ViewOptionsBuilder {
    empty_style: EmptyStyle,
}

impl ViewOptionsBuilder {
    /// Sets what is shown when there are no posts.
    pub fn empty_style(mut self, empty_style: EmptyStyle) -> Self {
        self.empty_style = empty_style;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions {
            empty_style: self.empty_style,
        }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

/// A report of discovered posts.
///
/// The report is the complete text written to standard output, including
/// its leading and trailing blank lines.
#[derive(Debug)]
pub struct Report<'a> {
    posts: &'a [Post],
}

impl<'a> Report<'a> {
    /// Creates a report of `posts`, which are shown in the order given.
    pub fn new(posts: &'a [Post]) -> Self {
        Self { posts }
    }

    fn header(&self) -> String {
        let rule = "=".repeat(REPORT_WIDTH);
        let width = REPORT_WIDTH - 2;
        formatdoc! {"
            {rule}
             {REPORT_TITLE:^width$}
            {rule}
              {} result(s) found

            ",
            self.posts.len(),
        }
    }
}

impl Viewable for Report<'_> {
    fn view(&self, opts: &ViewOptions) -> String {
        if self.posts.is_empty() && opts.empty_style == EmptyStyle::Notice {
            return format!("\n  {NO_RESULTS}\n\n");
        }

        let mut s = String::from("\n");
        s += &self.header();
        for (i, post) in self.posts.iter().enumerate() {
            s += &post_block(i + 1, post);
        }
        s += "\n";
        s
    }
}

fn post_block(index: usize, post: &Post) -> String {
    let mut lines = vec![
        format!("  [{index}] {}", post.title()),
        format!("      Sub    : r/{}", post.subreddit()),
        format!("      Author : u/{}", post.author().unwrap_or(DELETED_AUTHOR)),
        format!(
            "      Score  : {}  |  Comments: {}",
            post.score(),
            post.num_comments()
        ),
        format!(
            "      Date   : {}",
            post.created_utc().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("      Link   : {}", post.url()),
    ];

    let preview = text::preview(post.body(), BODY_PREVIEW_LENGTH);
    if !preview.is_empty() {
        let opts = Options::new(PREVIEW_WIDTH)
            .initial_indent("      > ")
            .subsequent_indent("        ")
            .wrap_algorithm(WrapAlgorithm::FirstFit)
            .word_separator(WordSeparator::AsciiSpace);
        lines.push(textwrap::fill(&preview, opts));
    }

    lines.push(format!("      {}", "-".repeat(REPORT_WIDTH)));

    let mut block = lines.join("\n");
    block.push('\n');
    block
}
