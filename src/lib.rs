// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! subfind is a command-line tool for discovering discussions on Reddit.
//! It reads recent posts from one or more subreddits, either by browsing
//! their listings or by searching them, keeps the ones that mention any of
//! a set of keywords, and prints a plain-text report of what it found.
//!
//! # Examples
//!
//! Show the 10 hottest posts in r/python:
//!
//! ```bash
//! subfind
//! ```
//!
//! Show the 25 newest posts from several subreddits that mention asyncio
//! or trio in their title or body:
//!
//! ```bash
//! subfind -s python,learnpython -l 25 --sort new -k asyncio,trio
//! ```
//!
//! Search subreddits instead of browsing them:
//!
//! ```bash
//! subfind -s python,rust --search "structured concurrency" --sort top
//! ```
//!
//! Match keywords against titles only, and print an empty report rather
//! than a notice when nothing matches:
//!
//! ```bash
//! subfind --variant browse -k "weekly thread"
//! ```
//!
//! Progress is logged to standard error; pass `-q` to silence it or `-v`
//! for more detail. Get usage and help for the tool:
//!
//! ```bash
//! subfind --help
//! ```
//!
//! # Reddit API Setup
//!
//! subfind only reads public data, but Reddit still requires an
//! application to authenticate. To enable access:
//!
//! 1. Create a "script" app in your [Reddit app preferences].
//! 2. Note the app's client ID and client secret.
//! 3. Store them, along with a descriptive user agent, in the
//!    `$REDDIT_CLIENT_ID`, `$REDDIT_CLIENT_SECRET`, and
//!    `$REDDIT_USER_AGENT` environment variables:
//!
//!    ```bash
//!    $ export REDDIT_CLIENT_ID='client id'
//!    $ export REDDIT_CLIENT_SECRET='client secret'
//!    $ export REDDIT_USER_AGENT='subfind/0.1 by your_username'
//!    ```
//!
//!    The same variables may instead be placed in a `.env` file in the
//!    directory subfind is run from.
//!
//! # License
//!
//! subfind is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [Reddit app preferences]: https://www.reddit.com/prefs/apps

pub mod cli;
pub mod conf;
pub mod filter;
pub mod http;
pub mod pipeline;
pub mod reddit;
pub mod retrieve;
pub mod sort;
pub mod text;
pub mod thing;
pub mod view;

#[cfg(test)]
mod test_utils;
