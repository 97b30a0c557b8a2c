// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use std::num::NonZeroU32;
use subfind::conf::{self, Credentials};
use subfind::reddit::{Source, Subreddits};
use subfind::sort::{ListingSort, SearchSort};

// These tests talk to the live Reddit API and need real credentials, so
// they only run when asked for:
//
//     cargo test -- --ignored
//
// What comes back changes all the time, so they only check that requests
// succeed and that limits are honored.

async fn connect() -> Subreddits<subfind::reddit::service::RedditService> {
    conf::load_dotenv();
    let credentials = Credentials::from_env().expect("Could not load credentials. Are REDDIT_* set?");
    Subreddits::connect(&credentials)
        .await
        .expect("could not authenticate with Reddit")
}

fn limit(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

#[tokio::test]
#[ignore]
async fn it_retrieves_listings() {
    let client = connect().await;
    let posts = client
        .listing("rust", ListingSort::New, limit(5))
        .await
        .expect("could not retrieve listing");
    assert!(posts.len() <= 5);
    assert!(posts.iter().all(|post| post.subreddit().eq_ignore_ascii_case("rust")));
}

#[tokio::test]
#[ignore]
async fn it_follows_pages() {
    let client = connect().await;
    let posts = client
        .listing("rust", ListingSort::Top, limit(150))
        .await
        .expect("could not retrieve listing");
    assert!(posts.len() > 100);
    assert!(posts.len() <= 150);
}

#[tokio::test]
#[ignore]
async fn it_searches() {
    let client = connect().await;
    let posts = client
        .search("rust", "async", SearchSort::Relevance, limit(5))
        .await
        .expect("could not search");
    assert!(posts.len() <= 5);
}
