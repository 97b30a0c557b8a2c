// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit. Only GET requests are ever made against
//! Reddit content; the single POST is the one that obtains an access
//! token.

use crate::conf::Credentials;
use crate::http::{self, HTTPError, HTTPResult, HTTPService};
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

/// Endpoint that grants application-only OAuth tokens.
const TOKEN_URI: &str = "https://www.reddit.com/api/v1/access_token";

/// Base URI for authenticated API requests.
const API_BASE_URI: &str = "https://oauth.reddit.com";

/// A query string, as a list of name-value pairs.
pub type Query<'a> = [(&'a str, String)];

/// A service for retrieving listings from the Reddit API.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request for the listing at `path` (such as
    /// `/r/rust/hot`) with the given `query` and returns the raw JSON body.
    fn get_listing(&self, path: &str, query: &Query) -> impl Future<Output = HTTPResult<String>>;
}

/// A service that contacts the Reddit API directly to retrieve information.
///
/// The service authenticates with Reddit's application-only OAuth flow,
/// which grants read-only access to public data.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
    user_agent: String,
    access_token: String,
}

impl RedditService {
    /// Authenticates with Reddit using the given credentials and returns
    /// a service ready to make requests.
    pub async fn connect(credentials: &Credentials) -> HTTPResult<Self> {
        let user_agent = credentials.user_agent().to_string();
        let client = UserAgent(&user_agent).client()?;
        let access_token = Self::authenticate(&client, credentials).await?;
        info!("Reddit client initialized (read-only mode)");
        Ok(Self {
            client,
            user_agent,
            access_token,
        })
    }

    async fn authenticate(client: &Client, credentials: &Credentials) -> HTTPResult<String> {
        debug!("Requesting application-only access token");
        let resp = client
            .post(TOKEN_URI)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let token = http::expect_json(resp)?
            .json::<TokenResponse>()
            .await
            .map_err(HTTPError::Body)?;

        match token {
            TokenResponse {
                access_token: Some(access_token),
                ..
            } => Ok(access_token),
            TokenResponse { error, .. } => Err(HTTPError::Auth(
                error.unwrap_or_else(|| String::from("no access token granted")),
            )),
        }
    }

    fn uri(&self, path: &str) -> String {
        format!("{API_BASE_URI}{path}")
    }
}

impl HTTPService for RedditService {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Service for RedditService {
    async fn get_listing(&self, path: &str, query: &Query<'_>) -> HTTPResult<String> {
        let uri = self.uri(path);
        debug!("GET {uri} {query:?}");
        let resp = self
            .client
            .get(&uri)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;
        http::expect_json(resp)?
            .text()
            .await
            .map_err(HTTPError::Body)
    }
}

struct UserAgent<'a>(&'a str);

impl HTTPService for UserAgent<'_> {
    fn user_agent(&self) -> &str {
        self.0
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}
