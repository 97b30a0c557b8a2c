// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, Response, StatusCode, header};
use std::time::Duration;
use thiserror::Error;

/// How long to wait for any single HTTP request before giving up.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A general service for making HTTP calls.
///
/// It might be a bit odd to refer to this trait as a "service", since
/// it appears to be more of a _client_ implementation, but think of
/// this as a proxy for a remote _service_ (even though a _client_ is used
/// to communicate with that remote service). A service might not always
/// be remote, such as when the implementation is a deterministic service
/// used for testing.
pub trait HTTPService {
    /// An appropriate user agent to use when making HTTP requests.
    ///
    /// Reddit in particular is picky about user agents and throttles
    /// generic ones, so services should identify themselves clearly.
    fn user_agent(&self) -> &str;

    /// Default HTTP client that can be used to make HTTP requests.
    fn client(&self) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(self.user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(HTTPError::Request)
    }
}

/// Checks that a response was successful and carries a JSON body.
pub fn expect_json(resp: Response) -> HTTPResult<Response> {
    if !resp.status().is_success() {
        return Err(HTTPError::Http(resp.status()));
    }

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .ok_or(HTTPError::MissingContentType)?
        .to_str()?;
    if content_type.starts_with("application/json") {
        Ok(resp)
    } else {
        Err(HTTPError::UnexpectedContentType(content_type.to_string()))
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An error retrieving the body of a response.
    #[error("Error retrieving body of HTTP response: {0}")]
    Body(reqwest::Error),

    /// An error that occurred while making an HTTP request.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(StatusCode),

    /// The service refused to grant an access token.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),
}
