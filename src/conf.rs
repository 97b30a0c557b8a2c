// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Environment and configuration utilities.

use log::debug;
use std::{env, fmt};
use thiserror::Error;

/// Environment variable holding the Reddit application's client ID.
pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";

/// Environment variable holding the Reddit application's client secret.
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";

/// Environment variable holding the user agent sent with every request.
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";

/// Loads variables from a `.env` file in the current directory, if there
/// is one.
///
/// Variables already set in the environment win over those in the file.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(err) => debug!("Not loading .env file: {err}"),
    }
}

/// Credentials for a Reddit "script" or "web" application.
///
/// Create an application at <https://www.reddit.com/prefs/apps> to get
/// a client ID and secret. Only application-only (read-only) access is
/// ever requested with these credentials.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Retrieves credentials from `$REDDIT_CLIENT_ID`, `$REDDIT_CLIENT_SECRET`,
    /// and `$REDDIT_USER_AGENT`.
    ///
    /// Returns an error naming every variable that is unset or empty.
    pub fn from_env() -> CredentialsResult {
        let mut missing = vec![];
        let mut lookup = |name: &'static str| match env::var(name) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let client_id = lookup(CLIENT_ID_VAR);
        let client_secret = lookup(CLIENT_SECRET_VAR);
        let user_agent = lookup(USER_AGENT_VAR);

        if missing.is_empty() {
            Ok(Self::new(client_id, client_secret, user_agent))
        } else {
            Err(CredentialsError::Missing(missing))
        }
    }

    /// The application's client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The application's client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The user agent to identify as.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Standard result type for [`Credentials`] creation.
pub type CredentialsResult = Result<Credentials, CredentialsError>;

/// Indicates an error when loading credentials.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// One or more required environment variables are unset or empty.
    #[error(
        "Missing Reddit API credentials ({}). Please set REDDIT_CLIENT_ID, \
         REDDIT_CLIENT_SECRET, and REDDIT_USER_AGENT in your environment or .env file.",
        .0.join(", ")
    )]
    Missing(Vec<&'static str>),
}
