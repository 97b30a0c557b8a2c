// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Reddit API clients and services for communicating with Reddit over HTTP.

pub mod client;
pub mod service;

pub use client::{Source, Subreddits};
