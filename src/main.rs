// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use clap::Parser;
use subfind::cli::{Config, Runner, die};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = Runner::new(config).run().await {
        die(1, &err.to_string());
    }
}
