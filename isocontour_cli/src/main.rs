// Copyright 2025 the Isocontour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `isocontour`: print the contour of a union of rectangles.

use anyhow::Result;
use clap::Parser;
use isocontour_cli::{Args, run};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the listing.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    run(&Args::parse())
}
