// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod render;

use std::path::PathBuf;

use aerocode_api::{AuthenticatedActor, LoginRequest, WhoAmIResponse, login};
use aerocode_persistence::{RecordStore, StoreConfig};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// AeroCode - production tracking for aircraft assembly
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an in-memory store.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Login name of the acting employee
    #[arg(short, long)]
    login: String,

    /// Password of the acting employee
    #[arg(short, long)]
    password: String,

    /// Print responses as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config: StoreConfig = StoreConfig::from_path(args.database.clone());
    info!(?config, "Opening record store");
    let mut store: RecordStore = RecordStore::open(&config).wrap_err("opening record store")?;
    store
        .initialize()
        .wrap_err("writing seed data to record store")?;

    let (actor, who): (AuthenticatedActor, WhoAmIResponse) = login(
        &mut store,
        &LoginRequest {
            login: args.login.clone(),
            password: args.password.clone(),
        },
    )?;
    info!(login = %who.login, role = %who.role, "Logged in");

    args.command.run(&mut store, &actor, args.json)
}
