/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use tracing::{error, info};

use cook_timeline::config::MealPlanLoader;
use cook_timeline::render::{render_follow_along, render_groups};
use cook_timeline::timeline::build_cook_timeline;

// ── CLI argument definition ───────────────────────────────────────────────────

/// How to print the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Steps bucketed by minutes from the first step.
    Groups,
    /// One step at a time, in start order.
    Follow,
    Json,
    Yaml,
}

/// Build a cook timeline for a meal plan.
///
/// Example:
///   cook-timeline --meal demos/dinner.yaml --now 2025-01-01T17:00:00Z --view follow
#[derive(Debug, Parser)]
#[command(
    name = "cook-timeline",
    about = "Backward-scheduled cook timeline for a meal",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML meal plan.
    #[arg(short = 'm', long = "meal")]
    meal: PathBuf,

    /// Reference "now" (RFC 3339), used when the meal has no serve time.
    /// Defaults to the current wall-clock time.
    #[arg(short = 'n', long = "now")]
    now: Option<DateTime<Utc>>,

    /// Output format.
    #[arg(short = 'v', long = "view", value_enum, default_value_t = View::Groups)]
    view: View,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    // Logs go to stderr so the timeline on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        meal = %cli.meal.display(),
        now = ?cli.now,
        view = ?cli.view,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut loader = MealPlanLoader::new();
    loader.load_from_file(&cli.meal)?;
    let plan = loader
        .take_plan()
        .context("meal plan loader returned no plan")?;

    // The only clock read in the program.
    let now = cli.now.unwrap_or_else(Utc::now);
    let timeline = build_cook_timeline(&plan.into_input(now));

    let output = match cli.view {
        View::Groups => render_groups(&timeline),
        View::Follow => render_follow_along(&timeline),
        View::Json => serde_json::to_string_pretty(&timeline)?,
        View::Yaml => serde_yaml::to_string(&timeline)?,
    };
    println!("{}", output.trim_end());

    Ok(())
}
