// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Score chart demo
//!
//! Configures a chart with the second palette color and transparency,
//! fills it with random scores and replays a few drag steps, logging every
//! data offset change and the visible window.

use anyhow::Result;
use chartandcalendar::{android_test_color, ScoreChart};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "chartandcalendar")]
#[command(version)]
#[command(about = "Scrolls through a randomly generated habit score chart", long_about = None)]
struct Cli {
    /// Palette index of the chart color
    #[arg(long, default_value_t = 1)]
    color: usize,

    /// Pixels per day column
    #[arg(long, default_value_t = 40)]
    bucket_size: usize,

    /// Number of day columns shown at once
    #[arg(long, default_value_t = 7)]
    columns: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut chart = ScoreChart::new();
    chart.set_color(android_test_color(cli.color)?);
    chart.set_is_transparency_enabled(true);
    chart.chart_mut().set_scroller_bucket_size(cli.bucket_size);
    chart.set_scroll_controller(|offset| info!(offset, "data offset changed"));
    chart.populate_with_random_data();

    info!(
        color = %chart.color(),
        background = %chart.background_color(),
        days = chart.scores().len(),
        "chart ready"
    );

    let drag = -(cli.bucket_size as f32) * 2.5;
    for _ in 0..4 {
        chart.chart_mut().scroll_by(drag, 0.0);
        let window: Vec<String> = chart
            .visible_scores(cli.columns)
            .iter()
            .map(|score| format!("{:.0}%", score.percentage() * 100.0))
            .collect();
        info!(offset = chart.data_offset(), window = ?window, "visible scores");
    }

    Ok(())
}
