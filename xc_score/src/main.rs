// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{ScoringOptions, score_flight_with};
use clap::{Parser, error::ErrorKind};
use common::{flight::FlightSummary, score::ScoreResult};
use std::{path::PathBuf, process::ExitCode};
use storage::{LoadError, TrackLimits, load_bonus_zones_or_empty, load_track};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Scores a cross-country flight: farthest leg plus bonus zones.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Track file, CSV (`time,lat,lon,alt` with header) or IGC.
    track_file: PathBuf,
    /// Bonus zone file (`kind,amount,lat,lon,radius_km`). A missing or
    /// unreadable file scores the flight without bonus zones.
    bonus_file: PathBuf,
    /// Tracks with at least this many points are searched in parallel.
    #[arg(short, long, default_value_t = ScoringOptions::DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,
    /// Reject tracks with more points than this.
    #[arg(short, long)]
    max_points: Option<usize>,
    /// Print the flight summary as a second JSON line. CSV tracks only have
    /// one if their records carry fix times, and never a date or glider type.
    #[arg(short, long)]
    summary: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("scoring task failed: {0}")]
    Scoring(#[from] tokio::task::JoinError),
    #[error("failed to serialize the result: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
struct Scored {
    result: ScoreResult,
    summary: Option<FlightSummary>,
}

async fn score_files(cli: &Cli) -> Result<Scored, AppError> {
    let limits = TrackLimits {
        max_points: cli.max_points,
    };
    let track = load_track(&cli.track_file, &limits).await?;
    let zones = load_bonus_zones_or_empty(&cli.bonus_file).await;
    let options = ScoringOptions {
        parallel_threshold: cli.parallel_threshold,
    };

    let points = track.points.items;
    debug!(
        "Scoring {} points against {} bonus zones",
        points.len(),
        zones.len()
    );
    let result =
        tokio::task::spawn_blocking(move || score_flight_with(&points, &zones, options)).await?;
    info!(
        "Flight scored {:.3} points over {:.3} km",
        result.total_score, result.raw_distance_km
    );
    Ok(Scored {
        result,
        summary: track.summary,
    })
}

fn render(scored: &Scored, with_summary: bool) -> Result<Vec<String>, AppError> {
    let mut lines = vec![scored.result.to_json()?];
    if with_summary && let Some(summary) = &scored.summary {
        lines.push(summary.to_json()?);
    }
    Ok(lines)
}

/// Exit status for a failed argument parse. Help and version requests
/// succeed, every usage error exits with 1.
fn parse_exit_status(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_status(&e));
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match score_files(&cli).await.and_then(|scored| render(&scored, cli.summary)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to score {}. Error: {}", cli.track_file.to_string_lossy(), e);
            ExitCode::FAILURE
        }
    }
}
