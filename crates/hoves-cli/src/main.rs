use anyhow::Result;
use clap::{Parser, Subcommand};
use hoves_core::{AnalysisMetrics, Insights, Landmark};
use serde::Serialize;
use std::path::PathBuf;

mod config;
mod input;

use config::Config;

#[derive(Parser)]
#[command(name = "hoves", about = "HOVES facial metrics from 468-point landmark meshes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a landmark mesh and print the metrics as JSON
    Analyze {
        /// JSON file with 468 landmarks (reads stdin when omitted)
        path: Option<PathBuf>,
        /// Include fun facts, recommendations and a routine guide
        #[arg(long)]
        insights: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Print full-precision values instead of display-rounded ones
        #[arg(long)]
        full_precision: bool,
    },
    /// List the named landmarks and their mesh indices
    Landmarks,
}

#[derive(Debug, Serialize)]
struct Report {
    metrics: AnalysisMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<Insights>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            insights,
            pretty,
            full_precision,
        } => {
            let config = Config::from_env().with_flags(pretty, insights, full_precision);
            tracing::debug!(?config, "analyze");

            let points = input::read_landmarks(path.as_deref()).await?;
            let report = build_report(&points, &config)?;

            let json = if config.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Commands::Landmarks => {
            for landmark in Landmark::ALL {
                println!("{:>4}  {}", landmark.index(), landmark.name());
            }
        }
    }

    Ok(())
}

fn build_report(points: &[hoves_core::Point], config: &Config) -> Result<Report> {
    let metrics = hoves_core::analyze_face(points)?;
    tracing::info!(
        overall = metrics.basic.overall_score.value(),
        symmetry = metrics.basic.symmetry.value(),
        "analysis complete"
    );

    // Insights read full-precision values.
    let insights = config.insights.then(|| hoves_core::generate_insights(&metrics));
    let metrics = if config.full_precision {
        metrics
    } else {
        metrics.rounded()
    };

    Ok(Report { metrics, insights })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoves_core::{Point, MESH_POINT_COUNT};

    fn flat_mesh() -> Vec<Point> {
        vec![Point::new(0.5, 0.5, 0.0); MESH_POINT_COUNT]
    }

    #[test]
    fn test_report_without_insights() {
        let report = build_report(&flat_mesh(), &Config::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("insights").is_none());
        assert_eq!(json["metrics"]["basic"]["symmetry"]["source"], "measured");
        assert_eq!(json["metrics"]["basic"]["skin_clarity"]["value"], 85);
    }

    #[test]
    fn test_report_with_insights() {
        let config = Config::default().with_flags(false, true, false);
        let report = build_report(&flat_mesh(), &config).unwrap();
        let insights = report.insights.expect("insights requested");
        assert!(!insights.fun_facts.is_empty());
        assert!(!insights.routine_guide.is_empty());
    }

    #[test]
    fn test_report_is_rounded_by_default() {
        let mut points = flat_mesh();
        points[Landmark::LeftEyeOuter.index()] = Point::new(0.3, 0.47, 0.0);
        let report = build_report(&points, &Config::default()).unwrap();
        let tilt = report.metrics.expert.canthal_tilt.value();
        assert_eq!(tilt, (tilt * 10.0).round() / 10.0);
    }

    #[test]
    fn test_report_rejects_short_mesh() {
        let err = build_report(&flat_mesh()[..100], &Config::default()).unwrap_err();
        assert!(err.to_string().contains("expected 468 landmarks, got 100"));
    }

    #[test]
    fn test_report_accepts_iris_refined_mesh() {
        let points = vec![Point::new(0.5, 0.5, 0.0); 478];
        let report = build_report(&points, &Config::default()).unwrap();
        assert_eq!(report.metrics.basic.symmetry.value(), 100.0);
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from(["hoves", "analyze", "face.json", "--pretty"]).unwrap();
        match cli.command {
            Commands::Analyze { path, pretty, insights, .. } => {
                assert_eq!(path, Some(PathBuf::from("face.json")));
                assert!(pretty);
                assert!(!insights);
            }
            Commands::Landmarks => panic!("wrong subcommand"),
        }
    }
}
