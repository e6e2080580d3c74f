use anyhow::{Context, Result};
use hoves_core::Point;
use serde::Deserialize;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Accepted input shapes: a bare array of points, or an object carrying a
/// `landmarks` array (extra fields ignored).
#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkDocument {
    Bare(Vec<Point>),
    Wrapped { landmarks: Vec<Point> },
}

/// Parse a landmark JSON document into points.
pub fn parse_landmarks(json: &str) -> Result<Vec<Point>> {
    let doc: LandmarkDocument = serde_json::from_str(json)
        .context("expected a JSON array of {x, y, z} points or an object with a `landmarks` array")?;
    Ok(match doc {
        LandmarkDocument::Bare(points) => points,
        LandmarkDocument::Wrapped { landmarks } => landmarks,
    })
}

/// Read the landmark document from `path`, or from stdin when `path` is `None`.
pub async fn read_landmarks(path: Option<&Path>) -> Result<Vec<Point>> {
    let json = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read landmarks from stdin")?;
            buf
        }
    };

    let points = parse_landmarks(&json)?;
    tracing::debug!(count = points.len(), "landmarks parsed");
    Ok(points)
}
