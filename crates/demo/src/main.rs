// File: crates/demo/src/main.rs
// Summary: Demo renders a page of sample charts (scalar, vector, gappy, invalid) to SVGs.

use anyhow::Result;
use linechart_core::{ChartEngine, Sample, Series, YValue};
use linechart_render_svg::SvgRenderer;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out"));

    let engine = ChartEngine::new();
    let renderer = SvgRenderer::new();

    let mut written = 0usize;
    for series in sample_charts() {
        match engine.render_series(&series) {
            Ok(plan) => {
                let out = out_dir.join(format!("{}.svg", slug(&series.title)));
                renderer.render_to_file(&plan, &out)?;
                println!("Wrote {}", out.display());
                written += 1;
            }
            Err(err) => {
                // A bad series is skipped; the rest of the page still renders.
                log::warn!("skipping '{}': {}", series.title, err);
            }
        }
    }
    println!("Rendered {written} charts into {}", out_dir.display());

    Ok(())
}

/// The sample chart list: one scalar trend with a gap, a three-line vector
/// series with nulls, a four-line series showing palette cycling, and one
/// series with no usable data at all.
fn sample_charts() -> Vec<Series> {
    let monthly_revenue = Series::new(
        "Monthly Revenue",
        vec![
            Sample::new(0.0, 12.4),
            Sample::new(1.0, 14.1),
            Sample::new(2.0, 13.2),
            Sample::missing(3.0),
            Sample::new(4.0, 17.8),
            Sample::new(5.0, 16.5),
            Sample::new(6.0, 19.3),
        ],
    );

    let server_latency = Series::new(
        "Server Latency (p50/p90/p99)",
        vec![
            Sample::new(0.0, YValue::vector(vec![Some(11.0), Some(24.0), Some(48.0)])),
            Sample::new(1.0, YValue::vector(vec![Some(12.0), Some(26.0), None])),
            Sample::new(2.0, YValue::vector(vec![Some(10.5), Some(22.0), Some(61.0)])),
            Sample::new(3.0, YValue::vector(vec![None, Some(25.0), Some(55.0)])),
            Sample::new(4.0, YValue::vector(vec![Some(11.8), Some(23.5), Some(50.0)])),
        ],
    );

    let sensor_bank = Series::new(
        "Sensor Bank",
        vec![
            Sample::new(0.0, YValue::vector(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)])),
            Sample::new(1.0, YValue::vector(vec![Some(1.5), Some(2.5), Some(2.8), Some(4.4)])),
            Sample::new(2.0, YValue::vector(vec![Some(1.2), Some(2.2), Some(3.1), Some(4.1)])),
        ],
    );

    let broken_feed = Series::new(
        "Broken Feed",
        vec![Sample::missing(0.0), Sample::missing(1.0), Sample::missing(2.0)],
    );

    vec![monthly_revenue, server_latency, sensor_bank, broken_feed]
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
