use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullscan::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::Source;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Build and step through the convex hull of a 2D point set")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull and print it as JSON (or write it with --out)
    Hull {
        #[command(flatten)]
        source: Source,
        /// Output file; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Step through the scan, logging every event
    Scan {
        #[command(flatten)]
        source: Source,
        /// Auto-play with a fixed delay between steps
        #[arg(long)]
        animate: bool,
        /// Delay between automatic steps, in milliseconds
        #[arg(long, default_value_t = AnimationCfg::default().interval_ms)]
        interval_ms: u64,
        /// Stop after this many steps, even if the scan is not finished
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct PointRow {
    id: usize,
    x: f64,
    y: f64,
}

impl From<&Point> for PointRow {
    fn from(p: &Point) -> Self {
        Self {
            id: p.id(),
            x: p.x(),
            y: p.y(),
        }
    }
}

#[derive(Serialize)]
struct HullDoc {
    points: usize,
    hull: Vec<PointRow>,
}

impl HullDoc {
    fn new(points: &PointSet) -> Self {
        Self {
            points: points.len(),
            hull: compute_hull(points).iter().map(PointRow::from).collect(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { source, out } => hull(&source, out.as_deref()),
        Action::Scan {
            source,
            animate,
            interval_ms,
            max_steps,
        } => scan(&source, animate, AnimationCfg { interval_ms }, max_steps),
        Action::Report => report(),
    }
}

fn hull(source: &Source, out: Option<&Path>) -> Result<()> {
    let points = source.load()?;
    let doc = HullDoc::new(&points);
    tracing::info!(points = doc.points, vertices = doc.hull.len(), "hull");
    let body = serde_json::to_vec_pretty(&doc)?;

    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        source.describe(),
        serde_json::json!({ "points": doc.points, "vertices": doc.hull.len() }),
    );
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote hull");
    Ok(())
}

fn scan(source: &Source, animate: bool, cfg: AnimationCfg, max_steps: Option<usize>) -> Result<()> {
    let points = source.load()?;
    tracing::info!(animate, interval_ms = cfg.interval_ms, max_steps = ?max_steps, "scan");
    let mut scanner = HullScanner::new(points);
    let mut viewer = TraceViewer::new();
    let first = scanner.start().context("starting scan")?;
    present(&mut viewer, &first);

    let over_budget = |viewer: &TraceViewer| max_steps.is_some_and(|m| viewer.steps() > m);
    if animate {
        let mut animator = Animator::new(cfg);
        animator.play();
        while animator.is_running() {
            std::thread::sleep(animator.interval());
            let batch = animator.tick(&mut scanner).context("animation step")?;
            present(&mut viewer, &batch);
            if over_budget(&viewer) {
                animator.stop();
            }
        }
    } else {
        loop {
            let batch = scanner.step().context("scan step")?;
            present(&mut viewer, &batch);
            if batch.iter().any(StepEvent::is_terminal) || over_budget(&viewer) {
                break;
            }
        }
    }

    if !scanner.is_done() {
        tracing::warn!(steps = viewer.steps(), "scan stopped before completion");
        return Ok(());
    }
    let doc = HullDoc::new(scanner.points());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let payload = Payload::new("none", serde_json::json!({}));
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
