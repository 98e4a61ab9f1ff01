use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use hullscan::prelude::{scatter_points, PointSet, ReplayToken, ScatterCfg};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Where the point set comes from. Exactly one source must be given.
#[derive(Args, Clone, Debug, Default)]
pub struct Source {
    /// CSV file with `x` and `y` columns
    #[arg(long, conflicts_with_all = ["points", "random"])]
    pub csv: Option<PathBuf>,
    /// Inline points, e.g. "0,0 4,0 4,4"
    #[arg(long, conflicts_with = "random", allow_hyphen_values = true)]
    pub points: Option<String>,
    /// Draw this many random points
    #[arg(long)]
    pub random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Round --random coordinates to multiples of this spacing
    #[arg(long)]
    pub snap: Option<f64>,
}

impl Source {
    pub fn load(&self) -> Result<PointSet> {
        let ps = match (&self.csv, &self.points, self.random) {
            (Some(path), _, _) => read_csv(path)?,
            (_, Some(inline), _) => parse_inline(inline)?,
            (_, _, Some(count)) => {
                let cfg = ScatterCfg {
                    count,
                    snap: self.snap,
                    ..ScatterCfg::default()
                };
                scatter_points(cfg, ReplayToken { seed: self.seed, index: 0 })
            }
            _ => bail!("no point source: pass --csv, --points or --random"),
        };
        tracing::info!(points = ps.len(), source = %self.describe(), "loaded points");
        Ok(ps)
    }

    /// Short label for logs and provenance.
    pub fn describe(&self) -> String {
        match (&self.csv, &self.points, self.random) {
            (Some(path), _, _) => format!("csv:{}", path.display()),
            (_, Some(_), _) => "inline".to_string(),
            (_, _, Some(n)) => format!("random:{n}@{}", self.seed),
            _ => "none".to_string(),
        }
    }
}

/// Parse whitespace-separated `x,y` pairs.
pub fn parse_inline(s: &str) -> Result<PointSet> {
    let mut ps = PointSet::new();
    for (k, pair) in s.split_whitespace().enumerate() {
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| anyhow!("point {k}: expected `x,y`, got `{pair}`"))?;
        let x: f64 = x
            .trim()
            .parse()
            .with_context(|| format!("point {k}: bad x `{x}`"))?;
        let y: f64 = y
            .trim()
            .parse()
            .with_context(|| format!("point {k}: bad y `{y}`"))?;
        ps.add_new_point(x, y);
    }
    Ok(ps)
}

/// Read `x`/`y` columns from a CSV file with a header row.
pub fn read_csv(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut ps = PointSet::new();
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => {
                ps.add_new_point(x, y);
            }
            _ => bail!("row {row}: missing coordinate"),
        }
    }
    Ok(ps)
}
