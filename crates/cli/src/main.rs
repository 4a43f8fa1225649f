use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inpoly::contain::{crossing_number_indices, winding_number_indices};
use inpoly::measure::polyline_length;
use inpoly::svg::{render_with_points, SvgStyle};
use inpoly::{ClosedRing, CyclicRing, Vec2};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-polygon runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
enum Algo {
    /// Ray casting over an explicitly closed ring (extent prefilter first)
    Crossing,
    /// Winding number over an implicitly closed ring
    Winding,
}

#[derive(Subcommand)]
enum Action {
    /// Classify points against a ring and write the inside subset as JSON
    Run {
        #[arg(long, value_enum)]
        algo: Algo,
        /// CSV with x,y columns
        #[arg(long)]
        points: PathBuf,
        /// CSV with x,y columns, one row per ring vertex (closing row optional)
        #[arg(long)]
        ring: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Treat points on an edge as outside (crossing only)
        #[arg(long, default_value_t = false)]
        exclude_boundary: bool,
        /// Also render the ring and the inside points as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Print total and per-segment length of a polyline
    Length {
        #[arg(long)]
        input: PathBuf,
        /// Add the segment back to the first vertex
        #[arg(long, default_value_t = false)]
        close: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            points,
            ring,
            out,
            exclude_boundary,
            svg,
        } => run(algo, &points, &ring, &out, !exclude_boundary, svg.as_deref()),
        Action::Length { input, close } => length(&input, close),
        Action::Report => report(),
    }
}

#[derive(Debug, Serialize)]
struct RunParams {
    algo: Algo,
    include_boundary: bool,
}

#[derive(Debug, Serialize)]
struct RunOutput {
    algo: Algo,
    include_boundary: bool,
    ring_orientation: Option<String>,
    total: usize,
    inside: Vec<usize>,
    points: Vec<[f64; 2]>,
}

/// Classify `points` against the ring built from `ring` in the shape `algo` needs.
fn classify(
    algo: Algo,
    points: &[Vec2<f64>],
    ring: Vec<Vec2<f64>>,
    include_boundary: bool,
) -> Result<RunOutput> {
    let (inside, orientation) = match algo {
        Algo::Crossing => {
            let closed = ClosedRing::close(ring).context("building closed ring")?;
            let inside = crossing_number_indices(points, &closed, include_boundary);
            (inside, closed.orientation())
        }
        Algo::Winding => {
            let cyc = CyclicRing::new(ring).context("building cyclic ring")?;
            (winding_number_indices(points, &cyc), cyc.orientation())
        }
    };
    Ok(RunOutput {
        algo,
        include_boundary: algo == Algo::Crossing && include_boundary,
        ring_orientation: orientation.map(|o| format!("{o:?}")),
        total: points.len(),
        points: inside.iter().map(|&i| [points[i].x, points[i].y]).collect(),
        inside,
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run(
    algo: Algo,
    points_path: &Path,
    ring_path: &Path,
    out: &Path,
    include_boundary: bool,
    svg: Option<&Path>,
) -> Result<()> {
    let points = input::read_xy_csv(points_path)?;
    let ring = input::read_xy_csv(ring_path)?;
    tracing::info!(
        algo = ?algo,
        points = points.len(),
        ring_vertices = ring.len(),
        include_boundary,
        "run"
    );
    let output = classify(algo, &points, ring.clone(), include_boundary)?;
    tracing::info!(inside = output.inside.len(), total = output.total, "classified");

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&output)?)
        .with_context(|| format!("writing {}", out.display()))?;

    if let Some(svg_path) = svg {
        let inside: Vec<Vec2<f64>> = output.inside.iter().map(|&i| points[i]).collect();
        match render_with_points(&ring, &inside, &SvgStyle::polygon()) {
            Some(doc) => {
                ensure_parent(svg_path)?;
                std::fs::write(svg_path, doc)
                    .with_context(|| format!("writing {}", svg_path.display()))?;
            }
            None => tracing::warn!(svg = %svg_path.display(), "ring extent is degenerate, no svg written"),
        }
    }

    let params = RunParams {
        algo,
        include_boundary: output.include_boundary,
    };
    let prov = provenance::write_sidecar(out, &params, &[points_path, ring_path])?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn length(input: &Path, close: bool) -> Result<()> {
    let pts = input::read_xy_csv(input)?;
    tracing::info!(vertices = pts.len(), close, "length");
    let Some(len) = polyline_length(&pts, close) else {
        anyhow::bail!("{} needs at least two points", input.display());
    };
    let obj = serde_json::json!({
        "total": len.total,
        "segments": len.segments,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "inpoly_version": inpoly::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
