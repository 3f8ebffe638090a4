use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullscan::geom2::rand::{draw_cloud, CloudShape, ReplayToken};
use hullscan::{compute_hull, Algorithm, Edge, GeomCfg, Hull, Point};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod input;
mod provenance;
mod trace;

use provenance::{SampleParams, Sidecar};
use trace::JsonLinesObserver;

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Convex hulls of 2D point sets: brute force, Quickhull, Graham scan")]
struct Cmd {
    /// Relative collinearity tolerance (default: 1e-9)
    #[arg(long, global = true)]
    eps: Option<f64>,

    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    run_id: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and write it as JSON
    Hull {
        #[arg(long, value_parser = parse_algorithm)]
        algo: Algorithm,
        /// Point file (.csv with x,y columns, otherwise "(x, y), ..." text); demo cloud if absent
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the construction events as JSON lines
    Trace {
        #[arg(long, value_parser = parse_algorithm)]
        algo: Algorithm,
        #[arg(long)]
        input: Option<PathBuf>,
        /// Defaults to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run all engines and check that they agree
    Compare {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Draw a reproducible random point file
    Sample {
        #[arg(long, value_enum, default_value_t = ShapeArg::Disk)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half-width, radius or length, depending on the shape
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Box,
    Disk,
    Circle,
    Collinear,
    Lattice,
}

impl ShapeArg {
    fn to_shape(self, scale: f64) -> CloudShape {
        match self {
            ShapeArg::Box => CloudShape::UniformBox { half_width: scale },
            ShapeArg::Disk => CloudShape::Disk { radius: scale },
            ShapeArg::Circle => CloudShape::Circle {
                radius: scale,
                jitter: 0.05,
            },
            ShapeArg::Collinear => CloudShape::Collinear { length: scale },
            ShapeArg::Lattice => CloudShape::Lattice {
                side: scale.round().max(1.0) as u32,
            },
        }
    }
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: hullscan::HullError| e.to_string())
}

fn main() -> Result<()> {
    // stdout carries `trace` output
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = match cmd.eps {
        Some(eps) if !(eps.is_finite() && eps >= 0.0) => bail!("--eps must be finite and >= 0"),
        Some(eps) => GeomCfg { eps_orient: eps },
        None => GeomCfg::default(),
    };
    match cmd.action {
        Action::Hull { algo, input, out } => hull(algo, input, out, cfg, cmd.run_id),
        Action::Trace { algo, input, out } => trace(algo, input, out, cfg),
        Action::Compare { input } => compare(input, cfg),
        Action::Sample {
            shape,
            n,
            seed,
            scale,
            out,
        } => sample(shape, n, seed, scale, out, cmd.run_id),
        Action::Report => report(cmd.run_id),
    }
}

fn load(input: Option<&Path>) -> Result<Vec<Point>> {
    let points = match input {
        Some(path) => input::read_points(path)?,
        None => demo::demo_cloud(),
    };
    tracing::info!(
        points = points.len(),
        source = %input.map_or("demo".into(), |p| p.display().to_string()),
        "loaded"
    );
    Ok(points)
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

#[derive(Serialize)]
struct HullReport<'a> {
    algorithm: Algorithm,
    input_points: usize,
    vertices: &'a [Point],
    edges: Vec<Edge>,
    area: f64,
    run_id: Option<&'a str>,
}

fn hull(
    algo: Algorithm,
    input: Option<PathBuf>,
    out: PathBuf,
    cfg: GeomCfg,
    run_id: Option<String>,
) -> Result<()> {
    tracing::info!(%algo, out = %out.display(), run_id = ?run_id, "hull");
    let points = load(input.as_deref())?;
    let hull = compute_hull(algo, &points, cfg, &mut ())
        .with_context(|| format!("{algo} failed"))?;
    tracing::info!(vertices = hull.len(), area = hull.area(), "hull_done");

    let report = HullReport {
        algorithm: algo,
        input_points: points.len(),
        vertices: hull.vertices(),
        edges: hull.edges(),
        area: hull.area(),
        run_id: run_id.as_deref(),
    };
    ensure_parent(&out)?;
    std::fs::write(&out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    Sidecar::new("hull", run_id)
        .hull(algo, cfg, input.as_deref())
        .write_beside(&out)?;
    Ok(())
}

fn trace(
    algo: Algorithm,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    cfg: GeomCfg,
) -> Result<()> {
    let points = load(input.as_deref())?;
    let sink: Box<dyn Write> = match &out {
        Some(path) => {
            ensure_parent(path)?;
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut obs = JsonLinesObserver::new(sink);
    let hull = compute_hull(algo, &points, cfg, &mut obs)?;
    let events = obs.finish().context("writing event stream")?;
    tracing::info!(%algo, events, vertices = hull.len(), "trace");
    Ok(())
}

fn compare(input: Option<PathBuf>, cfg: GeomCfg) -> Result<()> {
    let points = load(input.as_deref())?;
    let mut hulls: Vec<(Algorithm, Hull)> = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        let hull = compute_hull(algo, &points, cfg, &mut ())
            .with_context(|| format!("{algo} failed"))?;
        tracing::info!(%algo, vertices = hull.len(), area = hull.area(), "compare");
        hulls.push((algo, hull.canonical()));
    }
    let (ref_algo, reference) = &hulls[0];
    for (algo, hull) in &hulls[1..] {
        if hull != reference {
            bail!(
                "{algo} disagrees with {ref_algo}: {} vs {} vertices",
                hull.len(),
                reference.len()
            );
        }
    }
    println!("all engines agree on {} hull vertices", reference.len());
    Ok(())
}

fn sample(
    shape: ShapeArg,
    n: usize,
    seed: u64,
    scale: f64,
    out: PathBuf,
    run_id: Option<String>,
) -> Result<()> {
    let cloud = shape.to_shape(scale);
    let tok = ReplayToken::new(seed, 0);
    let points = draw_cloud(cloud, n, tok);
    tracing::info!(?cloud, n, seed, out = %out.display(), "sample");
    ensure_parent(&out)?;
    std::fs::write(&out, input::format_point_text(&points))
        .with_context(|| format!("writing {}", out.display()))?;
    Sidecar::new("sample", run_id)
        .sample(SampleParams {
            cloud,
            n,
            token: tok,
        })
        .write_beside(&out)?;
    Ok(())
}

fn report(run_id: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hullscan_version": hullscan::VERSION,
        "run_id": run_id,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
        "default_eps_orient": GeomCfg::default().eps_orient,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
