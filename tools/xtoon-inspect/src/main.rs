//! XToon mesh inspector.
//!
//! Loads a model through the full pipeline, prints what came out, and can
//! write the GPU buffers to disk for a renderer to pick up.
//!
//! # Usage
//!
//! - `xtoon-inspect bunny.ply` - print the load report
//! - `xtoon-inspect scan.obj --z-up --mode cylinder` - a Z-up source
//! - `xtoon-inspect bunny.ply --dump bunny.bin` - write the vertex buffer
//!   followed by the index buffer
//!
//! Logging follows `RUST_LOG` (default `info`); `-v` raises it to `debug`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xtoon_mesh::{AbstractionMode, LoadParams, LoadResult, VertexRecord, load_mesh_with_report};

/// Inspect a model as the XToon renderer would load it
#[derive(Parser, Debug)]
#[command(name = "xtoon-inspect")]
#[command(about = "Run the XToon mesh pipeline on a model file", long_about = None)]
#[command(version)]
struct Cli {
    /// Model file (.obj or .ply)
    #[arg(name = "FILE")]
    path: PathBuf,

    /// The source model is Z-up instead of Y-up
    #[arg(long)]
    z_up: bool,

    /// The source model faces the other horizontal axis instead of X
    #[arg(long)]
    z_front: bool,

    /// Abstracted normal mode: smooth, ellipse, cylinder or sphere
    #[arg(long, default_value = "smooth")]
    mode: AbstractionMode,

    /// Write the vertex buffer followed by the index buffer to this file
    #[arg(long, value_name = "PATH")]
    dump: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> LoadParams {
        LoadParams::new()
            .with_y_up(!self.z_up)
            .with_x_front(!self.z_front)
            .with_mode(self.mode)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn report(result: &LoadResult) {
    println!("{result}");
    println!(
        "  source:   {} vertices, {} triangles",
        result.source_vertices, result.source_triangles
    );
    if !result.bounds.is_empty() {
        let size = result.bounds.dimension();
        println!(
            "  extent:   {:.4} x {:.4} x {:.4} (scale {:.6})",
            size.x,
            size.y,
            size.z,
            result.scale_factor()
        );
    }
    let [position, normal, abstracted] = VertexRecord::ATTRIBUTE_OFFSETS;
    println!(
        "  layout:   stride {} bytes, position @{position}, normal @{normal}, \
         abstracted @{abstracted}",
        VertexRecord::STRIDE
    );
    println!(
        "  buffers:  {} vertex bytes, {} index bytes",
        result.mesh.vertex_bytes().len(),
        result.mesh.index_bytes().len()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_mesh_with_report(&cli.path, &cli.params())
        .with_context(|| format!("loading {}", cli.path.display()))?;

    if result.is_empty() {
        warn!(path = %cli.path.display(), "Nothing to draw");
    }
    report(&result);

    if let Some(dump) = &cli.dump {
        let mut bytes = Vec::with_capacity(
            result.mesh.vertex_bytes().len() + result.mesh.index_bytes().len(),
        );
        bytes.extend_from_slice(result.mesh.vertex_bytes());
        bytes.extend_from_slice(result.mesh.index_bytes());
        std::fs::write(dump, &bytes)
            .with_context(|| format!("writing {}", dump.display()))?;
        info!(path = %dump.display(), bytes = bytes.len(), "Wrote buffers");
    }

    Ok(())
}
