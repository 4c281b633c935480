// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle mesh kernel CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use trimesh_kernel::io::{load_mesh, parse_coordinates};
use trimesh_kernel::{Kernel, KernelConfig};

#[derive(Parser)]
#[command(name = "trimesh")]
#[command(about = "Triangle mesh kernel - manifold checks, area, volume and containment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to trimesh.toml plus TRIMESH_* environment overrides)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print mesh statistics
    Analyze {
        /// JSON mesh document
        mesh: PathBuf,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the mesh is a closed manifold
    Manifold {
        /// JSON mesh document
        mesh: PathBuf,
    },

    /// Total surface area
    Area {
        /// JSON mesh document
        mesh: PathBuf,
    },

    /// Enclosed volume of a manifold mesh
    Volume {
        /// JSON mesh document
        mesh: PathBuf,
    },

    /// Check whether a point lies inside the mesh
    Inside {
        /// JSON mesh document
        mesh: PathBuf,

        /// Query point as x,y,z
        #[arg(short, long, allow_hyphen_values = true)]
        point: String,

        /// Point known to be outside the mesh, as x,y,z
        #[arg(short, long, allow_hyphen_values = true)]
        outside: Option<String>,
    },

    /// Check whether a point lies on the mesh surface
    OnMesh {
        /// JSON mesh document
        mesh: PathBuf,

        /// Query point as x,y,z
        #[arg(short, long, allow_hyphen_values = true)]
        point: String,
    },

    /// Euclidean distance between two points given as x,y,z
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KernelConfig::from_file(path)?,
        None => KernelConfig::load()?,
    };
    let kernel = Kernel::with_config(config)?;
    tracing::debug!(?config, "kernel configured");

    match cli.command {
        Commands::Analyze { mesh, json } => analyze_command(&kernel, &mesh, json),
        Commands::Manifold { mesh } => manifold_command(&kernel, &mesh),
        Commands::Area { mesh } => {
            let mesh = load_mesh(&mesh)?;
            println!("{}", kernel.mesh_area(&mesh));
            Ok(())
        }
        Commands::Volume { mesh } => {
            let mesh = load_mesh(&mesh)?;
            let volume = kernel.mesh_volume(&mesh).context("Cannot compute volume")?;
            println!("{}", volume);
            Ok(())
        }
        Commands::Inside {
            mesh,
            point,
            outside,
        } => inside_command(&kernel, &mesh, &point, outside.as_deref()),
        Commands::OnMesh { mesh, point } => {
            let mesh = load_mesh(&mesh)?;
            let point = parse_coordinates(&point)?;
            println!("{}", kernel.is_point_on_mesh(&point, &mesh));
            Ok(())
        }
        Commands::Distance { from, to } => {
            let from = parse_coordinates(&from)?;
            let to = parse_coordinates(&to)?;
            println!("{}", kernel.distance(&from, &to));
            Ok(())
        }
    }
}

fn analyze_command(kernel: &Kernel, path: &Path, json: bool) -> Result<()> {
    let mesh = load_mesh(path)?;
    let stats = kernel.analyze(&mesh);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.print();
    }

    Ok(())
}

fn manifold_command(kernel: &Kernel, path: &Path) -> Result<()> {
    let mesh = load_mesh(path)?;

    match kernel.check_manifold(&mesh) {
        Ok(()) => {
            println!("{} {}", "✓".green(), "mesh is a closed manifold".bold());
            Ok(())
        }
        Err(defect) => {
            println!("{} {}", "✗".red(), "mesh is not manifold".bold());
            println!("  {} {}", "Reason:".bright_black(), defect);
            std::process::exit(1);
        }
    }
}

fn inside_command(kernel: &Kernel, path: &Path, point: &str, outside: Option<&str>) -> Result<()> {
    let mesh = load_mesh(path)?;
    let point = parse_coordinates(point)?;

    let inside = match outside {
        Some(outside) => {
            let outside = parse_coordinates(outside)?;
            kernel.is_point_inside_mesh_from(&point, &mesh, &outside)
        }
        None => kernel.is_point_inside_mesh(&point, &mesh),
    }
    .context("Cannot classify point")?;

    println!("{}", inside);
    Ok(())
}
