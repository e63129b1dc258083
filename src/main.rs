//! Terragen CLI - fractal terrain generator.
//!
//! Generate diamond-square terrain height fields and report the triangle
//! mesh statistics a rendering layer would consume.

use clap::{Parser, Subcommand};
use std::time::Instant;

use terragen::mesh::{build_terrain_mesh, SurfaceSampler};
use terragen::noise::OffsetConfig;
use terragen::terrain::generate_terrain;

/// Fractal terrain generator.
#[derive(Parser)]
#[command(name = "terragen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain grid and report its mesh statistics.
    Generate {
        /// Grid width in vertices.
        #[arg(long, default_value = "80")]
        width: usize,

        /// Grid height in vertices.
        #[arg(long, default_value = "80")]
        height: usize,

        /// Smoothness exponent; higher values produce smoother terrain.
        #[arg(short, long, default_value = "0.05")]
        smoothness: f32,

        /// Random seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,

        /// World-space width of the triangulated mesh.
        #[arg(long, default_value = "80.0")]
        world_width: f32,

        /// World-space height of the triangulated mesh.
        #[arg(long, default_value = "80.0")]
        world_height: f32,

        /// Print this many positions sampled uniformly on the surface.
        #[arg(long, default_value = "0")]
        scatter: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            smoothness,
            seed,
            world_width,
            world_height,
            scatter,
        } => {
            run_generate(width, height, smoothness, seed, world_width, world_height, scatter);
        }
    }
}

fn run_generate(
    width: usize,
    height: usize,
    smoothness: f32,
    seed: Option<u64>,
    world_width: f32,
    world_height: f32,
    scatter: usize,
) {
    if width < 1 || height < 1 {
        eprintln!("Error: Width and height must be at least 1");
        std::process::exit(1);
    }

    if smoothness <= 0.0 {
        eprintln!("Error: Smoothness must be positive");
        std::process::exit(1);
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before unix epoch")
            .as_nanos() as u64
    });

    println!("Terragen - Fractal Terrain Generator");
    println!("====================================");
    println!("Grid: {}x{} vertices", width, height);
    println!("Smoothness: {}", smoothness);
    println!("Seed: {}", seed);

    let start = Instant::now();

    let config = OffsetConfig { smoothness, seed };
    let grid = generate_terrain(width, height, &config).unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);

    let (min_h, max_h) = grid.height_range();
    println!("Height range: [{:.1}, {:.1}]", min_h, max_h);

    println!("\nTriangulating...");
    let mesh_start = Instant::now();
    let mesh = build_terrain_mesh(&grid, world_width, world_height).unwrap_or_else(|e| {
        eprintln!("Error building mesh: {}", e);
        std::process::exit(1);
    });
    println!("Triangulation completed in {:.2?}", mesh_start.elapsed());
    println!("Vertices: {}", mesh.vertex_count());
    println!("Triangles: {}", mesh.triangle_count());

    if scatter > 0 {
        println!("\nScattering {} surface positions...", scatter);
        let mut sampler = SurfaceSampler::new(&mesh, seed).unwrap_or_else(|e| {
            eprintln!("Error building sampler: {}", e);
            std::process::exit(1);
        });
        for _ in 0..scatter {
            let p = sampler.sample();
            println!("  ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
        }
    }
}
