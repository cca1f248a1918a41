use std::path::PathBuf;

use clap::Parser;
use log::info;

use whitted_tracer::camera::Camera;
use whitted_tracer::consts::{ CANVAS_WIDTH, CANVAS_HEIGHT, FIELD_OF_VIEW,
    REFLECTION_RECURSION_DEPTH, NUM_THREADS, OUT_FILE };
use whitted_tracer::parallel::parallel_render;
use whitted_tracer::scene;
use whitted_tracer::world::World;

/// Renders a sphere scene to an image file.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    /// Width of the output image, in pixels.
    #[clap(long, default_value_t = CANVAS_WIDTH)]
    width: usize,

    /// Height of the output image, in pixels.
    #[clap(long, default_value_t = CANVAS_HEIGHT)]
    height: usize,

    /// Field of view, in radians.
    #[clap(long, default_value_t = FIELD_OF_VIEW)]
    fov: f64,

    /// Maximum reflection recursion depth.
    #[clap(long, default_value_t = REFLECTION_RECURSION_DEPTH)]
    depth: u32,

    /// Number of render threads.
    #[clap(long, default_value_t = NUM_THREADS)]
    threads: usize,

    /// JSON scene description; renders a built-in scene when omitted.
    #[clap(short, long)]
    scene: Option<PathBuf>,

    /// Output image file; the extension selects the format.
    #[clap(short, long, default_value = OUT_FILE)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let world = match args.scene {
        Some(ref path) => scene::load(path)?,
        None => World::default(),
    };

    let camera = Camera::new(args.width, args.height, args.fov);

    info!("rendering {}x{} at reflection depth {}",
        args.width, args.height, args.depth);
    let canvas = if args.threads > 1 {
        parallel_render(world, camera, args.depth, args.threads)
    } else {
        camera.render(&world, args.depth)
    };

    canvas.save(&args.output)?;
    info!("saved render to {}", args.output.display());

    Ok(())
}
