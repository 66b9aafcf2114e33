use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sphere_tracer::{
    config::{validate_camera, validate_settings, SceneFile},
    renderer::{render, RenderSettings},
};

/// Renders a sphere scene with shadows and mirror reflections to a PNG.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON scene description
    #[arg(short, long)]
    scene: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Reflection bounces per primary ray
    #[arg(short, long)]
    bounces: Option<u32>,

    /// Jittered samples per pixel
    #[arg(long)]
    samples: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // load scene
    info!(path = %args.scene.display(), "loading scene");
    let file = SceneFile::load(&args.scene).with_context(|| format!("loading {}", args.scene.display()))?;
    let scene = file.scene().context("building scene")?;
    let base = args.scene.parent().unwrap_or(Path::new("."));
    let env = file.environment(base).context("building environment")?;

    // command line overrides file settings
    let settings = RenderSettings {
        width: args.width.unwrap_or(file.render.width),
        height: args.height.unwrap_or(file.render.height),
        bounce_limit: args.bounces.unwrap_or(file.render.bounce_limit),
        samples: args.samples.unwrap_or(file.render.samples),
    };
    validate_settings(&settings)?;
    validate_camera(&file.camera)?;
    let camera = file.camera.build(settings.width as f32, settings.height as f32);

    info!(
        spheres = scene.spheres().len(),
        lights = scene.lights().len(),
        bounce_limit = settings.bounce_limit,
        "rendering"
    );
    let image = render(&scene, env.as_ref(), &camera, &settings);

    image
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(path = %args.output.display(), "image written");

    Ok(())
}
