//! Render gradients between pairs of colors, interpolated in every supported
//! color space, to PNG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colorlerp::{models::Srgb, Components, Interpolation, Space};
use image::{Rgb, RgbImage};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "colorlerp-gradient")]
#[command(about = "Render color gradients interpolated in RGB, HSV, XYZ and CIELAB")]
struct Cli {
    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Width of each gradient in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Height of each gradient in pixels
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Seed for the random color pair
    #[arg(long)]
    seed: Option<u64>,
}

const PAIRS: [(&str, [u8; 3], [u8; 3]); 3] = [
    ("red_blue", [255, 0, 0], [0, 0, 255]),
    ("yellow_magenta", [255, 255, 0], [255, 0, 255]),
    ("orange_green", [255, 200, 0], [0, 255, 0]),
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorlerp=info,colorlerp_gradient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    anyhow::ensure!(
        cli.width > 0 && cli.height > 0,
        "gradient size must be non-zero, got {}x{}",
        cli.width,
        cli.height
    );

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("could not create {}", cli.out_dir.display()))?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let random_pair = (
        Components(rng.gen(), rng.gen(), rng.gen()),
        Components(rng.gen(), rng.gen(), rng.gen()),
    );
    tracing::info!(start = %random_pair.0, end = %random_pair.1, "random pair");

    let pairs = PAIRS
        .iter()
        .map(|(name, start, end)| {
            (
                *name,
                Srgb::from_rgb8(*start).to_components(),
                Srgb::from_rgb8(*end).to_components(),
            )
        })
        .chain(std::iter::once(("rnd_rnd", random_pair.0, random_pair.1)));

    for (name, start, end) in pairs {
        for space in Space::ALL {
            let path = cli.out_dir.join(format!("{name}_{space}.png"));
            let interpolation = Interpolation::in_space(start, end, space);
            draw_gradient(&path, &interpolation, cli.width, cli.height)?;
            tracing::info!(path = %path.display(), "wrote gradient");
        }
    }

    Ok(())
}

fn draw_gradient(
    path: &Path,
    interpolation: &Interpolation,
    width: u32,
    height: u32,
) -> Result<()> {
    let mut img = RgbImage::new(width, height);

    for (x, color) in interpolation.sample(width as usize).enumerate() {
        let color = color.with_context(|| format!("column {x} of {}", path.display()))?;
        let pixel = Rgb(Srgb::from(color).to_rgb8());
        for y in 0..height {
            img.put_pixel(x as u32, y, pixel);
        }
    }

    img.save(path)
        .with_context(|| format!("could not write image to {}", path.display()))
}
