use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wall_tint::{io, shades, Color, Session, WallTintConfig};

#[derive(Parser)]
#[command(name = "walltint")]
#[command(version, about = "Repaint a wall in a photo with a shade of a paint color", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the wall under a point and paint it
    Paint {
        /// Input photo
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,

        /// Point on the wall in pixel coordinates (x,y)
        #[arg(long, value_name = "X,Y", value_parser = parse_point)]
        seed: (u32, u32),

        /// Paint base color as hex
        #[arg(long, value_name = "HEX", conflicts_with = "palette_index")]
        color: Option<String>,

        /// Paint base color from the palette (0-based)
        #[arg(long, value_name = "N")]
        palette_index: Option<usize>,

        /// Shade to apply, 0 = base color, last = white
        #[arg(long, value_name = "N", default_value = "0")]
        shade: usize,

        /// Color similarity threshold (overrides config)
        #[arg(long, value_name = "T")]
        threshold: Option<u32>,

        /// JSON config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Also write a copy with the detected region outlined
        #[arg(long, value_name = "FILE")]
        highlight: Option<PathBuf>,
    },

    /// Print the shades of a color
    Shades {
        /// Base color as hex
        #[arg(value_name = "HEX")]
        color: String,

        /// Number of shades
        #[arg(long, value_name = "N", default_value = "10")]
        steps: usize,
    },

    /// Print the palette with preview gradients
    Palette {
        /// JSON config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn parse_point(s: &str) -> std::result::Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("invalid x '{}': {}", x, e))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y '{}': {}", y, e))?;
    Ok((x, y))
}

fn load_config(path: Option<&PathBuf>) -> Result<WallTintConfig> {
    match path {
        Some(path) => WallTintConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(WallTintConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Paint {
            input,
            out,
            seed,
            color,
            palette_index,
            shade,
            threshold,
            config,
            highlight,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(threshold) = threshold {
                config.region.threshold = threshold;
            }

            let photo = io::load_image(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            info!("Loaded {} ({}x{})", input.display(), photo.width(), photo.height());

            let mut session = Session::new(photo, config)?;
            session
                .select_wall(seed.0, seed.1)
                .with_context(|| format!("Cannot select wall at {},{}", seed.0, seed.1))?;

            match (color, palette_index) {
                (Some(hex), _) => {
                    session.choose_base_color(Color::from_hex(&hex)?)?;
                }
                (None, Some(index)) => {
                    session.choose_palette_color(index)?;
                }
                (None, None) => bail!("Pass --color or --palette-index"),
            }

            if let Some(path) = &highlight {
                session
                    .preview()
                    .save(path)
                    .with_context(|| format!("Failed to write highlight {}", path.display()))?;
                info!("Highlight saved to {}", path.display());
            }

            let painted = session.apply_shade(shade)?;
            io::save_image(session.buffer(), &out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!("Painted with {}, saved to {}", painted, out.display());
        }

        Commands::Shades { color, steps } => {
            let base = Color::from_hex(&color)?;
            for (i, shade) in shades::generate(base, steps)?.iter().enumerate() {
                println!("{:>2}  {}", i, shade);
            }
        }

        Commands::Palette { config } => {
            let config = load_config(config.as_ref())?;
            let palette = config.paint_palette()?;
            for (i, swatch) in palette.swatches(config.shades.steps)?.iter().enumerate() {
                println!("{:>2}  {:<8} {}", i, swatch.name, swatch.shades.to_hex_strings().join(" "));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("12,34").unwrap(), (12, 34));
        assert_eq!(parse_point(" 1 , 2 ").unwrap(), (1, 2));
        assert!(parse_point("12").is_err());
        assert!(parse_point("-1,2").is_err());
    }

    #[test]
    fn test_cli_parses_paint() {
        let cli = Cli::try_parse_from([
            "walltint", "paint", "room.jpg", "-o", "out.png", "--seed", "5,6", "--palette-index", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Paint { seed, palette_index, shade, .. } => {
                assert_eq!(seed, (5, 6));
                assert_eq!(palette_index, Some(2));
                assert_eq!(shade, 0);
            }
            _ => panic!("expected paint"),
        }
    }
}
