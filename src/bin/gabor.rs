use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Generate Gabor-patch stimulus images.
///
/// Writes one PNG per orientation, named
/// `gabor_o<orientation>_env<envelope>_freq<frequency>.png`.
#[derive(Parser, Debug)]
#[command(name = "gabor", version)]
struct Cli {
    /// JSON parameter file; flags given on the command line override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grating frequency (cycles per pixel). Required unless set by --config.
    #[arg(long, short = 'f', allow_negative_numbers = true)]
    frequency: Option<f64>,

    /// Orientation(s) in degrees. With exactly two values and
    /// --num_orientations > 2, the values are interpolation endpoints.
    /// Required unless set by --config.
    #[arg(
        long,
        short = 'o',
        num_args = 1..,
        value_name = "DEG",
        allow_negative_numbers = true
    )]
    orientation: Option<Vec<f64>>,

    /// Envelope: gaussian, linear, sine or circle [default: sine].
    #[arg(long, short = 'e')]
    envelope: Option<String>,

    /// Image side length in pixels [default: 500].
    #[arg(long, short = 's')]
    size: Option<u32>,

    /// Grating phase (cycles) [default: 0].
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    phase: Option<f64>,

    /// Background color, named or hex [default: gray].
    #[arg(
        long = "background_color",
        visible_aliases = ["background-color", "bg"],
        value_parser = gabor::parse_color
    )]
    background_color: Option<gabor::Rgb>,

    /// First grating color [default: black].
    #[arg(long, visible_alias = "c1", value_parser = gabor::parse_color)]
    color1: Option<gabor::Rgb>,

    /// Second grating color [default: white].
    #[arg(long, visible_alias = "c2", value_parser = gabor::parse_color)]
    color2: Option<gabor::Rgb>,

    /// Gaussian envelope scale; the exponent is multiplied by std / size.
    /// Must be finite and >= 0 (negative values are rejected) [default: 20].
    #[arg(long, allow_negative_numbers = true)]
    std: Option<f64>,

    /// Number of orientations to generate between two given orientations, inclusive.
    #[arg(
        long = "num_orientations",
        visible_alias = "num-orientations",
        allow_negative_numbers = true
    )]
    num_orientations: Option<i64>,

    /// Directory to write images into (created if missing).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(gabor::PatchConfig, PathBuf)> {
        let mut cfg = match &self.config {
            Some(path) => gabor::PatchConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => gabor::PatchConfig::default(),
        };

        if let Some(v) = self.frequency {
            cfg.frequency = Some(v);
        }
        if let Some(v) = self.orientation {
            cfg.orientation = v;
        }
        if let Some(v) = self.envelope {
            cfg.envelope = v;
        }
        if let Some(v) = self.size {
            cfg.size = v;
        }
        if let Some(v) = self.phase {
            cfg.phase = v;
        }
        if let Some(v) = self.background_color {
            cfg.background_color = v;
        }
        if let Some(v) = self.color1 {
            cfg.color1 = v;
        }
        if let Some(v) = self.color2 {
            cfg.color2 = v;
        }
        if let Some(v) = self.std {
            cfg.std = v;
        }
        if let Some(v) = self.num_orientations {
            cfg.num_orientations = v;
        }
        Ok((cfg, self.out_dir))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (cfg, out_dir) = Cli::parse().into_config()?;
    let req = cfg.resolve().context("invalid patch parameters")?;
    gabor::generate_batch(&req, &out_dir)
        .with_context(|| format!("generate patches into '{}'", out_dir.display()))?;
    Ok(())
}
