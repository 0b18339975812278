use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use escape_time_explorer::core::data::pixel_rect::PixelRect;
use escape_time_explorer::core::fractals::fractal_kinds::FractalKinds;
use escape_time_explorer::{ExplorerConfig, ExportController, ImageFilePresenter, RenderRequest};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "escape-time-explorer", version)]
#[command(about = "Render an escape-time fractal to a PNG or PPM file")]
struct Cli {
    /// JSON settings file. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Output path. A `.ppm` extension writes binary PPM, anything else PNG.
    #[arg(long, default_value = "fractal.png")]
    output: PathBuf,
    #[arg(long, value_enum)]
    fractal: Option<FractalChoice>,
    #[arg(long)]
    max_iterations: Option<u32>,
    /// Exponent for the power-n Julia set.
    #[arg(long, allow_negative_numbers = true)]
    exponent: Option<f64>,
    /// Real part of the Julia constant.
    #[arg(long, allow_negative_numbers = true)]
    julia_cx: Option<f64>,
    /// Imaginary part of the Julia constant.
    #[arg(long, allow_negative_numbers = true)]
    julia_cy: Option<f64>,
    /// Contrast in [-255, 255].
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    brightness: Option<f64>,
    /// Plane extent multiplier; smaller values zoom in.
    #[arg(long)]
    zoom: Option<f64>,
    /// Horizontal view offset in window units.
    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<f64>,
    /// Vertical view offset in window units.
    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FractalChoice {
    Mandelbrot,
    Julia,
    JuliaN,
}

impl From<FractalChoice> for FractalKinds {
    fn from(choice: FractalChoice) -> Self {
        match choice {
            FractalChoice::Mandelbrot => Self::Mandelbrot,
            FractalChoice::Julia => Self::Julia,
            FractalChoice::JuliaN => Self::JuliaN,
        }
    }
}

impl Cli {
    fn apply_overrides(&self, config: &mut ExplorerConfig) {
        if let Some(fractal) = self.fractal {
            config.fractal = fractal.into();
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(exponent) = self.exponent {
            config.exponent = exponent;
        }
        if let Some(real) = self.julia_cx {
            config.julia_constant[0] = real;
        }
        if let Some(imag) = self.julia_cy {
            config.julia_constant[1] = imag;
        }
        if let Some(contrast) = self.contrast {
            config.contrast = contrast;
        }
        if let Some(brightness) = self.brightness {
            config.brightness = brightness;
        }
        if let Some(zoom) = self.zoom {
            config.zoom = zoom;
        }
        if let Some(offset_x) = self.offset_x {
            config.offset[0] = offset_x;
        }
        if let Some(offset_y) = self.offset_y {
            config.offset[1] = offset_y;
        }
    }
}

fn main() -> anyhow::Result<()> {
    escape_time_explorer::init_tracing();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ExplorerConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("invalid settings")?;

    // Exports always render every pixel.
    let transform = config.initial_transform().with_resolution_scale(1.0);
    let request = RenderRequest::for_surface(
        transform,
        PixelRect::new(cli.width, cli.height),
        config.fractal_params()?,
        config.colour_params()?,
    );

    let mut controller = ExportController::new(ImageFilePresenter::new());
    controller.generate(&request).context("render")?;

    create_parent_dir(&cli.output)?;
    controller
        .write(&cli.output)
        .with_context(|| format!("write image '{}'", cli.output.display()))?;

    info!(path = %cli.output.display(), "done");

    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("escape-time-explorer").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let cli = parse(&[
            "--fractal",
            "julia-n",
            "--exponent",
            "3",
            "--julia-cx",
            "-0.4",
            "--offset-x",
            "0.25",
        ]);
        let mut config = ExplorerConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.fractal, FractalKinds::JuliaN);
        assert_eq!(config.exponent, 3.0);
        assert_eq!(config.julia_constant, [-0.4, 0.27015]);
        assert_eq!(config.offset, [0.25, 0.5]);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_run_writes_requested_image() {
        let dir = std::env::temp_dir().join(format!("escape_time_cli_{}", std::process::id()));
        let output = dir.join("nested").join("frame.png");
        let cli = parse(&[
            "--width",
            "32",
            "--height",
            "24",
            "--output",
            output.to_str().unwrap(),
        ]);

        run(&cli).unwrap();

        let image = image::open(&output).unwrap();
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!((image.width(), image.height()), (32, 24));
    }

    #[test]
    fn test_invalid_settings_are_reported() {
        let cli = parse(&["--contrast", "400", "--output", "unused.png"]);

        let error = run(&cli).unwrap_err();

        assert!(format!("{error:#}").contains("contrast"));
    }
}
