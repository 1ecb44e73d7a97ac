use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use latchhook::models::AppConfig;
use latchhook::services::DiagramService;

#[derive(Parser, Debug)]
#[command(name = "latchhook")]
#[command(about = "Turn an image into a latch hook rug diagram")]
struct Cli {
    /// Source image (PNG, JPEG, GIF or BMP) [default: mandelbrot.png]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output PNG file [default: test.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of palette colors [default: 5]
    #[arg(short, long)]
    num: Option<usize>,

    /// Cell edge length in output pixels [default: 4]
    #[arg(long)]
    cell_size: Option<usize>,

    /// Resize the source to this many cells across (needs --height)
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Resize the source to this many cells down (needs --width)
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Smooth with a 3x3 mean after resizing
    #[arg(long)]
    smooth: bool,

    /// Convert to grayscale first
    #[arg(long)]
    grayscale: bool,

    /// Pixel to palette mapping: "perceptual" or "direct"
    #[arg(long)]
    strategy: Option<String>,

    /// PNG layout: "auto", "rgba" or "indexed"
    #[arg(long)]
    format: Option<String>,

    /// Recompress the output with oxipng
    #[arg(long)]
    optimize: bool,

    /// Write the quantized image instead of the grid diagram
    #[arg(long)]
    quantize_only: bool,

    /// YAML config file (falls back to $LATCHHOOK_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line win over the config file
    fn apply_to(self, config: &mut AppConfig) {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(num) = self.num {
            config.num_colors = num;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_side = cell_size;
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            config.resize = Some(latchhook::models::ResizeConfig { width, height });
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.smooth |= self.smooth;
        config.grayscale |= self.grayscale;
        config.optimize |= self.optimize;
        config.quantize_only |= self.quantize_only;
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "latchhook=info,latchhook_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = AppConfig::resolve_path(cli.config.clone());
    let mut config = AppConfig::load(config_path.as_deref())?;
    cli.apply_to(&mut config);

    let service = DiagramService::new(config)?;
    let summary = service.run()?;

    for (color, count) in &summary.legend {
        tracing::info!(color = %color, cells = count, "Palette entry");
    }
    tracing::info!(
        output = %summary.output.display(),
        columns = summary.grid.0,
        rows = summary.grid.1,
        "Diagram complete"
    );
    Ok(())
}
