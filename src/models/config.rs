use serde::Deserialize;
use std::path::{Path, PathBuf};

use latchhook_core::{Color, DiagramStyle, LatchHook, QuantizeStrategy};

use crate::error::ConfigError;
use crate::rendering::OutputFormat;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "LATCHHOOK_CONFIG";

/// Run configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Source image
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where the PNG is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Palette size
    #[serde(default = "default_num_colors")]
    pub num_colors: usize,

    /// Edge length of one cell in output pixels
    #[serde(default = "default_cell_side")]
    pub cell_side: usize,

    /// Bucket-resize the source to this many cells first
    #[serde(default)]
    pub resize: Option<ResizeConfig>,

    #[serde(default)]
    pub smooth: bool,

    #[serde(default)]
    pub grayscale: bool,

    /// "perceptual" or "direct"
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// "auto", "rgba" or "indexed"
    #[serde(default = "default_format")]
    pub format: String,

    /// Recompress the PNG with oxipng
    #[serde(default)]
    pub optimize: bool,

    /// Write the quantized cells instead of the grid diagram
    #[serde(default)]
    pub quantize_only: bool,

    /// Diagram colors as hex strings
    #[serde(default)]
    pub style: StyleConfig,

    /// Spacing of the darker counting lines, in cells
    #[serde(default = "default_decade_every")]
    pub decade_every: usize,
}

/// Target size for the bucket resize
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ResizeConfig {
    pub width: usize,
    pub height: usize,
}

/// Diagram skeleton colors; unset entries keep the built-in shades
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    pub background: Option<String>,
    pub grid: Option<String>,
    pub decade: Option<String>,
}

fn default_input() -> PathBuf {
    PathBuf::from("mandelbrot.png")
}

fn default_output() -> PathBuf {
    PathBuf::from("test.png")
}

fn default_num_colors() -> usize {
    5
}

fn default_cell_side() -> usize {
    LatchHook::DEFAULT_CELL_SIDE
}

fn default_strategy() -> String {
    QuantizeStrategy::default().to_string()
}

fn default_format() -> String {
    OutputFormat::default().to_string()
}

fn default_decade_every() -> usize {
    DiagramStyle::default().decade_every
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // A document with no content (blank, comments only, or `null`)
        // means "all defaults"
        let has_content = content.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }

    /// Load configuration from `path`, or defaults when `path` is `None`.
    ///
    /// A file that was asked for but cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            num_colors = config.num_colors,
            cell_side = config.cell_side,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Config file to use: the explicit path if given, otherwise
    /// `$LATCHHOOK_CONFIG` if set.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }

    pub fn quantize_strategy(&self) -> Result<QuantizeStrategy, ConfigError> {
        self.strategy
            .parse::<QuantizeStrategy>()
            .map_err(|message| ConfigError::InvalidValue {
                key: "strategy",
                message,
            })
    }

    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.format
            .parse::<OutputFormat>()
            .map_err(|message| ConfigError::InvalidValue {
                key: "format",
                message,
            })
    }

    /// Diagram style with configured colors applied over the defaults
    pub fn diagram_style(&self) -> Result<DiagramStyle, ConfigError> {
        let mut style = DiagramStyle {
            decade_every: self.decade_every,
            ..DiagramStyle::default()
        };
        if let Some(hex) = &self.style.background {
            style.background = parse_color("style.background", hex)?;
        }
        if let Some(hex) = &self.style.grid {
            style.grid = parse_color("style.grid", hex)?;
        }
        if let Some(hex) = &self.style.decade {
            style.decade = parse_color("style.decade", hex)?;
        }
        Ok(style)
    }

    /// Build the pipeline this configuration describes
    pub fn pipeline(&self) -> Result<LatchHook, ConfigError> {
        let mut pipeline = LatchHook::new(self.num_colors)
            .cell_side(self.cell_side)
            .smooth(self.smooth)
            .grayscale(self.grayscale)
            .strategy(self.quantize_strategy()?)
            .style(self.diagram_style()?);
        if let Some(resize) = self.resize {
            pipeline = pipeline.resize(resize.width, resize.height);
        }
        Ok(pipeline)
    }
}

fn parse_color(key: &'static str, hex: &str) -> Result<Color, ConfigError> {
    hex.parse::<Color>()
        .map_err(|source| ConfigError::InvalidColor { key, source })
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            num_colors: default_num_colors(),
            cell_side: default_cell_side(),
            resize: None,
            smooth: false,
            grayscale: false,
            strategy: default_strategy(),
            format: default_format(),
            optimize: false,
            quantize_only: false,
            style: StyleConfig::default(),
            decade_every: default_decade_every(),
        }
    }
}
