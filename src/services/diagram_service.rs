use std::path::PathBuf;

use latchhook_core::{Color, LatchHook, Raster};

use crate::error::ServiceError;
use crate::models::AppConfig;
use crate::rendering::{self, OutputFormat};

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Size of the written image in pixels
    pub width: usize,
    pub height: usize,
    /// Cell grid as `(columns, rows)`
    pub grid: (usize, usize),
    /// Palette colors with their cell counts, in palette order
    pub legend: Vec<(Color, usize)>,
    /// Size of the written file
    pub bytes: usize,
}

/// Loads an image, runs the pipeline and writes the PNG a configuration
/// describes
pub struct DiagramService {
    config: AppConfig,
    pipeline: LatchHook,
    format: OutputFormat,
}

impl DiagramService {
    /// Check the configuration up front so bad settings fail before any
    /// file is touched.
    pub fn new(config: AppConfig) -> Result<Self, ServiceError> {
        let pipeline = config.pipeline()?;
        pipeline.validate()?;
        let format = config.output_format()?;
        Ok(Self {
            config,
            pipeline,
            format,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run on the configured input file and write the configured output
    pub fn run(&self) -> Result<RunSummary, ServiceError> {
        let raster = rendering::load(&self.config.input)?;
        self.run_raster(&raster)
    }

    /// Run on an already decoded image and write the configured output.
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn run_raster(&self, raster: &Raster) -> Result<RunSummary, ServiceError> {
        let (image, grid, legend) = if self.config.quantize_only {
            let indexed = self.pipeline.quantize(raster)?;
            let grid = (indexed.width(), indexed.height());
            (indexed.to_raster(), grid, indexed.color_counts())
        } else {
            let diagram = self.pipeline.run(raster)?;
            let grid = diagram.grid_size();
            let legend = diagram.legend().to_vec();
            (diagram.into_image(), grid, legend)
        };

        let mut bytes = rendering::encode(&image, self.format)?;
        if self.config.optimize {
            bytes = rendering::optimize(bytes);
        }
        rendering::save(&self.config.output, &bytes)?;

        tracing::info!(
            output = %self.config.output.display(),
            width = image.width(),
            height = image.height(),
            bytes = bytes.len(),
            "Wrote image"
        );

        Ok(RunSummary {
            output: self.config.output.clone(),
            width: image.width(),
            height: image.height(),
            grid,
            legend,
            bytes: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use latchhook_core::LatchHookError;

    #[test]
    fn test_new_rejects_zero_colors() {
        let config = AppConfig {
            num_colors: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            DiagramService::new(config),
            Err(ServiceError::Pipeline(LatchHookError::ZeroPaletteSize))
        ));
    }

    #[test]
    fn test_new_rejects_bad_format() {
        let config = AppConfig {
            format: "gif".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            DiagramService::new(config),
            Err(ServiceError::Config(ConfigError::InvalidValue { key: "format", .. }))
        ));
    }

    #[test]
    fn test_failed_pipeline_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never.png");
        let config = AppConfig {
            output: output.clone(),
            num_colors: 3,
            ..AppConfig::default()
        };
        let service = DiagramService::new(config).unwrap();
        let raster = Raster::filled(4, 4, Color::WHITE).unwrap();

        assert!(service.run_raster(&raster).is_err());
        assert!(!output.exists());
    }
}
