use std::io::Write;
use std::path::Path;

use image::imageops;
use image::RgbaImage;
use tracing::{info, instrument};

use crate::logo_pipeline::{
    cleanup::{remove_background, split_row, types::CleanupConfig},
    common::error::{CleanupError, Result},
    png::{PngWriter, StandardPngWriter},
    raster::{ImageCrateReader, LogoReader, analysis},
};

pub struct LogoCleanupPipeline<R: LogoReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: CleanupConfig,
}

impl LogoCleanupPipeline<ImageCrateReader, StandardPngWriter> {
    pub fn new(config: CleanupConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: LogoReader, W: PngWriter> LogoCleanupPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CleanupConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CleanupError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Runs the full cleanup on encoded image bytes and writes the resulting
    /// PNG to `output`. Returns the final image dimensions.
    ///
    /// Fails with [`CleanupError::EmptyAfterProcessing`] before anything is
    /// written when no pixel survives background removal.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<(u32, u32)> {
        info!("Starting logo cleanup");

        let mut image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_rgba(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        {
            let _span = tracing::info_span!("remove_background").entered();
            remove_background(&mut image, &self.config);
        }

        let cropped = {
            let _span = tracing::info_span!("primary_crop").entered();
            let bounds = analysis::alpha_bbox(&image)
                .ok_or(CleanupError::EmptyAfterProcessing)?;
            crop_to(&image, bounds.left, bounds.top, bounds.width(), bounds.height())
        };

        let split = {
            let _span = tracing::info_span!("detect_split").entered();
            let projection = analysis::horizontal_projection(&cropped);
            split_row(&projection, self.config.gap_threshold)
        };

        let final_image = {
            let _span = tracing::info_span!("final_crop").entered();
            let vertical = crop_to(&cropped, 0, 0, cropped.width(), split as u32);
            match analysis::alpha_bbox(&vertical) {
                Some(b) => crop_to(&vertical, b.left, b.top, b.width(), b.height()),
                None => vertical,
            }
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&final_image, output)?;
        }

        info!(
            width = final_image.width(),
            height = final_image.height(),
            "Cleanup complete"
        );
        Ok((final_image.width(), final_image.height()))
    }

    /// File-to-file variant of [`convert`](Self::convert). The PNG is
    /// encoded into memory first and the output file is only created after
    /// the whole pipeline has succeeded, so a failed run never leaves a
    /// partial file on disk.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<(u32, u32)> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Cleaning up logo file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                CleanupError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let size = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                CleanupError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(size)
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CleanupConfig) {
        self.config = config;
    }
}

fn crop_to(image: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    imageops::crop_imm(image, x, y, width, height).to_image()
}
