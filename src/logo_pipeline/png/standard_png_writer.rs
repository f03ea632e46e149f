use std::io::{Cursor, Write};

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::logo_pipeline::common::error::{CleanupError, Result};
use crate::logo_pipeline::png::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, image: &RgbaImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let mut buffer = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| CleanupError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
