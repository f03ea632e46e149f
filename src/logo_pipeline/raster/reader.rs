use image::RgbaImage;

use crate::logo_pipeline::common::error::Result;

pub trait LogoReader {
    fn read_rgba(&self, data: &[u8]) -> Result<RgbaImage>;
}
