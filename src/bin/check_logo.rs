//! Reports how much of an image's border is fully transparent.
//!
//! Usage: `check_logo <image_path>`. Prints the image dimensions followed
//! by the counts of empty rows from the top and bottom and empty columns
//! from the left. Load failures are reported as a message without a
//! failure exit status.

use std::path::Path;
use std::process;

use logokit::logger;
use logokit::logo_pipeline::{CleanupError, ImageCrateReader, LogoReader, Result, alpha_margins};

fn main() {
    logger::init();

    let Some(path) = std::env::args().nth(1) else {
        println!("Usage: check_logo <image_path>");
        process::exit(1);
    };

    if let Err(e) = inspect(Path::new(&path)) {
        println!("Error: {e}");
    }
}

fn inspect(path: &Path) -> Result<()> {
    let data = std::fs::read(path)
        .map_err(|e| CleanupError::InputReadError(format!("{}: {}", path.display(), e)))?;

    let image = ImageCrateReader.read_rgba(&data)?;
    println!("Image dimensions: {}x{}", image.width(), image.height());

    let margins = alpha_margins(&image);
    println!("Top empty rows: {}", margins.top_empty);
    println!("Bottom empty rows: {}", margins.bottom_empty);
    println!("Left empty columns: {}", margins.left_empty);

    Ok(())
}
