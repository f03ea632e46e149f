//! Strips near-white background from a logo, crops to the visible content
//! and cuts off a trailing text block below the icon.
//!
//! Usage: `process_logo <input_path> <output_path>`. The output is always
//! PNG regardless of the output path's extension.

use std::process;

use logokit::logger;
use logokit::logo_pipeline::{CleanupConfig, CleanupError, LogoCleanupPipeline};

fn main() {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        println!("Usage: process_logo <input_path> <output_path>");
        process::exit(1);
    }

    let pipeline = LogoCleanupPipeline::new(CleanupConfig::default());

    match pipeline.convert_file(&args[0], &args[1]) {
        Ok((width, height)) => {
            println!("Processed to {} with size {}x{}", args[1], width, height);
        }
        // Historical contract: an input that is blank after background
        // removal reports the problem but still exits with status 0.
        Err(e @ CleanupError::EmptyAfterProcessing) => {
            println!("Error: {e}");
        }
        Err(e) => {
            println!("Error processing image: {e}");
            process::exit(1);
        }
    }
}
