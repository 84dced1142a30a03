//! images-pdf CLI
//!
//! A command-line front end over the images-pdf library: converts the given
//! image files into a single PDF and either writes it to disk or prints the
//! base64-encoded document to stdout.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use images_pdf::{CreatePdfRequest, PdfConverter};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Convert images into a single PDF document, one page per image
#[derive(Parser, Debug)]
#[command(name = "images-pdf")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image file(s) to convert, in page order
    #[arg(required = true)]
    images: Vec<String>,

    /// Output PDF filename
    #[arg(short, long, default_value = "images.pdf")]
    output_filename: PathBuf,

    /// Print the base64-encoded document to stdout instead of writing a file
    #[arg(long)]
    base64: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let request = CreatePdfRequest {
        image_paths: args.images,
        output_filename: args.output_filename.display().to_string(),
    };

    let encoded = match PdfConverter::new().create_pdf(&request) {
        Ok(encoded) => encoded,
        Err(e) => {
            eprintln!("Error ({}): {}", e.code(), e);
            std::process::exit(1);
        }
    };

    if args.base64 {
        println!("{encoded}");
        return Ok(());
    }

    let bytes = STANDARD.decode(encoded.as_bytes())?;
    let mut output = File::create(&args.output_filename)?;
    output.write_all(&bytes)?;

    println!(
        "Wrote {} page(s) to {} ({} bytes)",
        request.image_paths.len(),
        args.output_filename.display(),
        bytes.len()
    );

    Ok(())
}
