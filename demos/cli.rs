//! Command-line interface for palette_scan
//!
//! Basic tool for extracting a palette from an image file and printing
//! it as JSON.

use palette_scan::{extract_palette, DEFAULT_NUM_COLORS};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut image_path_arg = None;
    let mut num_colors = DEFAULT_NUM_COLORS;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--colors" | "-n" => {
                i += 1;
                let value = args.get(i).map(String::as_str).unwrap_or("");
                num_colors = match value.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Error: --colors expects a positive integer, got '{}'", value);
                        process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    match extract_palette(image_path, num_colors) {
        Ok(palette) => match serde_json::to_string_pretty(&palette) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("Failed to serialize result: {}", error);
                process::exit(1);
            }
        },
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    eprintln!("Usage: {} [OPTIONS] <image>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  -n, --colors <N>  Number of colors to extract (default: {})",
        DEFAULT_NUM_COLORS
    );
    eprintln!("  -h, --help        Show this help message");
}
