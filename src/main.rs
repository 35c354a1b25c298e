// src/main.rs

#![allow(non_snake_case)]

use std::env;
use std::error::Error;
use std::path::Path;

use Testbed_Telemetry_Render::constants::DEFAULT_INPUT_FILE;
use Testbed_Telemetry_Render::data_input::telemetry_parser::parse_telemetry_file;
use Testbed_Telemetry_Render::plot_functions::plot_telemetry_overview::plot_telemetry_overview;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    // The testbed writers drop their logs next to the binary under a fixed
    // name, so a zero-argument run falls back to that file.
    let args: Vec<String> = env::args().collect();
    let input_files: Vec<String> = if args.len() < 2 {
        println!("Usage: {} <telemetry_file> [<telemetry_file> ...]", args[0]);
        println!("No input files given, defaulting to '{DEFAULT_INPUT_FILE}'.");
        vec![DEFAULT_INPUT_FILE.to_string()]
    } else {
        args[1..].to_vec()
    };

    for input_file in &input_files {
        let input_path = Path::new(input_file);
        let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

        println!("\n--- Processing '{input_file}' ---");
        match parse_telemetry_file(input_path) {
            Ok(telemetry) => {
                let channels = telemetry.channels();
                println!(
                    "Parsed '{}' telemetry with {} channel(s).",
                    telemetry.label(),
                    channels.len()
                );
                for (channel_name, series) in &channels {
                    println!("  {channel_name}: {} samples", series.len());
                }

                println!("\n--- Generating Telemetry Summary Plot ---");
                if let Err(e) = plot_telemetry_overview(&telemetry, &root_name) {
                    eprintln!("Error: Failed to render '{input_file}': {e}");
                }
            }
            Err(e) => {
                eprintln!("Error: Failed to parse '{input_file}': {e}");
            }
        }
    }

    Ok(())
}
