use edge_filter::filter::{convolve_parallel, DEFAULT_WORKERS, LAPLACIAN};
use edge_filter::image::io::{read_ppm, write_ppm};
use std::env;
use std::path::Path;
use std::time::Instant;

/// Fixed output path used when debug mode is enabled.
const DEBUG_OUTPUT_PATH: &str = "laplacian.ppm";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }
    let input = Path::new(&args[1]);
    let debug = args.len() >= 3;

    let image = read_ppm(input)?;

    // Time the filter pass only; decode and encode stay outside the clock.
    let t0 = Instant::now();
    let result = convolve_parallel(&image, &LAPLACIAN, DEFAULT_WORKERS);
    let elapsed = t0.elapsed().as_secs_f64();

    println!("Time consumed: {elapsed:.3} s");

    if debug {
        write_ppm(Path::new(DEBUG_OUTPUT_PATH), &result)?;
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge-filter <input.ppm> [debug]".to_string()
}
