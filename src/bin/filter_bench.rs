use edge_filter::config::bench::load_config;
use edge_filter::diagnostics::{FilterReport, FilterRun};
use edge_filter::filter::{convolve, convolve_parallel, LAPLACIAN};
use edge_filter::image::io::{read_ppm, write_json_file, write_ppm};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = read_ppm(&config.input)?;
    let mut report = FilterReport::new(image.w, image.h);

    let t0 = Instant::now();
    let reference = convolve(&image, &LAPLACIAN);
    let serial_ms = t0.elapsed().as_secs_f64() * 1000.0;
    println!("serial: {serial_ms:.3} ms");
    report.push(FilterRun::new("serial", 1, serial_ms));

    for &workers in &config.workers {
        let workers = workers.max(1);
        let t0 = Instant::now();
        let result = convolve_parallel(&image, &LAPLACIAN, workers);
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let mut run = FilterRun::new(format!("parallel x{workers}"), workers, elapsed_ms);
        run.matches_reference = result.data == reference.data;
        println!(
            "parallel x{workers}: {elapsed_ms:.3} ms ({})",
            if run.matches_reference {
                "output matches"
            } else {
                "OUTPUT MISMATCH"
            }
        );
        report.push(run);
    }

    if report.runs.iter().any(|r| !r.matches_reference) {
        return Err("parallel output does not match the serial reference".to_string());
    }

    if let Some(report_path) = &config.report {
        write_json_file(report_path, &report)?;
        println!("Saved timing report to {}", report_path.display());
    }
    if let Some(output_path) = &config.output {
        write_ppm(output_path, &reference)?;
        println!("Saved filtered image to {}", output_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: filter_bench <config.json>".to_string()
}
