use edge_filter::image::io::write_ppm;
use edge_filter::image::{Rgb, RgbImageU8};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(usage());
    }
    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    let decoded = image::open(input)
        .map_err(|e| format!("Failed to open {}: {e}", input.display()))?
        .into_rgb8();
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    let raw = decoded.into_raw();
    let pixels: Vec<Rgb> = raw
        .chunks_exact(3)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();
    let bitmap = RgbImageU8::from_pixels(width, height, pixels);

    write_ppm(output, &bitmap)?;
    println!("Saved {width}x{height} image to {}", output.display());

    Ok(())
}

fn usage() -> String {
    "Usage: ppm_convert <input> <output.ppm>".to_string()
}
