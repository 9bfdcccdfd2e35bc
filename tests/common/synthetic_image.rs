use edge_filter::image::{ImageViewMut, Rgb, RgbImageU8};

/// Image where every pixel has identical channel values.
pub fn uniform_rgb(width: usize, height: usize, value: u8) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImageU8::from_pixels(width, height, vec![Rgb::splat(value); width * height])
}

/// Deterministic per-pixel pattern with distinct structure in each channel.
pub fn textured_rgb(width: usize, height: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        let row = img.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            *px = Rgb::new(
                ((x * 17 + y * 29) % 256) as u8,
                ((x * 3 + y * 151 + 7) % 256) as u8,
                ((x * 97 + y * 11 + 128) % 256) as u8,
            );
        }
    }
    img
}

/// Black image with a single bright pixel.
pub fn impulse_rgb(width: usize, height: usize, x: usize, y: usize, value: u8) -> RgbImageU8 {
    assert!(x < width && y < height, "impulse must lie inside the image");

    let mut img = RgbImageU8::new(width, height);
    img.set(x, y, Rgb::splat(value));
    img
}
