use image::RgbaImage;

/// Resize an image by picking the nearest source pixel
///
/// The destination pixel `(x, y)` is taken from the source pixel at
/// `(x * src_w / w, y * src_h / h)`, rounded down. There is no interpolation.
pub fn scale_nearest(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (src_w, src_h) = source.dimensions();
    let mut target = RgbaImage::new(width, height);
    if src_w == 0 || src_h == 0 {
        return target;
    }

    // the source column only depends on x, so compute it once per column
    let columns: Vec<u32> = (0..width)
        .map(|x| (u64::from(x) * u64::from(src_w) / u64::from(width)) as u32)
        .collect();

    for y in 0..height {
        let sy = (u64::from(y) * u64::from(src_h) / u64::from(height)) as u32;
        for (x, &sx) in columns.iter().enumerate() {
            target.put_pixel(x as u32, y, *source.get_pixel(sx, sy));
        }
    }
    target
}
