//! Thumbnail-Erzeugung für Bookmarks: Canvas-Pixel → skaliertes PNG.

use crate::engine::CanvasImage;
use anyhow::Context;
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Skaliert den Canvas-Inhalt auf die Ziel-Höhe (Seitenverhältnis bleibt
/// erhalten) und kodiert ihn als PNG.
pub fn encode_png_scaled(canvas: &CanvasImage, target_height: u32) -> anyhow::Result<Vec<u8>> {
    anyhow::ensure!(
        canvas.width > 0 && canvas.height > 0,
        "Canvas hat keine Flaeche ({}x{})",
        canvas.width,
        canvas.height
    );
    let source = RgbaImage::from_raw(canvas.width, canvas.height, canvas.rgba.clone())
        .context("Canvas-Puffergroesse passt nicht zu den Abmessungen")?;

    let target_height = target_height.min(canvas.height).max(1);
    let target_width =
        ((canvas.width as f64 * f64::from(target_height) / f64::from(canvas.height)).round()
            as u32)
            .max(1);

    let scaled = image::imageops::resize(&source, target_width, target_height, FilterType::Triangle);

    let mut buffer = Vec::new();
    image::DynamicImage::ImageRgba8(scaled)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .context("PNG-Encode des Thumbnails fehlgeschlagen")?;
    Ok(buffer)
}
