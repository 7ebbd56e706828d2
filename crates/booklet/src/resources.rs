//! # Loading fonts and background pictures

use std::path::Path;

use image::RgbaImage;
use log::{info, warn};

use crate::{
    raster::{BitmapFace, Face, TtfFace},
    ResourceError,
};

/// Load a TrueType/OpenType font at `size` points (72 DPI)
pub fn load_ttf(path: &Path, size: f32) -> Result<TtfFace, ResourceError> {
    let data = std::fs::read(path).map_err(|source| ResourceError::FontRead {
        path: path.to_owned(),
        source,
    })?;
    TtfFace::from_bytes(&data, size).map_err(|reason| ResourceError::FontParse {
        path: path.to_owned(),
        reason,
    })
}

/// Load the configured font, or fall back to the built-in face
///
/// A missing or broken font is not fatal, it only produces a warning.
pub fn load_face(path: Option<&Path>, size: f32) -> Box<dyn Face> {
    let Some(path) = path else {
        info!("No font configured, using the built-in face");
        return Box::new(BitmapFace);
    };
    match load_ttf(path, size) {
        Ok(face) => {
            info!(
                "Loaded font {} ({}, size {:.1})",
                path.display(),
                face.name().unwrap_or("unnamed"),
                size
            );
            Box::new(face)
        }
        Err(e) => {
            warn!("{}, using the built-in face instead", e);
            Box::new(BitmapFace)
        }
    }
}

/// Open and decode a background picture (PNG or JPEG)
pub fn load_background(path: &Path) -> Result<RgbaImage, ResourceError> {
    let image = image::open(path).map_err(|source| ResourceError::Background {
        path: path.to_owned(),
        source,
    })?;
    info!(
        "Loaded background {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}
