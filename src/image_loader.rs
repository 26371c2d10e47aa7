use crate::error::Result;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGBA8 pixels ready to be handed to the UI thread.
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes an image file. Blocking; call from a worker thread.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();

    Ok(DecodedImage {
        width: image.width(),
        height: image.height(),
        data: image.into_raw(),
    })
}

/// Wraps decoded pixels in a Slint image. Must run on the UI thread.
pub fn create_slint_image(decoded: &DecodedImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        &decoded.data,
        decoded.width,
        decoded.height,
    );
    Image::from_rgba8(buffer)
}
