//! Image resizer and data-URL helpers. Scaling always fits the source
//! inside the requested bounding box and never upscales; output is
//! re-encoded to the requested container and handed back as base64 so the
//! browser host can build a download link directly.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, ImageFormat, ImageReader};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::to_js_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PictureFormat {
    Png,
    Jpeg,
    Webp,
}

impl PictureFormat {
    fn parse(input: &str) -> Result<Self, String> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "png" | "image/png" | "" => Ok(Self::Png),
            "jpg" | "jpeg" | "image/jpeg" => Ok(Self::Jpeg),
            "webp" | "image/webp" => Ok(Self::Webp),
            other => Err(format!("unsupported image format: {other}")),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
        }
    }

    fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Webp => ImageFormat::WebP,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResizeResult {
    pub format: String,
    pub mime: String,
    pub width: u32,
    pub height: u32,
    pub data_base64: String,
    pub data_url: String,
    pub download_name: String,
}

fn decode_image(bytes: &[u8]) -> Result<DynamicImage, String> {
    // Honor magic bytes when present so mismatched extensions still work.
    if let Ok(reader) = ImageReader::new(Cursor::new(bytes)).with_guessed_format() {
        if let Ok(image) = reader.decode() {
            return Ok(image);
        }
    }
    image::load_from_memory(bytes).map_err(|err| format!("failed to decode image: {err}"))
}

fn encode_image(image: &DynamicImage, target: PictureFormat) -> Result<Vec<u8>, String> {
    let mut buffer = Vec::new();
    match target {
        PictureFormat::Jpeg => {
            // Matches the browser canvas default of quality 0.92.
            let rgb = image.to_rgb8();
            let (width, height) = rgb.dimensions();
            let mut enc =
                image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut buffer), 92);
            enc.encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                .map_err(|err| format!("failed to encode JPG: {err}"))?;
        }
        PictureFormat::Png => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            let encoder = image::codecs::png::PngEncoder::new(Cursor::new(&mut buffer));
            encoder
                .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|err| format!("failed to encode PNG: {err}"))?;
        }
        PictureFormat::Webp => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            let enc = image::codecs::webp::WebPEncoder::new_lossless(Cursor::new(&mut buffer));
            enc.encode(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|err| format!("failed to encode WebP: {err}"))?;
        }
    }
    Ok(buffer)
}

/// Scale factor that fits `(width, height)` inside the bounding box without
/// ever upscaling: `min(max_w/w, max_h/h, 1)`.
fn fit_scale(width: u32, height: u32, max_w: u32, max_h: u32) -> f64 {
    let wide = f64::from(max_w) / f64::from(width);
    let tall = f64::from(max_h) / f64::from(height);
    wide.min(tall).min(1.0)
}

/// Decodes `bytes`, fits the image inside `max_w` x `max_h`, and re-encodes
/// to `format` (png/jpg/webp). Undecodable input is an error the caller
/// surfaces as a rejected promise.
pub fn resize_image_bytes(
    bytes: &[u8],
    max_w: u32,
    max_h: u32,
    format: &str,
) -> Result<ResizeResult, String> {
    if bytes.is_empty() {
        return Err("input image is empty".into());
    }
    if max_w == 0 || max_h == 0 {
        return Err("bounding box must be at least 1x1".into());
    }
    let target = PictureFormat::parse(format)?;
    let decoded = decode_image(bytes)?;
    let (src_w, src_h) = decoded.dimensions();
    let scale = fit_scale(src_w, src_h, max_w, max_h);
    let width = ((f64::from(src_w) * scale).round() as u32).max(1);
    let height = ((f64::from(src_h) * scale).round() as u32).max(1);
    let resized = if scale < 1.0 {
        decoded.resize_exact(width, height, FilterType::Triangle)
    } else {
        decoded
    };
    let encoded = encode_image(&resized, target)?;
    let data_base64 = STANDARD.encode(&encoded);
    let data_url = format!("data:{};base64,{}", target.mime(), data_base64);
    Ok(ResizeResult {
        format: target.extension().into(),
        mime: target.mime().into(),
        width,
        height,
        data_base64,
        data_url,
        download_name: format!("resized.{}", target.extension()),
    })
}

/// Packages raw image bytes as a base64 data URL for the Image-to-Base64
/// tool. The mime type comes from the magic bytes when recognizable, the
/// caller's format hint otherwise.
pub fn image_to_data_url(bytes: &[u8], format_hint: &str) -> Result<String, String> {
    if bytes.is_empty() {
        return Err("input image is empty".into());
    }
    let mime = match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Gif) => "image/gif",
        _ => PictureFormat::parse(format_hint)?.mime(),
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[wasm_bindgen]
pub fn resize_image(
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
    format: &str,
) -> Result<JsValue, JsValue> {
    let result = resize_image_bytes(bytes, max_width, max_height, format)
        .map_err(|err| JsValue::from_str(&err))?;
    to_js_value(&result)
}

#[wasm_bindgen]
pub fn image_data_url(bytes: &[u8], format_hint: &str) -> Result<String, JsValue> {
    image_to_data_url(bytes, format_hint).map_err(|err| JsValue::from_str(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn checker(width: u32, height: u32) -> DynamicImage {
        let buf: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(buf)
    }

    fn encode_fixture(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), format)
            .expect("encode fixture");
        bytes
    }

    #[test]
    fn downscales_to_fit_bounding_box() {
        let png = encode_fixture(&checker(100, 50), ImageFormat::Png);
        let result = resize_image_bytes(&png, 40, 40, "png").expect("resize");
        assert_eq!(result.width, 40);
        assert_eq!(result.height, 20);
        assert_eq!(result.mime, "image/png");
        assert!(result.data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn never_upscales_small_sources() {
        let png = encode_fixture(&checker(8, 8), ImageFormat::Png);
        let result = resize_image_bytes(&png, 500, 500, "png").expect("resize");
        assert_eq!(result.width, 8);
        assert_eq!(result.height, 8);
    }

    #[test]
    fn reencodes_to_requested_format() {
        let png = encode_fixture(&checker(16, 16), ImageFormat::Png);
        let result = resize_image_bytes(&png, 16, 16, "jpg").expect("resize");
        assert_eq!(result.format, "jpg");
        assert_eq!(result.mime, "image/jpeg");
        assert_eq!(result.download_name, "resized.jpg");
        let decoded = STANDARD.decode(result.data_base64.as_bytes()).expect("b64");
        assert_eq!(image::guess_format(&decoded).expect("guess"), ImageFormat::Jpeg);
    }

    #[test]
    fn undecodable_input_is_an_error() {
        let err = resize_image_bytes(b"definitely not an image", 10, 10, "png").unwrap_err();
        assert!(err.contains("decode"));
        assert!(resize_image_bytes(&[], 10, 10, "png").is_err());
    }

    #[test]
    fn unknown_target_format_is_rejected() {
        let png = encode_fixture(&checker(4, 4), ImageFormat::Png);
        let err = resize_image_bytes(&png, 4, 4, "tiff").unwrap_err();
        assert!(err.contains("unsupported image format"));
    }

    #[test]
    fn data_url_uses_magic_bytes_over_hint() {
        let png = encode_fixture(&checker(4, 4), ImageFormat::Png);
        let url = image_to_data_url(&png, "jpg").expect("data url");
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
