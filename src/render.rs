use crate::error::PixError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::Luma;
use qrcode::QrCode;
use qrcode::render::svg;
use std::io::Cursor;

/// Renders the payload as a grayscale PNG.
///
/// Fails if the payload exceeds the QR format's capacity; that error
/// propagates unmodified.
pub fn to_png(payload: &str) -> Result<Vec<u8>, PixError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code.render::<Luma<u8>>().min_dimensions(200, 200).build();

    let mut png_bytes = Vec::new();
    image::DynamicImage::ImageLuma8(image).write_to(
        &mut Cursor::new(&mut png_bytes),
        image::ImageFormat::Png,
    )?;
    Ok(png_bytes)
}

/// Renders the payload as a PNG data URL suitable for embedding.
pub fn to_data_url(payload: &str) -> Result<String, PixError> {
    let png = to_png(payload)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Renders the payload as an SVG document.
pub fn to_svg(payload: &str) -> Result<String, PixError> {
    let code = QrCode::new(payload.as_bytes())?;
    let svg = code
        .render()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = "00020101021126360014BR.GOV.BCB.PIX0114+5511999999999\
                           5204000053039865802BR5908John Doe6009SAO PAULO6304F214";

    #[test]
    fn test_png_has_magic_bytes() {
        let png = to_png(PAYLOAD).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn test_data_url_prefix() {
        let url = to_data_url(PAYLOAD).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn test_svg_document() {
        let svg = to_svg(PAYLOAD).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }
}
