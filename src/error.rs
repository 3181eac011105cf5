use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixError {
    #[error("version is fixed '01', got '{0}'")]
    FixedVersion(String),
    #[error("{field}: expected {expected} characters, got {actual}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field}: {reason}")]
    FieldType { field: &'static str, reason: String },
    #[error("value for tag {tag} is {len} characters, TLV lengths cap at 99")]
    OversizeField { tag: String, len: usize },
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
