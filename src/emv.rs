use crate::error::PixError;

/// Longest value a 2-digit TLV length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// Fixed globally unique identifier of the PIX arrangement, always the
/// first record inside the merchant account information field.
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Tags of the EMV merchant-presented QR layout used by PIX.
pub mod tag {
    pub const PAYLOAD_FORMAT: &str = "00";
    pub const INITIATION_METHOD: &str = "01";
    pub const MERCHANT_ACCOUNT: &str = "26";
    pub const MERCHANT_CATEGORY: &str = "52";
    pub const CURRENCY: &str = "53";
    pub const AMOUNT: &str = "54";
    pub const COUNTRY: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const POSTAL_CODE: &str = "61";
    pub const ADDITIONAL_DATA: &str = "62";

    // Nested under MERCHANT_ACCOUNT
    pub const ACCOUNT_GUI: &str = "00";
    pub const ACCOUNT_KEY: &str = "01";
    pub const ACCOUNT_DESCRIPTION: &str = "02";

    // Nested under ADDITIONAL_DATA
    pub const REFERENCE_LABEL: &str = "05";
}

/// Encodes a single TLV record: tag, zero-padded 2-digit length, value.
/// Lengths count characters, not bytes.
pub fn emv(tag: &str, value: &str) -> Result<String, PixError> {
    let len = value.chars().count();
    if len > MAX_VALUE_LEN {
        return Err(PixError::OversizeField {
            tag: tag.to_string(),
            len,
        });
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// Merchant account information sub-record: the PIX identifier, the payee
/// key and, when present, the free-text description.
pub fn merchant_account_info(key: &str, message: Option<&str>) -> Result<String, PixError> {
    let mut info = String::new();
    info.push_str(&emv(tag::ACCOUNT_GUI, PIX_GUI)?);
    info.push_str(&emv(tag::ACCOUNT_KEY, key)?);
    if let Some(message) = message {
        info.push_str(&emv(tag::ACCOUNT_DESCRIPTION, message)?);
    }
    Ok(info)
}

/// Additional data sub-record wrapping the transaction reference.
pub fn additional_data(guid: &str) -> Result<String, PixError> {
    emv(tag::REFERENCE_LABEL, guid)
}
