use crate::crc16;
use crate::emv::{self, tag};
use crate::error::PixError;
use crate::parameters::PixParameters;
use crate::render;
use rust_decimal::{Decimal, RoundingStrategy};

/// ISO 4217 numeric code reported when the parameters carry no currency.
pub const DEFAULT_CURRENCY: &str = "986";
/// Country reported when the parameters carry no country code.
pub const DEFAULT_COUNTRY: &str = "BR";
// Checksum tag and fixed length. The length is always 04 because the CRC
// is rendered as exactly 4 hex digits.
const CRC_PREFIX: &str = "6304";

#[derive(Debug, PartialEq, Clone)]
pub struct QrCodePix {
    payload: String,
}

impl QrCodePix {
    /// Validates the parameters and assembles the full EMV payload,
    /// checksum included. Field order is fixed; absent optional fields
    /// produce no record.
    pub fn new(params: &PixParameters) -> Result<Self, PixError> {
        params.validate()?;

        let account = emv::merchant_account_info(&params.key, params.message.as_deref())?;

        let mut payload = String::new();
        payload.push_str(&emv::emv(tag::PAYLOAD_FORMAT, &params.version)?);

        let initiation = if params.not_repeat_payment.unwrap_or(false) {
            "12"
        } else {
            "11"
        };
        payload.push_str(&emv::emv(tag::INITIATION_METHOD, initiation)?);
        payload.push_str(&emv::emv(tag::MERCHANT_ACCOUNT, &account)?);
        payload.push_str(&emv::emv(tag::MERCHANT_CATEGORY, "0000")?);

        let currency = match params.currency {
            Some(currency) => currency.to_string(),
            None => DEFAULT_CURRENCY.to_string(),
        };
        payload.push_str(&emv::emv(tag::CURRENCY, &currency)?);

        if let Some(value) = params.value {
            payload.push_str(&emv::emv(tag::AMOUNT, &format_amount(value))?);
        }

        let country = match &params.country_code {
            Some(country_code) => country_code.to_uppercase(),
            None => DEFAULT_COUNTRY.to_string(),
        };
        payload.push_str(&emv::emv(tag::COUNTRY, &country)?);
        payload.push_str(&emv::emv(tag::MERCHANT_NAME, &params.name)?);
        payload.push_str(&emv::emv(tag::MERCHANT_CITY, &params.city.to_uppercase())?);

        if let Some(cep) = &params.cep {
            payload.push_str(&emv::emv(tag::POSTAL_CODE, cep)?);
        }
        if let Some(guid) = &params.guid {
            payload.push_str(&emv::emv(tag::ADDITIONAL_DATA, &emv::additional_data(guid)?)?);
        }

        // The checksum covers everything up to and including its own
        // tag-and-length prefix.
        payload.push_str(CRC_PREFIX);
        let crc = crc16::checksum(payload.as_bytes());
        payload.push_str(&format!("{crc:04X}"));

        Ok(Self { payload })
    }

    /// Final EMV payload, checksum included.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// PNG rendering of the payload as a base64 data URL.
    pub fn base64(&self) -> Result<String, PixError> {
        render::to_data_url(&self.payload)
    }

    /// PNG rendering of the payload.
    pub fn png(&self) -> Result<Vec<u8>, PixError> {
        render::to_png(&self.payload)
    }

    /// SVG rendering of the payload.
    pub fn svg(&self) -> Result<String, PixError> {
        render::to_svg(&self.payload)
    }
}

/// Amounts carry exactly two fraction digits, halves rounding away from
/// zero.
fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
