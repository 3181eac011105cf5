use crate::error::PixError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The only protocol version the encoder accepts.
pub const FIXED_VERSION: &str = "01";

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PixParameters {
    pub version: String,
    pub key: String,
    pub city: String,
    pub name: String,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub not_repeat_payment: Option<bool>,
    #[serde(default)]
    pub currency: Option<u16>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl PixParameters {
    /// Parameters for a reusable QR code with no optional fields set.
    pub fn new(key: &str, city: &str, name: &str) -> Self {
        Self {
            version: FIXED_VERSION.to_string(),
            key: key.to_string(),
            city: city.to_string(),
            name: name.to_string(),
            value: None,
            guid: None,
            message: None,
            cep: None,
            not_repeat_payment: None,
            currency: None,
            country_code: None,
        }
    }

    /// Field-level checks run before any TLV record is built. Fails fast on
    /// the first violation, never coerces. `key`, `name`, `city`, `guid`,
    /// `message` and `currency` pass through uninterpreted.
    pub fn validate(&self) -> Result<(), PixError> {
        if self.version != FIXED_VERSION {
            return Err(PixError::FixedVersion(self.version.clone()));
        }
        if let Some(country_code) = &self.country_code {
            let len = country_code.chars().count();
            if len != 2 {
                return Err(PixError::FieldLength {
                    field: "countryCode",
                    expected: 2,
                    actual: len,
                });
            }
        }
        if let Some(cep) = &self.cep {
            let len = cep.chars().count();
            if len != 8 {
                return Err(PixError::FieldLength {
                    field: "cep",
                    expected: 8,
                    actual: len,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parameters_deserialization() {
        let json = r#"{
            "version": "01",
            "key": "+5511999999999",
            "city": "Sao Paulo",
            "name": "John Doe",
            "value": 10.5,
            "notRepeatPayment": true,
            "countryCode": "BR"
        }"#;
        let params: PixParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.version, "01");
        assert_eq!(params.key, "+5511999999999");
        assert_eq!(params.value, Some(dec!(10.5)));
        assert_eq!(params.not_repeat_payment, Some(true));
        assert_eq!(params.country_code, Some("BR".to_string()));
        assert_eq!(params.guid, None);
        assert_eq!(params.cep, None);
    }

    #[test]
    fn test_validate_accepts_minimal_parameters() {
        let params = PixParameters::new("+5511999999999", "Sao Paulo", "John Doe");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_version() {
        let mut params = PixParameters::new("+5511999999999", "Sao Paulo", "John Doe");
        params.version = "02".to_string();
        let err = params.validate().unwrap_err();
        assert!(matches!(err, PixError::FixedVersion(v) if v == "02"));
    }

    #[test]
    fn test_validate_rejects_short_country_code() {
        let mut params = PixParameters::new("+5511999999999", "Sao Paulo", "John Doe");
        params.country_code = Some("B".to_string());
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            PixError::FieldLength {
                field: "countryCode",
                expected: 2,
                actual: 1,
            }
        ));
    }

    #[test]
    fn test_validate_rejects_long_cep() {
        let mut params = PixParameters::new("+5511999999999", "Sao Paulo", "John Doe");
        params.cep = Some("013101000".to_string());
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            PixError::FieldLength {
                field: "cep",
                expected: 8,
                actual: 9,
            }
        ));
    }

    #[test]
    fn test_validate_accepts_exact_lengths() {
        let mut params = PixParameters::new("+5511999999999", "Sao Paulo", "John Doe");
        params.country_code = Some("br".to_string());
        params.cep = Some("01310100".to_string());
        assert!(params.validate().is_ok());
    }
}
