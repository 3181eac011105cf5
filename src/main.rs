use clap::Parser;
use miette::{IntoDiagnostic, Result};
use qrcode_pix::encoder::QrCodePix;
use qrcode_pix::error::PixError;
use qrcode_pix::parameters::PixParameters;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PIX key of the payee (phone, email, tax id or random key)
    #[arg(long, required_unless_present = "params")]
    key: Option<String>,

    /// Merchant name, encoded verbatim
    #[arg(long, required_unless_present = "params")]
    name: Option<String>,

    /// Merchant city, upper-cased in the payload
    #[arg(long, required_unless_present = "params")]
    city: Option<String>,

    /// Transaction amount, e.g. 10.00
    #[arg(long)]
    value: Option<String>,

    /// Free-text note nested inside the payee key record
    #[arg(long)]
    message: Option<String>,

    /// Transaction identifier nested inside the additional data record
    #[arg(long)]
    guid: Option<String>,

    /// Postal code, 8 characters
    #[arg(long)]
    cep: Option<String>,

    /// Emit a single-use (dynamic) QR code instead of a reusable one
    #[arg(long)]
    single_use: bool,

    /// ISO 4217 numeric currency code (defaults to 986, BRL)
    #[arg(long)]
    currency: Option<u16>,

    /// Two-letter country code (defaults to BR)
    #[arg(long)]
    country_code: Option<String>,

    /// Read all parameters from a JSON file instead of flags
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the QR code PNG to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the PNG data URL instead of the raw payload
    #[arg(long)]
    base64: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = match &cli.params {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            serde_json::from_reader(file).into_diagnostic()?
        }
        None => parameters_from_flags(&cli)?,
    };

    let pix = QrCodePix::new(&params).into_diagnostic()?;

    if cli.base64 {
        println!("{}", pix.base64().into_diagnostic()?);
    } else {
        println!("{}", pix.payload());
    }

    if let Some(path) = &cli.output {
        let png = pix.png().into_diagnostic()?;
        std::fs::write(path, png).into_diagnostic()?;
    }

    Ok(())
}

fn parameters_from_flags(cli: &Cli) -> Result<PixParameters> {
    // clap guarantees key/name/city are present when --params is absent
    let mut params = PixParameters::new(
        cli.key.as_deref().unwrap_or_default(),
        cli.city.as_deref().unwrap_or_default(),
        cli.name.as_deref().unwrap_or_default(),
    );

    if let Some(raw) = &cli.value {
        let value = Decimal::from_str(raw)
            .map_err(|e| PixError::FieldType {
                field: "value",
                reason: e.to_string(),
            })
            .into_diagnostic()?;
        params.value = Some(value);
    }
    if cli.single_use {
        params.not_repeat_payment = Some(true);
    }
    params.message = cli.message.clone();
    params.guid = cli.guid.clone();
    params.cep = cli.cep.clone();
    params.currency = cli.currency;
    params.country_code = cli.country_code.clone();

    Ok(params)
}
