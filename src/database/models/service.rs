use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Upload directory that service images are stored under.
pub const SERVICE_IMAGE_DIR: &str = "service_images/";

pub const SERVICE_NAME_MAX_LENGTH: usize = 100;
pub const SERVICE_IMAGE_MAX_LENGTH: usize = 100;
pub const PRICE_MAX_DIGITS: u64 = 7;
pub const PRICE_DECIMAL_PLACES: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal, // NUMERIC(7,2), stored as canonical text
    pub duration_minutes: i32,
    pub image: Option<String>, // path relative to the media root
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A validated service ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub duration_minutes: i32,
    pub image: Option<String>,
}

/// JSON representation returned by the service endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub duration_minutes: i32,
    pub image: Option<String>,
}

impl ServiceResponse {
    pub fn from_service(service: Service, media_url: &str) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            price: format_price(&service.price),
            duration_minutes: service.duration_minutes,
            image: service
                .image
                .filter(|path| !path.is_empty())
                .map(|path| format!("{}{}", media_url, path)),
        }
    }
}

/// Renders a price with exactly two fractional digits, e.g. `50.00`.
pub fn format_price(price: &BigDecimal) -> String {
    price.with_scale(PRICE_DECIMAL_PLACES as i64).to_string()
}

/// Checks a decimal against a `NUMERIC(max_digits, decimal_places)` column.
pub fn check_precision(value: &BigDecimal, max_digits: u64, decimal_places: u64) -> Result<(), String> {
    let (digits, exponent) = value.as_bigint_and_exponent();
    let digit_count = digits.to_string().trim_start_matches('-').len() as u64;

    // exponent here is the number of fractional digits as written
    let (total_digits, decimals) = if exponent <= 0 {
        (digit_count + exponent.unsigned_abs(), 0)
    } else if exponent.unsigned_abs() > digit_count {
        (exponent.unsigned_abs(), exponent.unsigned_abs())
    } else {
        (digit_count, exponent.unsigned_abs())
    };
    let whole_digits = total_digits - decimals;
    let max_whole_digits = max_digits - decimal_places;

    if total_digits > max_digits {
        return Err(format!(
            "Ensure that there are no more than {} digits in total.",
            max_digits
        ));
    }
    if decimals > decimal_places {
        return Err(format!(
            "Ensure that there are no more than {} decimal places.",
            decimal_places
        ));
    }
    if whole_digits > max_whole_digits {
        return Err(format!(
            "Ensure that there are no more than {} digits before the decimal point.",
            max_whole_digits
        ));
    }

    Ok(())
}
