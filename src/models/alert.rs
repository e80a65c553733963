use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// The condition an alert watches for.
///
/// Serialized as `price_above` | `price_below` | `percentage_change`; no
/// other value ever reaches disk because the service parses incoming type
/// strings through [`AlertType::parse`] before building an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    PriceAbove,
    PriceBelow,
    PercentageChange,
}

impl AlertType {
    pub const VALID_VALUES: &'static str = "price_above, price_below, percentage_change";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price_above" => Some(Self::PriceAbove),
            "price_below" => Some(Self::PriceBelow),
            "percentage_change" => Some(Self::PercentageChange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAbove => "price_above",
            Self::PriceBelow => "price_below",
            Self::PercentageChange => "percentage_change",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted price alert. Field order here is the field order in the
/// alerts file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,

    pub asset_id: String,
    pub asset_symbol: String,

    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub target_value: f64,

    pub is_active: bool,
    pub created_at: String,

    // reserved for a future evaluator; nothing in this service sets it
    pub triggered_at: Option<String>,
}

/// Create payload. Required fields are still `Option` here so the service
/// can answer a missing field with a validation error instead of the body
/// decoder rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAlertInput {
    pub asset_id: Option<String>,
    pub asset_symbol: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub target_value: Option<f64>,
}

/// Update payload. Every field is optional; only fields present in the
/// request overwrite the stored record, including an explicit
/// `is_active: false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlertInput {
    pub asset_id: Option<String>,
    pub asset_symbol: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub target_value: Option<f64>,
    pub is_active: Option<bool>,
}

/// Accepts a JSON number or a numeric string for `target_value`, mirroring
/// clients that post form values as strings.
fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberLike {
        Num(f64),
        Str(String),
    }

    match Option::<NumberLike>::deserialize(de)? {
        None => Ok(None),
        Some(NumberLike::Num(n)) => Ok(Some(n)),
        Some(NumberLike::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("target_value is not a number: {s:?}"))),
    }
}
