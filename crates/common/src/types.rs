use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Currency reported on every quote. FMP prices US listings in dollars.
pub const CURRENCY_USD: &str = "USD";

/// Company data assembled from one profile lookup and one quote lookup.
///
/// Built fresh per request and handed straight to the caller; nothing is
/// cached. Every field other than `ticker` and `currency` degrades to
/// `None` on its own when the provider omits it or returns a value of the
/// wrong type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyQuote {
    /// Normalized ticker symbol (trimmed, uppercased).
    pub ticker: String,
    /// Company name, if the provider returned one.
    pub name: Option<String>,
    /// Company description, if the provider returned one.
    pub description: Option<String>,
    /// Latest trading price in USD, if the provider returned a number.
    pub price: Option<f64>,
    /// Always `"USD"`.
    pub currency: String,
}

impl CompanyQuote {
    /// Empty quote for an already-normalized ticker.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            description: None,
            price: None,
            currency: CURRENCY_USD.to_string(),
        }
    }
}

/// Trim surrounding whitespace and uppercase a ticker symbol.
///
/// An empty or whitespace-only input is the caller's mistake and fails
/// with [`LookupError::InvalidTicker`].
pub fn normalize_ticker(raw: &str) -> Result<String, LookupError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LookupError::InvalidTicker(raw.to_string()));
    }
    Ok(trimmed.to_uppercase())
}

/// Format a dollar amount for display with thousands separators, e.g.
/// `$12,345.67`.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let cents = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${}.{:02}", grouped, cents)
    } else {
        format!("${}.{:02}", grouped, cents)
    }
}
