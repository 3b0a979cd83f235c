//! Lookup client for the Financial Modeling Prep API.
//!
//! One call, two upstream requests: a company profile (name, description)
//! followed by a quote (price), merged into a single
//! [`CompanyQuote`](secmaster_common::CompanyQuote).

pub mod client;
pub mod record;

use async_trait::async_trait;

use secmaster_common::{CompanyQuote, LookupError};

pub use client::FmpClient;

/// Company lookup interface.
///
/// Presentation layers hold this instead of the concrete client so tests
/// can substitute a mock. Exactly one implementation ships.
#[async_trait]
pub trait CompanyLookup: Send + Sync {
    /// Fetch name, description and current price for `ticker`.
    async fn fetch(&self, ticker: &str) -> Result<CompanyQuote, LookupError>;
}
