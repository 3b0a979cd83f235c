//! HTTP client for the Financial Modeling Prep REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use secmaster_common::{
    normalize_ticker, CompanyQuote, LookupConfig, LookupError, CURRENCY_USD,
};

use crate::record::{ProfileRecord, QuoteRecord};
use crate::CompanyLookup;

/// User agent sent with every request.
const USER_AGENT: &str = "secmaster/0.1";

/// Client for the FMP `/profile` and `/quote` endpoints.
///
/// Cheap to clone and safe to share: the inner `reqwest::Client` pools
/// connections, and each lookup is self-contained.
#[derive(Clone)]
pub struct FmpClient {
    client: Client,
    config: LookupConfig,
}

impl FmpClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                LookupError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Build a client configured from the process environment.
    pub fn from_env() -> Result<Self, LookupError> {
        Self::new(LookupConfig::from_env()?)
    }

    /// Fetch company data for `ticker`.
    ///
    /// The ticker is trimmed and uppercased first; an empty result from
    /// either upstream call fails with [`LookupError::NotFound`]. Missing
    /// or mistyped fields inside a non-empty response degrade to `None`
    /// instead of failing the call.
    pub async fn fetch_company(&self, ticker: &str) -> Result<CompanyQuote, LookupError> {
        let ticker = normalize_ticker(ticker)?;

        // Guards hand-rolled configs; LookupConfig constructors already
        // refuse an empty key.
        if self.config.api_key.trim().is_empty() {
            return Err(LookupError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        let profile =
            ProfileRecord::from_value(&self.fetch_first_record("profile", &ticker).await?);
        let quote = QuoteRecord::from_value(&self.fetch_first_record("quote", &ticker).await?);

        info!(
            "Fetched company data for {}: name={:?} price={:?}",
            ticker, profile.name, quote.price
        );

        Ok(CompanyQuote {
            ticker,
            name: profile.name,
            description: profile.description,
            price: quote.price,
            currency: CURRENCY_USD.to_string(),
        })
    }

    /// One GET against `{base}/{resource}/{ticker}`, returning the first
    /// element of the JSON array response.
    async fn fetch_first_record(
        &self,
        resource: &str,
        ticker: &str,
    ) -> Result<Value, LookupError> {
        let url = format!("{}/{}/{}", self.config.base_url, resource, ticker);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            401 => return Err(LookupError::Authentication),
            429 => return Err(LookupError::RateLimited),
            code if code >= 400 => {
                return Err(LookupError::Upstream {
                    status: Some(code),
                    message: format!("unexpected status {}", status),
                });
            }
            _ => {}
        }

        // A body that is not a JSON array surfaces as a decode error and
        // maps to LookupError::Upstream ("malformed response").
        let mut records: Vec<Value> = response.json().await?;
        if records.is_empty() {
            return Err(LookupError::NotFound(ticker.to_string()));
        }

        Ok(records.swap_remove(0))
    }
}

#[async_trait]
impl CompanyLookup for FmpClient {
    async fn fetch(&self, ticker: &str) -> Result<CompanyQuote, LookupError> {
        self.fetch_company(ticker).await
    }
}
