use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use secmaster_common::{CompanyQuote, LookupError};
use secmaster_lookup::CompanyLookup;

use crate::render;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn CompanyLookup>,
}

#[derive(Deserialize)]
pub struct LookupParams {
    ticker: Option<String>,
}

/// Landing page with the lookup form.
pub async fn index() -> Html<String> {
    Html(render::form_page(""))
}

/// Form submission target: renders success, user-correctable warning, or
/// upstream failure as distinct blocks.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Html<String> {
    let ticker = params.ticker.unwrap_or_default();

    match state.lookup.fetch(&ticker).await {
        Ok(quote) => Html(render::result_page(&quote)),
        Err(err) if err.user_correctable() => {
            warn!("Lookup rejected for {:?}: {}", ticker, err);
            Html(render::user_error_page(&ticker, &err))
        }
        Err(err) => {
            error!("Lookup failed for {:?}: {}", ticker, err);
            Html(render::upstream_error_page(&ticker))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// JSON endpoint for programmatic callers.
pub async fn company_json(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<CompanyQuote>, (StatusCode, Json<ErrorBody>)> {
    match state.lookup.fetch(&ticker).await {
        Ok(quote) => Ok(Json(quote)),
        Err(err) => {
            let status = error_status(&err);
            if status.is_server_error() {
                error!("Lookup failed for {:?}: {}", ticker, err);
            }
            Err((
                status,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

/// HTTP status for each lookup failure mode.
fn error_status(err: &LookupError) -> StatusCode {
    match err {
        LookupError::InvalidTicker(_) => StatusCode::BAD_REQUEST,
        LookupError::NotFound(_) => StatusCode::NOT_FOUND,
        LookupError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        LookupError::Authentication => StatusCode::BAD_GATEWAY,
        LookupError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        LookupError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        LookupError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        Lookup {}

        #[async_trait]
        impl CompanyLookup for Lookup {
            async fn fetch(&self, ticker: &str) -> Result<CompanyQuote, LookupError>;
        }
    }

    fn state_with(mock_lookup: MockLookup) -> AppState {
        AppState {
            lookup: Arc::new(mock_lookup),
        }
    }

    #[tokio::test]
    async fn test_lookup_renders_success_card() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup.expect_fetch().returning(|_| {
            Ok(CompanyQuote {
                ticker: "AAPL".to_string(),
                name: Some("Apple Inc.".to_string()),
                description: None,
                price: Some(150.0),
                currency: "USD".to_string(),
            })
        });

        let Html(body) = lookup(
            State(state_with(mock_lookup)),
            Query(LookupParams {
                ticker: Some("aapl".to_string()),
            }),
        )
        .await;

        assert!(body.contains("Apple Inc. (AAPL)"));
        assert!(body.contains("$150.00 USD"));
        assert!(body.contains("No description available."));
    }

    #[tokio::test]
    async fn test_lookup_renders_warning_for_unknown_ticker() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_fetch()
            .returning(|t| Err(LookupError::NotFound(t.to_string())));

        let Html(body) = lookup(
            State(state_with(mock_lookup)),
            Query(LookupParams {
                ticker: Some("XXXX".to_string()),
            }),
        )
        .await;

        assert!(body.contains("warning-message"));
        assert!(!body.contains("error-message"));
    }

    #[tokio::test]
    async fn test_lookup_renders_failure_for_upstream_errors() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_fetch()
            .returning(|_| Err(LookupError::RateLimited));

        let Html(body) = lookup(
            State(state_with(mock_lookup)),
            Query(LookupParams {
                ticker: Some("AAPL".to_string()),
            }),
        )
        .await;

        assert!(body.contains("error-message"));
        assert!(!body.contains("warning-message"));
    }

    #[tokio::test]
    async fn test_missing_ticker_param_is_a_user_error() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_fetch()
            .returning(|t| Err(LookupError::InvalidTicker(t.to_string())));

        let Html(body) = lookup(
            State(state_with(mock_lookup)),
            Query(LookupParams { ticker: None }),
        )
        .await;

        assert!(body.contains("Please enter a ticker symbol"));
    }

    #[tokio::test]
    async fn test_json_endpoint_returns_quote() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_fetch()
            .returning(|_| Ok(CompanyQuote::new("AAPL")));

        let result = company_json(
            State(state_with(mock_lookup)),
            Path("AAPL".to_string()),
        )
        .await;

        let Json(quote) = result.unwrap();
        assert_eq!(quote.ticker, "AAPL");
        assert_eq!(quote.currency, "USD");
    }

    #[tokio::test]
    async fn test_json_endpoint_maps_error_kinds_to_statuses() {
        let cases = vec![
            (
                LookupError::InvalidTicker("".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                LookupError::NotFound("XXXX".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (LookupError::Authentication, StatusCode::BAD_GATEWAY),
            (LookupError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (
                LookupError::Upstream {
                    status: Some(500),
                    message: "unexpected status 500".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                LookupError::Unavailable("refused".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                LookupError::Configuration("no key".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(error_status(&err), expected, "{}", err);
        }
    }
}
