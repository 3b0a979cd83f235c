//! HTML rendering for the lookup pages.
//!
//! Three distinct result states: success card, user-correctable warning
//! (bad or unknown ticker), and upstream failure. Upstream strings are
//! escaped before they reach the page.

use secmaster_common::{format_usd, CompanyQuote, LookupError};

/// Escape text for safe embedding in HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Landing page: the form with no result section.
pub fn form_page(ticker: &str) -> String {
    page(&form(ticker), "")
}

/// Successful lookup: form plus the company card.
pub fn result_page(quote: &CompanyQuote) -> String {
    let name = quote.name.as_deref().unwrap_or("N/A");
    let price = match quote.price {
        Some(price) => format!("💲 {} {}", format_usd(price), quote.currency),
        None => "Price unavailable".to_string(),
    };
    let description = quote
        .description
        .as_deref()
        .unwrap_or("No description available.");

    let card = format!(
        r#"<div class="company-info">
  <h2>{} ({})</h2>
  <div class="price">{}</div>
  <div class="description">{}</div>
</div>"#,
        escape(name),
        escape(&quote.ticker),
        escape(&price),
        escape(description)
    );

    page(&form(&quote.ticker), &card)
}

/// User-correctable failure: bad input or unknown ticker.
pub fn user_error_page(ticker: &str, err: &LookupError) -> String {
    let message = match err {
        LookupError::InvalidTicker(_) => "⚠️ Please enter a ticker symbol.".to_string(),
        _ => format!(
            "⚠️ {}. Please check the ticker and try again.",
            escape(&err.to_string())
        ),
    };
    let block = format!(r#"<div class="warning-message">{}</div>"#, message);

    page(&form(ticker), &block)
}

/// Upstream or configuration failure: nothing the user can correct.
pub fn upstream_error_page(ticker: &str) -> String {
    let block = r#"<div class="error-message">❌ Unable to fetch data at this time. Please try again later.</div>"#;

    page(&form(ticker), block)
}

fn form(ticker: &str) -> String {
    let value = if ticker.trim().is_empty() {
        "AAPL".to_string()
    } else {
        escape(ticker.trim())
    };

    format!(
        r#"<form action="/lookup" method="get">
  <input type="text" name="ticker" value="{}" maxlength="10" />
  <button type="submit">🔍 Get Company Data</button>
</form>"#,
        value
    )
}

fn page(form: &str, result: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>Mini Security Master</title>
<style>
  body {{ font-family: sans-serif; max-width: 720px; margin: 40px auto; }}
  button {{ background-color: #4CAF50; color: white; padding: 10px 24px;
            border: none; border-radius: 4px; cursor: pointer; }}
  button:hover {{ background-color: #45a049; }}
  input[type=text] {{ padding: 10px; font-size: 16px; }}
  .company-info {{ padding: 20px; border-radius: 5px; background-color: #f8f9fa;
                   margin: 10px 0; }}
  .description {{ background-color: white; padding: 15px; border-radius: 5px;
                  line-height: 1.6; margin-top: 10px; }}
  .price {{ color: #4CAF50; font-size: 24px; font-weight: bold; margin: 10px 0; }}
  .warning-message {{ background-color: #fff8e1; color: #8d6e00; padding: 15px;
                      border-radius: 5px; margin: 10px 0; }}
  .error-message {{ background-color: #ffebee; color: #c62828; padding: 15px;
                    border-radius: 5px; margin: 10px 0; }}
</style>
</head>
<body>
<h1>📈 Mini Security Master</h1>
{}
{}
</body>
</html>"#,
        form, result
    )
}
