use std::time::Duration;

use anyhow::{Context, Result};
use scraper::{ElementRef, Html};
use tracing::info;

const LISTING_URL: &str = "https://www.ipoji.com/ipo";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Elements whose text is never rendered.
const SKIP_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Fetch the listing page and reduce it to visible text. The parser only ever
/// sees this text blob; markup concerns stop here.
pub async fn fetch_listing() -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    info!("Fetching listing page: {}", LISTING_URL);
    let html = client
        .get(LISTING_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .context("Failed to fetch listing page")?;

    Ok(visible_text(&html))
}

/// Flatten a document to its visible text, one text node per line.
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut out = String::new();
    collect_text(doc.root_element(), &mut out);
    out
}

fn collect_text(element: ElementRef, out: &mut String) {
    if SKIP_ELEMENTS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
                out.push('\n');
            }
        } else if let Some(child_el) = ElementRef::wrap(child) {
            collect_text(child_el, out);
        }
    }
}

// ── Tests ──
