//! Sequential run loop over the target registry.

use crate::models::{DateWindow, SiteResult};
use crate::scrapers::extract::lowest_price;
use crate::scrapers::sites::SiteDescriptor;
use crate::scrapers::traits::Page;
use anyhow::Result;
use tracing::{info, warn};

/// Visit every target in registry order on the shared page and collect one
/// [`SiteResult`] each.
///
/// Failures stay local to their target: the error lands in that target's
/// result and the loop moves on. The same `window` is used for every URL,
/// so a run that crosses midnight still checks one consistent night.
pub fn scrape_all(
    page: &dyn Page,
    targets: &[SiteDescriptor],
    window: &DateWindow,
) -> Vec<SiteResult> {
    let mut results = Vec::with_capacity(targets.len());

    for target in targets {
        let url = (target.build_url)(window);
        match check_target(page, target, &url) {
            Ok(price) => {
                match price {
                    Some(p) => info!("[OK] {}: {}", target.name, p),
                    None => info!("[OK] {}: no price found", target.name),
                }
                results.push(SiteResult::ok(target.key, target.name, url, price));
            }
            Err(e) => {
                warn!("[ERR] {}: {:#}", target.name, e);
                results.push(SiteResult::failed(target.key, target.name, url, format!("{e:#}")));
            }
        }
    }

    results
}

/// Navigate, let the page settle, then scan its text for the lowest
/// plausible nightly price.
fn check_target(page: &dyn Page, target: &SiteDescriptor, url: &str) -> Result<Option<u32>> {
    page.goto(url)?;
    page.wait(target.settle);

    let fragments = page.text_fragments()?;
    let candidates: Vec<String> = fragments
        .into_iter()
        .filter(|f| looks_price_bearing(f))
        .collect();

    Ok(lowest_price(&candidates))
}

/// Keep only fragments that could possibly carry a price: a currency
/// marker or at least one digit.
fn looks_price_bearing(fragment: &str) -> bool {
    fragment.contains('₹')
        || fragment.contains("INR")
        || fragment.chars().any(|c| c.is_ascii_digit())
}
