//! Lowest-price heuristic over rendered page text.
//!
//! This is a lower-bound scan, not a structured price parser: any
//! standalone 3-6 digit number qualifies, whether or not it is actually a
//! nightly rate. Ratings and floor counts (1-2 digits) and phone numbers
//! or listing IDs (7+ digits) never qualify.

use regex::Regex;
use std::sync::OnceLock;

/// Upper bound on how many fragments one call will scan. Safety cap for
/// pathological pages, not a correctness requirement.
pub const FRAGMENT_SCAN_CAP: usize = 2000;

/// A 3-6 digit run, optionally prefixed by a currency marker and followed
/// by a 1-2 digit fraction. The run must not abut other digits, so longer
/// numbers are rejected outright instead of being truncated to a prefix.
fn price_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|[^0-9])(?:₹|INR)?\s*([0-9]{3,6})(?:\.[0-9]{1,2})?(?:[^0-9]|$)")
            .expect("valid price regex")
    })
}

/// Lowest plausible price across `fragments`, or `None` when nothing
/// matched. Scans at most [`FRAGMENT_SCAN_CAP`] fragments.
pub fn lowest_price<S: AsRef<str>>(fragments: &[S]) -> Option<u32> {
    lowest_price_capped(fragments, FRAGMENT_SCAN_CAP)
}

/// [`lowest_price`] with an explicit scan cap.
///
/// Per fragment only the first match counts; across fragments the minimum
/// positive candidate wins. Which fragment produced the minimum is not
/// retained.
pub fn lowest_price_capped<S: AsRef<str>>(fragments: &[S], cap: usize) -> Option<u32> {
    let mut best: Option<u32> = None;

    for fragment in fragments.iter().take(cap) {
        let normalized = normalize(fragment.as_ref());
        let Some(caps) = price_pattern().captures(&normalized) else {
            continue;
        };
        let Ok(candidate) = caps[1].parse::<u32>() else {
            continue;
        };
        if candidate > 0 && best.map_or(true, |b| candidate < b) {
            best = Some(candidate);
        }
    }

    best
}

/// Strip thousands separators and collapse whitespace runs, so "₹ 2,499"
/// and "INR2499" style variants both become matchable.
fn normalize(fragment: &str) -> String {
    let no_commas = fragment.replace(',', "");
    no_commas.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_minimum_and_rejects_noise() {
        let fragments = ["₹ 2,499", "INR 3000", "Rating 4.5", "Phone 9876543210"];
        assert_eq!(lowest_price(&fragments), Some(2499));
    }

    #[test]
    fn no_digits_means_no_price() {
        assert_eq!(lowest_price(&["no numbers here"]), None);
    }

    #[test]
    fn empty_input_means_no_price() {
        assert_eq!(lowest_price::<&str>(&[]), None);
    }

    #[test]
    fn short_digit_runs_are_ignored() {
        assert_eq!(lowest_price(&["Floor 12", "4.9 stars", "99"]), None);
    }

    #[test]
    fn long_digit_runs_are_not_truncated() {
        // A 7+ digit ID must not be read as its 6-digit prefix.
        assert_eq!(lowest_price(&["Listing 1234567"]), None);
    }

    #[test]
    fn currency_prefix_without_space_matches() {
        assert_eq!(lowest_price(&["INR2499"]), Some(2499));
        assert_eq!(lowest_price(&["₹899"]), Some(899));
    }

    #[test]
    fn decimal_fraction_is_dropped() {
        assert_eq!(lowest_price(&["₹ 1499.50 per night"]), Some(1499));
    }

    #[test]
    fn comma_grouped_price_is_read_whole() {
        // Grouping commas join the digits; "2,499" is 2499, not 499.
        assert_eq!(lowest_price(&["From ₹ 2,499 onwards"]), Some(2499));
    }

    #[test]
    fn first_match_per_fragment_minimum_across_fragments() {
        let fragments = ["₹ 5000 deluxe", "₹ 1200 standard", "₹ 3500 suite"];
        assert_eq!(lowest_price(&fragments), Some(1200));
    }

    #[test]
    fn scan_stops_at_the_cap() {
        let mut fragments: Vec<String> = Vec::new();
        for _ in 0..FRAGMENT_SCAN_CAP {
            fragments.push("₹ 4000".to_string());
        }
        // The true minimum sits past the cap and must not be seen.
        fragments.push("₹ 150".to_string());
        assert_eq!(lowest_price(&fragments), Some(4000));
    }

    #[test]
    fn smaller_cap_is_honored() {
        let fragments = ["₹ 900", "₹ 300"];
        assert_eq!(lowest_price_capped(&fragments, 1), Some(900));
    }

    #[test]
    fn zero_is_not_a_price() {
        assert_eq!(lowest_price(&["000 items"]), None);
    }
}
