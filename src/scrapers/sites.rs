//! The fixed target registry: which sites to check and how to build their
//! search URLs for a given night in Kondapur, Hyderabad.

use crate::models::DateWindow;
use std::time::Duration;

/// One booking site: stable key, display name, URL template and the
/// settle delay its listing page needs before prices show up.
///
/// Plain data plus a function pointer; all sites currently share the same
/// extraction behavior, so nothing here warrants a trait per site.
pub struct SiteDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub build_url: fn(&DateWindow) -> String,
    pub settle: Duration,
}

/// Registry order is snapshot order. Stable across runs, no ranking
/// implied.
pub fn registry() -> Vec<SiteDescriptor> {
    vec![
        SiteDescriptor {
            key: "booking",
            name: "Booking.com",
            build_url: booking_url,
            settle: Duration::from_secs(4),
        },
        SiteDescriptor {
            key: "mmt",
            name: "MakeMyTrip",
            build_url: makemytrip_url,
            settle: Duration::from_secs(6),
        },
        SiteDescriptor {
            key: "goibibo",
            name: "Goibibo",
            build_url: goibibo_url,
            settle: Duration::from_secs(5),
        },
        SiteDescriptor {
            key: "oyo",
            name: "OYO",
            build_url: oyo_url,
            settle: Duration::from_secs(5),
        },
    ]
}

fn booking_url(window: &DateWindow) -> String {
    format!(
        "https://www.booking.com/searchresults.html?ss=Kondapur%2C%20Hyderabad&checkin={}&checkout={}&group_adults=2&no_rooms=1&order=price",
        window.checkin_str(),
        window.checkout_str()
    )
}

fn makemytrip_url(window: &DateWindow) -> String {
    format!(
        "https://www.makemytrip.com/hotels/hotel-listing/?checkin={}&checkout={}&locusId=CTHYD&locusType=city&searchText=Kondapur%2C%20Hyderabad&roomStayQualifier=1e2e0e",
        window.checkin_str(),
        window.checkout_str()
    )
}

fn goibibo_url(window: &DateWindow) -> String {
    // Goibibo wants bare YYYYMMDD dates.
    let checkin = window.checkin_str().replace('-', "");
    let checkout = window.checkout_str().replace('-', "");
    format!(
        "https://www.goibibo.com/hotels/hotels-in-hyderabad-ct/?check_in={checkin}&check_out={checkout}&nearby=Kondapur&r=1-2-0"
    )
}

fn oyo_url(window: &DateWindow) -> String {
    format!(
        "https://www.oyorooms.com/search?location=Kondapur%2C%20Hyderabad&checkin={}&checkout={}&guests=2&rooms=1",
        window.checkin_str(),
        window.checkout_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_window() -> DateWindow {
        DateWindow::starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn registry_order_is_stable() {
        let keys: Vec<_> = registry().iter().map(|s| s.key).collect();
        assert_eq!(keys, ["booking", "mmt", "goibibo", "oyo"]);
    }

    #[test]
    fn booking_url_embeds_both_dates() {
        let url = booking_url(&fixed_window());
        assert!(url.contains("checkin=2024-01-01"));
        assert!(url.contains("checkout=2024-01-02"));
        assert!(url.contains("group_adults=2"));
        assert!(url.contains("no_rooms=1"));
    }

    #[test]
    fn makemytrip_url_embeds_both_dates() {
        let url = makemytrip_url(&fixed_window());
        assert!(url.contains("checkin=2024-01-01"));
        assert!(url.contains("checkout=2024-01-02"));
        assert!(url.contains("locusId=CTHYD"));
    }

    #[test]
    fn goibibo_url_strips_date_punctuation() {
        let url = goibibo_url(&fixed_window());
        assert!(url.contains("check_in=20240101"));
        assert!(url.contains("check_out=20240102"));
        assert!(!url.contains("2024-01-01"));
    }

    #[test]
    fn oyo_url_embeds_occupancy() {
        let url = oyo_url(&fixed_window());
        assert!(url.contains("checkin=2024-01-01"));
        assert!(url.contains("checkout=2024-01-02"));
        assert!(url.contains("guests=2&rooms=1"));
    }

    #[test]
    fn url_builders_are_pure() {
        let w = fixed_window();
        for site in registry() {
            assert_eq!((site.build_url)(&w), (site.build_url)(&w));
        }
    }
}
