// src/listing.rs
//
// The one operation the page layer calls. Pages never learn which
// adapter (or the sample set) produced their records.

use crate::config::SiteConfig;
use crate::domain::property::PropertyRecord;
use crate::domain::samples::sample_properties;
use crate::sources::drive::DriveSource;
use crate::sources::sheets::SheetsSource;

/// How a fetch resolved. Logged only; callers always get a usable
/// listing and cannot tell live data from the fallback.
#[derive(Debug)]
enum ListingOutcome {
    Live,
    Fallback(&'static str),
}

/// Current listing: live data when a configured source yields any
/// records, the built-in samples otherwise. One fetch per call, no
/// retry, no cache.
pub fn get_current_listing(config: &SiteConfig) -> Vec<PropertyRecord> {
    let (properties, outcome) = fetch_live(config);
    match outcome {
        ListingOutcome::Live => properties,
        ListingOutcome::Fallback(reason) => {
            eprintln!("ℹ️ Serving sample listings ({reason})");
            sample_properties()
        }
    }
}

/// Lookup for a detail page. Fetches the current listing fresh.
pub fn find_by_slug(config: &SiteConfig, slug: &str) -> Option<PropertyRecord> {
    get_current_listing(config)
        .into_iter()
        .find(|p| p.slug == slug)
}

fn fetch_live(config: &SiteConfig) -> (Vec<PropertyRecord>, ListingOutcome) {
    let Some(google) = &config.google else {
        return (Vec::new(), ListingOutcome::Fallback("no credentials configured"));
    };

    let properties = if google.spreadsheet_id.is_some() {
        match SheetsSource::new(google.clone()) {
            Ok(source) => source.fetch_properties(),
            Err(e) => {
                eprintln!("⚠️ Sheets client init failed: {e}");
                Vec::new()
            }
        }
    } else if google.drive_root_folder_id.is_some() {
        match DriveSource::connect(google) {
            Ok(source) => source.fetch_properties(),
            Err(e) => {
                eprintln!("⚠️ Drive client init failed: {e}");
                Vec::new()
            }
        }
    } else {
        return (Vec::new(), ListingOutcome::Fallback("no source id configured"));
    };

    if properties.is_empty() {
        (Vec::new(), ListingOutcome::Fallback("live source empty or failed"))
    } else {
        (properties, ListingOutcome::Live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::Status;
    use crate::domain::slug::generate_slug;

    #[test]
    fn unconfigured_site_serves_exactly_the_three_samples() {
        let listing = get_current_listing(&SiteConfig::unconfigured());

        assert_eq!(listing.len(), 3);
        for property in &listing {
            assert!(!property.slug.is_empty());
            assert_eq!(generate_slug(&property.slug), property.slug);
            assert!(matches!(
                property.status,
                Status::Buy | Status::Rent | Status::Land
            ));
        }
    }

    #[test]
    fn credentials_without_a_source_id_also_fall_back() {
        use crate::config::{GoogleConfig, DEFAULT_SHEET_RANGE};

        let mut config = SiteConfig::unconfigured();
        config.google = Some(GoogleConfig {
            service_account_email: "svc@example.iam.gserviceaccount.com".to_string(),
            private_key: "irrelevant".to_string(),
            spreadsheet_id: None,
            sheet_range: DEFAULT_SHEET_RANGE.to_string(),
            drive_root_folder_id: None,
        });

        let listing = get_current_listing(&config);
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].slug, "luxury-villa-downtown");
    }

    #[test]
    fn broken_credentials_degrade_to_samples_not_errors() {
        use crate::config::{GoogleConfig, DEFAULT_SHEET_RANGE};

        // A spreadsheet id is set but the key is garbage: token signing
        // fails before any network I/O, the adapter absorbs it, and the
        // visitor still gets a full page of samples.
        let mut config = SiteConfig::unconfigured();
        config.google = Some(GoogleConfig {
            service_account_email: "svc@example.iam.gserviceaccount.com".to_string(),
            private_key: "not a pem".to_string(),
            spreadsheet_id: Some("sheet-id".to_string()),
            sheet_range: DEFAULT_SHEET_RANGE.to_string(),
            drive_root_folder_id: None,
        });

        let listing = get_current_listing(&config);
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn find_by_slug_hits_and_misses() {
        let config = SiteConfig::unconfigured();
        assert!(find_by_slug(&config, "cozy-apartment-suburbs").is_some());
        assert!(find_by_slug(&config, "no-such-listing").is_none());
    }
}
