// sources/sheets.rs
//
// Tabular adapter: one rectangular range in a Google Sheet, columns
// mapped by position. The sheet is edited by hand by the brokerage, so
// everything here is tolerant of missing cells and junk values.

use crate::config::GoogleConfig;
use crate::domain::property::{PropertyRecord, Status, PLACEHOLDER_IMAGE};
use crate::domain::slug::slug_or_fallback;
use crate::sources::auth;
use crate::sources::error::SourceError;
use crate::sources::models::ValueRange;
use reqwest::blocking::Client;
use std::time::Duration;

pub struct SheetsSource {
    client: Client,
    config: GoogleConfig,
}

impl SheetsSource {
    pub fn new(config: GoogleConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch the configured range and map it to records. Any failure is
    /// logged and absorbed into an empty list; the aggregator turns an
    /// empty list into the sample set, so nothing propagates to pages.
    pub fn fetch_properties(&self) -> Vec<PropertyRecord> {
        match self.try_fetch() {
            Ok(properties) => properties,
            Err(e) => {
                eprintln!("⚠️ Sheets fetch failed: {e}");
                Vec::new()
            }
        }
    }

    fn try_fetch(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        let spreadsheet_id = self
            .config
            .spreadsheet_id
            .as_deref()
            .ok_or_else(|| SourceError::Config("no spreadsheet id configured".into()))?;

        let token = auth::access_token(&self.client, &self.config, auth::SHEETS_SCOPE)?;

        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}",
            spreadsheet_id, self.config.sheet_range
        );

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Network(format!(
                "Sheets API HTTP {status}: {text}"
            )));
        }

        let range: ValueRange =
            serde_json::from_str(&text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

        Ok(rows_to_properties(range.values))
    }
}

/// Positional column mapping:
/// A title, B subtitle, C price, D size, E location, F status,
/// G image URL, H comma-separated features.
///
/// A row needs at least six populated cells and a title to count;
/// anything else is someone's half-finished edit and is dropped.
pub fn rows_to_properties(rows: Vec<Vec<String>>) -> Vec<PropertyRecord> {
    rows.into_iter()
        .filter(|row| {
            let populated = row.iter().filter(|c| !c.trim().is_empty()).count();
            populated >= 6 && row.first().map_or(false, |t| !t.trim().is_empty())
        })
        .enumerate()
        .map(|(index, row)| {
            let cell = |n: usize| {
                row.get(n)
                    .map(|c| c.trim().to_string())
                    .unwrap_or_default()
            };

            let title = cell(0);
            let image_url = cell(6);

            PropertyRecord {
                slug: slug_or_fallback(&title, index + 1),
                title,
                subtitle: cell(1),
                price: cell(2),
                size: cell(3),
                location: cell(4),
                status: Status::parse(&cell(5)),
                image_url: if image_url.is_empty() {
                    PLACEHOLDER_IMAGE.to_string()
                } else {
                    image_url
                },
                features: split_features(&cell(7)),
            }
        })
        .collect()
}

fn split_features(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn maps_all_eight_columns() {
        let rows = vec![row(&[
            "Luxury Villa in Downtown",
            "Spacious 4BHK",
            "2.5Cr",
            "3500 sqft",
            "Downtown",
            "Buy",
            "https://example.com/villa.jpg",
            "4 BHK, Garden, Parking",
        ])];

        let props = rows_to_properties(rows);
        assert_eq!(props.len(), 1);

        let p = &props[0];
        assert_eq!(p.slug, "luxury-villa-in-downtown");
        assert_eq!(p.title, "Luxury Villa in Downtown");
        assert_eq!(p.subtitle, "Spacious 4BHK");
        assert_eq!(p.price, "2.5Cr");
        assert_eq!(p.size, "3500 sqft");
        assert_eq!(p.location, "Downtown");
        assert_eq!(p.status, Status::Buy);
        assert_eq!(p.image_url, "https://example.com/villa.jpg");
        assert_eq!(p.features, vec!["4 BHK", "Garden", "Parking"]);
    }

    #[test]
    fn rows_with_fewer_than_six_populated_cells_are_dropped() {
        let rows = vec![
            row(&["Title", "Sub", "1Cr", "900 sqft", "East"]),
            row(&["Title", "Sub", "1Cr", "", "East", "", "", ""]),
            row(&["Kept", "Sub", "1Cr", "900 sqft", "East", "Rent"]),
        ];

        let props = rows_to_properties(rows);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].title, "Kept");
    }

    #[test]
    fn rows_without_a_title_are_dropped() {
        let rows = vec![row(&["", "Sub", "1Cr", "900 sqft", "East", "Rent", "img", "a,b"])];
        assert!(rows_to_properties(rows).is_empty());
    }

    #[test]
    fn missing_status_defaults_to_buy() {
        let rows = vec![row(&[
            "Plot 12", "Corner plot", "40L", "1 kanal", "North", "", "img.jpg",
        ])];

        let props = rows_to_properties(rows);
        assert_eq!(props[0].status, Status::Buy);
    }

    #[test]
    fn missing_image_and_features_get_defaults() {
        let rows = vec![row(&["Plot 12", "Corner plot", "40L", "1 kanal", "North", "Land"])];

        let props = rows_to_properties(rows);
        assert_eq!(props[0].image_url, PLACEHOLDER_IMAGE);
        assert!(props[0].features.is_empty());
    }

    #[test]
    fn punctuation_title_falls_back_to_positional_slug() {
        let rows = vec![
            row(&["Plot 12", "a", "b", "c", "d", "Buy"]),
            row(&["???", "a", "b", "c", "d", "Buy"]),
        ];

        let props = rows_to_properties(rows);
        assert_eq!(props[1].slug, "property-2");
    }

    #[test]
    fn feature_cells_are_trimmed_and_empty_fragments_dropped() {
        assert_eq!(split_features(" Garden , , Parking,"), vec!["Garden", "Parking"]);
        assert!(split_features("").is_empty());
    }
}
