// src/domain/property.rs

use crate::domain::slug::{generate_slug, slug_or_fallback};
use crate::sources::models::RawEntry;

/// Fixed image shown when a listing has no picture of its own.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800";

/// Listing status tag. Anything unrecognized from upstream collapses to
/// `Buy`, so pages only ever deal with these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Buy,
    Rent,
    Land,
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("rent") {
            Status::Rent
        } else if raw.eq_ignore_ascii_case("land") {
            Status::Land
        } else {
            Status::Buy
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Buy => "Buy",
            Status::Rent => "Rent",
            Status::Land => "Land",
        }
    }
}

/// A listing as every page renders it, flattened and normalized. This is
/// the anti-corruption layer between the uncontrolled sheet/folder data
/// and the site: price, size and location stay display-only strings, and
/// every field except `slug` and `status` may be empty. Records are built
/// fresh on each request and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub price: String,
    pub size: String,
    pub location: String,
    pub status: Status,
    pub image_url: String,
    pub features: Vec<String>,
}

impl PropertyRecord {
    /// Normalizes a raw manifest or `meta.json` entry. Missing fields get
    /// display-safe defaults. An upstream slug is re-slugified so the
    /// lowercase-alnum-and-hyphens invariant holds no matter what the file
    /// contained; a missing or unusable slug is rebuilt from the title or
    /// the 1-based `position`.
    pub fn from_raw(raw: RawEntry, position: usize) -> Self {
        let title = raw.title.unwrap_or_default();

        let slug = raw
            .slug
            .as_deref()
            .map(generate_slug)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slug_or_fallback(&title, position));

        PropertyRecord {
            slug,
            title,
            subtitle: raw.subtitle.unwrap_or_default(),
            price: raw.price.unwrap_or_default(),
            size: raw.size.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            status: raw.status.as_deref().map(Status::parse).unwrap_or_default(),
            image_url: raw
                .image_url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            features: raw.features.unwrap_or_default(),
        }
    }
}
