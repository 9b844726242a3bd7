use serde::Deserialize;

// Wire shapes for the two Google REST APIs, plus the property entry files
// stored in Drive. Everything optional; normalization happens in
// domain::property.

/// Response of `spreadsheets.values.get`: a rectangular block of
/// formatted cell strings. Trailing empty cells are omitted per row.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Response of `files.list`.
#[derive(Debug, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
}

/// OAuth2 token endpoint response for the service-account flow.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

// properties.json (root manifest)
//  └── [ { slug?, title?, subtitle?, price?, size?, location?,
//          status?, imageUrl?, features? }, ... ]
// meta.json (one per subfolder)
//  └── same fields minus slug/imageUrl; folder name and folder images
//      fill those in.

/// One property entry as found in either file. A single lenient shape
/// covers both layouts.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub price: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
}
