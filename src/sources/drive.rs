// sources/drive.rs
//
// Hierarchical adapter: a Drive folder either holds one consolidated
// `properties.json` manifest, or one subfolder per property with a
// `meta.json` and the listing photos. The manifest wins when present.

use crate::config::GoogleConfig;
use crate::domain::property::{PropertyRecord, PLACEHOLDER_IMAGE};
use crate::sources::auth;
use crate::sources::error::SourceError;
use crate::sources::models::{DriveFile, FileList, RawEntry};
use reqwest::blocking::Client;
use std::time::Duration;

const MANIFEST_NAME: &str = "properties.json";
const META_NAME: &str = "meta.json";
const FOLDER_MIME: &str = "application/vnd.google-apps.folder";

/// The two Drive calls the walk needs, kept behind a trait so the
/// traversal logic runs against an in-memory fake in tests.
pub trait DriveApi {
    fn list_files(
        &self,
        query: &str,
        order_by: Option<&str>,
        page_size: u32,
    ) -> Result<Vec<DriveFile>, SourceError>;

    fn download(&self, file_id: &str) -> Result<String, SourceError>;
}

pub struct GoogleDriveApi {
    client: Client,
    token: String,
}

impl GoogleDriveApi {
    pub fn connect(config: &GoogleConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let token = auth::access_token(&client, config, auth::DRIVE_SCOPE)?;

        Ok(Self { client, token })
    }

    fn read_body(resp: reqwest::blocking::Response) -> Result<String, SourceError> {
        let status = resp.status();
        let text = resp.text().map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Network(format!(
                "Drive API HTTP {status}: {text}"
            )));
        }

        Ok(text)
    }
}

impl DriveApi for GoogleDriveApi {
    fn list_files(
        &self,
        query: &str,
        order_by: Option<&str>,
        page_size: u32,
    ) -> Result<Vec<DriveFile>, SourceError> {
        let page_size = page_size.to_string();
        let mut request = self
            .client
            .get("https://www.googleapis.com/drive/v3/files")
            .bearer_auth(&self.token)
            .query(&[
                ("q", query),
                ("fields", "files(id, name, mimeType)"),
                ("pageSize", page_size.as_str()),
            ]);

        if let Some(order) = order_by {
            request = request.query(&[("orderBy", order)]);
        }

        let text = Self::read_body(
            request
                .send()
                .map_err(|e| SourceError::Network(e.to_string()))?,
        )?;

        let list: FileList =
            serde_json::from_str(&text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

        Ok(list.files)
    }

    fn download(&self, file_id: &str) -> Result<String, SourceError> {
        let url = format!("https://www.googleapis.com/drive/v3/files/{file_id}");
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("alt", "media")])
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Self::read_body(resp)
    }
}

pub struct DriveSource<A: DriveApi> {
    api: A,
    root_folder_id: String,
}

impl DriveSource<GoogleDriveApi> {
    pub fn connect(config: &GoogleConfig) -> Result<Self, SourceError> {
        let root_folder_id = config
            .drive_root_folder_id
            .clone()
            .ok_or_else(|| SourceError::Config("no drive root folder configured".into()))?;

        Ok(Self::new(GoogleDriveApi::connect(config)?, root_folder_id))
    }
}

impl<A: DriveApi> DriveSource<A> {
    pub fn new(api: A, root_folder_id: impl Into<String>) -> Self {
        Self {
            api,
            root_folder_id: root_folder_id.into(),
        }
    }

    /// Full listing fetch. Failures that span the whole source are logged
    /// and absorbed into an empty list, same policy as the sheet adapter.
    pub fn fetch_properties(&self) -> Vec<PropertyRecord> {
        match self.try_fetch() {
            Ok(properties) => properties,
            Err(e) => {
                eprintln!("⚠️ Drive fetch failed: {e}");
                Vec::new()
            }
        }
    }

    fn try_fetch(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        // A consolidated manifest at the root wins over the subfolder
        // layout; no folder scan happens when one exists.
        if let Some(manifest) = self.find_in_folder(&self.root_folder_id, MANIFEST_NAME)? {
            return self.read_manifest(&manifest.id);
        }

        self.read_subfolders()
    }

    fn find_in_folder(
        &self,
        folder_id: &str,
        name: &str,
    ) -> Result<Option<DriveFile>, SourceError> {
        let query = format!("'{folder_id}' in parents and name='{name}' and trashed=false");
        let mut files = self.api.list_files(&query, None, 1)?;

        Ok(if files.is_empty() {
            None
        } else {
            Some(files.remove(0))
        })
    }

    fn read_manifest(&self, file_id: &str) -> Result<Vec<PropertyRecord>, SourceError> {
        let content = self.api.download(file_id)?;

        let json: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| SourceError::JsonParse(format!("{MANIFEST_NAME}: {e}")))?;

        let entries = match json {
            serde_json::Value::Array(entries) => entries,
            _ => {
                return Err(SourceError::UnexpectedShape(format!(
                    "{MANIFEST_NAME} is not an array"
                )))
            }
        };

        // Entries normalize independently; one malformed element loses
        // that element, not the manifest.
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value::<RawEntry>(value) {
                Ok(entry) => Some(PropertyRecord::from_raw(entry, i + 1)),
                Err(e) => {
                    eprintln!("⚠️ {MANIFEST_NAME} entry {} skipped: {e}", i + 1);
                    None
                }
            })
            .collect())
    }

    fn read_subfolders(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        let query = format!(
            "'{}' in parents and mimeType='{FOLDER_MIME}' and trashed=false",
            self.root_folder_id
        );
        let folders = self.api.list_files(&query, None, 100)?;

        // Sequential, one folder at a time. Listings are few and the
        // order from Drive carries no meaning here.
        let mut properties = Vec::new();
        for (i, folder) in folders.into_iter().enumerate() {
            match self.process_folder(&folder, i + 1) {
                Ok(Some(property)) => properties.push(property),
                Ok(None) => {} // already warned
                Err(e) => eprintln!("⚠️ Skipping folder '{}': {e}", folder.name),
            }
        }

        Ok(properties)
    }

    /// One subfolder = one property: parse its `meta.json`, then point
    /// `imageUrl` at the first image in the folder by name. A folder
    /// without `meta.json` yields no record and the walk continues.
    fn process_folder(
        &self,
        folder: &DriveFile,
        position: usize,
    ) -> Result<Option<PropertyRecord>, SourceError> {
        let meta_file = match self.find_in_folder(&folder.id, META_NAME)? {
            Some(file) => file,
            None => {
                eprintln!("⚠️ No {META_NAME} in folder '{}', skipping", folder.name);
                return Ok(None);
            }
        };

        let content = self.api.download(&meta_file.id)?;
        let mut meta: RawEntry = serde_json::from_str(&content)
            .map_err(|e| SourceError::JsonParse(format!("{META_NAME}: {e}")))?;

        if meta.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            meta.title = Some(folder.name.clone());
        }

        meta.image_url = Some(match self.first_image(&folder.id)? {
            Some(image) => format!("https://drive.google.com/uc?export=view&id={}", image.id),
            None => PLACEHOLDER_IMAGE.to_string(),
        });

        Ok(Some(PropertyRecord::from_raw(meta, position)))
    }

    fn first_image(&self, folder_id: &str) -> Result<Option<DriveFile>, SourceError> {
        let query =
            format!("'{folder_id}' in parents and mimeType contains 'image/' and trashed=false");
        let mut files = self.api.list_files(&query, Some("name"), 1)?;

        Ok(if files.is_empty() {
            None
        } else {
            Some(files.remove(0))
        })
    }
}
