// sources/auth.rs

use crate::config::GoogleConfig;
use crate::sources::error::SourceError;
use crate::sources::models::TokenResponse;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::Serialize;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Exchange a signed service-account assertion for a bearer token.
/// One token per listing fetch; nothing is cached between requests.
pub fn access_token(
    client: &Client,
    config: &GoogleConfig,
    scope: &str,
) -> Result<String, SourceError> {
    let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
        .map_err(|e| SourceError::Auth(format!("bad service account key: {e}")))?;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        iss: &config.service_account_email,
        scope,
        aud: TOKEN_URL,
        iat: now,
        exp: now + 3600,
    };

    let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| SourceError::Auth(format!("JWT signing failed: {e}")))?;

    let resp = client
        .post(TOKEN_URL)
        .form(&[
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let status = resp.status();
    let text = resp.text().map_err(|e| SourceError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(SourceError::Auth(format!(
            "token endpoint HTTP {status}: {text}"
        )));
    }

    let token: TokenResponse =
        serde_json::from_str(&text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

    Ok(token.access_token)
}
