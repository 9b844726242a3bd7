// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde_json::Value;

/// JSON body with an explicit status, used by the lead endpoint.
pub fn json_response(status: u16, value: Value) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(value.to_string()))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
