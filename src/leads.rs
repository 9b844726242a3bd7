// src/leads.rs
//
// Lead capture endpoint. Validates and acknowledges; the payload only
// goes to the log for now (no CRM, no mailer), which is the documented
// launch behavior of this site.

use crate::responses::{json_response, ResultResp};
use astra::Request;
use serde::Deserialize;
use serde_json::json;
use std::io::Read;

/// Enquiry payload from the contact form / sticky widget. Only `name`
/// and `contact` are required; the rest is context for the log line.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeadPayload {
    pub name: String,
    pub contact: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "projectSlug")]
    pub project_slug: String,
    #[serde(rename = "preferredTime")]
    pub preferred_time: String,
    pub message: String,
}

/// POST /api/lead
pub fn submit_lead(req: Request) -> ResultResp {
    let mut body = Vec::new();
    if req.into_body().reader().read_to_end(&mut body).is_err() {
        return submit_failed();
    }

    let lead: LeadPayload = match serde_json::from_slice(&body) {
        Ok(lead) => lead,
        Err(e) => {
            eprintln!("Error processing lead: {e}");
            return submit_failed();
        }
    };

    if lead.name.trim().is_empty() || lead.contact.trim().is_empty() {
        return json_response(
            400,
            json!({ "success": false, "message": "Name and contact are required" }),
        );
    }

    println!(
        "📨 Lead received at {}: {:?}",
        chrono::Utc::now().to_rfc3339(),
        lead
    );

    json_response(
        200,
        json!({ "success": true, "message": "Lead submitted successfully" }),
    )
}

fn submit_failed() -> ResultResp {
    json_response(
        500,
        json!({ "success": false, "message": "Failed to submit lead" }),
    )
}
