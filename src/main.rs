use crate::config::SiteConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod config;
mod domain;
mod errors;
mod leads;
mod listing;
mod responses;
mod router;
mod sources;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = SiteConfig::from_env();

    match &config.google {
        Some(google) if google.spreadsheet_id.is_some() => {
            println!("Listing source: Google Sheets");
        }
        Some(google) if google.drive_root_folder_id.is_some() => {
            println!("Listing source: Google Drive folder");
        }
        _ => println!("No listing source configured, serving built-in samples"),
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .expect("valid bind address");
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &config) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
