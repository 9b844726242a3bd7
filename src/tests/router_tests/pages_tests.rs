// src/tests/router_tests/pages_tests.rs
//
// With no Google source configured the router serves the sample
// listings, so these run fully offline.

use crate::config::SiteConfig;
use crate::errors::ServerError;
use crate::router::handle;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(path: &str) -> Result<astra::Response, ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    handle(req, &SiteConfig::unconfigured())
}

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn home_page_shows_brand_and_featured_listings() {
    let resp = get("/").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Cloud Seven Realty"));
    assert!(body.contains("Luxury Villa in Downtown"));
    assert!(body.contains("/properties/luxury-villa-downtown"));
    // featured projects sit alongside the listings
    assert!(body.contains("Sunrise Valley"));
    assert!(body.contains("/projects/sunrise-valley"));
}

#[test]
fn nav_links_every_section() {
    let body = body_string(get("/").expect("Failed to handle request"));
    for href in ["/projects", "/properties", "/areas", "/contact"] {
        assert!(body.contains(&format!("href=\"{href}\"")), "missing {href}");
    }
}

#[test]
fn projects_page_lists_the_three_projects() {
    let resp = get("/projects").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sunrise Valley"));
    assert!(body.contains("Green Heights"));
    assert!(body.contains("Royal Plaza"));
    assert!(body.contains("/projects/royal-plaza"));
    assert!(body.contains("3 projects"));
}

#[test]
fn project_detail_shows_gallery_faqs_and_sticky_enquiry() {
    let resp = get("/projects/sunrise-valley").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Premium residential plots in a gated community"));
    assert!(body.contains("photo-1600607687939-ce8a6c25118c"));
    assert!(body.contains("What is the possession timeline?"));
    assert!(body.contains("id=\"sticky-enquiry\""));
    assert!(body.contains("data-project-slug=\"sunrise-valley\""));
    assert!(body.contains("https://wa.me/919876543210"));
}

#[test]
fn unknown_project_slug_is_a_404() {
    assert!(matches!(
        get("/projects/no-such-project"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn areas_page_lists_every_area() {
    let resp = get("/areas").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Downtown"));
    assert!(body.contains("Suburbs"));
    assert!(body.contains("Highway"));
    assert!(body.contains("Peaceful residential areas with modern amenities"));
}

#[test]
fn properties_page_lists_all_samples() {
    let resp = get("/properties").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury Villa in Downtown"));
    assert!(body.contains("Cozy Apartment in Suburbs"));
    assert!(body.contains("Prime Land Near Highway"));
    assert!(body.contains("3 listings available"));
}

#[test]
fn detail_page_resolves_by_slug() {
    let resp = get("/properties/cozy-apartment-suburbs").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("2BHK furnished apartment ready to move in"));
    assert!(body.contains("Near metro"));
    // the enquiry form carries the listing context
    assert!(body.contains("data-project-slug=\"cozy-apartment-suburbs\""));
    // the floating enquiry card rides along on detail pages
    assert!(body.contains("id=\"sticky-enquiry\""));
}

#[test]
fn unknown_slug_is_a_404() {
    assert!(matches!(
        get("/properties/no-such-listing"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn unknown_route_is_a_404() {
    assert!(matches!(get("/admin"), Err(ServerError::NotFound)));
}

#[test]
fn contact_page_has_the_enquiry_form() {
    let resp = get("/contact").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("form class=\"enquiry\""));
    assert!(body.contains("/api/lead"));
}

#[test]
fn sitemap_covers_static_pages_projects_and_listings() {
    let resp = get("/sitemap.xml").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with("<?xml"));
    assert!(body.contains("<loc>http://localhost:3000/projects</loc>"));
    assert!(body.contains("<loc>http://localhost:3000/projects/green-heights</loc>"));
    assert!(body.contains("<loc>http://localhost:3000/properties</loc>"));
    assert!(body.contains("<loc>http://localhost:3000/properties/prime-land-highway</loc>"));
    assert!(body.contains("<loc>http://localhost:3000/areas</loc>"));
    assert!(body.contains("<loc>http://localhost:3000/contact</loc>"));
}
