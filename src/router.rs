use crate::config::SiteConfig;
use crate::domain::project;
use crate::errors::ServerError;
use crate::leads;
use crate::listing;
use crate::responses::{html_response, xml_response, ResultResp};
use crate::templates::pages;
use astra::Request;

pub fn handle(req: Request, config: &SiteConfig) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(
            &listing::get_current_listing(config),
            &project::sample_projects(),
        )),

        ("GET", "/projects") => html_response(pages::projects_page(&project::sample_projects())),

        ("GET", "/properties") => {
            html_response(pages::properties_page(&listing::get_current_listing(config)))
        }

        ("GET", "/areas") => html_response(pages::areas_page()),

        ("GET", "/contact") => html_response(pages::contact_page()),

        ("GET", "/sitemap.xml") => xml_response(sitemap_xml(config)),

        ("POST", "/api/lead") => leads::submit_lead(req),

        ("GET", p) if p.starts_with("/projects/") => {
            let slug = p.trim_start_matches("/projects/");
            match project::find_project(slug) {
                Some(project) => html_response(pages::project_detail_page(
                    &project,
                    &config.whatsapp_number,
                )),
                None => Err(ServerError::NotFound),
            }
        }

        ("GET", p) if p.starts_with("/properties/") => {
            let slug = p.trim_start_matches("/properties/");
            match listing::find_by_slug(config, slug) {
                Some(property) => html_response(pages::property_detail_page(
                    &property,
                    &config.whatsapp_number,
                )),
                None => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Static pages plus one URL per project and per current listing.
/// Regenerated per request like everything else; crawlers hit this rarely.
fn sitemap_xml(config: &SiteConfig) -> String {
    let base = config.site_url.trim_end_matches('/');

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for path in ["/", "/projects", "/properties", "/areas", "/contact"] {
        xml.push_str(&format!("  <url><loc>{base}{path}</loc></url>\n"));
    }

    for project in project::sample_projects() {
        xml.push_str(&format!(
            "  <url><loc>{base}/projects/{}</loc></url>\n",
            project.slug
        ));
    }

    for property in listing::get_current_listing(config) {
        xml.push_str(&format!(
            "  <url><loc>{base}/properties/{}</loc></url>\n",
            property.slug
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}
