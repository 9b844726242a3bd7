// templates/pages/home.rs

use crate::domain::project::ProjectRecord;
use crate::domain::property::PropertyRecord;
use crate::templates::{
    components::{project_card, property_card},
    site_layout,
};
use maud::{html, Markup};

pub fn home_page(listing: &[PropertyRecord], projects: &[ProjectRecord]) -> Markup {
    site_layout(
        "Premium Projects & Properties",
        html! {
            section class="hero" {
                h1 { "Find your next address with Cloud Seven Realty" }
                p {
                    "Hand-picked villas, apartments and plots with clear titles, "
                    "honest pricing and a team that picks up the phone."
                }
            }

            section {
                h2 { "Featured projects" }
                div class="grid" {
                    @for project in projects.iter().take(3) {
                        (project_card(project))
                    }
                }
                p { a href="/projects" { "See all projects →" } }
            }

            section {
                h2 { "Featured properties" }
                div class="grid" {
                    @for property in listing.iter().take(3) {
                        (property_card(property))
                    }
                }
                p { a href="/properties" { "Browse all properties →" } }
            }
        },
    )
}
