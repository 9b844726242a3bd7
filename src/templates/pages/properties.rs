// templates/pages/properties.rs

use crate::domain::property::PropertyRecord;
use crate::templates::{components::property_card, site_layout};
use maud::{html, Markup};

pub fn properties_page(listing: &[PropertyRecord]) -> Markup {
    site_layout(
        "Properties",
        html! {
            section class="hero" {
                h1 { "Properties" }
                p class="muted" { (listing.len()) " listings available" }
            }

            div class="grid" {
                @for property in listing {
                    (property_card(property))
                }
            }
        },
    )
}
