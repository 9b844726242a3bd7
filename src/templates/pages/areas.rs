// templates/pages/areas.rs

use crate::templates::site_layout;
use maud::{html, Markup};

// Name, blurb, project count, property count. Static marketing copy,
// like the project set.
const AREAS: [(&str, &str, u32, u32); 3] = [
    (
        "Downtown",
        "Prime location with commercial and residential opportunities",
        5,
        12,
    ),
    (
        "Suburbs",
        "Peaceful residential areas with modern amenities",
        3,
        8,
    ),
    (
        "Highway",
        "Strategic locations near major highways",
        4,
        10,
    ),
];

pub fn areas_page() -> Markup {
    site_layout(
        "Explore Areas",
        html! {
            section class="hero" {
                h1 { "Explore Areas" }
                p { "Discover real estate opportunities across different locations." }
            }

            div class="grid" {
                @for (name, blurb, projects, properties) in AREAS {
                    div class="card" {
                        div class="card-body" {
                            h3 { (name) }
                            p class="muted" { (blurb) }
                            p {
                                strong { (projects) } " projects · "
                                strong { (properties) } " properties"
                            }
                        }
                    }
                }
            }
        },
    )
}
