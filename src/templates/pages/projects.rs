// templates/pages/projects.rs

use crate::domain::project::ProjectRecord;
use crate::templates::{components::project_card, site_layout};
use maud::{html, Markup};

pub fn projects_page(projects: &[ProjectRecord]) -> Markup {
    site_layout(
        "Our Projects",
        html! {
            section class="hero" {
                h1 { "Our Projects" }
                p {
                    "Discover premium real estate projects with verified titles "
                    "and on-ground support."
                }
                p class="muted" { (projects.len()) " projects" }
            }

            div class="grid" {
                @for project in projects {
                    (project_card(project))
                }
            }
        },
    )
}
