// templates/pages/project_detail.rs

use crate::domain::project::ProjectRecord;
use crate::templates::{components::sticky_enquiry, site_layout};
use maud::{html, Markup};

pub fn project_detail_page(project: &ProjectRecord, whatsapp_number: &str) -> Markup {
    site_layout(
        &project.title,
        html! {
            p class="muted" {
                a href="/projects" { "Projects" } " / " (project.title)
            }

            img class="detail-hero" src=(project.image_url) alt=(project.title);

            span class="badge" { (project.status) }
            h1 { (project.title) }
            p class="muted" { (project.tagline) }

            ul class="facts" {
                li { strong { "Price" } (project.price) }
                li { strong { "Size" } (project.size) }
                li { strong { "Location" } (project.location) }
            }

            @if !project.highlights.is_empty() {
                h2 { "Project highlights" }
                ul class="features" {
                    @for highlight in &project.highlights {
                        li { (highlight) }
                    }
                }
            }

            @if !project.gallery.is_empty() {
                h2 { "Gallery" }
                div class="gallery" {
                    @for (i, url) in project.gallery.iter().enumerate() {
                        img src=(url) alt={ (project.title) " view " ((i + 1)) };
                    }
                }
            }

            @if !project.faqs.is_empty() {
                h2 { "Frequently asked questions" }
                @for faq in &project.faqs {
                    details class="faq" {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }

            (sticky_enquiry(&project.title, &project.slug, whatsapp_number))
        },
    )
}
