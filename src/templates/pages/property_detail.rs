// templates/pages/property_detail.rs

use crate::domain::property::PropertyRecord;
use crate::templates::{
    components::{enquiry_form, sticky_enquiry},
    site_layout,
};
use maud::{html, Markup};

pub fn property_detail_page(property: &PropertyRecord, whatsapp_number: &str) -> Markup {
    site_layout(
        &property.title,
        html! {
            p class="muted" {
                a href="/properties" { "Properties" } " / " (property.title)
            }

            img class="detail-hero" src=(property.image_url) alt=(property.title);

            h1 { (property.title) }
            @if !property.subtitle.is_empty() {
                p class="muted" { (property.subtitle) }
            }

            ul class="facts" {
                li { strong { "Price" } (property.price) }
                li { strong { "Size" } (property.size) }
                li { strong { "Location" } (property.location) }
                li { strong { "Status" } (property.status.as_str()) }
            }

            @if !property.features.is_empty() {
                h2 { "Highlights" }
                ul class="features" {
                    @for feature in &property.features {
                        li { (feature) }
                    }
                }
            }

            h2 { "Enquire about this property" }
            (enquiry_form(&property.title, &property.slug))

            (sticky_enquiry(&property.title, &property.slug, whatsapp_number))
        },
    )
}
