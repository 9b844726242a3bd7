// templates/pages/contact.rs

use crate::templates::{components::enquiry_form, site_layout};
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    site_layout(
        "Contact",
        html! {
            section class="hero" {
                h1 { "Talk to us" }
                p {
                    "Tell us what you are looking for and our on-ground team "
                    "will call you back the same day."
                }
            }

            (enquiry_form("", ""))
        },
    )
}
