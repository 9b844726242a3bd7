use crate::domain::project::ProjectRecord;
use crate::domain::property::PropertyRecord;
use maud::{html, Markup, PreEscaped};

pub fn property_card(property: &PropertyRecord) -> Markup {
    html! {
        a class="card" href={ "/properties/" (property.slug) } {
            img src=(property.image_url) alt=(property.title);
            div class="card-body" {
                span class="badge" { (property.status.as_str()) }
                h3 { (property.title) }
                p class="muted" { (property.subtitle) }
                p {
                    strong { (property.price) }
                    " · " (property.size)
                    " · " (property.location)
                }
            }
        }
    }
}

pub fn project_card(project: &ProjectRecord) -> Markup {
    html! {
        a class="card" href={ "/projects/" (project.slug) } {
            img src=(project.image_url) alt=(project.title);
            div class="card-body" {
                span class="badge" { (project.status) }
                h3 { (project.title) }
                p class="muted" { (project.subtitle) }
                p {
                    strong { (project.price) }
                    " · " (project.size)
                    " · " (project.location)
                }
            }
        }
    }
}

// Serializes the form fields plus the project context into the JSON shape
// /api/lead expects, and swaps the status line in place. Bound once at the
// document so a page can carry several enquiry forms.
const ENQUIRY_SCRIPT: &str = r#"
if (!window.enquiryBound) {
  window.enquiryBound = true;
  document.addEventListener('submit', async function (e) {
    var form = e.target;
    if (!form.classList || !form.classList.contains('enquiry')) return;
    e.preventDefault();
    var data = Object.fromEntries(new FormData(form));
    data.projectName = form.dataset.projectName || '';
    data.projectSlug = form.dataset.projectSlug || '';
    data.timestamp = new Date().toISOString();
    var status = form.querySelector('.enquiry-status');
    try {
      var res = await fetch('/api/lead', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(data)
      });
      var body = await res.json();
      status.textContent = body.message;
      if (body.success) form.reset();
    } catch (err) {
      status.textContent = 'Something went wrong, please call us instead.';
    }
  });
}
"#;

/// Lead-capture form. `project_name`/`project_slug` ride along in the
/// payload so the log shows which listing the enquiry came from.
pub fn enquiry_form(project_name: &str, project_slug: &str) -> Markup {
    html! {
        form class="enquiry" data-project-name=(project_name) data-project-slug=(project_slug) {
            input name="name" placeholder="Your name" required;
            input name="contact" placeholder="Phone or email" required;
            input name="preferredTime" placeholder="Preferred call time (optional)";
            button type="submit" { "Request a callback" }
            p class="enquiry-status muted" {}
        }
        script { (PreEscaped(ENQUIRY_SCRIPT)) }
    }
}

// Reveals the widget once the visitor has scrolled 40% of the page.
const STICKY_SCRIPT: &str = r#"
(function () {
  var widget = document.getElementById('sticky-enquiry');
  if (!widget) return;
  window.addEventListener('scroll', function () {
    var max = document.documentElement.scrollHeight - window.innerHeight;
    var percent = max > 0 ? (window.scrollY / max) * 100 : 0;
    widget.classList.toggle('visible', percent > 40);
  });
})();
"#;

/// Floating enquiry card shown on detail pages after the visitor scrolls
/// past the hero, with a WhatsApp shortcut for people who skip forms.
pub fn sticky_enquiry(project_name: &str, project_slug: &str, whatsapp_number: &str) -> Markup {
    let message = if project_name.is_empty() {
        "Hi, I'm interested in learning more about your properties".to_string()
    } else {
        format!("Hi, I'm interested in {project_name}. Can you provide more details?")
    };
    let whatsapp_link = format!(
        "https://wa.me/{whatsapp_number}?text={}",
        urlencoding::encode(&message)
    );

    html! {
        div id="sticky-enquiry" class="sticky-enquiry" {
            h3 {
                @if project_name.is_empty() { "Get in Touch" }
                @else { "Enquire about " (project_name) }
            }
            p class="muted" { "We'll respond within 24 hours" }
            (enquiry_form(project_name, project_slug))
            a class="whatsapp" href=(whatsapp_link) target="_blank" rel="noopener noreferrer" {
                "Chat on WhatsApp"
            }
        }
        script { (PreEscaped(STICKY_SCRIPT)) }
    }
}
