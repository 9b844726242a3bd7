use maud::{html, Markup, PreEscaped, DOCTYPE};

// Single stylesheet, inlined so the binary serves complete pages with no
// static file handling.
const SITE_CSS: &str = r#"
:root { --ink: #1f2937; --accent: #524ed2; --muted: #6b7280; }
* { box-sizing: border-box; }
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; color: var(--ink); }
a { color: inherit; text-decoration: none; }
header.site { display: flex; align-items: center; justify-content: space-between;
  padding: 0.8rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.12); }
header.site nav ul { display: flex; gap: 1.2rem; list-style: none; margin: 0; padding: 0; }
header.site nav a:hover { color: var(--accent); }
main { max-width: 1080px; margin: 0 auto; padding: 1.5rem; }
.hero { padding: 3rem 0 2rem; }
.hero h1 { font-size: 2.2rem; margin: 0 0 0.5rem; }
.hero p { color: var(--muted); max-width: 40rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.2rem; }
.card { display: block; border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden; }
.card img { width: 100%; height: 180px; object-fit: cover; display: block; }
.card-body { padding: 0.8rem 1rem 1rem; }
.card-body h3 { margin: 0.3rem 0; }
.badge { display: inline-block; background: var(--accent); color: #fff;
  font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 999px; }
.muted { color: var(--muted); }
.facts { display: flex; gap: 1.5rem; flex-wrap: wrap; padding: 0; list-style: none; }
.facts li strong { display: block; }
.detail-hero { width: 100%; max-height: 420px; object-fit: cover; border-radius: 8px; }
.features { columns: 2; }
.enquiry { max-width: 26rem; display: grid; gap: 0.6rem; margin-top: 1rem; }
.enquiry input { padding: 0.6rem; border: 1px solid #d1d5db; border-radius: 6px; }
.enquiry button { padding: 0.7rem; border: 0; border-radius: 6px;
  background: var(--accent); color: #fff; cursor: pointer; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 0.8rem; }
.gallery img { width: 100%; height: 150px; object-fit: cover; border-radius: 6px; }
details.faq { border: 1px solid #e5e7eb; border-radius: 8px; padding: 0.8rem 1rem; margin-top: 0.8rem; }
details.faq summary { font-weight: bold; cursor: pointer; }
.sticky-enquiry { position: fixed; bottom: 1.5rem; right: 1.5rem; width: 22rem;
  max-width: calc(100vw - 2rem); background: #fff; border: 1px solid #e5e7eb;
  border-radius: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.18);
  padding: 1rem 1.2rem; display: none; }
.sticky-enquiry.visible { display: block; }
.sticky-enquiry h3 { margin: 0 0 0.2rem; }
.sticky-enquiry .whatsapp { display: block; margin-top: 0.8rem; text-align: center;
  padding: 0.6rem; border-radius: 6px; background: #22c55e; color: #fff; }
footer.site { border-top: 1px solid #e5e7eb; margin-top: 3rem;
  padding: 1.5rem; text-align: center; color: var(--muted); }
"#;

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Cloud Seven Realty" }
                meta name="description"
                    content="Premium projects and properties with clear titles, an on-ground team, and instant support.";
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                header class="site" {
                    a href="/" { h3 { "Cloud Seven Realty" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/projects" { "Projects" } }
                            li { a href="/properties" { "Properties" } }
                            li { a href="/areas" { "Areas" } }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                }
                main { (content) }
                footer class="site" {
                    p { "Cloud Seven Realty · clear titles, honest pricing, on-ground team" }
                }
            }
        }
    }
}
