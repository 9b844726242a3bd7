// src/domain/slug.rs

/// Generate a URL-friendly slug from a display title.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single hyphen and trims hyphens at both ends. Idempotent. Returns an
/// empty string for all-punctuation titles; callers use [`slug_or_fallback`]
/// when they need a guaranteed non-empty identifier.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug for a record at 1-based `position`, for titles that slugify to
/// nothing. The upstream sheet/folder is uncontrolled, so this happens.
pub fn slug_or_fallback(title: &str, position: usize) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        format!("property-{position}")
    } else {
        slug
    }
}
