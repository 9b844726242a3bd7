// src/domain/project.rs

/// A development project marketed on the site. Projects are richer than
/// individual listings (gallery, FAQs) and are not fed by the sheet or
/// drive adapters; the built-in set below is served until a CMS backs them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub price: String,
    pub size: String,
    pub location: String,
    /// Marketing copy ("Launching", "Ready"), not the buy/rent/land axis.
    pub status: String,
    pub image_url: String,
    pub highlights: Vec<String>,
    pub gallery: Vec<String>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

// The buying-process FAQs read the same under every project.
fn standard_faqs() -> Vec<Faq> {
    vec![
        faq(
            "What is the possession timeline?",
            "Immediate possession available for ready plots. Under-construction \
             plots will be ready in 12-18 months.",
        ),
        faq(
            "Are the titles verified?",
            "Yes, all our properties come with verified legal titles and proper \
             documentation.",
        ),
        faq(
            "What amenities are included?",
            "24/7 security, wide roads, street lights, water connection, sewage \
             system, and landscaped parks.",
        ),
        faq(
            "Is bank loan available?",
            "Yes, we have tie-ups with major banks for easy loan processing.",
        ),
    ]
}

pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            slug: "sunrise-valley".to_string(),
            title: "Sunrise Valley".to_string(),
            subtitle: "Premium residential plots with all amenities and clear titles"
                .to_string(),
            tagline: "Premium residential plots in a gated community".to_string(),
            price: "45L".to_string(),
            size: "5-10 kanal".to_string(),
            location: "Downtown".to_string(),
            status: "Launching".to_string(),
            image_url: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800"
                .to_string(),
            highlights: vec![
                "Gated community".to_string(),
                "24/7 security".to_string(),
                "Near highway".to_string(),
            ],
            gallery: vec![
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800".to_string(),
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800".to_string(),
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800".to_string(),
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800".to_string(),
                "https://images.unsplash.com/photo-1600573472550-8090b5e0745e?w=800".to_string(),
                "https://images.unsplash.com/photo-1600607687644-c7171b42498f?w=800".to_string(),
            ],
            faqs: standard_faqs(),
        },
        ProjectRecord {
            slug: "green-heights".to_string(),
            title: "Green Heights".to_string(),
            subtitle: "Luxury apartments with modern facilities and scenic views".to_string(),
            tagline: "Luxury apartment living with scenic views".to_string(),
            price: "75L".to_string(),
            size: "2-3 BHK".to_string(),
            location: "Suburbs".to_string(),
            status: "Ready".to_string(),
            image_url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800"
                .to_string(),
            highlights: vec![
                "Swimming pool".to_string(),
                "Gym".to_string(),
                "Kids play area".to_string(),
            ],
            gallery: vec![
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800".to_string(),
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800".to_string(),
                "https://images.unsplash.com/photo-1600607687644-c7171b42498f?w=800".to_string(),
            ],
            faqs: standard_faqs(),
        },
        ProjectRecord {
            slug: "royal-plaza".to_string(),
            title: "Royal Plaza".to_string(),
            subtitle: "Commercial spaces in prime location for businesses".to_string(),
            tagline: "High-visibility commercial spaces in the heart of town".to_string(),
            price: "1.2Cr".to_string(),
            size: "1000-2000 sqft".to_string(),
            location: "Downtown".to_string(),
            status: "Ready".to_string(),
            image_url: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800"
                .to_string(),
            highlights: vec![
                "High footfall".to_string(),
                "Parking".to_string(),
                "Prime location".to_string(),
            ],
            gallery: vec![
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800".to_string(),
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800".to_string(),
            ],
            faqs: standard_faqs(),
        },
    ]
}

pub fn find_project(slug: &str) -> Option<ProjectRecord> {
    sample_projects().into_iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::generate_slug;

    #[test]
    fn projects_carry_unique_valid_slugs_and_detail_content() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 3);

        for (i, project) in projects.iter().enumerate() {
            assert_eq!(generate_slug(&project.slug), project.slug);
            assert!(!project.gallery.is_empty());
            assert!(!project.faqs.is_empty());
            for other in &projects[i + 1..] {
                assert_ne!(project.slug, other.slug);
            }
        }
    }

    #[test]
    fn find_project_matches_on_slug() {
        let hit = find_project("green-heights");
        assert_eq!(hit.map(|p| p.title), Some("Green Heights".to_string()));
        assert!(find_project("no-such-project").is_none());
    }
}
