// src/domain/samples.rs

use crate::domain::property::{PropertyRecord, Status};

/// Built-in listings served whenever no live source yields results —
/// missing credentials, a dead network, or a genuinely empty sheet all
/// land here so visitors never see an error page.
pub fn sample_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            slug: "luxury-villa-downtown".to_string(),
            title: "Luxury Villa in Downtown".to_string(),
            subtitle: "Spacious 4BHK villa with garden and parking".to_string(),
            price: "2.5Cr".to_string(),
            size: "3500 sqft".to_string(),
            location: "Downtown".to_string(),
            status: Status::Buy,
            image_url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800"
                .to_string(),
            features: vec![
                "4 BHK".to_string(),
                "Garden".to_string(),
                "Parking".to_string(),
                "Modern amenities".to_string(),
            ],
        },
        PropertyRecord {
            slug: "cozy-apartment-suburbs".to_string(),
            title: "Cozy Apartment in Suburbs".to_string(),
            subtitle: "2BHK furnished apartment ready to move in".to_string(),
            price: "25K/month".to_string(),
            size: "1200 sqft".to_string(),
            location: "Suburbs".to_string(),
            status: Status::Rent,
            image_url: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800"
                .to_string(),
            features: vec![
                "Furnished".to_string(),
                "2 BHK".to_string(),
                "Ready to move".to_string(),
                "Near metro".to_string(),
            ],
        },
        PropertyRecord {
            slug: "prime-land-highway".to_string(),
            title: "Prime Land Near Highway".to_string(),
            subtitle: "Agricultural land with road access and water supply".to_string(),
            price: "35L".to_string(),
            size: "2 kanal".to_string(),
            location: "Highway".to_string(),
            status: Status::Land,
            image_url: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=800"
                .to_string(),
            features: vec![
                "Road access".to_string(),
                "Water".to_string(),
                "15 min to city".to_string(),
                "Clear title".to_string(),
            ],
        },
    ]
}
