//! Built-in fallback content, shown with a "sample data" banner whenever the
//! remote content API is unreachable. Content pages degrade to these instead
//! of erroring out.

use crate::models::{Brochure, PortfolioItem, Product};

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "sample-roman-blinds".to_string(),
            category: "blinds".to_string(),
            name: "Roman Blinds".to_string(),
            description: "Soft, tailored folds in premium fabrics, made to measure for any window."
                .to_string(),
            image: Some("/static/img/samples/roman-blinds.jpg".to_string()),
            features: Some(vec![
                "Blackout lining".to_string(),
                "Thermal insulation".to_string(),
                "Made to measure".to_string(),
            ]),
            created_at: None,
            updated_at: None,
        },
        Product {
            id: "sample-curtains".to_string(),
            category: "curtains".to_string(),
            name: "Bespoke Curtains".to_string(),
            description: "Hand-finished curtains in a curated range of linens, velvets and silks."
                .to_string(),
            image: Some("/static/img/samples/curtains.jpg".to_string()),
            features: Some(vec![
                "Hand-sewn headings".to_string(),
                "Interlined options".to_string(),
            ]),
            created_at: None,
            updated_at: None,
        },
        Product {
            id: "sample-commercial".to_string(),
            category: "commercial".to_string(),
            name: "Commercial Shading".to_string(),
            description: "Contract-grade blinds and screening for offices, hotels and restaurants."
                .to_string(),
            image: Some("/static/img/samples/commercial.jpg".to_string()),
            features: Some(vec![
                "Flame-retardant fabrics".to_string(),
                "Motorised systems".to_string(),
            ]),
            created_at: None,
            updated_at: None,
        },
    ]
}

pub fn portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            id: "sample-kensington".to_string(),
            title: "Kensington Townhouse".to_string(),
            description: Some(
                "Full-height interlined curtains and sheer roller blinds across four floors."
                    .to_string(),
            ),
            image: Some("/static/img/samples/kensington.jpg".to_string()),
            client: Some("Private client".to_string()),
            location: Some("London".to_string()),
            category: Some("residential".to_string()),
            created_at: None,
            updated_at: None,
        },
        PortfolioItem {
            id: "sample-shoreditch".to_string(),
            title: "Shoreditch Boutique Hotel".to_string(),
            description: Some(
                "Sixty-two rooms of blackout roman blinds with coordinated soft furnishings."
                    .to_string(),
            ),
            image: Some("/static/img/samples/shoreditch.jpg".to_string()),
            client: Some("Harlow Hotels".to_string()),
            location: Some("London".to_string()),
            category: Some("hospitality".to_string()),
            created_at: None,
            updated_at: None,
        },
    ]
}

pub fn brochures() -> Vec<Brochure> {
    vec![Brochure {
        id: "sample-collection".to_string(),
        title: "The Nowest Collection".to_string(),
        description: "Our current fabric ranges, finishes and fitting options.".to_string(),
        pdf_path: "/static/brochures/nowest-collection.pdf".to_string(),
        created_at: None,
        updated_at: None,
    }]
}
