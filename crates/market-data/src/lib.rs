#![deny(warnings)]

//! Curated market dataset for the HANDOFF estates site.
//!
//! Everything here is fixed editorial data: the tracked zones, the
//! signature listings, the ticker and credential figures. Constructors
//! return fresh owned values; nothing is cached or mutated.

use chrono::NaiveDate;
use estate_core::{
    Catalog, FirmStat, GeoPoint, ListingStatus, MarketPulse, Property, PropertyCategory,
    PropertyId, PropertySpecs, TickerItem, TickerKind, ZoneId, ZoneMetrics, ZoneProfile,
};
use rust_decimal::Decimal;

/// Date of the current editorial cut.
pub fn catalog_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("static catalog date")
}

fn zone(id: &str, name: &str, appreciation_rate_pct: f64, rental_yield_pct: f64) -> ZoneProfile {
    ZoneProfile {
        id: ZoneId(id.to_string()),
        name: name.to_string(),
        appreciation_rate_pct,
        rental_yield_pct,
    }
}

/// Every zone the firm tracks, calculator zones included.
pub fn zones() -> Vec<ZoneProfile> {
    vec![
        zone("nordelta", "Nordelta", 6.5, 4.2),
        zone("palermo", "Palermo", 5.2, 3.8),
        zone("costa", "Costa Atlántica", 7.1, 5.1),
        zone("recoleta", "Recoleta", 4.8, 3.2),
        zone("puerto-madero", "Puerto Madero", 5.8, 4.5),
    ]
}

/// The fixed four-zone choice set offered by the investment calculator.
pub fn investment_zones() -> Vec<ZoneProfile> {
    const CALCULATOR_ZONES: [&str; 4] = ["nordelta", "palermo", "costa", "recoleta"];
    zones()
        .into_iter()
        .filter(|z| CALCULATOR_ZONES.contains(&z.id.0.as_str()))
        .collect()
}

fn metrics(
    zone: &str,
    five_year_growth_pct: f64,
    rental_yield_pct: f64,
    map_x_pct: f32,
    map_y_pct: f32,
    blurb: &str,
    active_projects: u32,
) -> ZoneMetrics {
    ZoneMetrics {
        zone: ZoneId(zone.to_string()),
        five_year_growth_pct,
        rental_yield_pct,
        map_x_pct,
        map_y_pct,
        blurb: blurb.to_string(),
        active_projects,
    }
}

/// Heatmap overlay entries, one per tracked zone.
pub fn zone_metrics() -> Vec<ZoneMetrics> {
    vec![
        metrics("nordelta", 28.0, 4.2, 65.0, 35.0, "Fastest-growing residential hub", 12),
        metrics("palermo", 18.0, 3.8, 45.0, 55.0, "Established premium district", 8),
        metrics("costa", 32.0, 5.1, 85.0, 75.0, "Coastal market with rising tourism upside", 15),
        metrics("recoleta", 15.0, 3.2, 40.0, 45.0, "Historic elegance", 5),
        metrics("puerto-madero", 22.0, 4.5, 50.0, 60.0, "Corporate investment corridor", 10),
    ]
}

/// The five signature listings.
pub fn signature_listings() -> Vec<Property> {
    vec![
        Property {
            id: PropertyId("residencia-velamar".to_string()),
            title: "Residencia Velamar".to_string(),
            location: "Puerto Madero, Buenos Aires".to_string(),
            price_usd: Decimal::new(4_200_000, 0),
            summary: "A glass-and-steel landmark that redefines contemporary urban luxury."
                .to_string(),
            narrative: "Double-height unit with 360-degree river views, imported Carrara \
                        marble finishes and full home automation. The architecture blends \
                        Japanese minimalism with state-of-the-art building systems."
                .to_string(),
            features: vec![
                "840 m² total".to_string(),
                "4 suites".to_string(),
                "Private wine cellar".to_string(),
                "Helipad".to_string(),
            ],
            amenities: vec![
                "Infinity pool".to_string(),
                "Smart home".to_string(),
                "24/7 security".to_string(),
                "Private gym".to_string(),
                "Climate-controlled cellar".to_string(),
                "Panoramic terrace".to_string(),
            ],
            specs: PropertySpecs {
                area_label: "840 m²".to_string(),
                bedrooms: 4,
                bathrooms: 5,
                parking: 3,
            },
            category: PropertyCategory::City,
            status: ListingStatus::Available,
            images: vec![
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=1920&q=80"
                    .to_string(),
            ],
            coordinates: GeoPoint {
                lat: -34.6131,
                lng: -58.3772,
            },
            highlights: vec![
                "International studio design".to_string(),
                "European materials throughout".to_string(),
                "Full home automation".to_string(),
            ],
        },
        Property {
            id: PropertyId("vanguard-estate".to_string()),
            title: "Vanguard Estate".to_string(),
            location: "Nordelta, Tigre".to_string(),
            price_usd: Decimal::new(2_800_000, 0),
            summary: "Biophilic design that brings the landscape into every room.".to_string(),
            narrative: "The structure unfolds around a central courtyard of native species. \
                        LEED Gold certified, with integrated solar panels and rainwater \
                        harvesting; floor-to-ceiling glazing frames the golf course and \
                        the lagoon."
                .to_string(),
            features: vec![
                "1,200 m² lot".to_string(),
                "Sustainable build".to_string(),
                "Olympic pool".to_string(),
                "Home cinema".to_string(),
            ],
            amenities: vec![
                "Heated pool".to_string(),
                "Premium barbecue lounge".to_string(),
                "Golf course view".to_string(),
                "24/7 security".to_string(),
                "Solar panels".to_string(),
                "Smart irrigation".to_string(),
            ],
            specs: PropertySpecs {
                area_label: "680 m² covered".to_string(),
                bedrooms: 5,
                bathrooms: 4,
                parking: 4,
            },
            category: PropertyCategory::Nature,
            status: ListingStatus::Available,
            images: vec![
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600607687644-c7171b42498b?w=1920&q=80"
                    .to_string(),
            ],
            coordinates: GeoPoint {
                lat: -34.4113,
                lng: -58.6444,
            },
            highlights: vec![
                "LEED Gold certification".to_string(),
                "Biophilic architecture".to_string(),
                "Golf frontage".to_string(),
            ],
        },
        Property {
            id: PropertyId("penthouse-recoleta".to_string()),
            title: "Penthouse Recoleta Heritage".to_string(),
            location: "Recoleta, Buenos Aires".to_string(),
            price_usd: Decimal::new(3_500_000, 0),
            summary: "A restored landmark building with bold contemporary interiors.".to_string(),
            narrative: "Set in an emblematic 1920s building, fully restored. Original French \
                        mouldings meet contemporary interventions under 4.5-meter ceilings, \
                        with European oak floors and a 180 m² terrace facing the Basilica."
                .to_string(),
            features: vec![
                "520 m² + 180 m² terrace".to_string(),
                "3 suites".to_string(),
                "Private library".to_string(),
                "Roof garden".to_string(),
            ],
            amenities: vec![
                "Terrace jacuzzi".to_string(),
                "Oak library".to_string(),
                "Bulthaup kitchen".to_string(),
                "Discreet security".to_string(),
                "Private elevator".to_string(),
                "Premium cellar".to_string(),
            ],
            specs: PropertySpecs {
                area_label: "520 m² + 180 m² terrace".to_string(),
                bedrooms: 3,
                bathrooms: 4,
                parking: 2,
            },
            category: PropertyCategory::City,
            status: ListingStatus::OffMarket,
            images: vec![
                "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600573472591-ee6c82bbc84d?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?w=1920&q=80"
                    .to_string(),
            ],
            coordinates: GeoPoint {
                lat: -34.5875,
                lng: -58.3927,
            },
            highlights: vec![
                "Restored heritage building".to_string(),
                "Original French mouldings".to_string(),
                "Prime cultural district".to_string(),
            ],
        },
        Property {
            id: PropertyId("casa-pilar-country".to_string()),
            title: "Casa Pilar Modern Oasis".to_string(),
            location: "Pilar Country Club".to_string(),
            price_usd: Decimal::new(1_800_000, 0),
            summary: "Modern architecture in a premium natural setting.".to_string(),
            narrative: "Designed around indoor-outdoor living: exposed concrete, timber and \
                        steel, a 15-meter counter-current pool, landscaped gardens and \
                        programmable lighting throughout."
                .to_string(),
            features: vec![
                "450 m² covered".to_string(),
                "15 m pool".to_string(),
                "Lounge + grill pavilion".to_string(),
                "Gated security".to_string(),
            ],
            amenities: vec![
                "Heated pool".to_string(),
                "Gourmet barbecue".to_string(),
                "24/7 security".to_string(),
                "Golf & polo access".to_string(),
                "Gym".to_string(),
                "Home office".to_string(),
            ],
            specs: PropertySpecs {
                area_label: "450 m² + 800 m² lot".to_string(),
                bedrooms: 4,
                bathrooms: 3,
                parking: 3,
            },
            category: PropertyCategory::Nature,
            status: ListingStatus::Available,
            images: vec![
                "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600585152915-d208bec867a1?w=1920&q=80"
                    .to_string(),
            ],
            coordinates: GeoPoint {
                lat: -34.4584,
                lng: -58.9014,
            },
            highlights: vec![
                "Renowned architecture studio".to_string(),
                "Smart home system".to_string(),
                "Landscaped garden".to_string(),
            ],
        },
        Property {
            id: PropertyId("departamento-belgrano".to_string()),
            title: "Departamento Belgrano Loft".to_string(),
            location: "Belgrano, Buenos Aires".to_string(),
            price_usd: Decimal::new(620_000, 0),
            summary: "Contemporary loft in a top-tier boutique building.".to_string(),
            narrative: "Open-plan two-room loft with integrated kitchen, terrace balcony with \
                        grill and a tree-lined outlook. Building amenities include a rooftop \
                        pool, gym and coworking in a high-demand residential pocket."
                .to_string(),
            features: vec![
                "95 m² total".to_string(),
                "2 rooms".to_string(),
                "Terrace balcony".to_string(),
                "Double parking".to_string(),
            ],
            amenities: vec![
                "Rooftop pool".to_string(),
                "Equipped gym".to_string(),
                "Coworking".to_string(),
                "24/7 security".to_string(),
                "Storage units".to_string(),
                "Bike parking".to_string(),
            ],
            specs: PropertySpecs {
                area_label: "95 m²".to_string(),
                bedrooms: 2,
                bathrooms: 2,
                parking: 1,
            },
            category: PropertyCategory::City,
            status: ListingStatus::Available,
            images: vec![
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1920&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1600573472591-ee6c82bbc84d?w=1920&q=80"
                    .to_string(),
            ],
            coordinates: GeoPoint {
                lat: -34.5627,
                lng: -58.4565,
            },
            highlights: vec![
                "New boutique building".to_string(),
                "Premium Belgrano pocket".to_string(),
                "Full amenity floor".to_string(),
            ],
        },
    ]
}

/// Entries of the scrolling market ticker.
pub fn ticker_items() -> Vec<TickerItem> {
    fn item(label: &str, value: &str, kind: TickerKind) -> TickerItem {
        TickerItem {
            label: label.to_string(),
            value: value.to_string(),
            kind,
        }
    }
    vec![
        item("Puerto Madero", "+2.4%", TickerKind::Growth),
        item("Recoleta", "USD 4.800/m²", TickerKind::Price),
        item("Average ROI", "12.5%", TickerKind::Roi),
        item("Palermo Chico", "USD 5.200/m²", TickerKind::Price),
        item("Annual appreciation", "+23%", TickerKind::Growth),
        item("Nordelta", "USD 3.100/m²", TickerKind::Price),
        item("Transactions 2025", "47 ops", TickerKind::Operations),
        item("Belgrano R", "+1.8%", TickerKind::Growth),
    ]
}

/// Counter targets for the firm-credentials strip.
pub fn firm_stats() -> Vec<FirmStat> {
    vec![
        FirmStat {
            value: 12,
            prefix: None,
            suffix: "+".to_string(),
            label: "Years of track record".to_string(),
        },
        FirmStat {
            value: 500,
            prefix: Some("$".to_string()),
            suffix: "M+".to_string(),
            label: "Assets under management".to_string(),
        },
        FirmStat {
            value: 150,
            prefix: None,
            suffix: "+".to_string(),
            label: "Private clients".to_string(),
        },
        FirmStat {
            value: 98,
            prefix: None,
            suffix: "%".to_string(),
            label: "Client satisfaction".to_string(),
        },
    ]
}

/// Momentum-clock reading at the editorial cut.
pub fn opening_pulse() -> MarketPulse {
    MarketPulse {
        as_of: catalog_date(),
        momentum: 65.0,
        week_trend: vec![58.0, 62.0, 59.0, 65.0, 68.0, 64.0],
    }
}

/// The full curated catalog. Guaranteed to pass
/// [`estate_core::validate_catalog`]; see the tests.
pub fn curated_catalog() -> Catalog {
    Catalog {
        as_of: catalog_date(),
        zones: zones(),
        zone_metrics: zone_metrics(),
        properties: signature_listings(),
        ticker: ticker_items(),
        stats: firm_stats(),
        pulse: opening_pulse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::validate_catalog;

    #[test]
    fn curated_catalog_validates() {
        validate_catalog(&curated_catalog()).unwrap();
    }

    #[test]
    fn calculator_offers_exactly_four_zones() {
        let offered = investment_zones();
        assert_eq!(offered.len(), 4);
        let ids: Vec<&str> = offered.iter().map(|z| z.id.0.as_str()).collect();
        assert_eq!(ids, ["nordelta", "palermo", "costa", "recoleta"]);
    }

    #[test]
    fn every_heatmap_entry_resolves_to_a_zone() {
        let catalog = curated_catalog();
        for m in &catalog.zone_metrics {
            assert!(catalog.zone(&m.zone).is_some(), "missing {}", m.zone.0);
        }
    }

    #[test]
    fn signature_listings_are_priced_and_illustrated() {
        for p in signature_listings() {
            assert!(p.price_usd > rust_decimal::Decimal::ZERO);
            assert!(!p.images.is_empty());
            assert!(!p.highlights.is_empty());
        }
    }

    #[test]
    fn catalog_serializes_for_the_frontend() {
        let catalog = curated_catalog();
        let s = serde_json::to_string(&catalog).unwrap();
        let back: estate_core::Catalog = serde_json::from_str(&s).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn constructors_return_fresh_values() {
        let mut a = curated_catalog();
        a.zones.clear();
        let b = curated_catalog();
        assert_eq!(b.zones.len(), 5);
    }
}
