#![deny(warnings)]

//! Core domain models and invariants for the HANDOFF estates platform.
//!
//! This crate defines the serializable types shared across the catalog,
//! the investment engine, and the concierge, with validation helpers to
//! guarantee basic invariants.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Unique identifier for a market zone, e.g. "nordelta", "recoleta".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub String);

/// A named market zone with its historical rate assumptions.
///
/// Both rates are annual decimal percentages (6.5 means 6.5% per year)
/// and must be finite and non-negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneProfile {
    /// Zone identifier, e.g. "nordelta".
    pub id: ZoneId,
    /// Display name, e.g. "Nordelta".
    pub name: String,
    /// Assumed annual appreciation in percent.
    pub appreciation_rate_pct: f64,
    /// Assumed annual rental yield in percent of the invested principal.
    pub rental_yield_pct: f64,
}

/// Heatmap overlay data for a zone: trailing growth, yield, and where the
/// marker sits on the stylized map (percent of the viewport).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    /// Zone this entry annotates; must resolve within the catalog.
    pub zone: ZoneId,
    /// Trailing five-year value growth in percent.
    pub five_year_growth_pct: f64,
    /// Current gross rental yield in percent.
    pub rental_yield_pct: f64,
    /// Horizontal marker position in [0, 100].
    pub map_x_pct: f32,
    /// Vertical marker position in [0, 100].
    pub map_y_pct: f32,
    /// One-line positioning blurb.
    pub blurb: String,
    /// Active development projects tracked in the zone.
    pub active_projects: u32,
}

/// WGS84 coordinates for a listing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lng: f64,
}

/// Broad setting of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyCategory {
    /// Urban tower or apartment.
    City,
    /// Gated community, golf or lakeside.
    Nature,
    /// Seafront.
    Coast,
}

/// Commercial status of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    /// Openly offered.
    Available,
    /// Shown only to qualified clients.
    OffMarket,
    /// No longer offered.
    Sold,
}

/// Headline measurements of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpecs {
    /// Human-readable area, e.g. "840 m²" (mixed lot/covered formats).
    pub area_label: String,
    /// Bedroom count.
    pub bedrooms: u8,
    /// Bathroom count.
    pub bathrooms: u8,
    /// Parking spaces.
    pub parking: u8,
}

/// Unique identifier for a curated listing.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

/// A curated listing in the signature portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Listing identifier, e.g. "residencia-velamar".
    pub id: PropertyId,
    /// Display title.
    pub title: String,
    /// Neighborhood and city.
    pub location: String,
    /// Asking price in USD.
    pub price_usd: Decimal,
    /// Card-length description.
    pub summary: String,
    /// Long-form description for the detail page.
    pub narrative: String,
    /// Headline features, e.g. "4 Suites".
    pub features: Vec<String>,
    /// Building/estate amenities.
    pub amenities: Vec<String>,
    /// Measurements.
    pub specs: PropertySpecs,
    /// Broad setting.
    pub category: PropertyCategory,
    /// Commercial status.
    pub status: ListingStatus,
    /// Gallery URLs; the first entry is the hero image.
    pub images: Vec<String>,
    /// Map coordinates.
    pub coordinates: GeoPoint,
    /// Sales highlights.
    pub highlights: Vec<String>,
}

/// Classification of a market-ticker entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerKind {
    /// Year-over-year growth figure.
    Growth,
    /// Price per square meter.
    Price,
    /// Portfolio return figure.
    Roi,
    /// Transaction volume.
    Operations,
}

/// One entry of the scrolling market ticker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerItem {
    /// Zone or metric label.
    pub label: String,
    /// Preformatted display value, e.g. "+2.4%" or "USD 4.800/m²".
    pub value: String,
    /// Entry classification.
    pub kind: TickerKind,
}

/// Target for one animated counter on the firm-credentials strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmStat {
    /// Counter target value.
    pub value: u32,
    /// Optional prefix, e.g. "$".
    pub prefix: Option<String>,
    /// Suffix, e.g. "+", "M+", "%".
    pub suffix: String,
    /// Caption under the counter.
    pub label: String,
}

/// Momentum-clock state: a 0-100 gauge plus its trailing week of readings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketPulse {
    /// Date the reading was taken.
    pub as_of: NaiveDate,
    /// Current momentum in [0, 100].
    pub momentum: f64,
    /// Trailing readings, oldest first.
    pub week_trend: Vec<f64>,
}

/// The full curated dataset backing the site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Date the catalog was curated.
    pub as_of: NaiveDate,
    /// Zones offered in the investment calculator.
    pub zones: Vec<ZoneProfile>,
    /// Heatmap overlay entries.
    pub zone_metrics: Vec<ZoneMetrics>,
    /// Signature listings.
    pub properties: Vec<Property>,
    /// Market ticker entries.
    pub ticker: Vec<TickerItem>,
    /// Firm-credentials counters.
    pub stats: Vec<FirmStat>,
    /// Momentum-clock reading.
    pub pulse: MarketPulse,
}

impl Catalog {
    /// Look up a zone profile by id.
    pub fn zone(&self, id: &ZoneId) -> Option<&ZoneProfile> {
        self.zones.iter().find(|z| &z.id == id)
    }

    /// Look up a listing by id.
    pub fn property(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| &p.id == id)
    }
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Name or label must not be blank.
    #[error("blank name or label")]
    EmptyName,
    /// Numeric field must be finite.
    #[error("non-finite numeric value encountered")]
    NonFinite,
    /// Rates are decimal percentages and must be >= 0.
    #[error("negative rate is invalid")]
    NegativeRate,
    /// Prices must be non-negative.
    #[error("negative monetary value is invalid")]
    NegativeMoney,
    /// Latitude/longitude outside the WGS84 domain.
    #[error("coordinate out of range: {0}")]
    CoordinateOutOfRange(f64),
    /// Map marker position must be within [0, 100] percent.
    #[error("map position out of range")]
    MapPositionOutOfRange,
    /// Momentum readings live on a 0-100 gauge.
    #[error("momentum out of range: {0}")]
    MomentumOutOfRange(f64),
    /// A listing must carry at least one gallery image.
    #[error("listing has no gallery images")]
    EmptyGallery,
    /// Ids must be unique within the catalog.
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    /// Cross-reference to a zone that is not in the catalog.
    #[error("unknown zone: {0}")]
    UnknownZone(String),
}

/// Validate a zone profile.
pub fn validate_zone(zone: &ZoneProfile) -> Result<(), ValidationError> {
    if zone.name.trim().is_empty() || zone.id.0.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !(zone.appreciation_rate_pct.is_finite() && zone.rental_yield_pct.is_finite()) {
        return Err(ValidationError::NonFinite);
    }
    if zone.appreciation_rate_pct < 0.0 || zone.rental_yield_pct < 0.0 {
        return Err(ValidationError::NegativeRate);
    }
    Ok(())
}

/// Validate a heatmap entry (field checks only; zone resolution happens
/// in [`validate_catalog`]).
pub fn validate_zone_metrics(m: &ZoneMetrics) -> Result<(), ValidationError> {
    if !(m.five_year_growth_pct.is_finite() && m.rental_yield_pct.is_finite()) {
        return Err(ValidationError::NonFinite);
    }
    if m.rental_yield_pct < 0.0 {
        return Err(ValidationError::NegativeRate);
    }
    if !(0.0..=100.0).contains(&m.map_x_pct) || !(0.0..=100.0).contains(&m.map_y_pct) {
        return Err(ValidationError::MapPositionOutOfRange);
    }
    Ok(())
}

/// Validate a listing.
pub fn validate_property(p: &Property) -> Result<(), ValidationError> {
    if p.id.0.trim().is_empty() || p.title.trim().is_empty() || p.location.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if p.price_usd < Decimal::ZERO {
        return Err(ValidationError::NegativeMoney);
    }
    if !(-90.0..=90.0).contains(&p.coordinates.lat) {
        return Err(ValidationError::CoordinateOutOfRange(p.coordinates.lat));
    }
    if !(-180.0..=180.0).contains(&p.coordinates.lng) {
        return Err(ValidationError::CoordinateOutOfRange(p.coordinates.lng));
    }
    if p.images.is_empty() {
        return Err(ValidationError::EmptyGallery);
    }
    Ok(())
}

/// Validate a momentum reading.
pub fn validate_pulse(pulse: &MarketPulse) -> Result<(), ValidationError> {
    for &reading in pulse.week_trend.iter().chain(std::iter::once(&pulse.momentum)) {
        if !reading.is_finite() {
            return Err(ValidationError::NonFinite);
        }
        if !(0.0..=100.0).contains(&reading) {
            return Err(ValidationError::MomentumOutOfRange(reading));
        }
    }
    Ok(())
}

/// Validate the whole catalog, including cross-references from heatmap
/// entries to the zone set.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), ValidationError> {
    let mut zone_ids: BTreeSet<&ZoneId> = BTreeSet::new();
    for z in &catalog.zones {
        validate_zone(z)?;
        if !zone_ids.insert(&z.id) {
            return Err(ValidationError::DuplicateId(z.id.0.clone()));
        }
    }
    for m in &catalog.zone_metrics {
        validate_zone_metrics(m)?;
        if !zone_ids.contains(&m.zone) {
            return Err(ValidationError::UnknownZone(m.zone.0.clone()));
        }
    }
    let mut property_ids: BTreeSet<&PropertyId> = BTreeSet::new();
    for p in &catalog.properties {
        validate_property(p)?;
        if !property_ids.insert(&p.id) {
            return Err(ValidationError::DuplicateId(p.id.0.clone()));
        }
    }
    for t in &catalog.ticker {
        if t.label.trim().is_empty() || t.value.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
    }
    for s in &catalog.stats {
        if s.label.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
    }
    validate_pulse(&catalog.pulse)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn zone(id: &str) -> ZoneProfile {
        ZoneProfile {
            id: ZoneId(id.to_string()),
            name: "Nordelta".to_string(),
            appreciation_rate_pct: 6.5,
            rental_yield_pct: 4.2,
        }
    }

    fn listing(id: &str) -> Property {
        Property {
            id: PropertyId(id.to_string()),
            title: "Residencia Velamar".to_string(),
            location: "Puerto Madero, Buenos Aires".to_string(),
            price_usd: Decimal::new(4_200_000, 0),
            summary: "Glass and steel above the river".to_string(),
            narrative: "Double-height unit with open river views".to_string(),
            features: vec!["4 Suites".to_string()],
            amenities: vec!["Infinity pool".to_string()],
            specs: PropertySpecs {
                area_label: "840 m²".to_string(),
                bedrooms: 4,
                bathrooms: 5,
                parking: 3,
            },
            category: PropertyCategory::City,
            status: ListingStatus::Available,
            images: vec!["https://images.example.com/velamar-1.jpg".to_string()],
            coordinates: GeoPoint {
                lat: -34.6131,
                lng: -58.3772,
            },
            highlights: vec!["Full home automation".to_string()],
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            zones: vec![zone("nordelta")],
            zone_metrics: vec![ZoneMetrics {
                zone: ZoneId("nordelta".to_string()),
                five_year_growth_pct: 28.0,
                rental_yield_pct: 4.2,
                map_x_pct: 65.0,
                map_y_pct: 35.0,
                blurb: "Fastest-growing residential hub".to_string(),
                active_projects: 12,
            }],
            properties: vec![listing("residencia-velamar")],
            ticker: vec![TickerItem {
                label: "Puerto Madero".to_string(),
                value: "+2.4%".to_string(),
                kind: TickerKind::Growth,
            }],
            stats: vec![FirmStat {
                value: 12,
                prefix: None,
                suffix: "+".to_string(),
                label: "Years of track record".to_string(),
            }],
            pulse: MarketPulse {
                as_of: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                momentum: 65.0,
                week_trend: vec![58.0, 62.0, 59.0, 65.0, 68.0, 64.0],
            },
        }
    }

    #[test]
    fn serde_roundtrip_property() {
        let p = listing("residencia-velamar");
        let s = serde_json::to_string(&p).unwrap();
        let back: Property = serde_json::from_str(&s).unwrap();
        assert_eq!(back.id.0, "residencia-velamar");
        assert_eq!(back.specs.bedrooms, 4);
    }

    #[test]
    fn catalog_snapshot_roundtrip() {
        let c = catalog();
        validate_catalog(&c).unwrap();
        let s = serde_json::to_string_pretty(&c).unwrap();
        let back: Catalog = serde_json::from_str(&s).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn catalog_lookups_resolve() {
        let c = catalog();
        assert!(c.zone(&ZoneId("nordelta".to_string())).is_some());
        assert!(c.zone(&ZoneId("belgrano".to_string())).is_none());
        assert!(c.property(&PropertyId("residencia-velamar".to_string())).is_some());
    }

    #[test]
    fn negative_rate_rejected() {
        let mut z = zone("nordelta");
        z.rental_yield_pct = -0.1;
        assert_eq!(validate_zone(&z), Err(ValidationError::NegativeRate));
    }

    #[test]
    fn duplicate_zone_id_rejected() {
        let mut c = catalog();
        c.zones.push(zone("nordelta"));
        assert_eq!(
            validate_catalog(&c),
            Err(ValidationError::DuplicateId("nordelta".to_string()))
        );
    }

    #[test]
    fn heatmap_entry_must_resolve() {
        let mut c = catalog();
        c.zone_metrics[0].zone = ZoneId("atlantis".to_string());
        assert_eq!(
            validate_catalog(&c),
            Err(ValidationError::UnknownZone("atlantis".to_string()))
        );
    }

    #[test]
    fn momentum_gauge_is_bounded() {
        let mut c = catalog();
        c.pulse.momentum = 101.0;
        assert_eq!(
            validate_catalog(&c),
            Err(ValidationError::MomentumOutOfRange(101.0))
        );
    }

    proptest! {
        #[test]
        fn non_negative_rates_validate(a in 0.0f64..50.0, r in 0.0f64..20.0) {
            let mut z = zone("nordelta");
            z.appreciation_rate_pct = a;
            z.rental_yield_pct = r;
            prop_assert!(validate_zone(&z).is_ok());
        }

        #[test]
        fn coordinates_outside_wgs84_rejected(lat in 90.0001f64..1000.0) {
            let mut p = listing("x");
            p.coordinates.lat = lat;
            prop_assert!(validate_property(&p).is_err());
        }
    }
}
