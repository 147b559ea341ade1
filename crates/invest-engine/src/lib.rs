#![deny(warnings)]

//! Investment models: projection and gauge helpers for HANDOFF estates.
//!
//! This crate provides validated utilities for:
//! - Compound-appreciation valuation trajectories per market zone
//! - Linear rental-income, total-return, and ROI summaries
//! - Derived presentation values: chart geometry, risk bands, momentum

pub mod chart;
pub mod momentum;
pub mod risk;

use estate_core::ZoneProfile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the engine helpers.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Principal must be strictly positive and finite.
    #[error("invalid principal: {0}")]
    InvalidPrincipal(f64),
    /// Rates are decimal percentages and must be finite and >= 0.
    #[error("invalid rate: {0}")]
    InvalidRate(f64),
    /// Swing amplitude must be finite and >= 0.
    #[error("invalid swing amplitude: {0}")]
    InvalidSwing(f64),
    /// The computation left the finite f64 domain.
    #[error("non-finite projection value")]
    NonFinite,
}

/// One point of the valuation trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Elapsed whole years since purchase; year 0 is the purchase itself.
    pub year: u32,
    /// Compounded asset value at the end of that year, in USD.
    pub projected_value: f64,
}

/// Full projection result: the year-by-year series plus summary totals.
///
/// Recomputed from scratch on every input change; never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Compounded value at the end of the holding period.
    pub future_value: f64,
    /// Rental income collected (not reinvested) across the period.
    pub total_rental_income: f64,
    /// Net gain: future value plus rent, minus the principal.
    pub total_return: f64,
    /// Return on investment in percent, full precision.
    pub roi_pct: f64,
    /// Valuation per year, `years + 1` entries, year 0 first.
    pub series: Vec<ProjectionPoint>,
}

impl Projection {
    /// ROI rounded to one decimal place for display. The stored
    /// [`Projection::roi_pct`] keeps full precision.
    pub fn roi_pct_display(&self) -> f64 {
        (self.roi_pct * 10.0).round() / 10.0
    }
}

/// Project a hypothetical investment across a holding period.
///
/// Appreciation compounds annually; rental yield is applied linearly to
/// the original principal (income collected, not reinvested). The series
/// holds one entry per year from 0 to `years` inclusive, and its year-0
/// value reproduces the principal exactly.
///
/// Deterministic and side-effect free. Inputs that would leave the
/// finite f64 domain are rejected rather than clamped.
///
/// Example:
/// let zone = nordelta_profile();
/// let p = project(500_000.0, 10, &zone).unwrap();
/// assert_eq!(p.series.len(), 11);
pub fn project(principal: f64, years: u32, zone: &ZoneProfile) -> Result<Projection, EngineError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(EngineError::InvalidPrincipal(principal));
    }
    for rate in [zone.appreciation_rate_pct, zone.rental_yield_pct] {
        if !rate.is_finite() || rate < 0.0 {
            return Err(EngineError::InvalidRate(rate));
        }
    }

    let growth = 1.0 + zone.appreciation_rate_pct / 100.0;
    let mut series = Vec::with_capacity(years as usize + 1);
    for year in 0..=years {
        // powf(0) is exactly 1.0, so year 0 reproduces the principal bit-for-bit.
        let projected_value = principal * growth.powf(f64::from(year));
        if !projected_value.is_finite() {
            return Err(EngineError::NonFinite);
        }
        series.push(ProjectionPoint {
            year,
            projected_value,
        });
    }

    let future_value = series[years as usize].projected_value;
    let total_rental_income = principal * (zone.rental_yield_pct / 100.0) * f64::from(years);
    let total_return = future_value + total_rental_income - principal;
    let roi_pct = (total_return / principal) * 100.0;
    if !(total_rental_income.is_finite() && roi_pct.is_finite()) {
        return Err(EngineError::NonFinite);
    }

    Ok(Projection {
        future_value,
        total_rental_income,
        total_return,
        roi_pct,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::{ZoneId, ZoneProfile};
    use proptest::prelude::*;

    fn zone(appreciation: f64, rental: f64) -> ZoneProfile {
        ZoneProfile {
            id: ZoneId("nordelta".to_string()),
            name: "Nordelta".to_string(),
            appreciation_rate_pct: appreciation,
            rental_yield_pct: rental,
        }
    }

    #[test]
    fn year_zero_reproduces_principal_exactly() {
        let p = project(123_456.78, 15, &zone(6.5, 4.2)).unwrap();
        assert_eq!(p.series[0].projected_value, 123_456.78);
        assert_eq!(p.series[0].year, 0);
        assert_eq!(p.series.len(), 16);
    }

    #[test]
    fn conservative_zone_scenario() {
        // 500k over ten years in a 6.5%/4.2% zone.
        let p = project(500_000.0, 10, &zone(6.5, 4.2)).unwrap();
        let expected_fv = 500_000.0 * 1.065f64.powi(10);
        assert!((p.future_value - expected_fv).abs() < 1e-6);
        assert!(p.future_value > 938_000.0 && p.future_value < 939_000.0);
        assert_eq!(p.total_rental_income, 210_000.0);
        assert!((p.total_return - (expected_fv + 210_000.0 - 500_000.0)).abs() < 1e-6);
        assert!(p.roi_pct > 129.0 && p.roi_pct < 130.0);
        assert_eq!(p.roi_pct_display(), (p.roi_pct * 10.0).round() / 10.0);
    }

    #[test]
    fn zero_duration_is_a_single_point() {
        let p = project(750_000.0, 0, &zone(6.5, 4.2)).unwrap();
        assert_eq!(p.series.len(), 1);
        assert_eq!(p.series[0].projected_value, 750_000.0);
        assert_eq!(p.future_value, 750_000.0);
        assert_eq!(p.total_rental_income, 0.0);
        assert_eq!(p.total_return, 0.0);
        assert_eq!(p.roi_pct, 0.0);
    }

    #[test]
    fn zero_appreciation_series_is_constant() {
        let p = project(400_000.0, 12, &zone(0.0, 3.2)).unwrap();
        for point in &p.series {
            assert_eq!(point.projected_value, 400_000.0);
        }
        assert_eq!(p.future_value, 400_000.0);
    }

    #[test]
    fn zero_yield_collects_no_rent() {
        let p = project(1_000_000.0, 20, &zone(7.1, 0.0)).unwrap();
        assert_eq!(p.total_rental_income, 0.0);
        assert!((p.total_return - (p.future_value - 1_000_000.0)).abs() < 1e-9);
    }

    #[test]
    fn high_principal_bound_stays_finite() {
        let p = project(5_000_000.0, 20, &zone(7.1, 5.1)).unwrap();
        assert!(p.future_value.is_finite());
        assert!(p.future_value > 5_000_000.0);
        assert!(p.roi_pct.is_finite());
    }

    #[test]
    fn invalid_principal_rejected() {
        let z = zone(6.5, 4.2);
        assert_eq!(
            project(0.0, 10, &z),
            Err(EngineError::InvalidPrincipal(0.0))
        );
        assert!(project(-1.0, 10, &z).is_err());
        assert!(project(f64::NAN, 10, &z).is_err());
        assert!(project(f64::INFINITY, 10, &z).is_err());
    }

    #[test]
    fn invalid_rates_rejected() {
        assert_eq!(
            project(100_000.0, 10, &zone(-0.5, 4.2)),
            Err(EngineError::InvalidRate(-0.5))
        );
        assert!(project(100_000.0, 10, &zone(6.5, f64::NAN)).is_err());
    }

    #[test]
    fn runaway_compounding_is_an_error_not_infinity() {
        // A rate inside the validated domain can still overflow f64 when
        // compounded long enough; that must surface as an error.
        let result = project(5_000_000.0, 100_000, &zone(100.0, 0.0));
        assert_eq!(result, Err(EngineError::NonFinite));
    }

    proptest! {
        #[test]
        fn series_strictly_increasing_under_positive_appreciation(
            principal in 100_000.0f64..5_000_000.0,
            years in 1u32..40,
            appreciation in 0.1f64..20.0,
            rental in 0.0f64..10.0,
        ) {
            let p = project(principal, years, &zone(appreciation, rental)).unwrap();
            for w in p.series.windows(2) {
                prop_assert!(w[1].projected_value > w[0].projected_value);
            }
        }

        #[test]
        fn roi_is_consistent_with_totals(
            principal in 100_000.0f64..5_000_000.0,
            years in 0u32..40,
            appreciation in 0.0f64..20.0,
            rental in 0.0f64..10.0,
        ) {
            let p = project(principal, years, &zone(appreciation, rental)).unwrap();
            let expected = (p.total_return / principal) * 100.0;
            prop_assert_eq!(p.roi_pct, expected);
            prop_assert!(p.future_value.is_finite());
            prop_assert!(p.total_return.is_finite());
        }

        #[test]
        fn each_result_is_freshly_derived(
            principal in 100_000.0f64..5_000_000.0,
            years in 0u32..40,
        ) {
            let z = zone(6.5, 4.2);
            let a = project(principal, years, &z).unwrap();
            let b = project(principal, years, &z).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
