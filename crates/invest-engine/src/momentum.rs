//! Market-momentum gauge: a bounded, seeded random walk plus the pure
//! needle/status derivations the clock face renders from.

use crate::EngineError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lowest reading the walk may reach.
pub const GAUGE_FLOOR: f64 = 30.0;
/// Highest reading the walk may reach.
pub const GAUGE_CEILING: f64 = 90.0;

/// Qualitative reading of the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumStatus {
    Low,
    Moderate,
    High,
}

impl MomentumStatus {
    pub fn label(self) -> &'static str {
        match self {
            MomentumStatus::Low => "Low",
            MomentumStatus::Moderate => "Moderate",
            MomentumStatus::High => "High",
        }
    }
}

/// Advance the gauge one interval: a uniform nudge in
/// `[-swing/2, +swing/2]`, clamped into the gauge band.
///
/// Seeded for reproducibility, like every stochastic helper in this
/// workspace. `swing` must be finite and >= 0; zero swing only clamps.
///
/// Example:
/// let next = step(65.0, 10.0, 42).unwrap();
/// assert!((30.0..=90.0).contains(&next));
pub fn step(current: f64, swing: f64, seed: u64) -> Result<f64, EngineError> {
    if !current.is_finite() {
        return Err(EngineError::NonFinite);
    }
    if !swing.is_finite() || swing < 0.0 {
        return Err(EngineError::InvalidSwing(swing));
    }
    if swing == 0.0 {
        return Ok(current.clamp(GAUGE_FLOOR, GAUGE_CEILING));
    }
    let half = swing * 0.5;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nudge: f64 = rng.gen_range(-half..=half);
    Ok((current + nudge).clamp(GAUGE_FLOOR, GAUGE_CEILING))
}

/// Qualitative status at the current reading: below 40 is low, below 70
/// moderate, anything above high.
pub fn status(momentum: f64) -> MomentumStatus {
    if momentum < 40.0 {
        MomentumStatus::Low
    } else if momentum < 70.0 {
        MomentumStatus::Moderate
    } else {
        MomentumStatus::High
    }
}

/// Needle rotation in degrees for the clock face: 0 reads -90°, 100
/// reads +90°. Out-of-range readings clamp.
pub fn needle_angle(momentum: f64) -> f64 {
    let m = if momentum.is_finite() {
        momentum.clamp(0.0, 100.0)
    } else {
        0.0
    };
    (m / 100.0) * 180.0 - 90.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn walk_is_seeded_and_reproducible() {
        let a = step(65.0, 10.0, 42).unwrap();
        let b = step(65.0, 10.0, 42).unwrap();
        assert_eq!(a, b);
        assert!((30.0..=90.0).contains(&a));
    }

    #[test]
    fn zero_swing_only_clamps() {
        assert_eq!(step(65.0, 0.0, 1).unwrap(), 65.0);
        assert_eq!(step(12.0, 0.0, 1).unwrap(), GAUGE_FLOOR);
        assert_eq!(step(99.0, 0.0, 1).unwrap(), GAUGE_CEILING);
    }

    #[test]
    fn bad_inputs_rejected() {
        assert!(step(f64::NAN, 10.0, 1).is_err());
        assert_eq!(
            step(65.0, -1.0, 1),
            Err(EngineError::InvalidSwing(-1.0))
        );
        assert!(step(65.0, f64::INFINITY, 1).is_err());
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(status(39.9), MomentumStatus::Low);
        assert_eq!(status(40.0), MomentumStatus::Moderate);
        assert_eq!(status(69.9), MomentumStatus::Moderate);
        assert_eq!(status(70.0), MomentumStatus::High);
    }

    #[test]
    fn needle_sweeps_half_a_turn() {
        assert_eq!(needle_angle(0.0), -90.0);
        assert_eq!(needle_angle(50.0), 0.0);
        assert_eq!(needle_angle(100.0), 90.0);
        assert_eq!(needle_angle(250.0), 90.0);
    }

    proptest! {
        #[test]
        fn walk_never_leaves_the_band(
            current in 30.0f64..90.0,
            swing in 0.0f64..30.0,
            seed in 0u64..1_000,
        ) {
            let next = step(current, swing, seed).unwrap();
            prop_assert!((GAUGE_FLOOR..=GAUGE_CEILING).contains(&next));
        }
    }
}
