//! Risk-appetite banding for the profile selector.

use serde::{Deserialize, Serialize};

/// Risk band selected from a continuous 0-100 appetite slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskBand {
    /// Display label for the band.
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Conservative => "Conservative",
            RiskBand::Balanced => "Balanced",
            RiskBand::Aggressive => "Aggressive",
        }
    }

    /// Single backdrop word shown behind the selector.
    pub fn watchword(self) -> &'static str {
        match self {
            RiskBand::Conservative => "SECURITY",
            RiskBand::Balanced => "BALANCE",
            RiskBand::Aggressive => "OPPORTUNITY",
        }
    }
}

/// Map a slider level to its band. Thirds of the scale, split at 33 and
/// 67; out-of-range levels clamp and non-finite input falls back to the
/// conservative band.
pub fn band_for_level(level: f64) -> RiskBand {
    if !level.is_finite() {
        return RiskBand::Conservative;
    }
    let level = level.clamp(0.0, 100.0);
    if level < 33.0 {
        RiskBand::Conservative
    } else if level < 67.0 {
        RiskBand::Balanced
    } else {
        RiskBand::Aggressive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_of_the_scale() {
        assert_eq!(band_for_level(0.0), RiskBand::Conservative);
        assert_eq!(band_for_level(32.9), RiskBand::Conservative);
        assert_eq!(band_for_level(33.0), RiskBand::Balanced);
        assert_eq!(band_for_level(66.9), RiskBand::Balanced);
        assert_eq!(band_for_level(67.0), RiskBand::Aggressive);
        assert_eq!(band_for_level(100.0), RiskBand::Aggressive);
    }

    #[test]
    fn out_of_range_levels_clamp() {
        assert_eq!(band_for_level(-20.0), RiskBand::Conservative);
        assert_eq!(band_for_level(400.0), RiskBand::Aggressive);
        assert_eq!(band_for_level(f64::NAN), RiskBand::Conservative);
    }

    #[test]
    fn bands_carry_display_copy() {
        assert_eq!(RiskBand::Balanced.label(), "Balanced");
        assert_eq!(RiskBand::Aggressive.watchword(), "OPPORTUNITY");
    }
}
