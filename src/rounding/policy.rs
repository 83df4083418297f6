use serde::Deserialize;

/// How a scaled quantity is snapped for display.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Rounding {
    /// Snap to the nearest multiple of `step`, never below `min`.
    Step {
        /// The quantum the quantity is snapped to.
        step: f64,
        /// Lowest value the snapped quantity may take.
        #[serde(default)]
        min: f64,
    },
    /// Keep at most this many decimal places. No floor.
    Decimals {
        /// Number of decimal places kept.
        decimals: u8,
    },
}

impl Rounding {
    /// Apply the policy to a raw scaled quantity.
    ///
    /// Snapping rounds half away from zero on `quantity / step`.
    #[must_use]
    pub fn apply(self, quantity: f64) -> f64 {
        match self {
            Self::Step { step, min } => round_to_step(quantity, step).max(min),
            Self::Decimals { decimals } => round_to_decimals(quantity, decimals),
        }
    }
}

fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn round_to_decimals(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use test_case::test_case;

    #[test_case(147.0, 145.0; "down to nearest five")]
    #[test_case(148.0, 150.0; "up to nearest five")]
    #[test_case(2.5, 5.0; "half rounds away from zero")]
    #[test_case(150.0, 150.0; "already a multiple")]
    #[test_case(1.2, 5.0; "floored at min")]
    #[test_case(0.0, 5.0; "zero floored at min")]
    fn step_of_five(quantity: f64, expected: f64) {
        let policy = Rounding::Step {
            step: 5.0,
            min: 5.0,
        };
        assert_approx_eq!(f64, expected, policy.apply(quantity));
    }

    #[test_case(0.25, 0.25; "quarter kilo kept")]
    #[test_case(0.26, 0.25; "snapped down")]
    #[test_case(0.28, 0.3; "snapped up")]
    #[test_case(0.01, 0.05; "tiny value floored")]
    fn step_of_five_centigrams(quantity: f64, expected: f64) {
        let policy = Rounding::Step {
            step: 0.05,
            min: 0.05,
        };
        assert_approx_eq!(f64, expected, policy.apply(quantity));
    }

    #[test_case(1.5, 2.0; "half item rounds up")]
    #[test_case(0.2, 1.0; "fraction floored to one")]
    #[test_case(6.0, 6.0; "whole count kept")]
    fn whole_items(quantity: f64, expected: f64) {
        let policy = Rounding::Step {
            step: 1.0,
            min: 1.0,
        };
        assert_approx_eq!(f64, expected, policy.apply(quantity));
    }

    #[test_case(0.333, 0.33; "truncated to two decimals")]
    #[test_case(0.005, 0.01; "half of a hundredth rounds up")]
    #[test_case(0.0, 0.0; "no floor on the default policy")]
    fn two_decimals(quantity: f64, expected: f64) {
        let policy = Rounding::Decimals { decimals: 2 };
        assert_approx_eq!(f64, expected, policy.apply(quantity));
    }
}
