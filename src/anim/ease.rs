use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    BackOut { overshoot: f64 },
    ElasticOut { amplitude: f64, period: f64 },
}

impl Default for Ease {
    /// Matches the engine-wide default of `power1.out`.
    fn default() -> Self {
        Ease::PowerOut(1)
    }
}

impl Ease {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::PowerIn(power) => t.powi(power as i32 + 1),
            Ease::PowerOut(power) => 1.0 - (1.0 - t).powi(power as i32 + 1),
            Ease::PowerInOut(power) => {
                let exp = power as i32 + 1;
                if t < 0.5 {
                    (2.0 * t).powi(exp) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                }
            }
            Ease::BackOut { overshoot } => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let amp = amplitude.max(1.0);
                let period = period / amplitude.min(1.0);
                let shift = period / TAU * (1.0 / amp).asin();
                amp * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::PowerIn(3),
        Ease::PowerOut(2),
        Ease::PowerInOut(2),
        Ease::PowerInOut(3),
        Ease::BackOut { overshoot: 1.2 },
        Ease::ElasticOut { amplitude: 1.0, period: 0.3 },
        Ease::ElasticOut { amplitude: 1.0, period: 0.6 },
    ];

    #[test]
    fn endpoints_are_exact() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", ease);
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.0), ease.apply(1.0));
        }
    }

    #[test]
    fn in_out_is_symmetric_at_midpoint() {
        assert!((Ease::PowerInOut(2).apply(0.5) - 0.5).abs() < 1e-12);
        let a = Ease::PowerInOut(3).apply(0.2);
        let b = Ease::PowerInOut(3).apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn power_curves_use_power_plus_one() {
        assert!((Ease::PowerIn(2).apply(0.5) - 0.125).abs() < 1e-12);
        assert!((Ease::PowerOut(3).apply(0.5) - (1.0 - 0.0625)).abs() < 1e-12);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut { overshoot: 1.2 }.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn elastic_out_oscillates_around_one() {
        let ease = Ease::ElasticOut { amplitude: 1.0, period: 0.3 };
        let samples: Vec<f64> = (1..100).map(|i| ease.apply(i as f64 / 100.0)).collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        assert!(samples.iter().any(|v| *v < 1.0));
        assert!((ease.apply(0.99) - 1.0).abs() < 0.01);
    }
}
