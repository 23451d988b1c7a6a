use std::f64::consts::PI;

use keyframe::EasingFunction;

/// Easing curve mapping linear progress to animation ratio.
///
/// `Sine` is the default: the classic `(1 - cos(pi * x)) / 2` in-out curve.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    #[default]
    Sine,
}

impl EasingFunction for Easing {
    fn y(&self, x: f64) -> f64 {
        match self {
            Easing::Linear => keyframe::functions::Linear.y(x),
            Easing::EaseIn => keyframe::functions::EaseIn.y(x),
            Easing::EaseOut => keyframe::functions::EaseOut.y(x),
            Easing::EaseInOut => keyframe::functions::EaseInOut.y(x),
            Easing::Sine => (1.0 - (PI * x).cos()) / 2.0,
        }
    }
}

impl Easing {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.y(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Sine,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert!(e.eval(0.0).abs() < 1e-2, "{:?} at 0", e);
            assert!((e.eval(1.0) - 1.0).abs() < 1e-2, "{:?} at 1", e);
        }
    }

    #[test]
    fn sine_is_symmetric() {
        assert!((Easing::Sine.eval(0.5) - 0.5).abs() < 1e-12);
        let a = Easing::Sine.eval(0.2);
        let b = Easing::Sine.eval(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.eval(0.25), 0.25);
    }
}
