//! Scroll-linked hero effects
//!
//! Maps the page scroll fraction to the style values the hero section is
//! drawn with. Each value is a clamped linear interpolation between two
//! keyframes.

use serde::Serialize;

/// A single `[from, to]` progress range mapped onto `[start, end]` output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframes {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Keyframes {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Interpolate at `progress`, holding the end values outside the range
    pub fn sample(&self, progress: f64) -> f64 {
        let (x0, x1) = self.input;
        let (y0, y1) = self.output;
        if progress <= x0 {
            return y0;
        }
        if progress >= x1 {
            return y1;
        }
        y0 + (y1 - y0) * (progress - x0) / (x1 - x0)
    }
}

pub const HERO_OPACITY: Keyframes = Keyframes::new((0.0, 0.2), (1.0, 0.0));
pub const HERO_SCALE: Keyframes = Keyframes::new((0.0, 0.2), (1.0, 0.8));
pub const IMAGE_SCALE: Keyframes = Keyframes::new((0.0, 0.5), (1.1, 1.0));
pub const BORDER_SCALE: Keyframes = Keyframes::new((0.0, 0.5), (1.0, 1.5));

/// Style values at one scroll position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollEffects {
    pub progress: f64,
    pub hero_opacity: f64,
    pub hero_scale: f64,
    pub image_scale: f64,
    pub border_scale: f64,
}

impl ScrollEffects {
    /// Effects at scroll fraction `progress`; clamped to [0, 1], NaN is 0
    pub fn at(progress: f64) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        Self {
            progress,
            hero_opacity: HERO_OPACITY.sample(progress),
            hero_scale: HERO_SCALE.sample(progress),
            image_scale: IMAGE_SCALE.sample(progress),
            border_scale: BORDER_SCALE.sample(progress),
        }
    }
}
