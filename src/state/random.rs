// Random helpers: uniform integers and the "never the same hole twice" picker.
use crate::model::TARGET_COUNT;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random()`.
#[derive(Default, Debug, Clone, Copy)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Uniform integer in the inclusive range `[min, max]`. Expects `min <= max`.
pub fn random_integer<R: RandomSource + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let span = (max - min + 1) as f64;
    let offset = (rng.next_unit() * span).floor() as u32;
    // next_unit() is strictly below 1.0, the clamp only guards float rounding
    min + offset.min(max - min)
}

/// Picks target slots, remembering the previous pick.
#[derive(Default, Debug, Clone)]
pub struct TargetPicker {
    last: Option<usize>,
}

impl TargetPicker {
    #[cfg(test)]
    pub fn last(&self) -> Option<usize> {
        self.last
    }

    /// Uniform slot in `0..TARGET_COUNT`, re-drawn until it differs from the last pick.
    pub fn choose<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> usize {
        let max = (TARGET_COUNT - 1) as u32;
        let slot = loop {
            let candidate = random_integer(rng, 0, max) as usize;
            if TARGET_COUNT == 1 || Some(candidate) != self.last {
                break candidate;
            }
        };
        self.last = Some(slot);
        slot
    }
}
