//! Rate-based values that bounce between two bounds.

use glam::{Vec2, vec2};

/// Extra rule applied when a reflection happens: the rate's magnitude grows
/// by `boost` on every bounce until it reaches `speed_limit`, at which point
/// it resets to `base_speed` pointed at the center of the bounds. Keeps the
/// bounce path from settling into a visually periodic loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedPolicy {
    pub base_speed: f32,
    pub boost: f32,
    pub speed_limit: f32,
}

/// A scalar that moves at a signed rate and reflects off an inclusive
/// `[lower, upper]` range.
///
/// The reflection is one-step: when a candidate value would leave the
/// range, the rate is flipped first and the candidate is recomputed from
/// the current value with the new rate. A single large step can still land
/// outside the range; only the direction change is guaranteed.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    value: f32,
    rate: f32,
    lower: f32,
    upper: f32,
    policy: Option<SpeedPolicy>,
}

impl Oscillator {
    pub fn new(value: f32, rate: f32, lower: f32, upper: f32) -> Self {
        debug_assert!(lower < upper);
        Self {
            value,
            rate,
            lower,
            upper,
            policy: None,
        }
    }

    pub fn with_policy(mut self, policy: SpeedPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Advances the value by `rate * elapsed` seconds. Returns `true` when
    /// the step reflected off a bound.
    pub fn step(&mut self, elapsed: f32) -> bool {
        let candidate = self.value + self.rate * elapsed;
        if candidate < self.lower || candidate > self.upper {
            self.rate = self.reflected_rate();
            self.value += self.rate * elapsed;
            true
        } else {
            self.value = candidate;
            false
        }
    }

    fn reflected_rate(&self) -> f32 {
        match self.policy {
            Some(policy) if self.rate.abs() >= policy.speed_limit => {
                let center = (self.lower + self.upper) / 2.0;
                policy.base_speed * (center - self.value).signum()
            }
            Some(policy) => -self.rate.signum() * (self.rate.abs() + policy.boost),
            None => -self.rate,
        }
    }
}

/// Two independent [`Oscillator`]s composed for 2D motion. The axes carry
/// their own bounds and rates and reflect independently.
#[derive(Debug, Clone, Copy)]
pub struct PlanarBounce {
    pub x: Oscillator,
    pub y: Oscillator,
}

impl PlanarBounce {
    pub fn new(x: Oscillator, y: Oscillator) -> Self {
        Self { x, y }
    }

    /// Steps both axes. Returns `true` when either axis reflected.
    pub fn step(&mut self, elapsed: f32) -> bool {
        let bounced_x = self.x.step(elapsed);
        let bounced_y = self.y.step(elapsed);
        bounced_x || bounced_y
    }

    pub fn position(&self) -> Vec2 {
        vec2(self.x.value(), self.y.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_bounds() {
        let mut osc = Oscillator::new(0.0, 1.0, -1.0, 1.0);
        assert!(!osc.step(0.5));
        assert_eq!(osc.value(), 0.5);
        assert_eq!(osc.rate(), 1.0);
    }

    #[test]
    fn test_step_reflects_at_upper_bound() {
        let mut osc = Oscillator::new(0.9, 1.0, -1.0, 1.0);
        assert!(osc.step(0.5));
        assert_eq!(osc.rate(), -1.0);
        // One-step reflection: recomputed from 0.9 with the flipped rate.
        assert!((osc.value() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_step_reflects_at_lower_bound() {
        let mut osc = Oscillator::new(-0.9, -1.0, -1.0, 1.0);
        assert!(osc.step(0.5));
        assert_eq!(osc.rate(), 1.0);
        assert!((osc.value() - (-0.4)).abs() < 1e-6);
    }

    #[test]
    fn test_large_step_only_guarantees_sign_flip() {
        let mut osc = Oscillator::new(0.0, 10.0, -1.0, 1.0);
        assert!(osc.step(1.0));
        assert!(osc.rate() < 0.0);
        // The value may land outside the bounds for a step this large.
        assert_eq!(osc.value(), -10.0);
    }

    #[test]
    fn test_small_steps_stay_inside_bounds() {
        let mut osc = Oscillator::new(0.0, 0.4, -1.0, 1.0);
        for _ in 0..1000 {
            osc.step(0.1);
            assert!(osc.value() >= -1.0 && osc.value() <= 1.0);
        }
    }

    #[test]
    fn test_policy_boosts_rate_on_bounce() {
        let policy = SpeedPolicy {
            base_speed: 0.75,
            boost: 0.2,
            speed_limit: 1.25,
        };
        let mut osc = Oscillator::new(0.7, 0.75, -0.75, 0.75).with_policy(policy);
        assert!(osc.step(0.1));
        assert!((osc.rate() - (-0.95)).abs() < 1e-6);
    }

    #[test]
    fn test_policy_resets_rate_at_speed_limit() {
        let policy = SpeedPolicy {
            base_speed: 0.75,
            boost: 0.2,
            speed_limit: 1.25,
        };
        let mut osc = Oscillator::new(0.7, 1.3, -0.75, 0.75).with_policy(policy);
        assert!(osc.step(0.1));
        // 1.3 is past the limit, so the rate resets to the base speed,
        // pointed back toward the center of the bounds.
        assert_eq!(osc.rate(), -0.75);
    }

    #[test]
    fn test_planar_axes_reflect_independently() {
        let mut bounce = PlanarBounce::new(
            Oscillator::new(0.9, 1.0, -1.0, 1.0),
            Oscillator::new(0.0, 1.0, -10.0, 10.0),
        );
        assert!(bounce.step(0.5));
        assert!(bounce.x.rate() < 0.0);
        assert!(bounce.y.rate() > 0.0);
        assert_eq!(bounce.position().y, 0.5);
    }
}
