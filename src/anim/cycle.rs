//! Round-robin color cycling.

use glam::{Vec3, vec3};

use crate::anim::Ramp;

/// Three [`Ramp`]s, one per color channel, advanced round-robin: exactly one
/// channel moves per frame. The round-robin update is a deliberate policy
/// choice kept from the observed behavior; each channel therefore fades at a
/// third of its ramp's nominal speed.
#[derive(Debug, Clone, Copy)]
pub struct ColorCycle {
    channels: [Ramp; 3],
    next: usize,
}

impl ColorCycle {
    pub fn new(red: Ramp, green: Ramp, blue: Ramp) -> Self {
        Self {
            channels: [red, green, blue],
            next: 0,
        }
    }

    /// Advances the channel whose turn it is and returns the current color.
    pub fn advance(&mut self) -> Vec3 {
        self.channels[self.next].advance();
        self.next = (self.next + 1) % 3;
        self.rgb()
    }

    pub fn rgb(&self) -> Vec3 {
        vec3(
            self.channels[0].value() as f32,
            self.channels[1].value() as f32,
            self.channels[2].value() as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> ColorCycle {
        ColorCycle::new(
            Ramp::new(0.0, 0.1),
            Ramp::new(0.5, 0.1),
            Ramp::new(1.0, -0.1),
        )
    }

    #[test]
    fn test_one_channel_moves_per_advance() {
        let mut cycle = cycle();
        let before = cycle.rgb();
        let after = cycle.advance();
        assert_ne!(before.x, after.x);
        assert_eq!(before.y, after.y);
        assert_eq!(before.z, after.z);
    }

    #[test]
    fn test_channels_rotate() {
        let mut cycle = cycle();
        let start = cycle.rgb();
        cycle.advance();
        let after_green = cycle.advance();
        assert_ne!(after_green.y, start.y);
        assert_eq!(after_green.z, start.z);
        let after_blue = cycle.advance();
        assert_ne!(after_blue.z, start.z);
    }

    #[test]
    fn test_channels_stay_in_unit_interval() {
        let mut cycle = cycle();
        for _ in 0..100 {
            let rgb = cycle.advance();
            for channel in [rgb.x, rgb.y, rgb.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
