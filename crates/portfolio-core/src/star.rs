//! Randomized decorative particles.
//!
//! Each star draws its placement and timing once and keeps them for its
//! whole lifetime. Draws are independent; two stars may land on the same
//! spot.

use std::ops::Range;

use rand::Rng;

use crate::animation::num;

/// Stars in the background field
pub const STAR_COUNT: usize = 150;

pub const LEFT_RANGE_VW: Range<f64> = 0.0..100.0;
pub const TOP_RANGE_VH: Range<f64> = 0.0..100.0;
pub const SIZE_RANGE_PX: Range<f64> = 1.0..3.0;
pub const DURATION_RANGE_S: Range<f64> = 2.0..6.0;
pub const DELAY_RANGE_S: Range<f64> = 0.0..3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub left_vw: f64,
    pub top_vh: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl StarParams {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.random_range(LEFT_RANGE_VW),
            top_vh: rng.random_range(TOP_RANGE_VH),
            size_px: rng.random_range(SIZE_RANGE_PX),
            duration_s: rng.random_range(DURATION_RANGE_S),
            delay_s: rng.random_range(DELAY_RANGE_S),
        }
    }

    /// `count` independent stars
    pub fn field<R: Rng>(count: usize, rng: &mut R) -> Vec<Self> {
        (0..count).map(|_| Self::random(rng)).collect()
    }

    pub fn style(&self) -> String {
        let size = num(self.size_px);
        format!(
            "left: {}vw; top: {}vh; width: {size}px; height: {size}px; animation-duration: {}s; animation-delay: {}s;",
            num(self.left_vw),
            num(self.top_vh),
            num(self.duration_s),
            num(self.delay_s),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn field_has_requested_count_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = StarParams::field(STAR_COUNT, &mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(LEFT_RANGE_VW.contains(&star.left_vw));
            assert!(TOP_RANGE_VH.contains(&star.top_vh));
            assert!(SIZE_RANGE_PX.contains(&star.size_px));
            assert!(DURATION_RANGE_S.contains(&star.duration_s));
            assert!(DELAY_RANGE_S.contains(&star.delay_s));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = StarParams::field(10, &mut StdRng::seed_from_u64(42));
        let b = StarParams::field(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn style_has_every_parameter() {
        let star = StarParams {
            left_vw: 12.5,
            top_vh: 80.0,
            size_px: 2.25,
            duration_s: 3.0,
            delay_s: 0.5,
        };
        assert_eq!(
            star.style(),
            "left: 12.5vw; top: 80vh; width: 2.25px; height: 2.25px; animation-duration: 3s; animation-delay: 0.5s;"
        );
    }
}
