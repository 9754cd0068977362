//! Numeric value generators.

use rand::RngCore;

/// Constant added by [`skewed_int`] before reduction.
pub const SKEW_OFFSET: u32 = 42;

/// Generate an integer in `min..=max` as `raw % (max - min + 1) + min`.
pub fn uniform_int<R: RngCore + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    assert!(min <= max, "uniform_int called with empty range {min}..={max}");
    let width = u64::from(max - min) + 1;
    (u64::from(rng.next_u32()) % width) as u32 + min
}

/// Generate the non-uniform integer used for last-name selection.
///
/// One draw in `0..=a` is OR-ed with one draw in `x..=y`, offset by
/// [`SKEW_OFFSET`] and reduced back into `x..=y`.
pub fn skewed_int<R: RngCore + ?Sized>(rng: &mut R, a: u32, x: u32, y: u32) -> u32 {
    assert!(x <= y, "skewed_int called with empty range {x}..={y}");
    let high = uniform_int(rng, 0, a);
    let low = uniform_int(rng, x, y);
    let width = u64::from(y - x) + 1;
    ((u64::from(high | low) + u64::from(SKEW_OFFSET)) % width) as u32 + x
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_int_reduction() {
        // raw draws 0, 7, 14, ...
        let mut rng = StepRng::new(0, 7);
        assert_eq!(uniform_int(&mut rng, 10, 20), 10);
        assert_eq!(uniform_int(&mut rng, 10, 20), 17);
        // 14 % 11 + 10
        assert_eq!(uniform_int(&mut rng, 10, 20), 13);
    }

    #[test]
    fn test_uniform_int_full_range() {
        let mut rng = StepRng::new(u64::from(u32::MAX), 0);
        assert_eq!(uniform_int(&mut rng, 0, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_uniform_int_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(uniform_int(&mut rng, 5, 5), 5);
        }
    }

    #[test]
    fn test_uniform_int_covers_range_evenly() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 11];
        let draws = 110_000;
        for _ in 0..draws {
            let v = uniform_int(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
            counts[(v - 10) as usize] += 1;
        }

        // Chi-square against the uniform expectation, 10 degrees of freedom.
        // The 0.999 quantile is 29.59.
        let expected = f64::from(draws) / 11.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = f64::from(c) - expected;
                d * d / expected
            })
            .sum();
        assert!(chi_square < 29.59, "chi-square {chi_square}");
    }

    #[test]
    fn test_skewed_int_formula() {
        // draws: 3 then 5 -> ((3 % 256) | (5 % 1000)) + 42 = 49
        let mut rng = StepRng::new(3, 2);
        assert_eq!(skewed_int(&mut rng, 255, 0, 999), 49);

        // draws: 255 then 999 -> (255 | 999) + 42 = 1065 -> 65
        let mut rng = StepRng::new(255, 744);
        assert_eq!(skewed_int(&mut rng, 255, 0, 999), 65);
    }

    #[test]
    fn test_skewed_int_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = vec![false; 1000];
        for _ in 0..1_000_000 {
            let v = skewed_int(&mut rng, 255, 0, 999);
            assert!(v < 1000);
            seen[v as usize] = true;
        }
        // OR-ing widens the upper bits, every value is reachable.
        assert!(seen.iter().filter(|&&s| s).count() > 995);
    }
}
