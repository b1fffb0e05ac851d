//! BMI calculator.
//!
//! Pure functions over plain values:
//! - BMI for a single weight/height pair
//! - Diet recommendation against a fixed threshold
//! - Worst-BMI lookup and per-coder scores over a group of coders
//!
//! The only failure is a zero height, reported as [`Error::DivisionByZero`].

use crate::{Coder, Error, Result};

/// BMI at or above which a diet is recommended
pub const DIET_THRESHOLD: f64 = 25.0;

/// Compute BMI as `weight / height²`
///
/// Weight and height are not range checked; negative inputs produce a
/// mechanically computed value. Only a zero height is an error.
pub fn compute_bmi(weight: f64, height: f64) -> Result<f64> {
    if height == 0.0 {
        tracing::debug!("Refusing BMI for zero height (weight {})", weight);
        return Err(Error::DivisionByZero);
    }

    Ok(weight / (height * height))
}

/// Whether a diet is recommended, i.e. BMI >= [`DIET_THRESHOLD`]
pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool> {
    let bmi = compute_bmi(weight, height)?;
    Ok(bmi >= DIET_THRESHOLD)
}

/// Find the coder with the highest BMI
///
/// Single pass over the slice. Returns `Ok(None)` for an empty slice. On
/// ties the earliest coder wins. A zero-height coder aborts the scan with
/// [`Error::DivisionByZero`].
pub fn find_coder_with_worst_bmi(coders: &[Coder]) -> Result<Option<&Coder>> {
    let mut worst: Option<(&Coder, f64)> = None;

    for coder in coders {
        let bmi = compute_bmi(coder.weight(), coder.height())?;

        match worst {
            Some((_, max)) if bmi <= max => {}
            _ => worst = Some((coder, bmi)),
        }
    }

    if let Some((coder, bmi)) = worst {
        tracing::trace!("Worst BMI {:.2} for {:?}", bmi, coder);
    }

    Ok(worst.map(|(coder, _)| coder))
}

/// BMI for every coder, in input order, rounded to two decimal places
pub fn get_bmi_scores(coders: &[Coder]) -> Result<Vec<f64>> {
    coders
        .iter()
        .map(|c| compute_bmi(c.weight(), c.height()).map(round_to_two_places))
        .collect()
}

/// Round half-up to two decimal places
///
/// Ties go towards positive infinity, so `-0.125` becomes `-0.12`.
pub fn round_to_two_places(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn sample_coders() -> Vec<Coder> {
        vec![
            Coder::new(1.80, 60.0),
            Coder::new(1.82, 98.0),
            Coder::new(1.82, 64.7),
        ]
    }

    #[test]
    fn test_compute_bmi() {
        let bmi = compute_bmi(89.0, 1.72).unwrap();
        assert!((bmi - 89.0 / (1.72 * 1.72)).abs() < 1e-9);
    }

    #[test]
    fn test_compute_bmi_zero_height_is_error() {
        let err = compute_bmi(89.0, 0.0).unwrap_err();
        assert!(err.is_arithmetic());

        // Sign of zero doesn't matter
        assert!(matches!(compute_bmi(89.0, -0.0), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_compute_bmi_does_not_validate_weight() {
        assert_eq!(compute_bmi(0.0, 2.0).unwrap(), 0.0);
        assert_eq!(compute_bmi(-8.0, 2.0).unwrap(), -2.0);
        assert_eq!(compute_bmi(8.0, -2.0).unwrap(), 2.0);
    }

    #[test]
    fn test_diet_recommended() {
        assert!(is_diet_recommended(89.0, 1.72).unwrap());
    }

    #[test]
    fn test_diet_not_recommended() {
        assert!(!is_diet_recommended(89.0, 1.95).unwrap());
    }

    #[test]
    fn test_diet_threshold_is_inclusive() {
        // 25.0 / 1.0² lands exactly on the threshold
        assert!(is_diet_recommended(25.0, 1.0).unwrap());
        assert!(!is_diet_recommended(24.99, 1.0).unwrap());
    }

    #[test]
    fn test_diet_zero_height_propagates_error() {
        let result = is_diet_recommended(89.0, 0.0);
        assert!(matches!(result, Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_worst_bmi_non_empty() {
        crate::logging::init_test();
        let coders = sample_coders();

        let worst = find_coder_with_worst_bmi(&coders).unwrap().unwrap();

        assert_eq!(worst.height(), 1.82);
        assert_eq!(worst.weight(), 98.0);
    }

    #[test]
    fn test_worst_bmi_empty_is_none() {
        assert!(find_coder_with_worst_bmi(&[]).unwrap().is_none());
    }

    #[test]
    fn test_worst_bmi_tie_returns_first() {
        let coders = vec![
            Coder::new(1.70, 60.0),
            Coder::new(2.0, 100.0),
            Coder::new(1.80, 60.0),
            Coder::new(2.0, 100.0),
        ];

        let worst = find_coder_with_worst_bmi(&coders).unwrap().unwrap();

        assert!(std::ptr::eq(worst, &coders[1]));
    }

    #[test]
    fn test_worst_bmi_zero_height_is_error() {
        let only_zero_input = [Coder::new(0.0, 89.0)];
        let only_zero = find_coder_with_worst_bmi(&only_zero_input);
        assert!(matches!(only_zero, Err(Error::DivisionByZero)));

        let mixed = vec![Coder::new(1.80, 60.0), Coder::new(0.0, 500.0)];
        assert!(matches!(
            find_coder_with_worst_bmi(&mixed),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn test_worst_bmi_ten_thousand_coders() {
        let coders: Vec<Coder> = (0..10_000)
            .map(|i| Coder::new(1.0 + i as f64, 10.0 + i as f64))
            .collect();

        let start = Instant::now();
        let worst = find_coder_with_worst_bmi(&coders).unwrap();
        let elapsed = start.elapsed();

        // BMI shrinks as i grows, so the first coder is the worst
        assert_eq!(worst, Some(&coders[0]));
        assert!(
            elapsed < Duration::from_millis(500),
            "scan took {:?}",
            elapsed
        );
    }

    #[test]
    fn test_bmi_scores() {
        let scores = get_bmi_scores(&sample_coders()).unwrap();
        assert_eq!(scores, vec![18.52, 29.59, 19.53]);
    }

    #[test]
    fn test_bmi_scores_empty() {
        assert!(get_bmi_scores(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_bmi_scores_zero_height_is_error() {
        assert!(matches!(
            get_bmi_scores(&[Coder::new(0.0, 89.0)]),
            Err(Error::DivisionByZero)
        ));

        let coders = vec![Coder::new(1.80, 60.0), Coder::new(0.0, 70.0)];
        assert!(get_bmi_scores(&coders).unwrap_err().is_arithmetic());
    }

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to_two_places(18.518518), 18.52);
        assert_eq!(round_to_two_places(19.532665), 19.53);
        assert_eq!(round_to_two_places(0.125), 0.13);
        assert_eq!(round_to_two_places(-1.5), -1.5);
        // Negative ties round up, not away from zero
        assert_eq!(round_to_two_places(-0.125), -0.12);
    }
}
