// `f64::exp` is not const
pub fn logistic_exp(exp: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(exp))
}

/// The `p`-norm of the given values i.e. `(Σ x^p)^(1/p)`.
pub fn norm<const N: usize>(p: f64, values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|x| f64::powf(x, p))
        .sum::<f64>()
        .powf(p.recip())
}

/// Linear interpolation of a difficulty setting around its midpoint of 5.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn norm_of_zeros_is_zero() {
        assert!(norm(1.5, [0.0, 0.0]).eq(0.0));
        assert!(norm(2.0, [0.0, 0.0]).eq(0.0));
    }

    #[test]
    fn euclidean_norm() {
        assert!(norm(2.0, [3.0, 4.0]).eq(5.0));
    }

    #[test]
    fn single_value_norm_is_identity() {
        assert!((norm(1.5, [2.5, 0.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn logistic_exp_midpoint() {
        assert!(logistic_exp(0.0, None).eq(0.5));
        assert!(logistic_exp(0.0, Some(4.0)).eq(2.0));
    }

    #[test]
    fn difficulty_range_bounds() {
        assert!(difficulty_range(0.0, 50.0, 35.0, 20.0).eq(50.0));
        assert!(difficulty_range(5.0, 50.0, 35.0, 20.0).eq(35.0));
        assert!(difficulty_range(10.0, 50.0, 35.0, 20.0).eq(20.0));
        assert!(difficulty_range(7.5, 120.0, 80.0, 50.0).eq(65.0));
    }
}
