/// Rounds a monetary amount to cents. Applied to each addend before summing
/// so float drift stays bounded by the number of records, not their
/// magnitude.
pub(crate) fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_to_cents() {
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(125.0), 125.0);
    }

    #[test]
    fn bounds_accumulated_drift() {
        let total: f64 = (0..1000).map(|_| round2(0.1)).sum();
        assert!((round2(total) - 100.0).abs() < f64::EPSILON);
    }
}
