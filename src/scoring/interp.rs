//! Two-point linear interpolation with flat extrapolation.

/// Map `x` from the interval `xs` onto `ys`.
///
/// Values outside `xs` take the nearest endpoint's `y`. `ys` may be
/// decreasing (inverse mapping). `xs.0` must be strictly less than `xs.1`.
pub fn interp(x: f64, xs: (f64, f64), ys: (f64, f64)) -> f64 {
    let (x0, x1) = xs;
    let (y0, y1) = ys;
    if x <= x0 {
        return y0;
    }
    if x >= x1 {
        return y1;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(interp(18.0, (18.0, 50.0), (5.0, 25.0)), 5.0);
        assert_eq!(interp(50.0, (18.0, 50.0), (5.0, 25.0)), 25.0);
        assert!((interp(34.0, (18.0, 50.0), (5.0, 25.0)) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_range() {
        assert_eq!(interp(10.0, (18.5, 35.0), (5.0, 20.0)), 5.0);
        assert_eq!(interp(40.0, (18.5, 35.0), (5.0, 20.0)), 20.0);
    }

    #[test]
    fn inverse_mapping() {
        assert_eq!(interp(0.0, (0.1, 6.0), (25.0, 2.0)), 25.0);
        assert_eq!(interp(15.0, (0.1, 6.0), (25.0, 2.0)), 2.0);
        let mid = interp(3.05, (0.1, 6.0), (25.0, 2.0));
        assert!((mid - 13.5).abs() < 1e-9);
    }
}
