//! Trapezoidal membership functions
//!
//! Every linguistic term in the system is a trapezoid described by four
//! breakpoints `a <= b <= c <= d`:
//!
//! ```text
//!   1 |      b_______c
//!     |     /         \
//!   0 |____/           \____
//!          a           d
//! ```
//!
//! The outer bounds are exclusive (membership at `a` and `d` is zero unless the
//! plateau covers them) and the plateau bounds are inclusive.

use serde::Serialize;

/// Membership degree of `x` in the trapezoid `(a, b, c, d)`.
///
/// The falling edge is computed as `(x - d) / (c - d)`. Both factors are
/// negative inside `(c, d)`, so the quotient is the usual descending ramp.
/// Breakpoint order is not checked.
pub fn trapezoid(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if a < x && x < b {
        (x - a) / (b - a)
    } else if b <= x && x <= c {
        1.0
    } else if c < x && x < d {
        (x - d) / (c - d)
    } else {
        0.0
    }
}

/// A trapezoid shape: (left, left_top, right_top, right)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trapezoid {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Trapezoid {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluate membership for a crisp value
    pub fn evaluate(&self, x: f64) -> f64 {
        trapezoid(x, self.a, self.b, self.c, self.d)
    }

    /// Get the core (where membership = 1)
    pub fn core(&self) -> (f64, f64) {
        (self.b, self.c)
    }

    /// Get the support (where membership may be > 0)
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_rising_edge() {
        assert_abs_diff_eq!(trapezoid(37.5, 30.0, 45.0, 55.0, 70.0), 0.5);
        assert_abs_diff_eq!(trapezoid(33.0, 30.0, 45.0, 55.0, 70.0), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_plateau_bounds_are_inclusive() {
        assert_eq!(trapezoid(45.0, 30.0, 45.0, 55.0, 70.0), 1.0);
        assert_eq!(trapezoid(55.0, 30.0, 45.0, 55.0, 70.0), 1.0);
        assert_eq!(trapezoid(50.0, 30.0, 45.0, 55.0, 70.0), 1.0);
    }

    #[test]
    fn test_outer_bounds_are_exclusive() {
        assert_eq!(trapezoid(30.0, 30.0, 45.0, 55.0, 70.0), 0.0);
        assert_eq!(trapezoid(70.0, 30.0, 45.0, 55.0, 70.0), 0.0);
        assert_eq!(trapezoid(-1.0, 30.0, 45.0, 55.0, 70.0), 0.0);
        assert_eq!(trapezoid(120.0, 30.0, 45.0, 55.0, 70.0), 0.0);
    }

    #[test]
    fn test_degenerate_ramps_collapse_to_steps() {
        // a == b: left shoulder
        assert_eq!(trapezoid(0.0, 0.0, 0.0, 30.0, 45.0), 1.0);
        assert_eq!(trapezoid(-0.001, 0.0, 0.0, 30.0, 45.0), 0.0);
        // c == d: right shoulder
        assert_eq!(trapezoid(100.0, 55.0, 70.0, 100.0, 100.0), 1.0);
        assert_eq!(trapezoid(100.001, 55.0, 70.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn test_falling_edge_matches_conventional_form() {
        let (a, b, c, d) = (18.5, 20.0, 25.0, 30.0);
        for i in 1..50 {
            let x = c + (d - c) * (i as f64) / 50.0;
            let conventional = (d - x) / (d - c);
            assert_abs_diff_eq!(trapezoid(x, a, b, c, d), conventional, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_shape_accessors() {
        let shape = Trapezoid::new(5.0, 7.0, 8.0, 9.0);
        assert_eq!(shape.core(), (7.0, 8.0));
        assert_eq!(shape.support(), (5.0, 9.0));
        assert_abs_diff_eq!(shape.evaluate(8.5), 0.5);
    }

    fn ordered_breakpoints() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        prop::collection::vec(-100.0f64..100.0, 4).prop_map(|mut v| {
            v.sort_by(|x, y| x.partial_cmp(y).unwrap());
            (v[0], v[1], v[2], v[3])
        })
    }

    proptest! {
        #[test]
        fn prop_degree_is_bounded((a, b, c, d) in ordered_breakpoints(), x in -150.0f64..150.0) {
            let degree = trapezoid(x, a, b, c, d);
            prop_assert!((0.0..=1.0).contains(&degree));
        }

        #[test]
        fn prop_zero_outside_support((a, b, c, d) in ordered_breakpoints(), offset in 0.0f64..50.0) {
            // Points strictly outside the support, off the plateau.
            if a < b {
                prop_assert_eq!(trapezoid(a - offset, a, b, c, d), 0.0);
            }
            if c < d {
                prop_assert_eq!(trapezoid(d + offset, a, b, c, d), 0.0);
            }
        }
    }
}
