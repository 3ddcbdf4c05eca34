//! Bernstein polynomials and tensor-product Bézier surface sampling.

use cgmath::{InnerSpace, Vector3, Zero};

/// Simple factorial. `n` must be non-negative.
pub fn factorial(n: i32) -> u64 {
    debug_assert!(n >= 0);
    (1..=n as u64).product()
}

/// Bernstein polynomial `C(n,i) x^i (1-x)^(n-i)`.
///
/// Out-of-range `(n, i)` combinations (`n < 0`, `i < 0`, `i > n`) return 0
/// instead of asserting, so boundary terms of a Bézier sum can be evaluated
/// uniformly without special-casing the grid edges.
pub fn bernstein(n: i32, i: i32, x: f32) -> f32 {
    // Allow some imprecision.
    debug_assert!(x >= 0.0 && x <= 1.001);

    if n < 0 || i < 0 || i > n {
        return 0.0;
    }

    if n == 0 {
        return 1.0;
    }

    let binomial = (factorial(n) / (factorial(i) * factorial(n - i))) as f32;
    binomial * x.powi(i) * (1.0 - x).powi(n - i)
}

/// Derivative of the Bernstein polynomial.
pub fn d_bernstein(n: i32, i: i32, x: f32) -> f32 {
    debug_assert!(n >= 0);
    (bernstein(n - 1, i - 1, x) - bernstein(n - 1, i, x)) * n as f32
}

/// Evaluates position and unit normal of the Bézier surface defined by a
/// row-major `rows x cols` control-point grid at parameters `(u, v)`.
///
/// The normal is `normalize(-du x dv)`; the sign matches the control-point
/// windings used by the generators in this crate (an upward-bowed grid gets
/// upward normals) and is a convention, not a general rule.
pub fn surface_sample(
    control_points: &[Vector3<f32>],
    rows: usize,
    cols: usize,
    u: f32,
    v: f32,
) -> (Vector3<f32>, Vector3<f32>) {
    debug_assert_eq!(control_points.len(), rows * cols);

    let mut position = Vector3::zero();
    let mut du_position = Vector3::zero();
    let mut dv_position = Vector3::zero();

    let n = rows as i32 - 1;
    let m = cols as i32 - 1;

    for i in 0..rows {
        let mut sum_v = Vector3::zero();
        let mut sum_dv = Vector3::zero();
        let bern_i = bernstein(n, i as i32, u);
        let d_bern_i = d_bernstein(n, i as i32, u);

        for j in 0..cols {
            let bern_j = bernstein(m, j as i32, v);
            let d_bern_j = d_bernstein(m, j as i32, v);
            let k_ij = control_points[i * cols + j];

            sum_v += k_ij * bern_j;
            sum_dv += k_ij * d_bern_j;
        }

        position += sum_v * bern_i;
        du_position += sum_v * d_bern_i;
        dv_position += sum_dv * bern_i;
    }

    let normal = -du_position.cross(dv_position).normalize();
    (position, normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for &x in &[0.0f32, 0.25, 0.5, 0.99, 1.0] {
            let sum: f32 = (0..4).map(|i| bernstein(3, i, x)).sum();
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn bernstein_out_of_range_terms_vanish() {
        assert_eq!(bernstein(3, -1, 0.5), 0.0);
        assert_eq!(bernstein(3, 4, 0.5), 0.0);
        assert_eq!(bernstein(-1, 0, 0.5), 0.0);
    }

    #[test]
    fn boundary_terms_collapse() {
        assert_eq!(bernstein(3, 0, 0.0), 1.0);
        assert_eq!(bernstein(3, 3, 1.0), 1.0);
        assert_eq!(bernstein(3, 1, 0.0), 0.0);
        assert_eq!(bernstein(3, 2, 1.0), 0.0);
    }
}
