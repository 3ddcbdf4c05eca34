//! Constructors for the affine transforms used by the scene graph and the
//! arcball controller. Everything here is a pure function over `cgmath`
//! types; angles are radians throughout.

use cgmath::{InnerSpace, Matrix, Matrix4, Rad, Vector3, Vector4, VectorSpace};

/// A right-handed coordinate frame stored as three column vectors.
///
/// The frame is orthonormal by convention, not by construction: the scene
/// graph and the view transform assume mutually orthogonal unit axes, and it
/// is the caller's job to keep them that way.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub x: Vector3<f32>,
    pub y: Vector3<f32>,
    pub z: Vector3<f32>,
}

impl Default for Basis {
    fn default() -> Self {
        Basis {
            x: Vector3::unit_x(),
            y: Vector3::unit_y(),
            z: Vector3::unit_z(),
        }
    }
}

impl Basis {
    /// Extracts the frame from the upper-left 3x3 columns of a rotation
    /// matrix. The translation column is ignored.
    #[inline]
    pub fn from_matrix(m: &Matrix4<f32>) -> Self {
        Basis {
            x: m.x.truncate(),
            y: m.y.truncate(),
            z: m.z.truncate(),
        }
    }
}

/// Rotation about the x axis.
#[inline]
pub fn rotation_x(angle: Rad<f32>) -> Matrix4<f32> {
    Matrix4::from_angle_x(angle)
}

/// Rotation about the y axis.
#[inline]
pub fn rotation_y(angle: Rad<f32>) -> Matrix4<f32> {
    Matrix4::from_angle_y(angle)
}

/// Rotation about the z axis.
#[inline]
pub fn rotation_z(angle: Rad<f32>) -> Matrix4<f32> {
    Matrix4::from_angle_z(angle)
}

/// Builds a rotation matrix whose columns are the basis vectors, each
/// normalized independently.
///
/// The columns are expected to be mutually orthogonal; a near-orthogonal
/// input silently produces a slightly non-orthogonal rotation, since no
/// re-orthogonalization is performed.
pub fn rotation_from_basis(basis: &Basis) -> Matrix4<f32> {
    Matrix4::from_cols(
        basis.x.normalize().extend(0.0),
        basis.y.normalize().extend(0.0),
        basis.z.normalize().extend(0.0),
        Vector4::unit_w(),
    )
}

/// Rotation of `angle` about an arbitrary axis (Rodrigues' formula).
///
/// `axis` must be unit length; it is not normalized here and a non-unit axis
/// yields a garbage matrix.
#[inline]
pub fn rotation_about_axis(axis: Vector3<f32>, angle: Rad<f32>) -> Matrix4<f32> {
    Matrix4::from_axis_angle(axis, angle)
}

/// Non-uniform scale matrix.
#[inline]
pub fn scaling(u: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_nonuniform_scale(u.x, u.y, u.z)
}

/// Translation matrix; the vector lands in the fourth column.
#[inline]
pub fn translation(u: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(u)
}

/// Camera frame looking from `eye` towards `target`.
///
/// `ez` points from the target back to the eye, so the camera looks down its
/// negative z axis. Degenerate when `eye == target` or when `world_up` is
/// parallel to the view direction; both are caller preconditions.
pub fn look_at_basis(eye: Vector3<f32>, target: Vector3<f32>, world_up: Vector3<f32>) -> Basis {
    let z = (eye - target).normalize();
    let x = world_up.cross(z).normalize();
    let y = z.cross(x);
    Basis { x, y, z }
}

/// View matrix for a camera at `eye` with the orthonormal frame `basis`.
///
/// The inverse of `[basis | eye]` is computed cheaply as
/// `transpose(basis) * translate(-eye)`, valid because the frame is
/// orthonormal.
pub fn view(eye: Vector3<f32>, basis: &Basis) -> Matrix4<f32> {
    let rotation = Matrix4::from_cols(
        basis.x.extend(0.0),
        basis.y.extend(0.0),
        basis.z.extend(0.0),
        Vector4::unit_w(),
    );

    rotation.transpose() * Matrix4::from_translation(-eye)
}

/// Linear interpolation `a + t * (b - a)` for any vector-like type.
#[inline]
pub fn lerp<V: VectorSpace>(a: V, b: V, t: V::Scalar) -> V {
    a + (b - a) * t
}

/// Converts an HSV color (`h` in degrees within `[0, 360]`, `s` and `v` in
/// `[0, 1]`) to RGB by interpolating along the hue wheel.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vector3<f32> {
    debug_assert!(h >= 0.0 && h <= 360.0);
    debug_assert!(s >= 0.0 && s <= 1.0);
    debug_assert!(v >= 0.0 && v <= 1.0);

    const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
    const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
    const HUE_WHEEL: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0], // red
        [1.0, 1.0, 0.0], // yellow
        [0.0, 1.0, 0.0], // green
        [0.0, 1.0, 1.0], // cyan
        [0.0, 0.0, 1.0], // blue
        [1.0, 0.0, 1.0], // magenta
    ];

    // Division by 60.01 keeps the integer part strictly below 6.
    let t = h / 60.01;
    let int_part = t.floor() as usize;
    let frac_part = t - t.floor();

    let color_a = Vector3::from(HUE_WHEEL[int_part.min(5)]);
    let color_b = Vector3::from(HUE_WHEEL[(int_part + 1) % 6]);

    let mut color = lerp(color_a, color_b, frac_part);
    color = lerp(Vector3::from(WHITE), color, s);
    lerp(Vector3::from(BLACK), color, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_matrix_round_trip() {
        let basis = Basis::default();
        let m = rotation_from_basis(&basis);
        assert_eq!(m, Matrix4::from_scale(1.0));
        assert_eq!(Basis::from_matrix(&m), basis);
    }

    #[test]
    fn basis_columns_are_normalized() {
        let basis = Basis {
            x: Vector3::new(2.0, 0.0, 0.0),
            y: Vector3::new(0.0, 4.0, 0.0),
            z: Vector3::new(0.0, 0.0, 8.0),
        };

        let m = rotation_from_basis(&basis);
        assert_eq!(m, Matrix4::from_scale(1.0));
    }

    #[test]
    fn hue_wheel_endpoints() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
    }
}
