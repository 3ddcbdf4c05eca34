//! Arcball rotation: a virtual trackball mapping 2D cursor drags onto 3D
//! rotations by projecting cursor positions onto a unit sphere.
//!
//! The produced rotation lives in the same space the cursor was sampled in
//! (camera/view space); composing it into world space, e.g.
//! `inverse(view) * rotation`, is the caller's job.

use crate::math::transform::rotation_about_axis;
use crate::math::{InnerSpace, Matrix4, Rad, SquareMatrix, Vector3};

use super::FrameInput;

/// Two sphere vectors closer than this to colinear produce no rotation;
/// normalizing their near-zero cross product would blow up into NaN.
const COLINEAR_EPSILON: f32 = 1e-4;

/// Maps a cursor position in pixels onto the unit sphere centered in the
/// viewport.
///
/// The position is first taken to normalized device coordinates in
/// `[-1, 1] x [-1, 1]` (y up). Inside the unit disc the z coordinate lifts
/// the point onto the front hemisphere; outside it, the point is pulled onto
/// the sphere's silhouette by normalization, so off-disc drags still yield a
/// well-defined unit vector.
pub fn screen_to_sphere(x: f64, y: f64, width: u32, height: u32) -> Vector3<f32> {
    let mut p = Vector3::new(
        2.0 * (x / f64::from(width)) as f32 - 1.0,
        1.0 - 2.0 * (y / f64::from(height)) as f32,
        0.0,
    );

    let xy_radius2 = p.x * p.x + p.y * p.y;
    if xy_radius2 <= 1.0 {
        p.z = (1.0 - xy_radius2).sqrt();
        p
    } else {
        // Nearest point on the sphere.
        p.normalize()
    }
}

/// Rotation carrying the unit vector `v1` onto `v2`. Near-colinear inputs
/// yield the identity.
fn rotation_from_sphere_positions(v1: Vector3<f32>, v2: Vector3<f32>) -> Matrix4<f32> {
    let normal = v1.cross(v2);
    if normal.magnitude() < COLINEAR_EPSILON {
        return Matrix4::identity();
    }

    // Clamp the dot product; float imprecision can push it past 1.
    let angle = v1.dot(v2).min(1.0).max(-1.0).acos();

    rotation_about_axis(normal.normalize(), Rad(angle))
}

/// Accumulates cursor drags into a rotation matrix.
///
/// Poll it once per frame with a [`FrameInput`]: on button-down the cursor's
/// sphere position is captured; while the button stays down the in-progress
/// rotation is measured from that drag-start vector to the current one; on
/// release the drag folds into the persistent rotation and the start vector
/// resets to the sphere's north pole. [`ArcballHandler::rotation`] is always
/// the in-progress drag composed on top of every committed one.
///
/// Purely a function of the button/cursor history; no input means the
/// identity, forever.
pub struct ArcballHandler {
    viewport_width: u32,
    viewport_height: u32,

    active: bool,
    sphere_start: Vector3<f32>,
    last_rotation: Matrix4<f32>,
    curr_rotation: Matrix4<f32>,
}

impl ArcballHandler {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        debug_assert!(viewport_width > 0 && viewport_height > 0);

        ArcballHandler {
            viewport_width,
            viewport_height,
            active: false,
            sphere_start: Vector3::unit_z(),
            last_rotation: Matrix4::identity(),
            curr_rotation: Matrix4::identity(),
        }
    }

    /// Updates the viewport the cursor coordinates are measured against.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        debug_assert!(width > 0 && height > 0);
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Feeds one frame of pointer state into the state machine.
    pub fn update(&mut self, input: &FrameInput) {
        if input.button_down {
            let sphere_pos = screen_to_sphere(
                input.cursor_x,
                input.cursor_y,
                self.viewport_width,
                self.viewport_height,
            );

            if self.active {
                self.curr_rotation = rotation_from_sphere_positions(self.sphere_start, sphere_pos);
            } else {
                self.active = true;
                self.sphere_start = sphere_pos;
            }
        } else if self.active {
            // Commit the drag and reset.
            self.active = false;
            self.sphere_start = Vector3::unit_z();
            self.last_rotation = self.curr_rotation * self.last_rotation;
            self.curr_rotation = Matrix4::identity();
        }
    }

    /// The accumulated arcball rotation: the in-progress drag composed with
    /// all committed drags.
    #[inline]
    pub fn rotation(&self) -> Matrix4<f32> {
        self.curr_rotation * self.last_rotation
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The sphere vector captured at drag start; the north pole while idle.
    #[inline]
    pub fn start_vector(&self) -> Vector3<f32> {
        self.sphere_start
    }
}
