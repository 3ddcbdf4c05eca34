#[macro_use]
extern crate approx;
extern crate scene3d;

use std::f32::consts::FRAC_PI_2;

use scene3d::math::bezier;
use scene3d::math::transform::{
    hsv_to_rgb, lerp, look_at_basis, rotation_about_axis, rotation_from_basis, rotation_x,
    rotation_y, rotation_z, scaling, translation, view,
};
use scene3d::math::{InnerSpace, Matrix4, Rad, SquareMatrix, Vector2, Vector3};

fn transform_point(m: &Matrix4<f32>, p: Vector3<f32>) -> Vector3<f32> {
    (m * p.extend(1.0)).truncate()
}

#[test]
fn axis_rotations_are_right_handed() {
    // +y rotates to +z about x, +z to +x about y, +x to +y about z.
    let p = transform_point(&rotation_x(Rad(FRAC_PI_2)), Vector3::unit_y());
    assert_ulps_eq!(p, Vector3::unit_z(), max_ulps = 8);

    let p = transform_point(&rotation_y(Rad(FRAC_PI_2)), Vector3::unit_z());
    assert_ulps_eq!(p, Vector3::unit_x(), max_ulps = 8);

    let p = transform_point(&rotation_z(Rad(FRAC_PI_2)), Vector3::unit_x());
    assert_ulps_eq!(p, Vector3::unit_y(), max_ulps = 8);
}

#[test]
fn axis_angle_matches_fixed_axis_rotations() {
    let angle = Rad(0.37f32);
    let general = rotation_about_axis(Vector3::unit_y(), angle);
    assert_ulps_eq!(general, rotation_y(angle), max_ulps = 8);
}

#[test]
fn scale_and_translation_compose_in_trs_order() {
    let m = translation(Vector3::new(1.0, 2.0, 3.0)) * scaling(Vector3::new(2.0, 2.0, 2.0));
    let p = transform_point(&m, Vector3::new(1.0, 1.0, 1.0));
    assert_ulps_eq!(p, Vector3::new(3.0, 4.0, 5.0));
}

#[test]
fn look_at_and_view_agree() {
    // A camera on the +z axis looking at the origin keeps the identity
    // frame.
    let eye = Vector3::new(0.0, 0.0, 5.0);
    let basis = look_at_basis(eye, Vector3::new(0.0, 0.0, 0.0), Vector3::unit_y());
    assert_ulps_eq!(basis.x, Vector3::unit_x());
    assert_ulps_eq!(basis.y, Vector3::unit_y());
    assert_ulps_eq!(basis.z, Vector3::unit_z());

    // The view transform takes the target to 5 units down the -z axis and
    // the eye to the origin.
    let v = view(eye, &basis);
    assert_ulps_eq!(
        transform_point(&v, Vector3::new(0.0, 0.0, 0.0)),
        Vector3::new(0.0, 0.0, -5.0)
    );
    assert_ulps_eq!(transform_point(&v, eye), Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn view_inverts_the_camera_frame() {
    let eye = Vector3::new(1.0, 2.0, 3.0);
    let basis = look_at_basis(eye, Vector3::new(0.0, 0.5, -1.0), Vector3::unit_y());

    let camera = translation(eye) * rotation_from_basis(&basis);
    let round_trip = view(eye, &basis) * camera;
    assert_relative_eq!(round_trip, Matrix4::identity(), epsilon = 1e-5);
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Vector3::new(0.0, 1.0, 2.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    assert_ulps_eq!(lerp(a, b, 0.0), a);
    assert_ulps_eq!(lerp(a, b, 1.0), b);
    assert_ulps_eq!(lerp(a, b, 0.5), Vector3::new(2.0, 3.0, 4.0));
}

#[test]
fn hsv_primaries() {
    assert_ulps_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(
        hsv_to_rgb(240.0, 1.0, 1.0),
        Vector3::new(0.0, 0.0, 1.0),
        epsilon = 1e-3
    );
}

#[test]
fn bezier_corners_interpolate_control_points() {
    let control_points: Vec<Vector3<f32>> = (0..16)
        .map(|k| {
            Vector3::new(
                (k % 4) as f32,
                ((k % 4) * (k / 4)) as f32 * 0.25,
                (k / 4) as f32,
            )
        })
        .collect();

    let (p00, _) = bezier::surface_sample(&control_points, 4, 4, 0.0, 0.0);
    assert_ulps_eq!(p00, control_points[0]);

    let (p11, _) = bezier::surface_sample(&control_points, 4, 4, 1.0, 1.0);
    assert_ulps_eq!(p11, control_points[15]);

    let (p10, _) = bezier::surface_sample(&control_points, 4, 4, 1.0, 0.0);
    assert_ulps_eq!(p10, control_points[12]);

    let (p01, _) = bezier::surface_sample(&control_points, 4, 4, 0.0, 1.0);
    assert_ulps_eq!(p01, control_points[3]);
}

#[test]
fn bezier_normal_points_away_from_the_bow() {
    // A grid bowed upwards: x along rows, z along columns, center lifted.
    let mut control_points = Vec::with_capacity(16);
    for i in 0..4 {
        for j in 0..4 {
            let lifted = i >= 1 && i <= 2 && j >= 1 && j <= 2;
            control_points.push(Vector3::new(
                i as f32 / 3.0 - 0.5,
                if lifted { 0.5 } else { 0.0 },
                j as f32 / 3.0 - 0.5,
            ));
        }
    }

    let (_, normal) = bezier::surface_sample(&control_points, 4, 4, 0.5, 0.5);
    assert_ulps_eq!(normal.magnitude(), 1.0, max_ulps = 8);
    assert!(normal.y > 0.9);
}

#[test]
fn bezier_patch_sampling_density() {
    let control_points: Vec<Vector3<f32>> = (0..16)
        .map(|k| Vector3::new((k % 4) as f32, 0.0, (k / 4) as f32))
        .collect();

    let patch = scene3d::geometry::generators::bezier_patch(&control_points, 4, 4, 4.0);
    assert_eq!(patch.vertices().len(), 16 * 16);
    assert_eq!(patch.triangle_count(), 15 * 15 * 2);

    // Texture coordinates are the sample parameters.
    assert_ulps_eq!(patch.vertices()[0].texcoord, Vector2::new(0.0, 0.0));
    assert_ulps_eq!(
        patch.vertices().last().unwrap().texcoord,
        Vector2::new(1.0, 1.0)
    );
}
