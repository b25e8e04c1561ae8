use tuple_math::{assert_approx_eq, func, vec2, vec3, Vec2d, Vec3d, Vec3f, ZeroCheck};

#[test]
fn basic_operations() {
    assert_eq!(func::add((1.0, 2.0), (3.0, 4.0)), vec2(4.0, 6.0));
    assert_eq!(func::dot((1.0, 0.0, 0.0), (0.0, 1.0, 0.0)), 0.0);
    assert_eq!(
        func::cross((1.0, 0.0, 0.0), (0.0, 1.0, 0.0)),
        vec3(0.0, 0.0, 1.0)
    );
    assert_eq!(func::normalize((3.0, 4.0)), vec2(0.6, 0.8));
    assert_eq!(func::lerp((0.0, 0.0), (10.0, 10.0), 0.5), vec2(5.0, 5.0));
}

#[test]
fn safe_variants_on_zero() {
    assert_eq!(Vec3d::ZERO.reciprocal_length_safe(), 0.0);
    assert_eq!(Vec3d::ZERO.length_safe(), 0.0);
    assert_eq!(Vec3d::ZERO.normalize_safe(), Vec3d::ZERO);
    assert_eq!(Vec3f::ZERO.normalize_safe(), Vec3f::ZERO);
}

#[test]
fn margin_variants_on_near_zero() {
    let v = vec2(0.0001, 0.0001);
    assert_eq!(v.normalize_safe_within(0.001), Vec2d::ZERO);
    assert_eq!(v.length_safe_within(0.001), 0.0);
    assert_eq!(v.reciprocal_length_safe_within(0.001), 0.0);
}

#[test]
fn min_max_ties() {
    let v = vec2(5.0, 5.0);
    assert_eq!(v.min_component(), 0);
    assert_eq!(v.max_component(), 0);
    assert_eq!(vec3(2.0, 1.0, 1.0).min_component(), 1);
}

#[test]
fn reflect_off_floor() {
    // A ball moving down and to the right bounces off a horizontal floor.
    let velocity = vec2(3.0, -2.0);
    assert_eq!(velocity.reflect(Vec2d::Y), vec2(3.0, 2.0));

    let velocity = vec3(1.0, -4.0, 0.5);
    assert_eq!(velocity.reflect(Vec3d::Y), vec3(1.0, 4.0, 0.5));
}

#[test]
fn project_onto_axis() {
    let v = vec3(3.0, -2.0, 8.0);
    assert_eq!(v.project(Vec3d::X), vec3(3.0, 0.0, 0.0));
    assert_eq!(v.project(Vec3d::Z), vec3(0.0, 0.0, 8.0));

    // Projection and rejection add back up to the original vector.
    let axis = vec3(1.0, 1.0, 0.0).normalize();
    let along = v.project(axis);
    let rest = v - along;
    assert_approx_eq!(along + rest, v);
    assert_approx_eq!(rest.dot(axis), 0.0).abs(1e-12);
}

#[test]
fn rotate_full_circle() {
    let mut v = vec2(2.0, 1.0);
    for _ in 0..8 {
        v = v.rotate(std::f64::consts::FRAC_PI_4);
    }
    assert_approx_eq!(v, vec2(2.0, 1.0)).abs(1e-12);
}

#[test]
fn integrate_motion() {
    let mut position = Vec2d::ZERO;
    let velocity = vec2(4.0, -1.0);
    for _ in 0..4 {
        position = position.integrate_linear(velocity, 0.25);
    }
    assert_eq!(position, vec2(4.0, -1.0));
}

#[test]
fn exact_zero_check_is_per_component() {
    // Components that cancel out are not a zero vector.
    let v = vec2(1.0, -1.0);
    assert_eq!(v.normalize_safe(), vec2(1.0, -1.0) / 2.0f64.sqrt());
    assert_eq!(v.normalize_with(ZeroCheck::ComponentSum), Vec2d::ZERO);
}
