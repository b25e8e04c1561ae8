//! Every way of receiving a result must produce the same components.

use tuple_math::{assert_approx_eq, func, vec2, vec3, Extremum, Vec2f, Vec3d, Vector};

#[test]
fn value_array_object_and_callback() {
    let a = vec3(1.5, -2.0, 0.25);
    let b = vec3(-4.0, 0.5, 8.0);
    let by_value = a.cross(b);

    let mut array = [0.0; 3];
    a.cross(b).extract_into(&mut array);

    let mut object = Vec3d::ZERO;
    a.cross(b).extract_into(&mut object);

    let mut storage = vec![0.0; 6];
    a.cross(b).extract_into(&mut storage[3..]);

    let relayed = a.cross(b).relay(|x, y, z| [x, y, z]);

    assert_eq!(by_value, array);
    assert_eq!(by_value, object);
    assert_eq!(by_value, storage[3..]);
    assert_eq!(by_value, relayed);
    assert_eq!(by_value, func::cross(a, b));
    assert_eq!(by_value, func::cross(a.into_array(), (-4.0, 0.5, 8.0)));
}

#[test]
fn chained_extraction() {
    let mut scratch = Vec2f::ZERO;
    let len = vec2(3.0, 4.0)
        .normalize()
        .extract_into(&mut scratch)
        .length();
    assert_approx_eq!(len, 1.0);
    assert_eq!(scratch, vec2(0.6, 0.8));
}

#[test]
fn callback_can_build_other_types() {
    #[derive(Debug, PartialEq)]
    struct Point {
        x: f32,
        y: f32,
    }

    let p = vec2(1.0, 2.0)
        .lerp(vec2(3.0, 6.0), 0.5)
        .relay(|x, y| Point { x, y });
    assert_eq!(p, Point { x: 2.0, y: 4.0 });
}

#[test]
fn reductions() {
    let v: Vector<f64, 3> = vec3(9.0, -1.0, 9.0);

    let mut min = Extremum::default();
    let mut max = Extremum::default();
    v.min_element_into(&mut min);
    v.max_element_into(&mut max);

    for (extremum, value, index, relayed) in [
        (
            v.min_element(),
            v.min_value(),
            v.min_component(),
            v.min_element_relay(|value, index| Extremum { value, index }),
        ),
        (
            v.max_element(),
            v.max_value(),
            v.max_component(),
            v.max_element_relay(|value, index| Extremum { value, index }),
        ),
    ] {
        assert_eq!(extremum.value, value);
        assert_eq!(extremum.index, index);
        assert_eq!(extremum, relayed);
    }

    assert_eq!(min, Extremum { value: -1.0, index: 1 });
    assert_eq!(max, Extremum { value: 9.0, index: 0 });
    assert_eq!(func::min(v), min);
    assert_eq!(func::max([9.0, -1.0, 9.0]), max);
}
