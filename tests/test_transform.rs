use approx::assert_relative_eq;
use kmimic::joint::*;
use nalgebra::DVector;
use std::f64::consts::PI;

fn random_angle() -> f64 {
    (rand::random::<f64>() * 2.0 - 1.0) * PI
}

fn unit_circle(theta: f64) -> DVector<f64> {
    DVector::from_vec(vec![theta.cos(), theta.sin()])
}

#[test]
fn test_linear_identity() {
    let q0 = DVector::from_element(1, random_angle());
    let mut q1 = DVector::zeros(1);
    LinearAffineTransform::run(&q0, 1.0, 0.0, &mut q1);
    assert_eq!(q0, q1);
}

#[test]
fn test_linear_zero_gives_offset() {
    let offset = random_angle();
    let mut q1 = DVector::zeros(1);
    LinearAffineTransform::run(&DVector::zeros(1), random_angle(), offset, &mut q1);
    assert_eq!(q1[0], offset);
}

#[test]
fn test_linear_scaling_and_offset() {
    let mut q1 = DVector::zeros(1);
    LinearAffineTransform::run(&DVector::from_element(1, 0.5), -4.0, 0.25, &mut q1);
    assert_relative_eq!(q1[0], -1.75);
}

#[test]
fn test_unbounded_identity() {
    for _ in 0..10 {
        let q0 = unit_circle(random_angle());
        let mut q1 = DVector::zeros(2);
        UnboundedRevoluteAffineTransform::run(&q0, 1.0, 0.0, &mut q1);
        assert_relative_eq!(q0, q1, epsilon = 1e-12);
    }
}

#[test]
fn test_unbounded_zero_angle_gives_offset() {
    let mut q1 = DVector::zeros(2);
    UnboundedRevoluteAffineTransform::run(&unit_circle(0.0), 1.0, 2.0, &mut q1);
    assert_relative_eq!(q1, unit_circle(2.0), epsilon = 1e-12);
}

#[test]
fn test_unbounded_adds_offset() {
    for _ in 0..10 {
        let theta = random_angle();
        let offset = random_angle();
        let mut q1 = DVector::zeros(2);
        UnboundedRevoluteAffineTransform::run(&unit_circle(theta), 1.0, offset, &mut q1);
        assert_relative_eq!(q1, unit_circle(theta + offset), epsilon = 1e-12);
        assert_relative_eq!(q1.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_unbounded_scaled_keeps_unit_norm() {
    for _ in 0..10 {
        let mut q1 = DVector::zeros(2);
        let q0 = unit_circle(random_angle());
        UnboundedRevoluteAffineTransform::run(&q0, random_angle(), 0.3, &mut q1);
        assert_relative_eq!(q1.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_encoding_dispatch() {
    assert_eq!(
        <LinearAffineTransform as ConfigurationTransform<f64>>::ENCODING,
        ConfigEncoding::Linear
    );
    assert_eq!(
        <UnboundedRevoluteAffineTransform as ConfigurationTransform<f64>>::ENCODING,
        ConfigEncoding::UnitCircle
    );

    let theta = 0.7;
    let mut by_encoding = DVector::zeros(2);
    let mut by_type = DVector::zeros(2);
    ConfigEncoding::UnitCircle.run(&unit_circle(theta), 1.0, 0.2, &mut by_encoding);
    UnboundedRevoluteAffineTransform::run(&unit_circle(theta), 1.0, 0.2, &mut by_type);
    assert_eq!(by_encoding, by_type);
}

#[test]
#[should_panic]
fn test_linear_size_mismatch_panics() {
    let mut q1 = DVector::zeros(2);
    LinearAffineTransform::run(&DVector::zeros(1), 1.0, 0.0, &mut q1);
}
