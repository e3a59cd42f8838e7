use approx::assert_relative_eq;
use kmimic::joint::*;
use kmimic::prelude::*;
use kmimic::Error;
use nalgebra::{DVector, Vector3};

fn unit_circle(theta: f64) -> DVector<f64> {
    DVector::from_vec(vec![theta.cos(), theta.sin()])
}

#[test]
fn test_revolute_mimic_placement() {
    let joint = RevoluteUnalignedJoint::new(1.5, 1.0, 0.0);
    let mimic = JointModelMimic::new(joint, Mimic::new(2.0, -0.3)).unwrap();
    let mut mimic_data = mimic.create_data();
    mimic
        .calc(&mut mimic_data, &DVector::from_element(1, 0.4))
        .unwrap();

    let mut data = joint.create_data();
    joint.calc(&mut data, &DVector::from_element(1, 0.5));
    assert_relative_eq!(
        mimic_data.placement.to_homogeneous(),
        data.placement.to_homogeneous(),
        epsilon = 1e-12
    );
}

#[test]
fn test_prismatic_mimic_velocity() {
    let joint = PrismaticJointY::<f64>::new();
    let mimic = JointModelMimic::new(joint, Mimic::new(-1.0, 0.0)).unwrap();
    let mut data = mimic.create_data();
    mimic
        .calc_velocity(
            &mut data,
            &DVector::from_element(1, 0.02),
            &DVector::from_element(1, 0.1),
        )
        .unwrap();
    assert_relative_eq!(
        data.placement.translation.vector,
        Vector3::new(0.0, -0.02, 0.0)
    );
    assert_relative_eq!(data.velocity.linear, Vector3::new(0.0, -0.1, 0.0));
    assert_relative_eq!(data.velocity.angular, Vector3::zeros());
}

#[test]
fn test_mimic_velocity_matches_scaled_master() {
    let master = RevoluteJointZ::<f64>::new();
    let mimic = JointModelMimic::new(master, Mimic::new(3.0, 0.1)).unwrap();
    let q = DVector::from_element(1, 0.2);
    let v = DVector::from_element(1, -0.7);

    let mut master_data = master.create_data();
    master.calc_velocity(&mut master_data, &q, &v);
    let mut mimic_data = mimic.create_data();
    mimic.calc_velocity(&mut mimic_data, &q, &v).unwrap();

    assert_relative_eq!(mimic_data.velocity, master_data.velocity * 3.0, epsilon = 1e-12);
    assert_relative_eq!(
        mimic.mimic().mimic_velocity(&v)[0],
        mimic_data.velocity.angular.z,
        epsilon = 1e-12
    );
}

#[test]
fn test_unbounded_mimic_offset() {
    let joint = UnboundedRevoluteJointX::<f64>::new();
    let mimic = JointModelMimic::new(joint, Mimic::new(1.0, 0.5)).unwrap();
    let q = mimic.configuration(&unit_circle(2.9)).unwrap();
    assert_relative_eq!(q, unit_circle(3.4), epsilon = 1e-12);

    let mut mimic_data = mimic.create_data();
    mimic.calc(&mut mimic_data, &unit_circle(2.9)).unwrap();
    let bounded = RevoluteJointX::<f64>::new();
    let mut data = bounded.create_data();
    bounded.calc(&mut data, &DVector::from_element(1, 3.4));
    assert_relative_eq!(
        mimic_data.placement.to_homogeneous(),
        data.placement.to_homogeneous(),
        epsilon = 1e-12
    );
}

#[test]
fn test_unbounded_mimic_scaling_needs_opt_in() {
    let joint = UnboundedRevoluteJointZ::<f64>::new();
    match JointModelMimic::new(joint, Mimic::new(2.0, 0.0)) {
        Err(Error::UnsupportedScalingError { scaling, .. }) => assert_eq!(scaling, 2.0),
        other => panic!("unexpected {:?}", other),
    }

    let mimic = MimicBuilder::new()
        .scaling(2.0)
        .allow_unit_circle_scaling(true)
        .finalize();
    let mimic = JointModelMimic::new(joint, mimic).unwrap();
    let q = mimic.configuration(&unit_circle(0.3)).unwrap();
    assert_relative_eq!(q, unit_circle(0.6), epsilon = 1e-12);
}

#[test]
fn test_non_finite_mimic() {
    let joint = RevoluteJointX::<f64>::new();
    assert!(matches!(
        JointModelMimic::new(joint, Mimic::new(f64::NAN, 0.0)),
        Err(Error::NonFiniteMimicError { .. })
    ));
    assert!(matches!(
        JointModelMimic::new(joint, Mimic::new(1.0, f64::INFINITY)),
        Err(Error::NonFiniteMimicError { .. })
    ));
}

#[test]
fn test_size_mismatch() {
    let joint = UnboundedRevoluteJointY::<f64>::new();
    let mimic = JointModelMimic::new(joint, Mimic::default()).unwrap();
    let mut data = mimic.create_data();
    assert!(matches!(
        mimic.calc(&mut data, &DVector::from_element(1, 0.0)),
        Err(Error::SizeMismatchError {
            input: 1,
            required: 2
        })
    ));
    assert!(matches!(
        mimic.calc_velocity(&mut data, &unit_circle(0.0), &DVector::zeros(2)),
        Err(Error::SizeMismatchError {
            input: 2,
            required: 1
        })
    ));
}

#[test]
fn test_mimic_constraint_borrows_data() {
    let joint = PrismaticJointZ::<f64>::new();
    let mimic = JointModelMimic::new(joint, Mimic::new(0.5, 0.0)).unwrap();
    let data = mimic.create_data();
    let s = mimic.constraint(&data);
    assert_eq!(s.scaling_factor(), 0.5);
    assert_eq!(s.nv(), 1);
    assert_eq!(s.matrix()[(2, 0)], 0.5);
    assert_eq!(mimic.joint_type(), JointType::PrismaticZ);
    assert_eq!(mimic.joint_type().to_string(), "[↕+Z]");
}
