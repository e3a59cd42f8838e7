/*
  Copyright 2017 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
use super::joint_type::JointType;
use super::model::*;
use super::transform::{LinearAffineTransform, UnboundedRevoluteAffineTransform};
use crate::constraint::{
    Axis, AxisX, AxisY, AxisZ, ConstraintRevolute, ConstraintRevoluteUnaligned,
};
use na::{
    DVector, Isometry3, Matrix3, RealField, Rotation3, Translation3, Unit, UnitQuaternion, Vector3,
};
use nalgebra as na;
use std::marker::PhantomData;

/// Revolute joint around a coordinate axis, position is the angle [rad]
///
/// # Examples
///
/// ```
/// use kmimic::joint::{JointModel, RevoluteJointZ};
/// use nalgebra::DVector;
///
/// let joint = RevoluteJointZ::<f64>::new();
/// let mut data = joint.create_data();
/// joint.calc(&mut data, &DVector::from_element(1, std::f64::consts::FRAC_PI_2));
/// let x = data.placement * nalgebra::Point3::new(1.0, 0.0, 0.0);
/// assert!((x.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Copy, Debug, Clone, Default, PartialEq)]
pub struct RevoluteJoint<T, A> {
    marker: PhantomData<(T, A)>,
}

pub type RevoluteJointX<T> = RevoluteJoint<T, AxisX>;
pub type RevoluteJointY<T> = RevoluteJoint<T, AxisY>;
pub type RevoluteJointZ<T> = RevoluteJoint<T, AxisZ>;

impl<T: RealField + Copy, A: Axis> RevoluteJoint<T, A> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: RealField + Copy, A: Axis> JointModel<T> for RevoluteJoint<T, A> {
    type Constraint = ConstraintRevolute<T, A>;
    type ConfigTransform = LinearAffineTransform;

    fn joint_type(&self) -> JointType<T> {
        match A::INDEX {
            0 => JointType::RevoluteX,
            1 => JointType::RevoluteY,
            _ => JointType::RevoluteZ,
        }
    }

    fn neutral_configuration(&self) -> DVector<T> {
        DVector::zeros(1)
    }

    fn create_data(&self) -> JointData<T, Self::Constraint> {
        JointData::new(ConstraintRevolute::new())
    }

    fn calc(&self, data: &mut JointData<T, Self::Constraint>, q: &DVector<T>) {
        check_configuration_size(q, 1);
        data.placement = Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&A::unit_axis(), q[0]),
        );
    }
}

/// Revolute joint around an arbitrary axis
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct RevoluteUnalignedJoint<T: RealField> {
    axis: Unit<Vector3<T>>,
}

impl<T: RealField + Copy> RevoluteUnalignedJoint<T> {
    /// Create the joint from the (not normalized) axis
    ///
    /// In case the axis is zero, this function panics.
    ///
    /// # Examples
    ///
    /// ```
    /// let joint = kmimic::joint::RevoluteUnalignedJoint::<f64>::new(1.5, 1.0, 0.0);
    /// assert!((joint.axis().norm() - 1.0).abs() < 1e-12);
    /// // let joint = kmimic::joint::RevoluteUnalignedJoint::new(0.0, 0.0, 0.0); // panic
    /// ```
    pub fn new(x: T, y: T, z: T) -> Self {
        let axis = Vector3::new(x, y, z);
        assert!(axis.norm() > T::zero(), "axis must not be zero");
        Self::from_axis(Unit::new_normalize(axis))
    }

    pub fn from_axis(axis: Unit<Vector3<T>>) -> Self {
        Self { axis }
    }

    #[inline]
    pub fn axis(&self) -> &Unit<Vector3<T>> {
        &self.axis
    }
}

impl<T: RealField + Copy> JointModel<T> for RevoluteUnalignedJoint<T> {
    type Constraint = ConstraintRevoluteUnaligned<T>;
    type ConfigTransform = LinearAffineTransform;

    fn joint_type(&self) -> JointType<T> {
        JointType::RevoluteUnaligned { axis: self.axis }
    }

    fn neutral_configuration(&self) -> DVector<T> {
        DVector::zeros(1)
    }

    fn create_data(&self) -> JointData<T, Self::Constraint> {
        JointData::new(ConstraintRevoluteUnaligned::new(self.axis))
    }

    fn calc(&self, data: &mut JointData<T, Self::Constraint>, q: &DVector<T>) {
        check_configuration_size(q, 1);
        data.placement = Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&self.axis, q[0]),
        );
    }
}

/// Revolute joint without limits, position is `(cos θ, sin θ)`
#[derive(Copy, Debug, Clone, Default, PartialEq)]
pub struct UnboundedRevoluteJoint<T, A> {
    marker: PhantomData<(T, A)>,
}

pub type UnboundedRevoluteJointX<T> = UnboundedRevoluteJoint<T, AxisX>;
pub type UnboundedRevoluteJointY<T> = UnboundedRevoluteJoint<T, AxisY>;
pub type UnboundedRevoluteJointZ<T> = UnboundedRevoluteJoint<T, AxisZ>;

impl<T: RealField + Copy, A: Axis> UnboundedRevoluteJoint<T, A> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: RealField + Copy, A: Axis> JointModel<T> for UnboundedRevoluteJoint<T, A> {
    type Constraint = ConstraintRevolute<T, A>;
    type ConfigTransform = UnboundedRevoluteAffineTransform;

    fn joint_type(&self) -> JointType<T> {
        match A::INDEX {
            0 => JointType::RevoluteUnboundedX,
            1 => JointType::RevoluteUnboundedY,
            _ => JointType::RevoluteUnboundedZ,
        }
    }

    fn neutral_configuration(&self) -> DVector<T> {
        DVector::from_vec(vec![T::one(), T::zero()])
    }

    fn create_data(&self) -> JointData<T, Self::Constraint> {
        JointData::new(ConstraintRevolute::new())
    }

    /// Rodrigues formula straight from `(cos θ, sin θ)`
    fn calc(&self, data: &mut JointData<T, Self::Constraint>, q: &DVector<T>) {
        check_configuration_size(q, 2);
        let (c, s) = (q[0], q[1]);
        let k = A::unit_vector::<T>().cross_matrix();
        let r: Matrix3<T> = Matrix3::identity() + k * s + k * k * (T::one() - c);
        data.placement = Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(r)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_matches_bounded() {
        let theta = 2.7_f64;
        let bounded = RevoluteJointY::<f64>::new();
        let unbounded = UnboundedRevoluteJointY::<f64>::new();
        let mut bounded_data = bounded.create_data();
        let mut unbounded_data = unbounded.create_data();
        bounded.calc(&mut bounded_data, &DVector::from_element(1, theta));
        unbounded.calc(
            &mut unbounded_data,
            &DVector::from_vec(vec![theta.cos(), theta.sin()]),
        );
        let diff = bounded_data.placement.to_homogeneous()
            - unbounded_data.placement.to_homogeneous();
        assert!(diff.norm() < 1e-12);
    }

    #[test]
    fn neutral_configuration_is_identity() {
        let joint = UnboundedRevoluteJointX::<f64>::new();
        let mut data = joint.create_data();
        joint.calc(&mut data, &joint.neutral_configuration());
        let diff = data.placement.to_homogeneous() - Isometry3::identity().to_homogeneous();
        assert!(diff.norm() < 1e-12);
        assert_eq!(joint.nq(), 2);
        assert_eq!(joint.nv(), 1);
    }
}
