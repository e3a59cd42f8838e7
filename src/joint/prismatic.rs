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
use super::transform::LinearAffineTransform;
use crate::constraint::{
    Axis, AxisX, AxisY, AxisZ, ConstraintPrismatic, ConstraintPrismaticUnaligned,
};
use na::{DVector, Isometry3, RealField, Translation3, Unit, UnitQuaternion, Vector3};
use nalgebra as na;
use std::marker::PhantomData;

/// Prismatic joint along a coordinate axis, position is the length
///
/// # Examples
///
/// ```
/// use kmimic::joint::{JointModel, PrismaticJointX};
/// use nalgebra::DVector;
///
/// let joint = PrismaticJointX::<f64>::new();
/// let mut data = joint.create_data();
/// joint.calc(&mut data, &DVector::from_element(1, -1.0));
/// assert_eq!(data.placement.translation.vector.x, -1.0);
/// ```
#[derive(Copy, Debug, Clone, Default, PartialEq)]
pub struct PrismaticJoint<T, A> {
    marker: PhantomData<(T, A)>,
}

pub type PrismaticJointX<T> = PrismaticJoint<T, AxisX>;
pub type PrismaticJointY<T> = PrismaticJoint<T, AxisY>;
pub type PrismaticJointZ<T> = PrismaticJoint<T, AxisZ>;

impl<T: RealField + Copy, A: Axis> PrismaticJoint<T, A> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: RealField + Copy, A: Axis> JointModel<T> for PrismaticJoint<T, A> {
    type Constraint = ConstraintPrismatic<T, A>;
    type ConfigTransform = LinearAffineTransform;

    fn joint_type(&self) -> JointType<T> {
        match A::INDEX {
            0 => JointType::PrismaticX,
            1 => JointType::PrismaticY,
            _ => JointType::PrismaticZ,
        }
    }

    fn neutral_configuration(&self) -> DVector<T> {
        DVector::zeros(1)
    }

    fn create_data(&self) -> JointData<T, Self::Constraint> {
        JointData::new(ConstraintPrismatic::new())
    }

    fn calc(&self, data: &mut JointData<T, Self::Constraint>, q: &DVector<T>) {
        check_configuration_size(q, 1);
        let mut translation = Vector3::zeros();
        translation[A::INDEX] = q[0];
        data.placement =
            Isometry3::from_parts(Translation3::from(translation), UnitQuaternion::identity());
    }
}

/// Prismatic joint along an arbitrary axis
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct PrismaticUnalignedJoint<T: RealField> {
    axis: Unit<Vector3<T>>,
}

impl<T: RealField + Copy> PrismaticUnalignedJoint<T> {
    /// Create the joint from the (not normalized) axis
    ///
    /// In case the axis is zero, this function panics.
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

impl<T: RealField + Copy> JointModel<T> for PrismaticUnalignedJoint<T> {
    type Constraint = ConstraintPrismaticUnaligned<T>;
    type ConfigTransform = LinearAffineTransform;

    fn joint_type(&self) -> JointType<T> {
        JointType::PrismaticUnaligned { axis: self.axis }
    }

    fn neutral_configuration(&self) -> DVector<T> {
        DVector::zeros(1)
    }

    fn create_data(&self) -> JointData<T, Self::Constraint> {
        JointData::new(ConstraintPrismaticUnaligned::new(self.axis))
    }

    fn calc(&self, data: &mut JointData<T, Self::Constraint>, q: &DVector<T>) {
        check_configuration_size(q, 1);
        data.placement = Isometry3::from_parts(
            Translation3::from(self.axis.into_inner() * q[0]),
            UnitQuaternion::identity(),
        );
    }
}

#[test]
fn test_prismatic_unaligned_translation() {
    let joint = PrismaticUnalignedJoint::new(0.0, 3.0, 4.0);
    let mut data = joint.create_data();
    joint.calc(&mut data, &DVector::from_element(1, 10.0));
    let t = data.placement.translation.vector;
    assert!((t - Vector3::new(0.0, 6.0, 8.0)).norm() < 1e-12);
    assert_eq!(joint.nq(), 1);
}
