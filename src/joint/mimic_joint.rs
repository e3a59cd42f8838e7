/*
  Copyright 2020 Takashi Ogura

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
use super::joint_type::{ConfigEncoding, JointType};
use super::mimic::Mimic;
use super::model::{JointData, JointModel};
use super::transform::ConfigurationTransform;
use crate::constraint::{MotionSubspace, ScaledConstraint};
use crate::errors::*;
use na::{DVector, RealField};
use nalgebra as na;
use simba::scalar::SubsetOf;
use tracing::{debug, warn};

/// Joint whose configuration and velocity follow a master joint
///
/// The wrapped joint model gives the kinematics, evaluated at the mimic
/// configuration `transform(q_master, scaling, offset)`. Its motion subspace
/// is scaled by `scaling`, so it is driven by the master velocity.
///
/// # Examples
///
/// ```
/// use kmimic::joint::{JointModelMimic, Mimic, PrismaticJointZ};
/// use nalgebra::DVector;
///
/// let gripper_r = JointModelMimic::new(PrismaticJointZ::new(), Mimic::new(-1.0, 0.0)).unwrap();
/// let mut data = gripper_r.create_data();
/// gripper_r.calc(&mut data, &DVector::from_element(1, 0.02)).unwrap();
/// assert_eq!(data.placement.translation.vector.z, -0.02);
/// ```
#[derive(Debug, Clone)]
pub struct JointModelMimic<T: RealField, J> {
    joint: J,
    mimic: Mimic<T>,
}

impl<T, J> JointModelMimic<T, J>
where
    T: RealField + Copy + SubsetOf<f64>,
    J: JointModel<T>,
{
    /// Create the mimic joint, checking the mimic parameters
    ///
    /// It returns Err if `scaling` or `offset` is not finite, or if `scaling`
    /// is not 1 for a `(cos, sin)` joint and `allow_unit_circle_scaling` is not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmimic::joint::{JointModelMimic, Mimic, MimicBuilder, UnboundedRevoluteJointX};
    ///
    /// let joint = UnboundedRevoluteJointX::<f64>::new();
    /// assert!(JointModelMimic::new(joint, Mimic::new(1.0, 0.5)).is_ok());
    /// assert!(JointModelMimic::new(joint, Mimic::new(2.0, 0.5)).is_err());
    ///
    /// let mimic = MimicBuilder::new().scaling(2.0).allow_unit_circle_scaling(true).finalize();
    /// assert!(JointModelMimic::new(joint, mimic).is_ok());
    /// ```
    pub fn new(joint: J, mimic: Mimic<T>) -> Result<Self, Error> {
        if !mimic.scaling.is_finite() || !mimic.offset.is_finite() {
            return Err(Error::NonFiniteMimicError {
                scaling: na::convert(mimic.scaling),
                offset: na::convert(mimic.offset),
            });
        }
        let joint_type = joint.joint_type();
        let encoding = <J::ConfigTransform as ConfigurationTransform<T>>::ENCODING;
        if encoding == ConfigEncoding::UnitCircle && mimic.scaling != T::one() {
            if !mimic.allow_unit_circle_scaling {
                return Err(Error::UnsupportedScalingError {
                    joint_type: joint_type.to_string(),
                    scaling: na::convert(mimic.scaling),
                });
            }
            warn!(
                "mimic {} scaling = {} goes through atan2, it jumps when the master crosses ±π",
                joint_type, mimic.scaling
            );
        }
        debug!(
            "mimic {} scaling = {}, offset = {}",
            joint_type, mimic.scaling, mimic.offset
        );
        Ok(JointModelMimic { joint, mimic })
    }

    /// The wrapped joint model
    #[inline]
    pub fn joint(&self) -> &J {
        &self.joint
    }

    #[inline]
    pub fn mimic(&self) -> &Mimic<T> {
        &self.mimic
    }

    #[inline]
    pub fn joint_type(&self) -> JointType<T> {
        self.joint.joint_type()
    }

    #[inline]
    pub fn nq(&self) -> usize {
        self.joint.nq()
    }

    #[inline]
    pub fn nv(&self) -> usize {
        self.joint.nv()
    }

    pub fn create_data(&self) -> JointData<T, J::Constraint> {
        self.joint.create_data()
    }

    /// Calculate the mimic configuration from the master configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use kmimic::joint::{JointModelMimic, Mimic, RevoluteJointX};
    /// use nalgebra::DVector;
    ///
    /// let joint = JointModelMimic::new(RevoluteJointX::new(), Mimic::new(1.0, 2.0)).unwrap();
    /// let q = joint.configuration(&DVector::from_element(1, 0.3)).unwrap();
    /// assert_eq!(q[0], 2.3);
    /// assert!(joint.configuration(&DVector::from_element(2, 0.3)).is_err());
    /// ```
    pub fn configuration(&self, master_configuration: &DVector<T>) -> Result<DVector<T>, Error> {
        let nq = self.nq();
        if master_configuration.len() != nq {
            return Err(Error::SizeMismatchError {
                input: master_configuration.len(),
                required: nq,
            });
        }
        let mut q = DVector::zeros(nq);
        self.mimic
            .transform_configuration::<J::ConfigTransform>(master_configuration, &mut q);
        Ok(q)
    }

    /// Update `data` from the master configuration
    pub fn calc(
        &self,
        data: &mut JointData<T, J::Constraint>,
        master_configuration: &DVector<T>,
    ) -> Result<(), Error> {
        let q = self.configuration(master_configuration)?;
        self.joint.calc(data, &q);
        Ok(())
    }

    /// Update `data` from the master configuration and velocity
    pub fn calc_velocity(
        &self,
        data: &mut JointData<T, J::Constraint>,
        master_configuration: &DVector<T>,
        master_velocity: &DVector<T>,
    ) -> Result<(), Error> {
        let nv = self.nv();
        if master_velocity.len() != nv {
            return Err(Error::SizeMismatchError {
                input: master_velocity.len(),
                required: nv,
            });
        }
        self.calc(data, master_configuration)?;
        let velocity = self.constraint(data).apply(master_velocity);
        data.velocity = velocity;
        Ok(())
    }

    /// Motion subspace of the mimic joint, borrowing the one in `data`
    pub fn constraint<'a>(
        &self,
        data: &'a JointData<T, J::Constraint>,
    ) -> ScaledConstraint<'a, T, J::Constraint> {
        ScaledConstraint::new(&data.constraint, self.mimic.scaling)
    }
}
