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
use super::transform::ConfigurationTransform;
use crate::constraint::MotionSubspace;
use crate::spatial::Motion;
use nalgebra::{DVector, Isometry3, RealField};

/// Per-joint state computed from the configuration
#[derive(Debug, Clone)]
pub struct JointData<T: RealField, S> {
    /// Motion subspace of the joint
    pub constraint: S,
    /// transform of the joint, from its child frame to its parent frame
    pub placement: Isometry3<T>,
    /// spatial velocity across the joint
    pub velocity: Motion<T>,
}

impl<T, S> JointData<T, S>
where
    T: RealField + Copy,
{
    pub fn new(constraint: S) -> Self {
        Self {
            constraint,
            placement: Isometry3::identity(),
            velocity: Motion::zero(),
        }
    }
}

/// Model of one joint: dimensions, configuration encoding and kinematics
///
/// The configuration transform is fixed per joint type, at compile time.
pub trait JointModel<T: RealField + Copy> {
    type Constraint: MotionSubspace<T>;
    type ConfigTransform: ConfigurationTransform<T>;

    fn joint_type(&self) -> JointType<T>;

    fn nq(&self) -> usize {
        self.joint_type().nq()
    }

    fn nv(&self) -> usize {
        self.joint_type().nv()
    }

    /// Configuration of the zero position
    fn neutral_configuration(&self) -> DVector<T>;

    fn create_data(&self) -> JointData<T, Self::Constraint>;

    /// Update `data.placement` from `q`
    ///
    /// # Panics
    ///
    /// Panics if `q.len() != nq()`.
    fn calc(&self, data: &mut JointData<T, Self::Constraint>, q: &DVector<T>);

    /// Update `data.placement` and `data.velocity = S * v`
    fn calc_velocity(
        &self,
        data: &mut JointData<T, Self::Constraint>,
        q: &DVector<T>,
        v: &DVector<T>,
    ) {
        self.calc(data, q);
        data.velocity = data.constraint.apply(v);
    }
}

pub(crate) fn check_configuration_size<T: RealField>(q: &DVector<T>, nq: usize) {
    assert_eq!(q.len(), nq, "configuration size mismatch");
}
