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
use super::transform::ConfigurationTransform;
use nalgebra::{DVector, RealField};

/// Affine parameters for copying the joint state of the master joint
///
/// For example, `Mimic` is used to calculate the position of the gripper(R) from
/// gripper(L). In that case, the code like below will be used.
///
/// ```
/// let mimic_for_gripper_r = kmimic::joint::Mimic::new(-1.0, 0.0);
/// ```
///
/// The mimic position is `master position * scaling + offset`, the mimic
/// velocity is `master velocity * scaling`.
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Mimic<T: RealField> {
    pub scaling: T,
    pub offset: T,
    /// Accept `scaling != 1` on `(cos, sin)` joints, see `UnboundedRevoluteAffineTransform`
    pub allow_unit_circle_scaling: bool,
}

impl<T> Mimic<T>
where
    T: RealField + Copy,
{
    /// Create new instance of Mimic
    ///
    /// # Examples
    ///
    /// ```
    /// let m = kmimic::joint::Mimic::<f64>::new(1.0, 0.5);
    /// ```
    pub fn new(scaling: T, offset: T) -> Self {
        Mimic {
            scaling,
            offset,
            allow_unit_circle_scaling: false,
        }
    }

    /// Calculate the mimic joint position of a scalar joint
    ///
    /// # Examples
    ///
    /// ```
    /// let m = kmimic::joint::Mimic::<f64>::new(1.0, 0.5);
    /// assert_eq!(m.mimic_position(0.2), 0.7); // 0.2 * 1.0 + 0.5
    /// ```
    ///
    /// ```
    /// let m = kmimic::joint::Mimic::<f64>::new(-2.0, -0.4);
    /// assert_eq!(m.mimic_position(0.2), -0.8); // 0.2 * -2.0 - 0.4
    /// ```
    pub fn mimic_position(&self, from_position: T) -> T {
        from_position * self.scaling + self.offset
    }

    /// Calculate the mimic joint velocity
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::DVector;
    ///
    /// let m = kmimic::joint::Mimic::<f64>::new(-2.0, 0.3);
    /// assert_eq!(m.mimic_velocity(&DVector::from_element(1, 0.5))[0], -1.0);
    /// ```
    pub fn mimic_velocity(&self, from_velocity: &DVector<T>) -> DVector<T> {
        from_velocity * self.scaling
    }

    /// Calculate the mimic configuration with the transform `C`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmimic::joint::{LinearAffineTransform, Mimic};
    /// use nalgebra::DVector;
    ///
    /// let m = Mimic::<f64>::new(3.0, 1.0);
    /// let mut q = DVector::zeros(1);
    /// m.transform_configuration::<LinearAffineTransform>(&DVector::from_element(1, 2.0), &mut q);
    /// assert_eq!(q[0], 7.0);
    /// ```
    pub fn transform_configuration<C>(&self, from_configuration: &DVector<T>, dest: &mut DVector<T>)
    where
        C: ConfigurationTransform<T>,
    {
        C::run(from_configuration, self.scaling, self.offset, dest);
    }
}

impl<T: RealField + Copy> Default for Mimic<T> {
    fn default() -> Self {
        Mimic::new(T::one(), T::zero())
    }
}

/// Build `Mimic`
///
/// # Examples
///
/// ```
/// let mimic = kmimic::joint::MimicBuilder::new()
///     .scaling(2.0)
///     .offset(-0.1)
///     .allow_unit_circle_scaling(true)
///     .finalize();
/// assert_eq!(mimic.scaling, 2.0);
/// assert!(mimic.allow_unit_circle_scaling);
/// ```
#[derive(Debug, Clone)]
pub struct MimicBuilder<T: RealField> {
    scaling: T,
    offset: T,
    allow_unit_circle_scaling: bool,
}

impl<T> Default for MimicBuilder<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MimicBuilder<T>
where
    T: RealField + Copy,
{
    pub fn new() -> Self {
        MimicBuilder {
            scaling: T::one(),
            offset: T::zero(),
            allow_unit_circle_scaling: false,
        }
    }
    pub fn scaling(mut self, scaling: T) -> Self {
        self.scaling = scaling;
        self
    }
    pub fn offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }
    pub fn allow_unit_circle_scaling(mut self, allow: bool) -> Self {
        self.allow_unit_circle_scaling = allow;
        self
    }
    pub fn finalize(self) -> Mimic<T> {
        Mimic {
            scaling: self.scaling,
            offset: self.offset,
            allow_unit_circle_scaling: self.allow_unit_circle_scaling,
        }
    }
}
