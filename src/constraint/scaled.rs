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
use super::traits::MotionSubspace;
use crate::spatial::{Force, Motion};
use nalgebra::{DMatrix, DVector, Isometry3, Matrix6xX, RealField};

/// Motion subspace scaled by a constant factor
///
/// Every operation forwards to the inner subspace and scales the result, so
/// the sparse structure of the inner subspace is kept. The inner subspace is
/// borrowed, never copied.
///
/// A zero factor behaves as a locked joint, a negative one inverts the direction.
///
/// # Examples
///
/// ```
/// use kmimic::constraint::{AxisZ, ConstraintRevolute, MotionSubspace, ScaledConstraint};
/// use nalgebra::DVector;
///
/// let s = ConstraintRevolute::<f64, AxisZ>::new();
/// let scaled = ScaledConstraint::new(&s, -2.0);
/// assert_eq!(scaled.nv(), s.nv());
///
/// let v = DVector::from_element(1, 0.25);
/// assert_eq!((&scaled * &v).angular.z, -0.5);
/// ```
#[derive(Debug)]
pub struct ScaledConstraint<'a, T: RealField, S: ?Sized> {
    constraint: &'a S,
    scaling_factor: T,
}

impl<'a, T, S> ScaledConstraint<'a, T, S>
where
    T: RealField + Copy,
    S: MotionSubspace<T> + ?Sized,
{
    pub fn new(constraint: &'a S, scaling_factor: T) -> Self {
        Self {
            constraint,
            scaling_factor,
        }
    }

    /// The wrapped (unscaled) subspace
    #[inline]
    pub fn constraint(&self) -> &'a S {
        self.constraint
    }

    #[inline]
    pub fn scaling_factor(&self) -> T {
        self.scaling_factor
    }

    #[inline]
    pub fn set_scaling_factor(&mut self, scaling_factor: T) {
        self.scaling_factor = scaling_factor;
    }
}

impl<'a, T: RealField + Copy, S: ?Sized> Clone for ScaledConstraint<'a, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: RealField + Copy, S: ?Sized> Copy for ScaledConstraint<'a, T, S> {}

impl<'a, T, S> MotionSubspace<T> for ScaledConstraint<'a, T, S>
where
    T: RealField + Copy,
    S: MotionSubspace<T> + ?Sized,
{
    #[inline]
    fn nv(&self) -> usize {
        self.constraint.nv()
    }

    fn matrix(&self) -> Matrix6xX<T> {
        self.constraint.matrix() * self.scaling_factor
    }

    fn apply(&self, v: &DVector<T>) -> Motion<T> {
        self.constraint.apply(v) * self.scaling_factor
    }

    fn se3_action(&self, m: &Isometry3<T>) -> Matrix6xX<T> {
        self.constraint.se3_action(m) * self.scaling_factor
    }

    fn motion_action(&self, v: &Motion<T>) -> Matrix6xX<T> {
        self.constraint.motion_action(v) * self.scaling_factor
    }

    fn transpose_mul_matrix(&self, f: &Matrix6xX<T>) -> DMatrix<T> {
        self.constraint.transpose_mul_matrix(f) * self.scaling_factor
    }

    fn transpose_mul_force(&self, f: &Force<T>) -> DVector<T> {
        self.constraint.transpose_mul_force(f) * self.scaling_factor
    }
}

impl_mul_tangent!(
    ['a, T: RealField + Copy, S: MotionSubspace<T> + ?Sized] ScaledConstraint<'a, T, S>
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{AxisX, ConstraintPrismatic};
    use crate::spatial::Se3Action;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    #[test]
    fn nested_scaling_multiplies() {
        let s = ConstraintPrismatic::<f64, AxisX>::new();
        let scaled = ScaledConstraint::new(&s, 2.0);
        let twice = ScaledConstraint::new(&scaled, -1.5);
        let m = Isometry3::from_parts(
            Translation3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
        );
        let expected = m.act_subspace(&s) * -3.0;
        assert!((m.act_subspace(&twice) - expected).norm() < 1e-12);
    }

    #[test]
    fn zero_factor_locks_joint() {
        let s = ConstraintPrismatic::<f64, AxisX>::new();
        let scaled = ScaledConstraint::new(&s, 0.0);
        let m = &scaled * &DVector::from_element(1, 3.0);
        assert_eq!(m.linear, Vector3::zeros());
        assert_eq!(m.angular, Vector3::zeros());
    }

    #[test]
    fn rebind_scaling_factor() {
        let s = ConstraintPrismatic::<f64, AxisX>::new();
        let mut scaled = ScaledConstraint::new(&s, 1.0);
        scaled.set_scaling_factor(4.0);
        assert_eq!(scaled.scaling_factor(), 4.0);
        assert_eq!(scaled.matrix()[(0, 0)], 4.0);
    }
}
