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
use super::axis::Axis;
use super::traits::*;
use crate::spatial::{Force, Motion};
use nalgebra::{DMatrix, DVector, Isometry3, Matrix6xX, RealField, Vector3};
use std::fmt;
use std::marker::PhantomData;

/// Motion subspace of a revolute joint around a coordinate axis, `S = [0; e]`
///
/// Used by bounded and unbounded revolute joints alike.
///
/// # Examples
///
/// ```
/// use kmimic::constraint::{AxisY, ConstraintRevolute, MotionSubspace};
/// use nalgebra::DVector;
///
/// let s = ConstraintRevolute::<f64, AxisY>::new();
/// let m = &s * &DVector::from_element(1, 0.5);
/// assert_eq!(m.angular.y, 0.5);
/// assert_eq!(s.matrix()[(4, 0)], 1.0);
/// ```
pub struct ConstraintRevolute<T, A> {
    marker: PhantomData<(T, A)>,
}

impl<T: RealField + Copy, A: Axis> ConstraintRevolute<T, A> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: RealField + Copy, A: Axis> Default for ConstraintRevolute<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> Clone for ConstraintRevolute<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for ConstraintRevolute<T, A> {}

impl<T, A: Axis> fmt::Debug for ConstraintRevolute<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConstraintRevolute{}", A::NAME)
    }
}

impl<T: RealField + Copy, A: Axis> MotionSubspace<T> for ConstraintRevolute<T, A> {
    #[inline]
    fn nv(&self) -> usize {
        1
    }

    fn matrix(&self) -> Matrix6xX<T> {
        let mut s = Matrix6xX::zeros(1);
        s[(3 + A::INDEX, 0)] = T::one();
        s
    }

    fn apply(&self, v: &DVector<T>) -> Motion<T> {
        check_tangent_size(v, 1);
        let mut angular = Vector3::zeros();
        angular[A::INDEX] = v[0];
        Motion::new(Vector3::zeros(), angular)
    }

    fn se3_action(&self, m: &Isometry3<T>) -> Matrix6xX<T> {
        let rotation = m.rotation.to_rotation_matrix();
        let angular: Vector3<T> = rotation.matrix().column(A::INDEX).into_owned();
        spatial_column(m.translation.vector.cross(&angular), angular)
    }

    fn motion_action(&self, v: &Motion<T>) -> Matrix6xX<T> {
        let axis = A::unit_vector();
        spatial_column(v.linear.cross(&axis), v.angular.cross(&axis))
    }

    fn transpose_mul_matrix(&self, f: &Matrix6xX<T>) -> DMatrix<T> {
        select_row(f, 3 + A::INDEX)
    }

    fn transpose_mul_force(&self, f: &Force<T>) -> DVector<T> {
        DVector::from_element(1, f.angular[A::INDEX])
    }
}

impl_mul_tangent!([T: RealField + Copy, A: Axis] ConstraintRevolute<T, A>);
