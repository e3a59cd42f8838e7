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

/// Motion subspace of a prismatic joint along a coordinate axis, `S = [e; 0]`
pub struct ConstraintPrismatic<T, A> {
    marker: PhantomData<(T, A)>,
}

impl<T: RealField + Copy, A: Axis> ConstraintPrismatic<T, A> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: RealField + Copy, A: Axis> Default for ConstraintPrismatic<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> Clone for ConstraintPrismatic<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for ConstraintPrismatic<T, A> {}

impl<T, A: Axis> fmt::Debug for ConstraintPrismatic<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConstraintPrismatic{}", A::NAME)
    }
}

impl<T: RealField + Copy, A: Axis> MotionSubspace<T> for ConstraintPrismatic<T, A> {
    #[inline]
    fn nv(&self) -> usize {
        1
    }

    fn matrix(&self) -> Matrix6xX<T> {
        let mut s = Matrix6xX::zeros(1);
        s[(A::INDEX, 0)] = T::one();
        s
    }

    fn apply(&self, v: &DVector<T>) -> Motion<T> {
        check_tangent_size(v, 1);
        let mut linear = Vector3::zeros();
        linear[A::INDEX] = v[0];
        Motion::new(linear, Vector3::zeros())
    }

    fn se3_action(&self, m: &Isometry3<T>) -> Matrix6xX<T> {
        let rotation = m.rotation.to_rotation_matrix();
        let linear: Vector3<T> = rotation.matrix().column(A::INDEX).into_owned();
        spatial_column(linear, Vector3::zeros())
    }

    fn motion_action(&self, v: &Motion<T>) -> Matrix6xX<T> {
        spatial_column(v.angular.cross(&A::unit_vector()), Vector3::zeros())
    }

    fn transpose_mul_matrix(&self, f: &Matrix6xX<T>) -> DMatrix<T> {
        select_row(f, A::INDEX)
    }

    fn transpose_mul_force(&self, f: &Force<T>) -> DVector<T> {
        DVector::from_element(1, f.linear[A::INDEX])
    }
}

impl_mul_tangent!([T: RealField + Copy, A: Axis] ConstraintPrismatic<T, A>);
