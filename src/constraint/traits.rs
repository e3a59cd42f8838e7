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
use crate::spatial::{Force, Motion, Se3Action};
use nalgebra::{DMatrix, DVector, Isometry3, Matrix6xX, RealField, Vector3};
use std::ops::Mul;

/// Linear map from the joint tangent space (`nv`) to spatial velocity
///
/// Only `nv` and `matrix` are required. The other operations fall back to
/// the dense matrix and are overridden by sparse subspaces.
pub trait MotionSubspace<T: RealField + Copy> {
    /// Dimension of the tangent space
    fn nv(&self) -> usize;

    /// Dense 6 x nv matrix
    fn matrix(&self) -> Matrix6xX<T>;

    /// `S * v`
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != nv()`.
    fn apply(&self, v: &DVector<T>) -> Motion<T> {
        check_tangent_size(v, self.nv());
        Motion::from_vector(&(self.matrix() * v))
    }

    /// `M.act(S)`, returns 6 x nv
    fn se3_action(&self, m: &Isometry3<T>) -> Matrix6xX<T> {
        m.action_matrix() * self.matrix()
    }

    /// `v.cross(S)`, returns 6 x nv
    fn motion_action(&self, v: &Motion<T>) -> Matrix6xX<T> {
        v.cross_matrix() * self.matrix()
    }

    /// `S^T * F`, returns nv x k
    ///
    /// # Panics
    ///
    /// Panics if the dense matrix and `f` can not be multiplied.
    fn transpose_mul_matrix(&self, f: &Matrix6xX<T>) -> DMatrix<T> {
        self.matrix().transpose() * f
    }

    /// `S^T * f`, returns nv
    fn transpose_mul_force(&self, f: &Force<T>) -> DVector<T> {
        self.matrix().transpose() * f.to_vector()
    }

    /// Transposed view, used as `s.transpose() * &f`
    fn transpose(&self) -> Transpose<'_, Self>
    where
        Self: Sized,
    {
        Transpose::new(self)
    }
}

/// Transposed motion subspace `S^T`, projects forces onto the tangent space
///
/// # Examples
///
/// ```
/// use kmimic::constraint::{AxisZ, ConstraintRevolute, MotionSubspace};
/// use kmimic::spatial::Force;
/// use nalgebra::Vector3;
///
/// let s = ConstraintRevolute::<f64, AxisZ>::new();
/// let f = Force::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
/// let tau = s.transpose() * &f;
/// assert_eq!(tau[0], 6.0);
/// ```
#[derive(Debug)]
pub struct Transpose<'a, S: ?Sized> {
    subspace: &'a S,
}

impl<'a, S: ?Sized> Transpose<'a, S> {
    pub fn new(subspace: &'a S) -> Self {
        Self { subspace }
    }
}

impl<'a, S: ?Sized> Clone for Transpose<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized> Copy for Transpose<'a, S> {}

impl<'a, 'b, T, S> Mul<&'b Matrix6xX<T>> for Transpose<'a, S>
where
    T: RealField + Copy,
    S: MotionSubspace<T> + ?Sized,
{
    type Output = DMatrix<T>;

    fn mul(self, f: &'b Matrix6xX<T>) -> DMatrix<T> {
        self.subspace.transpose_mul_matrix(f)
    }
}

impl<'a, 'b, T, S> Mul<&'b Force<T>> for Transpose<'a, S>
where
    T: RealField + Copy,
    S: MotionSubspace<T> + ?Sized,
{
    type Output = DVector<T>;

    fn mul(self, f: &'b Force<T>) -> DVector<T> {
        self.subspace.transpose_mul_force(f)
    }
}

/// Single column subspace matrix `[linear; angular]`
pub(crate) fn spatial_column<T>(linear: Vector3<T>, angular: Vector3<T>) -> Matrix6xX<T>
where
    T: RealField + Copy,
{
    Matrix6xX::from_columns(&[Motion::new(linear, angular).to_vector()])
}

/// Row `row` of `f` as a 1 x k matrix
pub(crate) fn select_row<T>(f: &Matrix6xX<T>, row: usize) -> DMatrix<T>
where
    T: RealField + Copy,
{
    DMatrix::from_fn(1, f.ncols(), |_, j| f[(row, j)])
}

/// `axis^T * f[offset..offset + 3, :]` as a 1 x k matrix
pub(crate) fn project_rows<T>(f: &Matrix6xX<T>, offset: usize, axis: &Vector3<T>) -> DMatrix<T>
where
    T: RealField + Copy,
{
    DMatrix::from_fn(1, f.ncols(), |_, j| {
        axis.x * f[(offset, j)] + axis.y * f[(offset + 1, j)] + axis.z * f[(offset + 2, j)]
    })
}

pub(crate) fn check_tangent_size<T: RealField>(v: &DVector<T>, nv: usize) {
    assert_eq!(v.len(), nv, "tangent vector size mismatch");
}
