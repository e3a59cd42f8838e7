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
use super::traits::*;
use crate::spatial::{Force, Motion};
use nalgebra::{DMatrix, DVector, Isometry3, Matrix6xX, RealField, Unit, Vector3};

/// Motion subspace of a revolute joint around an arbitrary unit axis, `S = [0; a]`
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct ConstraintRevoluteUnaligned<T: RealField> {
    axis: Unit<Vector3<T>>,
}

impl<T: RealField + Copy> ConstraintRevoluteUnaligned<T> {
    pub fn new(axis: Unit<Vector3<T>>) -> Self {
        Self { axis }
    }

    #[inline]
    pub fn axis(&self) -> &Unit<Vector3<T>> {
        &self.axis
    }
}

impl<T: RealField + Copy> MotionSubspace<T> for ConstraintRevoluteUnaligned<T> {
    #[inline]
    fn nv(&self) -> usize {
        1
    }

    fn matrix(&self) -> Matrix6xX<T> {
        spatial_column(Vector3::zeros(), self.axis.into_inner())
    }

    fn apply(&self, v: &DVector<T>) -> Motion<T> {
        check_tangent_size(v, 1);
        Motion::new(Vector3::zeros(), self.axis.into_inner() * v[0])
    }

    fn se3_action(&self, m: &Isometry3<T>) -> Matrix6xX<T> {
        let angular = m.rotation * self.axis.into_inner();
        spatial_column(m.translation.vector.cross(&angular), angular)
    }

    fn motion_action(&self, v: &Motion<T>) -> Matrix6xX<T> {
        let axis = self.axis.into_inner();
        spatial_column(v.linear.cross(&axis), v.angular.cross(&axis))
    }

    fn transpose_mul_matrix(&self, f: &Matrix6xX<T>) -> DMatrix<T> {
        project_rows(f, 3, &self.axis.into_inner())
    }

    fn transpose_mul_force(&self, f: &Force<T>) -> DVector<T> {
        DVector::from_element(1, self.axis.dot(&f.angular))
    }
}

/// Motion subspace of a prismatic joint along an arbitrary unit axis, `S = [a; 0]`
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct ConstraintPrismaticUnaligned<T: RealField> {
    axis: Unit<Vector3<T>>,
}

impl<T: RealField + Copy> ConstraintPrismaticUnaligned<T> {
    pub fn new(axis: Unit<Vector3<T>>) -> Self {
        Self { axis }
    }

    #[inline]
    pub fn axis(&self) -> &Unit<Vector3<T>> {
        &self.axis
    }
}

impl<T: RealField + Copy> MotionSubspace<T> for ConstraintPrismaticUnaligned<T> {
    #[inline]
    fn nv(&self) -> usize {
        1
    }

    fn matrix(&self) -> Matrix6xX<T> {
        spatial_column(self.axis.into_inner(), Vector3::zeros())
    }

    fn apply(&self, v: &DVector<T>) -> Motion<T> {
        check_tangent_size(v, 1);
        Motion::new(self.axis.into_inner() * v[0], Vector3::zeros())
    }

    fn se3_action(&self, m: &Isometry3<T>) -> Matrix6xX<T> {
        spatial_column(m.rotation * self.axis.into_inner(), Vector3::zeros())
    }

    fn motion_action(&self, v: &Motion<T>) -> Matrix6xX<T> {
        spatial_column(v.angular.cross(&self.axis.into_inner()), Vector3::zeros())
    }

    fn transpose_mul_matrix(&self, f: &Matrix6xX<T>) -> DMatrix<T> {
        project_rows(f, 0, &self.axis.into_inner())
    }

    fn transpose_mul_force(&self, f: &Force<T>) -> DVector<T> {
        DVector::from_element(1, self.axis.dot(&f.linear))
    }
}

impl_mul_tangent!([T: RealField + Copy] ConstraintRevoluteUnaligned<T>);
impl_mul_tangent!([T: RealField + Copy] ConstraintPrismaticUnaligned<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Se3Action;
    use nalgebra::{Translation3, UnitQuaternion};

    #[test]
    fn sparse_action_matches_dense() {
        let axis = Unit::new_normalize(Vector3::new(1.5, 1.0, 0.0));
        let m = Isometry3::from_parts(
            Translation3::new(0.1, 0.2, -0.3),
            UnitQuaternion::from_euler_angles(-0.3, 0.8, 1.7),
        );
        let revolute = ConstraintRevoluteUnaligned::new(axis);
        let prismatic = ConstraintPrismaticUnaligned::new(axis);
        let expected = m.action_matrix() * revolute.matrix();
        assert!((revolute.se3_action(&m) - expected).norm() < 1e-12);
        let expected = m.action_matrix() * prismatic.matrix();
        assert!((prismatic.se3_action(&m) - expected).norm() < 1e-12);
    }
}
