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
use super::force::Force;
use super::motion::Motion;
use crate::constraint::MotionSubspace;
use nalgebra::{Isometry3, Matrix6, Matrix6xX, RealField};

/// Spatial actions of a rigid transform `M = (R, p)`
///
/// `Isometry3` maps coordinates of the child frame into the parent frame.
///
/// # Examples
///
/// ```
/// use kmimic::spatial::{Motion, Se3Action};
/// use nalgebra::{Isometry3, Vector3};
///
/// let m = Isometry3::translation(1.0, 0.0, 0.0);
/// // pure rotation around z seen from a frame shifted along x
/// let w = Motion::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0));
/// let moved = m.act_motion(&w);
/// assert_eq!(moved.linear, Vector3::new(0.0, -1.0, 0.0));
/// assert_eq!(m.act_inv_motion(&moved), w);
/// ```
pub trait Se3Action<T: RealField + Copy> {
    fn act_motion(&self, motion: &Motion<T>) -> Motion<T>;
    fn act_inv_motion(&self, motion: &Motion<T>) -> Motion<T>;
    fn act_force(&self, force: &Force<T>) -> Force<T>;
    fn act_inv_force(&self, force: &Force<T>) -> Force<T>;
    /// Dense 6x6 action matrix `[[R, p̂R], [0, R]]`
    fn action_matrix(&self) -> Matrix6<T>;
    /// Action on every column of a motion subspace
    ///
    /// The subspace decides how, so sparse subspaces never get densified.
    fn act_subspace<S>(&self, subspace: &S) -> Matrix6xX<T>
    where
        S: MotionSubspace<T> + ?Sized;
}

impl<T> Se3Action<T> for Isometry3<T>
where
    T: RealField + Copy,
{
    fn act_motion(&self, motion: &Motion<T>) -> Motion<T> {
        let angular = self.rotation * motion.angular;
        let linear = self.rotation * motion.linear + self.translation.vector.cross(&angular);
        Motion { linear, angular }
    }

    fn act_inv_motion(&self, motion: &Motion<T>) -> Motion<T> {
        let p = &self.translation.vector;
        let angular = self.rotation.inverse_transform_vector(&motion.angular);
        let linear = self
            .rotation
            .inverse_transform_vector(&(motion.linear - p.cross(&motion.angular)));
        Motion { linear, angular }
    }

    fn act_force(&self, force: &Force<T>) -> Force<T> {
        let linear = self.rotation * force.linear;
        let angular = self.rotation * force.angular + self.translation.vector.cross(&linear);
        Force { linear, angular }
    }

    fn act_inv_force(&self, force: &Force<T>) -> Force<T> {
        let p = &self.translation.vector;
        let linear = self.rotation.inverse_transform_vector(&force.linear);
        let angular = self
            .rotation
            .inverse_transform_vector(&(force.angular - p.cross(&force.linear)));
        Force { linear, angular }
    }

    fn action_matrix(&self) -> Matrix6<T> {
        let r = self.rotation.to_rotation_matrix().into_inner();
        let pr = self.translation.vector.cross_matrix() * r;
        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
        m.fixed_view_mut::<3, 3>(0, 3).copy_from(&pr);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&r);
        m
    }

    fn act_subspace<S>(&self, subspace: &S) -> Matrix6xX<T>
    where
        S: MotionSubspace<T> + ?Sized,
    {
        subspace.se3_action(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    fn transform() -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(0.3, -1.2, 0.5),
            UnitQuaternion::from_euler_angles(0.4, -0.9, 2.1),
        )
    }

    #[test]
    fn action_matrix_matches_act_motion() {
        let m = transform();
        let v = Motion::new(Vector3::new(0.2, 0.1, -0.5), Vector3::new(-1.0, 0.7, 0.3));
        let dense = m.action_matrix() * v.to_vector();
        assert!((dense - m.act_motion(&v).to_vector()).norm() < 1e-12);
    }

    #[test]
    fn act_inv_undoes_act() {
        let m = transform();
        let v = Motion::new(Vector3::new(0.2, 0.1, -0.5), Vector3::new(-1.0, 0.7, 0.3));
        let f = Force::new(Vector3::new(1.5, -0.3, 0.2), Vector3::new(0.0, 0.4, -2.0));
        let v2 = m.act_inv_motion(&m.act_motion(&v));
        let f2 = m.act_inv_force(&m.act_force(&f));
        assert!((v2.to_vector() - v.to_vector()).norm() < 1e-12);
        assert!((f2.to_vector() - f.to_vector()).norm() < 1e-12);
    }

    #[test]
    fn power_is_frame_invariant() {
        let m = transform();
        let v = Motion::new(Vector3::new(0.2, 0.1, -0.5), Vector3::new(-1.0, 0.7, 0.3));
        let f = Force::new(Vector3::new(1.5, -0.3, 0.2), Vector3::new(0.0, 0.4, -2.0));
        let power = f.dot(&v);
        let moved = m.act_force(&f).dot(&m.act_motion(&v));
        assert!((power - moved).abs() < 1e-12);
    }
}
