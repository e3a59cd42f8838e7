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
use crate::constraint::MotionSubspace;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix6, Matrix6xX, RealField, Vector3, Vector6};
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Spatial velocity (twist)
///
/// # Examples
///
/// ```
/// use nalgebra::Vector3;
///
/// let m = kmimic::spatial::Motion::new(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
/// assert_eq!(m.to_vector()[0], 1.0);
/// ```
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Motion<T: RealField> {
    /// linear velocity
    pub linear: Vector3<T>,
    /// angular velocity
    pub angular: Vector3<T>,
}

impl<T> Motion<T>
where
    T: RealField + Copy,
{
    pub fn new(linear: Vector3<T>, angular: Vector3<T>) -> Self {
        Self { linear, angular }
    }

    pub fn zero() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }

    /// Create from `[linear; angular]`
    pub fn from_vector(v: &Vector6<T>) -> Self {
        Self {
            linear: Vector3::new(v[0], v[1], v[2]),
            angular: Vector3::new(v[3], v[4], v[5]),
        }
    }

    pub fn to_vector(&self) -> Vector6<T> {
        Vector6::new(
            self.linear.x,
            self.linear.y,
            self.linear.z,
            self.angular.x,
            self.angular.y,
            self.angular.z,
        )
    }

    /// Motion cross product `self ×ₘ other`
    pub fn cross_motion(&self, other: &Motion<T>) -> Motion<T> {
        Motion {
            linear: self.angular.cross(&other.linear) + self.linear.cross(&other.angular),
            angular: self.angular.cross(&other.angular),
        }
    }

    /// Force cross product `self ×f force`
    pub fn cross_force(&self, force: &Force<T>) -> Force<T> {
        Force {
            linear: self.angular.cross(&force.linear),
            angular: self.angular.cross(&force.angular) + self.linear.cross(&force.linear),
        }
    }

    /// Cross product with every column of a motion subspace, `self ×ₘ S`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmimic::constraint::{ConstraintRevolute, MotionSubspace};
    /// use kmimic::spatial::Motion;
    /// use nalgebra::Vector3;
    ///
    /// let v = Motion::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0));
    /// let s = ConstraintRevolute::<f64, kmimic::constraint::AxisX>::new();
    /// let cross = v.cross_subspace(&s);
    /// // z × x = y
    /// assert_eq!(cross[(4, 0)], 1.0);
    /// ```
    pub fn cross_subspace<S>(&self, subspace: &S) -> Matrix6xX<T>
    where
        S: MotionSubspace<T> + ?Sized,
    {
        subspace.motion_action(self)
    }

    /// Dense 6x6 operator of `self ×ₘ`
    pub fn cross_matrix(&self) -> Matrix6<T> {
        let w = self.angular.cross_matrix();
        let v = self.linear.cross_matrix();
        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&w);
        m.fixed_view_mut::<3, 3>(0, 3).copy_from(&v);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&w);
        m
    }
}

impl<T: RealField + Copy> Default for Motion<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealField + Copy> Add for Motion<T> {
    type Output = Motion<T>;
    fn add(self, rhs: Motion<T>) -> Motion<T> {
        Motion::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl<T: RealField + Copy> Sub for Motion<T> {
    type Output = Motion<T>;
    fn sub(self, rhs: Motion<T>) -> Motion<T> {
        Motion::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl<T: RealField + Copy> Neg for Motion<T> {
    type Output = Motion<T>;
    fn neg(self) -> Motion<T> {
        Motion::new(-self.linear, -self.angular)
    }
}

impl<T: RealField + Copy> Mul<T> for Motion<T> {
    type Output = Motion<T>;
    fn mul(self, rhs: T) -> Motion<T> {
        Motion::new(self.linear * rhs, self.angular * rhs)
    }
}

impl<T: RealField + Copy> AbsDiffEq for Motion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.linear.abs_diff_eq(&other.linear, epsilon)
            && self.angular.abs_diff_eq(&other.angular, epsilon)
    }
}

impl<T: RealField + Copy> RelativeEq for Motion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.linear.relative_eq(&other.linear, epsilon, max_relative)
            && self.angular.relative_eq(&other.angular, epsilon, max_relative)
    }
}

impl<T: RealField> Display for Motion<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "v = [{}, {}, {}], w = [{}, {}, {}]",
            self.linear.x,
            self.linear.y,
            self.linear.z,
            self.angular.x,
            self.angular.y,
            self.angular.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_matrix_matches_cross_motion() {
        let a = Motion::new(Vector3::new(0.1, -0.4, 0.3), Vector3::new(1.0, 0.5, -0.2));
        let b = Motion::new(Vector3::new(-0.7, 0.2, 0.9), Vector3::new(0.3, -1.1, 0.4));
        let dense = a.cross_matrix() * b.to_vector();
        assert!((dense - a.cross_motion(&b).to_vector()).norm() < 1e-12);
    }

    #[test]
    fn cross_force_is_dual_of_cross_motion() {
        let a = Motion::new(Vector3::new(0.1, -0.4, 0.3), Vector3::new(1.0, 0.5, -0.2));
        let b = Motion::new(Vector3::new(-0.7, 0.2, 0.9), Vector3::new(0.3, -1.1, 0.4));
        let f = Force::new(Vector3::new(1.5, -0.3, 0.2), Vector3::new(0.0, 0.4, -2.0));
        let lhs: f64 = f.dot(&a.cross_motion(&b));
        let rhs = -a.cross_force(&f).dot(&b);
        assert!((lhs - rhs).abs() < 1e-12);
    }

    #[test]
    fn cross_with_self_vanishes() {
        let a = Motion::new(Vector3::new(0.1, -0.4, 0.3), Vector3::new(1.0, 0.5, -0.2));
        assert!(a.cross_motion(&a).to_vector().norm() < 1e-12);
    }
}
