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
use super::motion::Motion;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{RealField, Vector3, Vector6};
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Spatial force (wrench)
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Force<T: RealField> {
    /// force
    pub linear: Vector3<T>,
    /// torque
    pub angular: Vector3<T>,
}

impl<T> Force<T>
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

    /// Create from `[force; torque]`
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

    /// Power of this force along `motion`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmimic::spatial::{Force, Motion};
    /// use nalgebra::Vector3;
    ///
    /// let f = Force::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
    /// let m = Motion::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 3.0));
    /// assert_eq!(f.dot(&m), 5.0);
    /// ```
    pub fn dot(&self, motion: &Motion<T>) -> T {
        self.linear.dot(&motion.linear) + self.angular.dot(&motion.angular)
    }
}

impl<T: RealField + Copy> Default for Force<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealField + Copy> Add for Force<T> {
    type Output = Force<T>;
    fn add(self, rhs: Force<T>) -> Force<T> {
        Force::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl<T: RealField + Copy> Sub for Force<T> {
    type Output = Force<T>;
    fn sub(self, rhs: Force<T>) -> Force<T> {
        Force::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl<T: RealField + Copy> Neg for Force<T> {
    type Output = Force<T>;
    fn neg(self) -> Force<T> {
        Force::new(-self.linear, -self.angular)
    }
}

impl<T: RealField + Copy> Mul<T> for Force<T> {
    type Output = Force<T>;
    fn mul(self, rhs: T) -> Force<T> {
        Force::new(self.linear * rhs, self.angular * rhs)
    }
}

impl<T: RealField + Copy> AbsDiffEq for Force<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.linear.abs_diff_eq(&other.linear, epsilon)
            && self.angular.abs_diff_eq(&other.angular, epsilon)
    }
}

impl<T: RealField + Copy> RelativeEq for Force<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.linear.relative_eq(&other.linear, epsilon, max_relative)
            && self.angular.relative_eq(&other.angular, epsilon, max_relative)
    }
}

impl<T: RealField> Display for Force<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "f = [{}, {}, {}], n = [{}, {}, {}]",
            self.linear.x,
            self.linear.y,
            self.linear.z,
            self.angular.x,
            self.angular.y,
            self.angular.z
        )
    }
}
