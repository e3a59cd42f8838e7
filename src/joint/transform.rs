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
use super::joint_type::ConfigEncoding;
use nalgebra::{DVector, RealField};

/// Affine map from the master configuration to the mimic configuration
pub trait ConfigurationTransform<T: RealField + Copy> {
    /// Encoding handled by this transform
    const ENCODING: ConfigEncoding;

    /// Write the transformed configuration of `q` into `dest`
    ///
    /// # Panics
    ///
    /// Panics if `q` and `dest` do not have the size of the encoding.
    fn run(q: &DVector<T>, scaling: T, offset: T, dest: &mut DVector<T>);
}

/// `dest[i] = scaling * q[i] + offset`
///
/// For prismatic and bounded revolute joints.
///
/// # Examples
///
/// ```
/// use kmimic::joint::{ConfigurationTransform, LinearAffineTransform};
/// use nalgebra::DVector;
///
/// let mut q1 = DVector::zeros(1);
/// LinearAffineTransform::run(&DVector::from_element(1, 0.3), 1.0, 2.0, &mut q1);
/// assert_eq!(q1[0], 2.3);
/// ```
#[derive(Copy, Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearAffineTransform;

impl<T: RealField + Copy> ConfigurationTransform<T> for LinearAffineTransform {
    const ENCODING: ConfigEncoding = ConfigEncoding::Linear;

    fn run(q: &DVector<T>, scaling: T, offset: T, dest: &mut DVector<T>) {
        assert_eq!(q.len(), dest.len(), "configuration size mismatch");
        for (d, q) in dest.iter_mut().zip(q.iter()) {
            *d = scaling * *q + offset;
        }
    }
}

/// Angle `scaling * θ + offset` for `(cos θ, sin θ)` configurations
///
/// With `scaling == 1` the offset is added by the angle-addition formulas,
/// the angle itself is never computed. Any other scaling has to recover the
/// angle with `atan2`, which brings back the branch cut at ±π: a master
/// crossing π makes the mimic jump by `2π * (scaling - 1)`.
///
/// The input must be normalized, this is not checked. `(0, 0)` is not an
/// angle and stays `(0, 0)` with `scaling == 1`.
///
/// # Examples
///
/// ```
/// use kmimic::joint::{ConfigurationTransform, UnboundedRevoluteAffineTransform};
/// use nalgebra::DVector;
///
/// let mut q1 = DVector::zeros(2);
/// let q0 = DVector::from_vec(vec![1.0, 0.0]);
/// UnboundedRevoluteAffineTransform::run(&q0, 1.0, 2.0, &mut q1);
/// assert_eq!(q1[0], 2.0f64.cos());
/// assert_eq!(q1[1], 2.0f64.sin());
/// ```
#[derive(Copy, Debug, Clone, Default, PartialEq, Eq)]
pub struct UnboundedRevoluteAffineTransform;

impl<T: RealField + Copy> ConfigurationTransform<T> for UnboundedRevoluteAffineTransform {
    const ENCODING: ConfigEncoding = ConfigEncoding::UnitCircle;

    fn run(q: &DVector<T>, scaling: T, offset: T, dest: &mut DVector<T>) {
        assert_eq!(q.len(), 2, "configuration must be (cos, sin)");
        assert_eq!(dest.len(), 2, "configuration must be (cos, sin)");
        let (ca, sa) = (q[0], q[1]);
        if scaling == T::one() {
            let (co, so) = (offset.cos(), offset.sin());
            dest[0] = ca * co - sa * so;
            dest[1] = sa * co + ca * so;
        } else {
            let theta = scaling * sa.atan2(ca) + offset;
            dest[0] = theta.cos();
            dest[1] = theta.sin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn unbounded_scaled_angle() {
        let theta = 0.4_f64;
        let q = DVector::from_vec(vec![theta.cos(), theta.sin()]);
        let mut dest = DVector::zeros(2);
        UnboundedRevoluteAffineTransform::run(&q, -3.0, 0.1, &mut dest);
        let expected = -3.0 * theta + 0.1;
        assert!((dest[0] - expected.cos()).abs() < 1e-12);
        assert!((dest[1] - expected.sin()).abs() < 1e-12);
    }

    #[test]
    fn unbounded_zero_vector_stays_zero() {
        let mut dest = DVector::from_element(2, 1.0);
        UnboundedRevoluteAffineTransform::run(&DVector::zeros(2), 1.0, 2.0, &mut dest);
        assert_eq!(dest.norm(), 0.0);
    }

    #[test]
    fn unbounded_offset_wraps() {
        let theta = 0.9 * PI;
        let q = DVector::from_vec(vec![theta.cos(), theta.sin()]);
        let mut dest = DVector::zeros(2);
        UnboundedRevoluteAffineTransform::run(&q, 1.0, 0.3 * PI, &mut dest);
        // 1.2π, past the branch cut
        assert!((dest[0] - (1.2 * PI).cos()).abs() < 1e-12);
        assert!((dest[1] - (1.2 * PI).sin()).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn linear_size_mismatch_panics() {
        let mut dest = DVector::zeros(2);
        LinearAffineTransform::run(&DVector::from_element(1, 1.0), 1.0, 0.0, &mut dest);
    }

    #[test]
    #[should_panic]
    fn unbounded_rejects_linear_configuration() {
        let mut dest = DVector::zeros(1);
        UnboundedRevoluteAffineTransform::run(&DVector::from_element(1, 1.0), 1.0, 0.0, &mut dest);
    }
}
