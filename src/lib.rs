/*
  Copyright 2017 Takashi Ogura

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
//! # Mimic joints using [nalgebra](http://nalgebra.org).
//!
//! `kmimic` has below functionalities
//!
//! 1. Scaled motion subspace (`ScaledConstraint`), the motion subspace of a mimic joint
//! 1. Affine transforms of joint configurations, for linear and `(cos, sin)` encodings
//! 1. Joint models for revolute, prismatic and unbounded revolute joints
//!
//! See `JointModelMimic` as the top level interface.
//!
//! ```
//! use kmimic::joint::{JointModelMimic, Mimic, RevoluteUnalignedJoint};
//! use nalgebra::DVector;
//!
//! let joint = RevoluteUnalignedJoint::new(1.5, 1.0, 0.0);
//! let mimic = JointModelMimic::new(joint, Mimic::new(2.0, 0.0)).unwrap();
//! let mut data = mimic.create_data();
//! mimic.calc(&mut data, &DVector::from_element(1, 0.1)).unwrap();
//!
//! let v = DVector::from_element(1, 0.5);
//! let scaled = mimic.constraint(&data);
//! let expected = (&data.constraint * &v) * 2.0;
//! assert_eq!(&scaled * &v, expected);
//! ```
pub mod constraint;
mod errors;
pub mod joint;
pub mod prelude;
pub mod spatial;

pub use self::constraint::{MotionSubspace, ScaledConstraint};
pub use self::errors::*;
pub use self::joint::{JointModel, JointModelMimic, JointType, Mimic, MimicBuilder};
pub use self::spatial::{Force, Motion, Se3Action};

// re-export from nalgebra
pub use nalgebra::{DVector, Isometry3, Matrix6xX, RealField, Vector3};
pub use simba::scalar::{SubsetOf, SupersetOf};
