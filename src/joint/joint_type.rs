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
use super::transform::{
    ConfigurationTransform, LinearAffineTransform, UnboundedRevoluteAffineTransform,
};
use nalgebra::{DVector, RealField, Unit, Vector3};
use std::fmt::{self, Display};

/// How a joint stores its configuration
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigEncoding {
    /// One real per degree of freedom (length or angle [rad])
    Linear,
    /// `(cos θ, sin θ)` pair
    UnitCircle,
}

impl ConfigEncoding {
    /// Run the affine transform of this encoding
    ///
    /// For callers holding only the tag. Joint models select the transform
    /// statically with `JointModel::ConfigTransform`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmimic::joint::ConfigEncoding;
    /// use nalgebra::DVector;
    ///
    /// let mut dest = DVector::zeros(1);
    /// ConfigEncoding::Linear.run(&DVector::from_element(1, 0.5), 2.0, 1.0, &mut dest);
    /// assert_eq!(dest[0], 2.0);
    /// ```
    pub fn run<T: RealField + Copy>(
        self,
        q: &DVector<T>,
        scaling: T,
        offset: T,
        dest: &mut DVector<T>,
    ) {
        match self {
            ConfigEncoding::Linear => LinearAffineTransform::run(q, scaling, offset, dest),
            ConfigEncoding::UnitCircle => {
                UnboundedRevoluteAffineTransform::run(q, scaling, offset, dest)
            }
        }
    }
}

/// Type of Joint
///
/// Single axis revolute and prismatic joints, aligned with a coordinate axis
/// or not, and unbounded revolute joints.
#[derive(Copy, Debug, Clone, PartialEq)]
pub enum JointType<T: RealField> {
    RevoluteX,
    RevoluteY,
    RevoluteZ,
    /// Revolute joint around an arbitrary axis
    RevoluteUnaligned {
        axis: Unit<Vector3<T>>,
    },
    PrismaticX,
    PrismaticY,
    PrismaticZ,
    /// Prismatic joint along an arbitrary axis
    PrismaticUnaligned {
        axis: Unit<Vector3<T>>,
    },
    /// Revolute joint without limits, its position is `(cos θ, sin θ)`
    RevoluteUnboundedX,
    RevoluteUnboundedY,
    RevoluteUnboundedZ,
}

impl<T: RealField> JointType<T> {
    /// Dimension of the configuration
    ///
    /// # Examples
    ///
    /// ```
    /// assert_eq!(kmimic::JointType::<f64>::RevoluteX.nq(), 1);
    /// assert_eq!(kmimic::JointType::<f64>::RevoluteUnboundedX.nq(), 2);
    /// ```
    pub fn nq(&self) -> usize {
        match self.encoding() {
            ConfigEncoding::Linear => 1,
            ConfigEncoding::UnitCircle => 2,
        }
    }

    /// Dimension of the tangent space
    pub fn nv(&self) -> usize {
        1
    }

    pub fn encoding(&self) -> ConfigEncoding {
        match self {
            JointType::RevoluteUnboundedX
            | JointType::RevoluteUnboundedY
            | JointType::RevoluteUnboundedZ => ConfigEncoding::UnitCircle,
            _ => ConfigEncoding::Linear,
        }
    }

    pub fn is_revolute(&self) -> bool {
        !matches!(
            self,
            JointType::PrismaticX
                | JointType::PrismaticY
                | JointType::PrismaticZ
                | JointType::PrismaticUnaligned { .. }
        )
    }
}

fn axis_to_string<T: RealField>(axis: &Unit<Vector3<T>>) -> String {
    format!("({}, {}, {})", axis.x, axis.y, axis.z)
}

impl<T: RealField> Display for JointType<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JointType::RevoluteX => write!(f, "[⚙+X]"),
            JointType::RevoluteY => write!(f, "[⚙+Y]"),
            JointType::RevoluteZ => write!(f, "[⚙+Z]"),
            JointType::RevoluteUnaligned { axis } => write!(f, "[⚙{}]", axis_to_string(axis)),
            JointType::PrismaticX => write!(f, "[↕+X]"),
            JointType::PrismaticY => write!(f, "[↕+Y]"),
            JointType::PrismaticZ => write!(f, "[↕+Z]"),
            JointType::PrismaticUnaligned { axis } => write!(f, "[↕{}]", axis_to_string(axis)),
            JointType::RevoluteUnboundedX => write!(f, "[∞+X]"),
            JointType::RevoluteUnboundedY => write!(f, "[∞+Y]"),
            JointType::RevoluteUnboundedZ => write!(f, "[∞+Z]"),
        }
    }
}

#[test]
fn test_joint_type_display() {
    assert_eq!(JointType::<f64>::RevoluteX.to_string(), "[⚙+X]");
    assert_eq!(JointType::<f64>::PrismaticZ.to_string(), "[↕+Z]");
    assert_eq!(JointType::<f64>::RevoluteUnboundedY.to_string(), "[∞+Y]");
    let axis = Vector3::x_axis();
    assert_eq!(
        JointType::<f64>::PrismaticUnaligned { axis }.to_string(),
        "[↕(1, 0, 0)]"
    );
}

#[test]
fn test_joint_type_encoding() {
    assert_eq!(JointType::<f64>::PrismaticX.encoding(), ConfigEncoding::Linear);
    assert_eq!(
        JointType::<f64>::RevoluteUnboundedZ.encoding(),
        ConfigEncoding::UnitCircle
    );
    assert!(JointType::<f64>::RevoluteUnboundedZ.is_revolute());
    assert!(!JointType::<f64>::PrismaticY.is_revolute());
}
