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
use nalgebra::{RealField, Unit, Vector3};
use std::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// Coordinate axis of axis-aligned joints: `AxisX`, `AxisY`, `AxisZ`
pub trait Axis:
    private::Sealed + Copy + Clone + Debug + Default + PartialEq + Send + Sync + 'static
{
    /// Index of the axis in a 3D vector
    const INDEX: usize;
    const NAME: &'static str;

    fn unit_vector<T: RealField + Copy>() -> Vector3<T> {
        let mut v = Vector3::zeros();
        v[Self::INDEX] = T::one();
        v
    }

    fn unit_axis<T: RealField + Copy>() -> Unit<Vector3<T>> {
        Unit::new_unchecked(Self::unit_vector())
    }
}

macro_rules! define_axis {
    ($name:ident, $index:expr, $label:expr) => {
        #[derive(Copy, Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl private::Sealed for $name {}

        impl Axis for $name {
            const INDEX: usize = $index;
            const NAME: &'static str = $label;
        }
    };
}

define_axis!(AxisX, 0, "X");
define_axis!(AxisY, 1, "Y");
define_axis!(AxisZ, 2, "Z");

#[test]
fn test_unit_axis() {
    assert_eq!(AxisX::unit_axis::<f64>(), Vector3::x_axis());
    assert_eq!(AxisY::unit_axis::<f64>(), Vector3::y_axis());
    assert_eq!(AxisZ::unit_vector::<f32>(), Vector3::z());
}
