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
//! Motion subspaces (joint constraints) and the scaled decorator used by mimic joints

/// `&subspace * &tangent_vector` for a concrete `MotionSubspace`
macro_rules! impl_mul_tangent {
    ([$($generics:tt)*] $ty:ty) => {
        impl<'v, $($generics)*> std::ops::Mul<&'v nalgebra::DVector<T>> for &$ty {
            type Output = crate::spatial::Motion<T>;

            #[inline]
            fn mul(self, v: &'v nalgebra::DVector<T>) -> Self::Output {
                <$ty as crate::constraint::MotionSubspace<T>>::apply(self, v)
            }
        }
    };
}

mod axis;
mod prismatic;
mod revolute;
mod scaled;
mod traits;
mod unaligned;

pub use axis::*;
pub use prismatic::*;
pub use revolute::*;
pub use scaled::*;
pub use traits::*;
pub use unaligned::*;
