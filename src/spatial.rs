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
//! Spatial vector algebra
//!
//! Spatial vectors are 6D, stacked as `[linear; angular]`.
//! The rigid transform is `nalgebra::Isometry3`, extended by [`Se3Action`].
mod force;
mod motion;
mod transform;

pub use force::*;
pub use motion::*;
pub use transform::*;
