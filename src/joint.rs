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
//! Joint models, configuration transforms and mimic joints
mod joint_type;
mod mimic;
mod mimic_joint;
mod model;
mod prismatic;
mod revolute;
mod transform;

pub use joint_type::*;
pub use mimic::*;
pub use mimic_joint::*;
pub use model::*;
pub use prismatic::*;
pub use revolute::*;
pub use transform::*;
