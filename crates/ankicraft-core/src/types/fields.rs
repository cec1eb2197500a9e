// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

/// The logical content slots of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Front,
    Back,
    Hint,
    Image,
    Extra,
}

impl FieldRole {
    pub const ALL: [FieldRole; 5] = [
        FieldRole::Front,
        FieldRole::Back,
        FieldRole::Hint,
        FieldRole::Image,
        FieldRole::Extra,
    ];

    /// The default field name for this role. An empty name falls back to it.
    pub fn label(&self) -> &'static str {
        match self {
            FieldRole::Front => "Front",
            FieldRole::Back => "Back",
            FieldRole::Hint => "Hint",
            FieldRole::Image => "Image",
            FieldRole::Extra => "Extra",
        }
    }

    /// The lowercase identifier used in forms and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            FieldRole::Front => "front",
            FieldRole::Back => "back",
            FieldRole::Hint => "hint",
            FieldRole::Image => "image",
            FieldRole::Extra => "extra",
        }
    }
}

impl Display for FieldRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FieldRole {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldRole::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| ErrorReport::new(format!("unknown field role: {s}")))
    }
}

/// The note type field bound to each role.
///
/// Names are free text. They end up inside `{{...}}` tokens unescaped, and
/// nothing stops two roles from sharing a name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldNames {
    pub front: String,
    pub back: String,
    pub hint: String,
    pub image: String,
    pub extra: String,
}

impl FieldNames {
    pub fn get(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Front => &self.front,
            FieldRole::Back => &self.back,
            FieldRole::Hint => &self.hint,
            FieldRole::Image => &self.image,
            FieldRole::Extra => &self.extra,
        }
    }

    /// Bind `role` to `name`. An empty name binds the role's label instead.
    pub fn set(&mut self, role: FieldRole, name: &str) {
        let name = if name.is_empty() { role.label() } else { name };
        let slot = match role {
            FieldRole::Front => &mut self.front,
            FieldRole::Back => &mut self.back,
            FieldRole::Hint => &mut self.hint,
            FieldRole::Image => &mut self.image,
            FieldRole::Extra => &mut self.extra,
        };
        *slot = name.to_string();
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            front: FieldRole::Front.label().to_string(),
            back: FieldRole::Back.label().to_string(),
            hint: FieldRole::Hint.label().to_string(),
            image: FieldRole::Image.label().to_string(),
            extra: FieldRole::Extra.label().to_string(),
        }
    }
}
