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

/// Toggles for the preview.
///
/// Only `include_question_on_back` changes the exported templates. The
/// others decide what the preview draws; the templates always carry the
/// hint, image and extra sections, guarded by Anki's own conditionals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Visibility {
    pub show_image: bool,
    pub show_hint: bool,
    pub show_extra: bool,
    pub include_question_on_back: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            show_image: true,
            show_hint: true,
            show_extra: false,
            include_question_on_back: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityOption {
    ShowImage,
    ShowHint,
    ShowExtra,
    IncludeQuestionOnBack,
}

impl VisibilityOption {
    pub const ALL: [VisibilityOption; 4] = [
        VisibilityOption::ShowImage,
        VisibilityOption::ShowHint,
        VisibilityOption::ShowExtra,
        VisibilityOption::IncludeQuestionOnBack,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VisibilityOption::ShowImage => "show_image",
            VisibilityOption::ShowHint => "show_hint",
            VisibilityOption::ShowExtra => "show_extra",
            VisibilityOption::IncludeQuestionOnBack => "include_question_on_back",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisibilityOption::ShowImage => "Show image",
            VisibilityOption::ShowHint => "Show hint",
            VisibilityOption::ShowExtra => "Show extra",
            VisibilityOption::IncludeQuestionOnBack => "Question on back",
        }
    }
}

impl Display for VisibilityOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for VisibilityOption {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisibilityOption::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| ErrorReport::new(format!("unknown visibility option: {s}")))
    }
}

impl Visibility {
    pub fn get(&self, option: VisibilityOption) -> bool {
        match option {
            VisibilityOption::ShowImage => self.show_image,
            VisibilityOption::ShowHint => self.show_hint,
            VisibilityOption::ShowExtra => self.show_extra,
            VisibilityOption::IncludeQuestionOnBack => self.include_question_on_back,
        }
    }

    pub fn set(&mut self, option: VisibilityOption, value: bool) {
        match option {
            VisibilityOption::ShowImage => self.show_image = value,
            VisibilityOption::ShowHint => self.show_hint = value,
            VisibilityOption::ShowExtra => self.show_extra = value,
            VisibilityOption::IncludeQuestionOnBack => self.include_question_on_back = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_set_is_independent() {
        let mut visibility = Visibility::default();
        visibility.set(VisibilityOption::ShowExtra, true);
        visibility.set(VisibilityOption::ShowImage, false);
        assert_eq!(
            visibility,
            Visibility {
                show_image: false,
                show_hint: true,
                show_extra: true,
                include_question_on_back: true,
            }
        );
        for option in VisibilityOption::ALL {
            assert_eq!(visibility.get(option), option != VisibilityOption::ShowImage);
        }
    }

    #[test]
    fn test_parse_option() -> Fallible<()> {
        for option in VisibilityOption::ALL {
            assert_eq!(option.key().parse::<VisibilityOption>()?, option);
        }
        assert!("showHint".parse::<VisibilityOption>().is_err());
        Ok(())
    }
}
