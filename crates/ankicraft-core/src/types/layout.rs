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

/// How card content is aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Center,
    Left,
}

impl Layout {
    /// The class put on the card container.
    pub fn class(&self) -> &'static str {
        match self {
            Layout::Center => "center",
            Layout::Left => "left",
        }
    }

    /// The `align-items` value for the card's flex container.
    pub fn align_items(&self) -> &'static str {
        match self {
            Layout::Center => "center",
            Layout::Left => "flex-start",
        }
    }

    pub fn text_align(&self) -> &'static str {
        match self {
            Layout::Center => "center",
            Layout::Left => "left",
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

impl FromStr for Layout {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Layout::Center),
            "left" => Ok(Layout::Left),
            _ => Err(ErrorReport::new(format!("unknown layout: {s}"))),
        }
    }
}

/// Which face of the card is previewed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn class(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

impl FromStr for Side {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Side::Front),
            "back" => Ok(Side::Back),
            _ => Err(ErrorReport::new(format!("unknown side: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_parse_layout() -> Fallible<()> {
        assert_eq!("center".parse::<Layout>()?, Layout::Center);
        assert_eq!("left".parse::<Layout>()?, Layout::Left);
        assert!("centre".parse::<Layout>().is_err());
        Ok(())
    }

    #[test]
    fn test_parse_side() -> Fallible<()> {
        assert_eq!("back".parse::<Side>()?, Side::Back);
        let err = "top".parse::<Side>().unwrap_err();
        assert_eq!(err.to_string(), "error: unknown side: top");
        Ok(())
    }

    #[test]
    fn test_serialize_layout() -> Fallible<()> {
        assert_eq!(serde_json::to_string(&Layout::Left)?, "\"left\"");
        Ok(())
    }
}
