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

//! Design files: a TOML description of where a session starts.
//!
//! ```toml
//! preset = "night"
//! layout = "left"
//!
//! [style]
//! accent = "#ff375f"
//!
//! [fields]
//! front = "Question"
//!
//! [visibility]
//! include_question_on_back = false
//! ```
//!
//! Every key is optional. Design files are only ever read.

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::session::Session;
use crate::types::config::CardConfig;
use crate::types::fields::FieldRole;
use crate::types::layout::Layout;
use crate::types::visibility::VisibilityOption;

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Design {
    /// Id of the preset to start from. Defaults to the first preset.
    pub preset: Option<String>,
    pub layout: Option<Layout>,
    #[serde(default)]
    pub style: StylePatch,
    #[serde(default)]
    pub fields: FieldPatch,
    #[serde(default)]
    pub visibility: VisibilityPatch,
}

/// Overrides for individual attributes of the preset's configuration.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylePatch {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
    pub card_width: Option<u32>,
    pub radius: Option<u32>,
    pub padding: Option<u32>,
    pub font_family: Option<String>,
    pub base_size: Option<u32>,
    pub line_height: Option<f64>,
    pub shadow: Option<bool>,
    pub shadow_color: Option<String>,
    pub show_header: Option<bool>,
    pub show_footer: Option<bool>,
    pub stroke_width: Option<u32>,
    pub stroke_color: Option<String>,
    pub background_opacity: Option<f64>,
    pub question_weight: Option<u16>,
    pub answer_weight: Option<u16>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldPatch {
    pub front: Option<String>,
    pub back: Option<String>,
    pub hint: Option<String>,
    pub image: Option<String>,
    pub extra: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisibilityPatch {
    pub show_image: Option<bool>,
    pub show_hint: Option<bool>,
    pub show_extra: Option<bool>,
    pub include_question_on_back: Option<bool>,
}

impl StylePatch {
    pub fn apply(&self, config: &mut CardConfig) {
        if let Some(v) = &self.background {
            config.background = v.clone();
        }
        if let Some(v) = &self.foreground {
            config.foreground = v.clone();
        }
        if let Some(v) = &self.accent {
            config.accent = v.clone();
        }
        if let Some(v) = self.card_width {
            config.card_width = v;
        }
        if let Some(v) = self.radius {
            config.radius = v;
        }
        if let Some(v) = self.padding {
            config.padding = v;
        }
        if let Some(v) = &self.font_family {
            config.font_family = v.clone();
        }
        if let Some(v) = self.base_size {
            config.base_size = v;
        }
        if let Some(v) = self.line_height {
            config.line_height = v;
        }
        if let Some(v) = self.shadow {
            config.shadow = v;
        }
        if let Some(v) = &self.shadow_color {
            config.shadow_color = v.clone();
        }
        if let Some(v) = self.show_header {
            config.show_header = v;
        }
        if let Some(v) = self.show_footer {
            config.show_footer = v;
        }
        if let Some(v) = self.stroke_width {
            config.stroke_width = v;
        }
        if let Some(v) = &self.stroke_color {
            config.stroke_color = v.clone();
        }
        if let Some(v) = self.background_opacity {
            config.background_opacity = v;
        }
        if let Some(v) = self.question_weight {
            config.question_weight = v;
        }
        if let Some(v) = self.answer_weight {
            config.answer_weight = v;
        }
    }
}

impl FieldPatch {
    fn get(&self, role: FieldRole) -> Option<&str> {
        let name = match role {
            FieldRole::Front => &self.front,
            FieldRole::Back => &self.back,
            FieldRole::Hint => &self.hint,
            FieldRole::Image => &self.image,
            FieldRole::Extra => &self.extra,
        };
        name.as_deref()
    }
}

impl VisibilityPatch {
    fn get(&self, option: VisibilityOption) -> Option<bool> {
        match option {
            VisibilityOption::ShowImage => self.show_image,
            VisibilityOption::ShowHint => self.show_hint,
            VisibilityOption::ShowExtra => self.show_extra,
            VisibilityOption::IncludeQuestionOnBack => self.include_question_on_back,
        }
    }
}

impl Design {
    pub fn parse(text: &str) -> Fallible<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply the design on top of a session: preset, then style overrides,
    /// then field names, layout and visibility.
    pub fn apply(&self, session: &mut Session) -> Fallible<()> {
        if let Some(id) = &self.preset {
            if !session.select_preset(id) {
                return fail(format!("unknown preset: {id}"));
            }
        }
        session.update_config(|config| self.style.apply(config));
        for role in FieldRole::ALL {
            if let Some(name) = self.fields.get(role) {
                session.rename_field(role, name);
            }
        }
        if let Some(layout) = self.layout {
            session.set_layout(layout);
        }
        for option in VisibilityOption::ALL {
            if let Some(value) = self.visibility.get(option) {
                session.set_visibility(option, value);
            }
        }
        Ok(())
    }

    /// A new session laid out as this design describes.
    pub fn into_session(self, reduce_motion: bool) -> Fallible<Session> {
        let mut session = Session::new(reduce_motion);
        self.apply(&mut session)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;
    use crate::presets::default_preset;
    use crate::presets::find_preset;
    use crate::types::visibility::Visibility;

    #[test]
    fn test_empty_design_is_default_session() -> Fallible<()> {
        let session = Design::parse("")?.into_session(false)?;
        assert_eq!(session.config(), &default_preset().config);
        assert_eq!(session.layout(), Layout::Center);
        assert_eq!(session.visibility(), Visibility::default());
        Ok(())
    }

    #[test]
    fn test_full_design() -> Fallible<()> {
        let text = r##"
preset = "night"
layout = "left"

[style]
accent = "#ff375f"
card_width = 600
background_opacity = 0.5

[fields]
front = "Question"
extra = ""

[visibility]
include_question_on_back = false
show_extra = true
"##;
        let session = Design::parse(text)?.into_session(false)?;
        let night = &find_preset("night").unwrap().config;
        assert_eq!(session.config().accent, "#ff375f");
        assert_eq!(session.config().card_width, 600);
        assert_eq!(session.config().background_opacity, 0.5);
        assert_eq!(session.config().background, night.background);
        assert_eq!(session.config().question_weight, night.question_weight);
        assert_eq!(session.fields().front, "Question");
        assert_eq!(session.fields().extra, "Extra");
        assert_eq!(session.layout(), Layout::Left);
        assert!(!session.visibility().include_question_on_back);
        assert!(session.visibility().show_extra);
        assert!(session.visibility().show_hint);
        assert!(session.exports().stylesheet.contains("--bg:rgba(11,18,32,0.5);"));
        assert!(!session.exports().back.contains("{{Question}}"));
        Ok(())
    }

    #[test]
    fn test_unknown_preset() -> Fallible<()> {
        let design = Design::parse(r#"preset = "neon""#)?;
        let err = design.into_session(false).unwrap_err();
        assert_eq!(err.to_string(), "error: unknown preset: neon");
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Design::parse("colour = \"red\"").is_err());
        assert!(Design::parse("[style]\nbg = \"#fff\"").is_err());
        assert!(Design::parse("layout = \"centre\"").is_err());
    }
}
