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

use once_cell::sync::Lazy;

use serde::Serialize;

use crate::types::config::CardConfig;

/// A named starting point for the card configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Preset {
    /// Stable identifier used to select the preset.
    pub id: String,
    pub name: String,
    pub config: CardConfig,
}

const SYSTEM_FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'SF Pro Text', 'SF Pro Display', system-ui, Segoe UI, Roboto, Arial, sans-serif";

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            id: "clean".to_string(),
            name: "Clean".to_string(),
            config: CardConfig {
                background: "#ffffff".to_string(),
                foreground: "#111111".to_string(),
                accent: "#0a84ff".to_string(),
                card_width: 520,
                radius: 18,
                padding: 22,
                font_family: SYSTEM_FONT_STACK.to_string(),
                base_size: 17,
                line_height: 1.5,
                shadow: true,
                shadow_color: "rgba(0,0,0,0.12)".to_string(),
                show_header: false,
                show_footer: true,
                stroke_width: 0,
                stroke_color: "#d0d0d4".to_string(),
                background_opacity: 1.0,
                question_weight: 600,
                answer_weight: 400,
            },
        },
        Preset {
            id: "night".to_string(),
            name: "Night".to_string(),
            config: CardConfig {
                background: "#0b1220".to_string(),
                foreground: "#e5e7eb".to_string(),
                accent: "#64d2ff".to_string(),
                card_width: 520,
                radius: 18,
                padding: 22,
                font_family: SYSTEM_FONT_STACK.to_string(),
                base_size: 17,
                line_height: 1.6,
                shadow: false,
                shadow_color: "rgba(0,0,0,0.28)".to_string(),
                show_header: false,
                show_footer: false,
                stroke_width: 1,
                stroke_color: "#1f2937".to_string(),
                background_opacity: 0.98,
                question_weight: 700,
                answer_weight: 450,
            },
        },
        Preset {
            id: "pastel".to_string(),
            name: "Pastel".to_string(),
            config: CardConfig {
                background: "#fff7ed".to_string(),
                foreground: "#3f3f46".to_string(),
                accent: "#ff9f0a".to_string(),
                card_width: 560,
                radius: 22,
                padding: 26,
                font_family: SYSTEM_FONT_STACK.to_string(),
                base_size: 18,
                line_height: 1.7,
                shadow: true,
                shadow_color: "rgba(0,0,0,0.14)".to_string(),
                show_header: true,
                show_footer: true,
                stroke_width: 1,
                stroke_color: "#ffbf69".to_string(),
                background_opacity: 1.0,
                question_weight: 600,
                answer_weight: 400,
            },
        },
    ]
});

/// The preset catalog, in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// The preset a new session starts from.
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = presets().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), presets().len());
    }

    #[test]
    fn test_default_is_clean() {
        assert_eq!(default_preset().id, "clean");
    }

    #[test]
    fn test_find_preset() {
        let night = find_preset("night").unwrap();
        assert_eq!(night.name, "Night");
        assert_eq!(night.config.background, "#0b1220");
        assert_eq!(night.config.background_opacity, 0.98);
        assert!(find_preset("Night").is_none());
        assert!(find_preset("").is_none());
    }
}
