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

use std::ops::RangeInclusive;

use serde::Deserialize;
use serde::Serialize;

/// The visual attributes of a card.
///
/// Colors are kept as the text the user typed. They are decoded leniently
/// wherever a numeric value is needed, see [`crate::color::Rgb::from_hex`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    /// Card background, as hex.
    pub background: String,
    /// Text color, as hex.
    pub foreground: String,
    /// Accent color used for the question.
    pub accent: String,
    /// Maximum card width in pixels.
    pub card_width: u32,
    /// Border radius in pixels.
    pub radius: u32,
    /// Inner spacing in pixels.
    pub padding: u32,
    /// CSS font-family stack, copied verbatim.
    pub font_family: String,
    /// Base font size in pixels.
    pub base_size: u32,
    /// Line height as a multiplier of the font size.
    pub line_height: f64,
    pub shadow: bool,
    /// Any CSS color. Used as-is, never composited.
    pub shadow_color: String,
    /// Show the deck name above the card content.
    pub show_header: bool,
    /// Show the tags below the card content.
    pub show_footer: bool,
    /// Border width in pixels.
    pub stroke_width: u32,
    /// Border color, as hex.
    pub stroke_color: String,
    /// Opacity of the background color only, in `[0, 1]`.
    pub background_opacity: f64,
    pub question_weight: u16,
    pub answer_weight: u16,
}

pub const CARD_WIDTH_RANGE: RangeInclusive<u32> = 360..=720;
pub const RADIUS_RANGE: RangeInclusive<u32> = 0..=28;
pub const PADDING_RANGE: RangeInclusive<u32> = 8..=48;
pub const BASE_SIZE_RANGE: RangeInclusive<u32> = 14..=22;
pub const LINE_HEIGHT_RANGE: RangeInclusive<f64> = 1.2..=2.2;
pub const STROKE_WIDTH_RANGE: RangeInclusive<u32> = 0..=8;
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.1..=1.0;
pub const WEIGHT_RANGE: RangeInclusive<u16> = 100..=900;

impl CardConfig {
    /// Bring every numeric attribute inside the range its input control
    /// allows. Opacity and line height are rounded to the control's step.
    ///
    /// This is what the designer applies to values submitted from forms.
    /// The generators accept any value.
    pub fn clamped(self) -> Self {
        Self {
            card_width: clamp(self.card_width, &CARD_WIDTH_RANGE),
            radius: clamp(self.radius, &RADIUS_RANGE),
            padding: clamp(self.padding, &PADDING_RANGE),
            base_size: clamp(self.base_size, &BASE_SIZE_RANGE),
            line_height: round_to(clamp_f64(self.line_height, &LINE_HEIGHT_RANGE), 10.0),
            stroke_width: clamp(self.stroke_width, &STROKE_WIDTH_RANGE),
            background_opacity: round_to(
                clamp_f64(self.background_opacity, &OPACITY_RANGE),
                100.0,
            ),
            question_weight: clamp(self.question_weight, &WEIGHT_RANGE),
            answer_weight: clamp(self.answer_weight, &WEIGHT_RANGE),
            ..self
        }
    }
}

fn clamp<T: Ord + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    value.clamp(*range.start(), *range.end())
}

fn clamp_f64(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.end();
    }
    value.clamp(*range.start(), *range.end())
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::default_preset;

    #[test]
    fn test_clamped_is_identity_for_presets() {
        for preset in crate::presets::presets() {
            assert_eq!(preset.config.clone().clamped(), preset.config);
        }
    }

    #[test]
    fn test_clamped_limits() {
        let config = CardConfig {
            card_width: 5000,
            radius: 100,
            padding: 0,
            base_size: 9,
            line_height: 1.234,
            stroke_width: 20,
            background_opacity: 0.0,
            question_weight: 1000,
            answer_weight: 50,
            ..default_preset().config.clone()
        };
        let config = config.clamped();
        assert_eq!(config.card_width, 720);
        assert_eq!(config.radius, 28);
        assert_eq!(config.padding, 8);
        assert_eq!(config.base_size, 14);
        assert_eq!(config.line_height, 1.2);
        assert_eq!(config.stroke_width, 8);
        assert_eq!(config.background_opacity, 0.1);
        assert_eq!(config.question_weight, 900);
        assert_eq!(config.answer_weight, 100);
    }

    #[test]
    fn test_clamped_rounds_opacity() {
        let config = CardConfig {
            background_opacity: 0.8749,
            ..default_preset().config.clone()
        };
        assert_eq!(config.clamped().background_opacity, 0.87);
    }

    #[test]
    fn test_clamped_leaves_text_alone() {
        let config = CardConfig {
            background: "#12".to_string(),
            font_family: "Georgia, serif".to_string(),
            ..default_preset().config.clone()
        };
        let clamped = config.clone().clamped();
        assert_eq!(clamped.background, config.background);
        assert_eq!(clamped.font_family, config.font_family);
    }
}
