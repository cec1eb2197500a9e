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

use serde::Serialize;

use crate::presets::Preset;
use crate::presets::default_preset;
use crate::presets::find_preset;
use crate::preview::PreviewCard;
use crate::preview::PreviewInput;
use crate::preview::render_preview;
use crate::stylesheet::generate_stylesheet;
use crate::template::generate_back_template;
use crate::template::generate_front_template;
use crate::types::config::CardConfig;
use crate::types::fields::FieldNames;
use crate::types::fields::FieldRole;
use crate::types::layout::Layout;
use crate::types::layout::Side;
use crate::types::visibility::Visibility;
use crate::types::visibility::VisibilityOption;

/// The three text blocks a user pastes into Anki.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exports {
    pub front: String,
    pub back: String,
    pub stylesheet: String,
}

impl Exports {
    fn generate(
        config: &CardConfig,
        layout: Layout,
        fields: &FieldNames,
        include_question_on_back: bool,
    ) -> Self {
        Self {
            front: generate_front_template(config, layout, fields),
            back: generate_back_template(config, layout, fields, include_question_on_back),
            stylesheet: generate_stylesheet(config),
        }
    }
}

/// The state of one designer session.
///
/// Every setter is total. The exported texts are regenerated whenever one of
/// their inputs changes, so [`Session::exports`] is always current.
#[derive(Clone, Debug)]
pub struct Session {
    config: CardConfig,
    fields: FieldNames,
    layout: Layout,
    visibility: Visibility,
    side: Side,
    /// Bumped on every side switch so the preview replays its animation.
    render_key: u64,
    /// Mirrors the environment's reduced-motion preference. Not user-settable.
    reduce_motion: bool,
    show_export: bool,
    exports: Exports,
}

impl Session {
    /// Start a session from the first preset.
    pub fn new(reduce_motion: bool) -> Self {
        let config = default_preset().config.clone();
        let fields = FieldNames::default();
        let layout = Layout::default();
        let visibility = Visibility::default();
        let exports = Exports::generate(
            &config,
            layout,
            &fields,
            visibility.include_question_on_back,
        );
        Self {
            config,
            fields,
            layout,
            visibility,
            side: Side::Front,
            render_key: 0,
            reduce_motion,
            show_export: false,
            exports,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn render_key(&self) -> u64 {
        self.render_key
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    pub fn show_export(&self) -> bool {
        self.show_export
    }

    pub fn exports(&self) -> &Exports {
        &self.exports
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: CardConfig) {
        self.config = config;
        self.refresh();
    }

    /// Change some attributes of the configuration in place.
    pub fn update_config(&mut self, patch: impl FnOnce(&mut CardConfig)) {
        patch(&mut self.config);
        self.refresh();
    }

    /// Replace the configuration with a preset's. Field names, layout and
    /// visibility are left alone.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.set_config(preset.config.clone());
    }

    /// Select a preset by id. Unknown ids leave the session unchanged.
    ///
    /// Returns whether a preset was applied.
    pub fn select_preset(&mut self, id: &str) -> bool {
        match find_preset(id) {
            Some(preset) => {
                self.apply_preset(preset);
                true
            }
            None => false,
        }
    }

    /// Rename the field bound to `role`. An empty name restores the role's
    /// label.
    pub fn rename_field(&mut self, role: FieldRole, name: &str) {
        self.fields.set(role, name);
        self.refresh();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.refresh();
    }

    pub fn set_visibility(&mut self, option: VisibilityOption, value: bool) {
        self.visibility.set(option, value);
        // The other toggles only affect the preview.
        if option == VisibilityOption::IncludeQuestionOnBack {
            self.refresh();
        }
    }

    /// Show the other side in the preview.
    pub fn switch_side(&mut self, side: Side) {
        self.side = side;
        self.render_key = self.render_key.wrapping_add(1);
    }

    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        self.reduce_motion = reduce_motion;
    }

    pub fn set_show_export(&mut self, show_export: bool) {
        self.show_export = show_export;
    }

    pub fn toggle_export(&mut self) {
        self.show_export = !self.show_export;
    }

    /// The preview of the active side.
    pub fn preview(&self) -> PreviewCard {
        self.preview_side(self.side)
    }

    /// The preview of either side, regardless of which one is active.
    pub fn preview_side(&self, side: Side) -> PreviewCard {
        render_preview(&PreviewInput {
            config: &self.config,
            layout: self.layout,
            side,
            fields: &self.fields,
            visibility: self.visibility,
            render_key: self.render_key,
            reduce_motion: self.reduce_motion,
        })
    }

    fn refresh(&mut self) {
        self.exports = Exports::generate(
            &self.config,
            self.layout,
            &self.fields,
            self.visibility.include_question_on_back,
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}
