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

use std::collections::HashMap;
use std::str::FromStr;

use ankicraft_core::CardConfig;
use ankicraft_core::FieldRole;
use ankicraft_core::Layout;
use ankicraft_core::Session;
use ankicraft_core::Side;
use ankicraft_core::VisibilityOption;
use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::design::state::ServerState;

/// A submission from one of the designer's forms.
///
/// `action` names the form; the remaining fields depend on it. Checkboxes
/// are only submitted when checked.
#[derive(Deserialize)]
pub struct DesignForm {
    action: String,
    #[serde(flatten)]
    values: HashMap<String, String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<DesignForm>,
) -> Redirect {
    let mut session = state.session();
    apply_action(&mut session, &form.action, &form.values);
    Redirect::to("/")
}

fn apply_action(session: &mut Session, action: &str, values: &HashMap<String, String>) {
    log::debug!("Action: {action}");
    match action {
        "preset" => {
            let id = values.get("preset").map(String::as_str).unwrap_or_default();
            if !session.select_preset(id) {
                log::debug!("Unknown preset: {id}");
            }
        }
        "style" => {
            let config = read_style(session.config().clone(), values).clamped();
            session.set_config(config);
        }
        "fields" => {
            for role in FieldRole::ALL {
                if let Some(name) = values.get(role.key()) {
                    session.rename_field(role, name);
                }
            }
        }
        "layout" => {
            if let Some(layout) = parse::<Layout>(values, "layout") {
                session.set_layout(layout);
            }
        }
        "visibility" => {
            for option in VisibilityOption::ALL {
                session.set_visibility(option, values.contains_key(option.key()));
            }
        }
        "side" => {
            if let Some(side) = parse::<Side>(values, "side") {
                session.switch_side(side);
            }
        }
        "export" => session.toggle_export(),
        _ => log::debug!("Unknown action: {action}"),
    }
}

fn parse<T: FromStr>(values: &HashMap<String, String>, key: &str) -> Option<T> {
    values.get(key).and_then(|value| value.trim().parse().ok())
}

/// Overwrite `slot` with the parsed value of `key`, if it parses.
fn read<T: FromStr>(values: &HashMap<String, String>, key: &str, slot: &mut T) {
    if let Some(value) = parse(values, key) {
        *slot = value;
    }
}

/// Read the style form on top of the current configuration. Values that do
/// not parse keep their previous value.
fn read_style(mut config: CardConfig, values: &HashMap<String, String>) -> CardConfig {
    read(values, "background", &mut config.background);
    read(values, "foreground", &mut config.foreground);
    read(values, "accent", &mut config.accent);
    read(values, "card_width", &mut config.card_width);
    read(values, "radius", &mut config.radius);
    read(values, "padding", &mut config.padding);
    read(values, "font_family", &mut config.font_family);
    read(values, "base_size", &mut config.base_size);
    read(values, "line_height", &mut config.line_height);
    read(values, "shadow_color", &mut config.shadow_color);
    read(values, "stroke_width", &mut config.stroke_width);
    read(values, "stroke_color", &mut config.stroke_color);
    read(values, "background_opacity", &mut config.background_opacity);
    read(values, "question_weight", &mut config.question_weight);
    read(values, "answer_weight", &mut config.answer_weight);
    config.shadow = values.contains_key("shadow");
    config.show_header = values.contains_key("show_header");
    config.show_footer = values.contains_key("show_footer");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_style_keeps_unparsable_values() {
        let current = Session::default().config().clone();
        let config = read_style(
            current.clone(),
            &values(&[("card_width", "wide"), ("radius", "4"), ("shadow", "on")]),
        );
        assert_eq!(config.card_width, current.card_width);
        assert_eq!(config.radius, 4);
        assert!(config.shadow);
        assert!(!config.show_footer);
    }

    #[test]
    fn test_style_is_clamped() {
        let mut session = Session::default();
        apply_action(
            &mut session,
            "style",
            &values(&[("background_opacity", "7"), ("card_width", "10")]),
        );
        assert_eq!(session.config().background_opacity, 1.0);
        assert_eq!(session.config().card_width, 360);
    }

    #[test]
    fn test_visibility_unchecked_means_false() {
        let mut session = Session::default();
        apply_action(&mut session, "visibility", &values(&[("show_extra", "on")]));
        let visibility = session.visibility();
        assert!(visibility.show_extra);
        assert!(!visibility.show_hint);
        assert!(!visibility.show_image);
        assert!(!visibility.include_question_on_back);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let mut session = Session::default();
        apply_action(&mut session, "layout", &values(&[("layout", "diagonal")]));
        apply_action(&mut session, "side", &values(&[]));
        apply_action(&mut session, "preset", &values(&[("preset", "neon")]));
        apply_action(&mut session, "teleport", &values(&[]));
        assert_eq!(session.layout(), Layout::Center);
        assert_eq!(session.side(), Side::Front);
        assert_eq!(session.render_key(), 0);
        assert_eq!(session.config(), Session::default().config());
    }

    #[test]
    fn test_fields() {
        let mut session = Session::default();
        apply_action(
            &mut session,
            "fields",
            &values(&[("front", "Question"), ("back", "")]),
        );
        assert_eq!(session.fields().front, "Question");
        assert_eq!(session.fields().back, "Back");
        assert_eq!(session.fields().hint, "Hint");
    }
}
