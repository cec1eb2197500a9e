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

use ankicraft_core::CardConfig;
use ankicraft_core::FieldRole;
use ankicraft_core::Layout;
use ankicraft_core::Rgb;
use ankicraft_core::Session;
use ankicraft_core::Side;
use ankicraft_core::VisibilityOption;
use ankicraft_core::presets;
use ankicraft_core::types::config::BASE_SIZE_RANGE;
use ankicraft_core::types::config::CARD_WIDTH_RANGE;
use ankicraft_core::types::config::LINE_HEIGHT_RANGE;
use ankicraft_core::types::config::OPACITY_RANGE;
use ankicraft_core::types::config::PADDING_RANGE;
use ankicraft_core::types::config::RADIUS_RANGE;
use ankicraft_core::types::config::STROKE_WIDTH_RANGE;
use ankicraft_core::types::config::WEIGHT_RANGE;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::cmd::design::state::ServerState;
use crate::cmd::design::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let session = state.session();
    let body = render_designer(&session);
    (StatusCode::OK, Html(page_template(body).into_string()))
}

fn render_designer(session: &Session) -> Markup {
    let accent = format!("color: {};", session.config().accent);
    html! {
        div.root {
            header.brand {
                div.logo {
                    span style=(accent) { "Anki" }
                    span { "Craft" }
                }
                div.tagline { "Customiser For Your Anki Cards" }
            }
            div.designer {
                div.controls {
                    (preset_form(session))
                    (style_form(session.config()))
                    (layout_form(session.layout()))
                    (fields_form(session))
                    (visibility_form(session))
                    form action="/" method="post" {
                        button.primary type="submit" name="action" value="export" {
                            @if session.show_export() { "Hide" } @else { "Export" }
                            " Anki Design"
                        }
                    }
                }
                div.preview-panel {
                    (side_tabs(session.side()))
                    div.preview-stage {
                        (session.preview())
                    }
                }
            }
            @if session.show_export() {
                (export_section(session))
            }
        }
    }
}

fn preset_form(session: &Session) -> Markup {
    html! {
        form.panel action="/" method="post" {
            input type="hidden" name="action" value="preset";
            label {
                span { "Theme" }
                select name="preset" aria-label="Preset" {
                    @for preset in presets() {
                        @if preset.config == *session.config() {
                            option value=(preset.id) selected { (preset.name) }
                        } @else {
                            option value=(preset.id) { (preset.name) }
                        }
                    }
                }
            }
            input type="submit" value="Apply theme";
        }
    }
}

fn color_input(label: &str, name: &str, value: &str) -> Markup {
    html! {
        label {
            span { (label) }
            input type="color" name=(name) value=(Rgb::from_hex(value).to_hex());
        }
    }
}

fn number_input<T: ToString>(label: &str, name: &str, value: T, range: RangeInclusive<T>, step: &str) -> Markup {
    html! {
        label {
            span { (label) }
            input type="number" name=(name) value=(value.to_string())
                min=(range.start().to_string()) max=(range.end().to_string()) step=(step);
        }
    }
}

fn checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        label.toggle {
            input type="checkbox" name=(name) checked[checked];
            span { (label) }
        }
    }
}

fn style_form(config: &CardConfig) -> Markup {
    html! {
        form.panel.grid action="/" method="post" {
            input type="hidden" name="action" value="style";
            (color_input("Background", "background", &config.background))
            (color_input("Text", "foreground", &config.foreground))
            (color_input("Accent", "accent", &config.accent))
            (number_input("Card width (px)", "card_width", config.card_width, CARD_WIDTH_RANGE, "1"))
            (number_input("Radius (px)", "radius", config.radius, RADIUS_RANGE, "1"))
            (number_input("Padding (px)", "padding", config.padding, PADDING_RANGE, "1"))
            (number_input("Base size (px)", "base_size", config.base_size, BASE_SIZE_RANGE, "1"))
            (number_input("Line height", "line_height", config.line_height, LINE_HEIGHT_RANGE, "0.1"))
            (checkbox("Shadow", "shadow", config.shadow))
            label.wide {
                span { "Shadow colour" }
                input type="text" name="shadow_color" value=(config.shadow_color)
                    placeholder="rgba(0,0,0,0.12) or #00000080";
            }
            (number_input("Stroke width (px)", "stroke_width", config.stroke_width, STROKE_WIDTH_RANGE, "1"))
            (color_input("Stroke colour", "stroke_color", &config.stroke_color))
            (number_input("Background opacity", "background_opacity", config.background_opacity, OPACITY_RANGE, "any"))
            (number_input("Question weight", "question_weight", config.question_weight, WEIGHT_RANGE, "any"))
            (number_input("Answer weight", "answer_weight", config.answer_weight, WEIGHT_RANGE, "any"))
            label.wide {
                span { "Font stack" }
                input type="text" name="font_family" value=(config.font_family);
            }
            (checkbox("Show header", "show_header", config.show_header))
            (checkbox("Show footer", "show_footer", config.show_footer))
            input.wide type="submit" value="Apply style";
        }
    }
}

fn layout_form(layout: Layout) -> Markup {
    html! {
        form.panel.segmented action="/" method="post" {
            input type="hidden" name="action" value="layout";
            span { "Layout" }
            @for (value, label) in [(Layout::Center, "Centre"), (Layout::Left, "Left")] {
                button type="submit" name="layout" value=(value.class()) class=[(value == layout).then_some("active")] {
                    (label)
                }
            }
        }
    }
}

fn fields_form(session: &Session) -> Markup {
    html! {
        form.panel.grid action="/" method="post" {
            input type="hidden" name="action" value="fields";
            @for role in FieldRole::ALL {
                label {
                    span { (role.label()) " field" }
                    input type="text" name=(role.key()) value=(session.fields().get(role))
                        placeholder=(role.label());
                }
            }
            input.wide type="submit" value="Rename fields";
        }
    }
}

fn visibility_form(session: &Session) -> Markup {
    let visibility = session.visibility();
    html! {
        form.panel.grid action="/" method="post" {
            input type="hidden" name="action" value="visibility";
            @for option in VisibilityOption::ALL {
                (checkbox(option.label(), option.key(), visibility.get(option)))
            }
            input.wide type="submit" value="Apply visibility";
        }
    }
}

fn side_tabs(active: Side) -> Markup {
    html! {
        form.segmented.tabs action="/" method="post" {
            input type="hidden" name="action" value="side";
            @for (side, label) in [(Side::Front, "Front"), (Side::Back, "Back")] {
                button type="submit" name="side" value=(side.class()) class=[(side == active).then_some("active")] {
                    (label)
                }
            }
        }
    }
}

fn code_block(title: &str, id: &str, text: &str) -> Markup {
    html! {
        div.code-block {
            div.code-header {
                div.code-title { (title) }
                button.copy type="button" data-target=(id) { "Copy" }
            }
            textarea id=(id) readonly { (text) }
        }
    }
}

fn export_section(session: &Session) -> Markup {
    let exports = session.exports();
    let transition = if session.reduce_motion() {
        "transition: none;"
    } else {
        "transition: max-height 360ms ease, opacity 240ms ease;"
    };
    html! {
        div.export style=(transition) {
            h3 { "Export Anki Templates" }
            (code_block("Front Template", "export-front", &exports.front))
            (code_block("Back Template", "export-back", &exports.back))
            (code_block("Styling CSS", "export-css", &exports.stylesheet))
            p.note {
                "In Anki, go to Note Type → Cards… and paste into the relevant boxes. Rename fields if needed."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
        let key = format!(" {name}=\"");
        let start = tag.find(&key)? + key.len();
        let end = tag[start..].find('"')? + start;
        Some(&tag[start..end])
    }

    #[test]
    fn test_preset_values_fit_their_step() {
        for preset in presets() {
            let html = style_form(&preset.config).into_string();
            let inputs: Vec<&str> = html
                .split("<input")
                .filter(|tag| tag.contains(r#"type="number""#))
                .map(|tag| &tag[..tag.find('>').unwrap()])
                .collect();
            assert_eq!(inputs.len(), 9);
            for tag in inputs {
                let step = attribute(tag, "step").unwrap();
                if step == "any" {
                    continue;
                }
                let step: f64 = step.parse().unwrap();
                let value: f64 = attribute(tag, "value").unwrap().parse().unwrap();
                let min: f64 = attribute(tag, "min").unwrap().parse().unwrap();
                let steps = (value - min) / step;
                assert!(
                    (steps - steps.round()).abs() < 1e-9,
                    "{tag} is off its step in {}",
                    preset.id
                );
            }
        }
    }

    #[test]
    fn test_night_style_form_accepts_its_own_values() {
        let night = &presets().iter().find(|p| p.id == "night").unwrap().config;
        let html = style_form(night).into_string();
        assert!(html.contains(
            r#"name="background_opacity" value="0.98" min="0.1" max="1" step="any""#
        ));
        assert!(html.contains(r#"name="answer_weight" value="450" min="100" max="900" step="any""#));
    }

    #[test]
    fn test_color_inputs_use_full_hex() {
        let mut config = presets()[0].config.clone();
        config.accent = "#abc".to_string();
        config.stroke_color = "tomato".to_string();
        let html = style_form(&config).into_string();
        assert!(html.contains(r##"type="color" name="accent" value="#aabbcc""##));
        assert!(html.contains(r##"type="color" name="stroke_color" value="#ffffff""##));
        assert!(html.contains(r##"type="color" name="background" value="#ffffff""##));
    }
}
