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

//! The live preview of a card face.
//!
//! The preview is built as a small tree of blocks, with sample content in
//! place of the fields, and rendered to HTML through [`maud::Render`].

use maud::Markup;
use maud::Render;
use maud::html;

use crate::color::composite_with_opacity;
use crate::stylesheet::box_shadow;
use crate::types::config::CardConfig;
use crate::types::fields::FieldNames;
use crate::types::layout::Layout;
use crate::types::layout::Side;
use crate::types::visibility::Visibility;

/// The animation played when the previewed side changes.
pub const CARD_ANIMATION: &str = "cardBounce 420ms cubic-bezier(.22,.61,.36,1)";

/// Keyframes for [`CARD_ANIMATION`]. Pages showing a preview must include
/// them.
pub const CARD_KEYFRAMES: &str = "@keyframes cardBounce{0%{transform:translateY(10px) scale(.98);opacity:.6}55%{transform:translateY(-3px) scale(1.005);opacity:1}100%{transform:none}}";

const SAMPLE_HEADER: &str = "Biology Deck";
const SAMPLE_FOOTER: &str = "tags: geography, capitals";

/// Demo content, keyed by field name.
///
/// The lookup is by the user's field name, not by role: renaming `Front` to
/// `Question` makes the preview show `{{Question}}`, which points out the
/// fields that have no demo content.
pub fn sample_content(field_name: &str) -> Option<&'static str> {
    match field_name {
        "Front" => Some("What is the capital of Japan?"),
        "Back" => Some("Tokyo"),
        "Hint" => Some("Think of the Kanto region"),
        "Image" => Some(
            "https://upload.wikimedia.org/wikipedia/commons/thumb/1/12/Tokyo_Tower_and_around_Skyscrapers.jpg/640px-Tokyo_Tower_and_around_Skyscrapers.jpg",
        ),
        "Extra" => Some("Mnemonic: ToKYO → ToKyo"),
        _ => None,
    }
}

fn sample_or_token(field_name: &str) -> String {
    match sample_content(field_name) {
        Some(sample) => sample.to_string(),
        None => format!("{{{{{field_name}}}}}"),
    }
}

/// Format a pixel quantity with at most two decimals.
fn px(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}px")
}

/// Everything the preview depends on.
#[derive(Clone, Copy, Debug)]
pub struct PreviewInput<'a> {
    pub config: &'a CardConfig,
    pub layout: Layout,
    pub side: Side,
    pub fields: &'a FieldNames,
    pub visibility: Visibility,
    /// Changes every time the side is switched.
    pub render_key: u64,
    pub reduce_motion: bool,
}

/// Inline styles of the card container.
#[derive(Clone, Debug, PartialEq)]
pub struct CardStyle {
    /// Always the opacity-composited background.
    pub background: String,
    pub color: String,
    pub font_family: String,
    pub font_size: u32,
    pub line_height: f64,
    pub padding: u32,
    pub radius: u32,
    pub max_width: u32,
    pub border: String,
    pub box_shadow: String,
    /// `None` under reduced motion.
    pub animation: Option<&'static str>,
}

/// One visual element of the previewed card, in display order.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewBlock {
    Header(String),
    Question {
        text: String,
        color: String,
        weight: u16,
        font_size: f64,
    },
    Divider,
    Answer {
        text: String,
        weight: u16,
    },
    Hint(String),
    Image {
        src: String,
        radius: u32,
    },
    Extra(String),
    Footer {
        text: String,
        font_size: f64,
    },
}

/// A rendered card face.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewCard {
    pub side: Side,
    pub layout: Layout,
    pub render_key: u64,
    pub style: CardStyle,
    pub blocks: Vec<PreviewBlock>,
}

pub fn render_preview(input: &PreviewInput) -> PreviewCard {
    let config = input.config;
    let fields = input.fields;
    let visibility = input.visibility;

    let question = || PreviewBlock::Question {
        text: sample_or_token(&fields.front),
        color: config.accent.clone(),
        weight: config.question_weight,
        font_size: config.base_size as f64 * 1.1,
    };
    let hint = || PreviewBlock::Hint(sample_or_token(&fields.hint));
    let image = || PreviewBlock::Image {
        src: sample_or_token(&fields.image),
        radius: config.radius.saturating_sub(6),
    };

    let mut blocks = Vec::new();
    if config.show_header {
        blocks.push(PreviewBlock::Header(SAMPLE_HEADER.to_string()));
    }
    match input.side {
        Side::Front => {
            blocks.push(question());
            if visibility.show_hint {
                blocks.push(hint());
            }
            if visibility.show_image {
                blocks.push(image());
            }
        }
        // The back shows the image before the hint, unlike the front.
        Side::Back => {
            if visibility.include_question_on_back {
                blocks.push(question());
                blocks.push(PreviewBlock::Divider);
            }
            blocks.push(PreviewBlock::Answer {
                text: sample_or_token(&fields.back),
                weight: config.answer_weight,
            });
            if visibility.show_image {
                blocks.push(image());
            }
            if visibility.show_hint {
                blocks.push(hint());
            }
            if visibility.show_extra {
                blocks.push(PreviewBlock::Extra(sample_or_token(&fields.extra)));
            }
        }
    }
    if config.show_footer {
        blocks.push(PreviewBlock::Footer {
            text: SAMPLE_FOOTER.to_string(),
            font_size: config.base_size as f64 * 0.9,
        });
    }

    PreviewCard {
        side: input.side,
        layout: input.layout,
        render_key: input.render_key,
        style: CardStyle {
            background: composite_with_opacity(&config.background, config.background_opacity),
            color: config.foreground.clone(),
            font_family: config.font_family.clone(),
            font_size: config.base_size,
            line_height: config.line_height,
            padding: config.padding,
            radius: config.radius,
            max_width: config.card_width,
            border: format!("{}px solid {}", config.stroke_width, config.stroke_color),
            box_shadow: box_shadow(config),
            animation: if input.reduce_motion {
                None
            } else {
                Some(CARD_ANIMATION)
            },
        },
        blocks,
    }
}

impl PreviewCard {
    fn container_style(&self) -> String {
        let style = &self.style;
        format!(
            "display:flex;flex-direction:column;align-items:{};text-align:{};\
             background-color:{};color:{};font-family:{};font-size:{}px;line-height:{};\
             padding:{}px;border-radius:{}px;max-width:{}px;border:{};box-shadow:{};\
             margin:0 auto;animation:{};transform-origin:center bottom",
            self.layout.align_items(),
            self.layout.text_align(),
            style.background,
            style.color,
            style.font_family,
            style.font_size,
            style.line_height,
            style.padding,
            style.radius,
            style.max_width,
            style.border,
            style.box_shadow,
            style.animation.unwrap_or("none"),
        )
    }
}

impl Render for PreviewBlock {
    fn render(&self) -> Markup {
        match self {
            PreviewBlock::Header(text) => html! {
                div.header style="margin-bottom:8px;font-weight:600;letter-spacing:.3px;opacity:.8" { (text) }
            },
            PreviewBlock::Question {
                text,
                color,
                weight,
                font_size,
            } => html! {
                div.qa style=(format!("color:{color};font-weight:{weight};font-size:{}", px(*font_size))) { (text) }
            },
            PreviewBlock::Divider => html! {
                div.hr style="height:1px;width:100%;margin:12px 0;background:linear-gradient(90deg,transparent,rgba(0,0,0,.12),transparent)" {}
            },
            PreviewBlock::Answer { text, weight } => html! {
                div.answer style=(format!("margin-top:12px;font-weight:{weight}")) { (text) }
            },
            PreviewBlock::Hint(text) => html! {
                div.hint style="margin-top:8px;font-style:italic;opacity:.85" { "Hint: " (text) }
            },
            PreviewBlock::Image { src, radius } => html! {
                div.image style="margin-top:12px" {
                    img src=(src) alt="preview" style=(format!("max-width:100%;height:auto;border-radius:{radius}px"));
                }
            },
            PreviewBlock::Extra(text) => html! {
                div.extra style="margin-top:12px;padding:12px;border-radius:12px;background:rgba(0,0,0,.04)" { (text) }
            },
            PreviewBlock::Footer { text, font_size } => html! {
                div.footer style=(format!("margin-top:12px;opacity:.7;font-size:{}", px(*font_size))) { (text) }
            },
        }
    }
}

impl Render for PreviewCard {
    fn render(&self) -> Markup {
        let class = format!(
            "preview-card {} {}",
            self.layout.class(),
            self.side.class()
        );
        html! {
            div class=(class) data-render-key=(self.render_key) style=(self.container_style()) {
                div style="width:100%" {
                    @for block in &self.blocks {
                        (block)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::default_preset;
    use crate::presets::find_preset;
    use crate::types::fields::FieldRole;

    fn input<'a>(config: &'a CardConfig, fields: &'a FieldNames, side: Side) -> PreviewInput<'a> {
        PreviewInput {
            config,
            layout: Layout::Center,
            side,
            fields,
            visibility: Visibility {
                show_image: true,
                show_hint: true,
                show_extra: true,
                include_question_on_back: true,
            },
            render_key: 0,
            reduce_motion: false,
        }
    }

    /// The variant names of the blocks, for checking order.
    fn kinds(card: &PreviewCard) -> Vec<&'static str> {
        card.blocks
            .iter()
            .map(|block| match block {
                PreviewBlock::Header(_) => "header",
                PreviewBlock::Question { .. } => "question",
                PreviewBlock::Divider => "divider",
                PreviewBlock::Answer { .. } => "answer",
                PreviewBlock::Hint(_) => "hint",
                PreviewBlock::Image { .. } => "image",
                PreviewBlock::Extra(_) => "extra",
                PreviewBlock::Footer { .. } => "footer",
            })
            .collect()
    }

    #[test]
    fn test_front_order() {
        let config = find_preset("pastel").unwrap().config.clone();
        let fields = FieldNames::default();
        let card = render_preview(&input(&config, &fields, Side::Front));
        assert_eq!(kinds(&card), vec!["header", "question", "hint", "image", "footer"]);
    }

    #[test]
    fn test_back_order_differs_from_front() {
        let config = find_preset("pastel").unwrap().config.clone();
        let fields = FieldNames::default();
        let card = render_preview(&input(&config, &fields, Side::Back));
        assert_eq!(
            kinds(&card),
            vec!["header", "question", "divider", "answer", "image", "hint", "extra", "footer"]
        );
    }

    #[test]
    fn test_back_without_question() {
        let config = default_preset().config.clone();
        let fields = FieldNames::default();
        let mut input = input(&config, &fields, Side::Back);
        input.visibility.include_question_on_back = false;
        let card = render_preview(&input);
        assert_eq!(kinds(&card), vec!["answer", "image", "hint", "extra", "footer"]);
    }

    #[test]
    fn test_toggles_hide_blocks() {
        let config = default_preset().config.clone();
        let fields = FieldNames::default();
        let mut input = input(&config, &fields, Side::Back);
        input.visibility.show_image = false;
        input.visibility.show_hint = false;
        input.visibility.show_extra = false;
        let card = render_preview(&input);
        assert_eq!(kinds(&card), vec!["question", "divider", "answer", "footer"]);
        input.side = Side::Front;
        let card = render_preview(&input);
        assert_eq!(kinds(&card), vec!["question", "footer"]);
    }

    #[test]
    fn test_sample_content() {
        let config = default_preset().config.clone();
        let fields = FieldNames::default();
        let card = render_preview(&input(&config, &fields, Side::Back));
        assert_eq!(
            card.blocks[0],
            PreviewBlock::Question {
                text: "What is the capital of Japan?".to_string(),
                color: "#0a84ff".to_string(),
                weight: 600,
                font_size: 17.0 * 1.1,
            }
        );
        assert_eq!(
            card.blocks[2],
            PreviewBlock::Answer {
                text: "Tokyo".to_string(),
                weight: 400,
            }
        );
    }

    #[test]
    fn test_renamed_field_shows_token() {
        let config = default_preset().config.clone();
        let mut fields = FieldNames::default();
        fields.set(FieldRole::Front, "Question");
        let card = render_preview(&input(&config, &fields, Side::Front));
        match &card.blocks[0] {
            PreviewBlock::Question { text, .. } => assert_eq!(text, "{{Question}}"),
            other => panic!("unexpected block: {other:?}"),
        }
        let html = card.render().into_string();
        assert!(html.contains("{{Question}}"));
    }

    #[test]
    fn test_background_is_composited() {
        let config = CardConfig {
            background_opacity: 0.5,
            ..default_preset().config.clone()
        };
        let fields = FieldNames::default();
        let card = render_preview(&input(&config, &fields, Side::Front));
        assert_eq!(card.style.background, "rgba(255,255,255,0.5)");
        let html = card.render().into_string();
        assert!(html.contains("background-color:rgba(255,255,255,0.5)"));
    }

    #[test]
    fn test_opacity_only_touches_background() {
        let config = default_preset().config.clone();
        let faded = CardConfig {
            background_opacity: 0.25,
            ..config.clone()
        };
        let fields = FieldNames::default();
        let a = render_preview(&input(&config, &fields, Side::Back));
        let b = render_preview(&input(&faded, &fields, Side::Back));
        assert_ne!(a.style.background, b.style.background);
        assert_eq!(
            CardStyle {
                background: String::new(),
                ..a.style
            },
            CardStyle {
                background: String::new(),
                ..b.style
            }
        );
        assert_eq!(a.blocks, b.blocks);
    }

    #[test]
    fn test_reduced_motion() {
        let config = default_preset().config.clone();
        let fields = FieldNames::default();
        let mut input = input(&config, &fields, Side::Front);
        assert_eq!(render_preview(&input).style.animation, Some(CARD_ANIMATION));
        input.reduce_motion = true;
        let card = render_preview(&input);
        assert_eq!(card.style.animation, None);
        assert!(card.render().into_string().contains("animation:none;"));
    }

    #[test]
    fn test_image_radius_never_negative() {
        let config = CardConfig {
            radius: 4,
            ..default_preset().config.clone()
        };
        let fields = FieldNames::default();
        let card = render_preview(&input(&config, &fields, Side::Front));
        assert!(card.blocks.contains(&PreviewBlock::Image {
            src: sample_content("Image").unwrap().to_string(),
            radius: 0,
        }));
    }

    #[test]
    fn test_render_html() {
        let config = default_preset().config.clone();
        let fields = FieldNames::default();
        let mut input = input(&config, &fields, Side::Front);
        input.render_key = 7;
        input.layout = Layout::Left;
        let html = render_preview(&input).render().into_string();
        assert!(html.starts_with(r#"<div class="preview-card left front" data-render-key="7""#));
        assert!(html.contains("align-items:flex-start;text-align:left;"));
        assert!(html.contains("font-size:18.7px"));
        assert!(html.contains("Hint: Think of the Kanto region"));
        assert!(html.contains("tags: geography, capitals"));
    }

    #[test]
    fn test_preview_escapes_field_names() {
        let config = default_preset().config.clone();
        let mut fields = FieldNames::default();
        fields.set(FieldRole::Hint, "<b>");
        let html = render_preview(&input(&config, &fields, Side::Front))
            .render()
            .into_string();
        assert!(html.contains("{{&lt;b&gt;}}"));
    }

    #[test]
    fn test_px() {
        assert_eq!(px(18.700000000000003), "18.7px");
        assert_eq!(px(17.0), "17px");
        assert_eq!(px(15.3), "15.3px");
    }
}
