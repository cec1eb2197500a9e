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

//! Front and back card templates in Anki's template syntax.
//!
//! A field named `X` is written `{{X}}`, and `{{#X}}...{{/X}}` renders its
//! body only when `X` is non-empty. The hint, image and extra sections are
//! always emitted behind such conditionals; the preview toggles do not
//! reach the templates.

use crate::types::config::CardConfig;
use crate::types::fields::FieldNames;
use crate::types::layout::Layout;
use crate::types::layout::Side;

const HEADER: &str = r#"<div class="header">{{Deck}}</div>"#;
const FOOTER: &str = r#"<div class="footer muted">{{tags}}</div>"#;
const DIVIDER: &str = r#"<div class="hr"></div>"#;

fn field(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// Wrap `body` so it only renders when the field `name` has content.
fn section(name: &str, body: &str) -> String {
    format!("{{{{#{name}}}}}{body}{{{{/{name}}}}}")
}

fn question(fields: &FieldNames) -> String {
    format!(r#"<div class="qa accent">{}</div>"#, field(&fields.front))
}

fn hint(fields: &FieldNames) -> String {
    section(
        &fields.hint,
        &format!(r#"<div class="hint">Hint: {}</div>"#, field(&fields.hint)),
    )
}

fn image(fields: &FieldNames) -> String {
    section(
        &fields.image,
        &format!(r#"<img alt="image" src="{}"/>"#, field(&fields.image)),
    )
}

fn extra(fields: &FieldNames) -> String {
    section(
        &fields.extra,
        &format!(r#"<div class="extra">{}</div>"#, field(&fields.extra)),
    )
}

fn wrap(side: Side, layout: Layout, blocks: Vec<String>) -> String {
    let title = match side {
        Side::Front => "Front",
        Side::Back => "Back",
    };
    let mut lines = vec![
        format!("<!-- {title} Template -->"),
        format!(r#"<div class="card {} {}">"#, layout.class(), side.class()),
    ];
    lines.extend(blocks.into_iter().map(|block| format!("  {block}")));
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// The template for the question side.
pub fn generate_front_template(config: &CardConfig, layout: Layout, fields: &FieldNames) -> String {
    let mut blocks = Vec::new();
    if config.show_header {
        blocks.push(HEADER.to_string());
    }
    blocks.push(question(fields));
    blocks.push(hint(fields));
    blocks.push(image(fields));
    if config.show_footer {
        blocks.push(FOOTER.to_string());
    }
    wrap(Side::Front, layout, blocks)
}

/// The template for the answer side.
///
/// Without `include_question_on_back` the question and the divider after it
/// are left out of the template altogether.
pub fn generate_back_template(
    config: &CardConfig,
    layout: Layout,
    fields: &FieldNames,
    include_question_on_back: bool,
) -> String {
    let mut blocks = Vec::new();
    if config.show_header {
        blocks.push(HEADER.to_string());
    }
    if include_question_on_back {
        blocks.push(question(fields));
        blocks.push(DIVIDER.to_string());
    }
    blocks.push(format!(r#"<div class="answer">{}</div>"#, field(&fields.back)));
    blocks.push(image(fields));
    blocks.push(hint(fields));
    blocks.push(extra(fields));
    if config.show_footer {
        blocks.push(FOOTER.to_string());
    }
    wrap(Side::Back, layout, blocks)
}
