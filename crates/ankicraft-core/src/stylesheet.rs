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

use crate::color::Rgb;
use crate::color::composite_with_opacity;
use crate::types::config::CardConfig;

/// The `box-shadow` value for a configuration.
pub fn box_shadow(config: &CardConfig) -> String {
    if config.shadow {
        format!(
            "0 8px 24px {c}, 0 2px 8px {c}",
            c = config.shadow_color
        )
    } else {
        "none".to_string()
    }
}

/// Generate the stylesheet to paste into the note type's Styling section.
///
/// Every attribute of the configuration becomes a custom property on
/// `:root`, and the rules below only read those properties. Both layout
/// classes are always emitted, so switching layout only needs new templates.
pub fn generate_stylesheet(config: &CardConfig) -> String {
    let Rgb { r, g, b } = Rgb::from_hex(&config.background);
    let background = composite_with_opacity(&config.background, config.background_opacity);
    let shadow = box_shadow(config);
    format!(
        r#"/* Styling for Anki (paste into Styling) */
:root{{
  --fg:{fg};
  --accent:{accent};
  --card-w:{card_width}px;
  --radius:{radius}px;
  --pad:{padding}px;
  --font:{font};
  --base:{base_size}px;
  --lh:{line_height};
  --stroke-w:{stroke_width}px;
  --stroke-color:{stroke_color};
  --shadow-color:{shadow_color};
  --shadow:{shadow};
  --bg-r:{r}; --bg-g:{g}; --bg-b:{b};
  --bg-opacity:{opacity};
  --bg:{background};
  --q-weight:{q_weight};
  --a-weight:{a_weight};
}}

.card{{
  background: rgb(var(--bg-r), var(--bg-g), var(--bg-b));
  background: var(--bg);
  color: var(--fg);
  font-family: var(--font);
  font-size: var(--base);
  line-height: var(--lh);
  max-width: var(--card-w);
  margin: 0 auto;
  padding: var(--pad);
  border-radius: var(--radius);
  border: var(--stroke-w) solid var(--stroke-color);
  box-shadow: var(--shadow);
}}

.card h1,.card h2,.card h3{{line-height:1.2;margin:0 0 0.6em}}
.card h1{{font-size:calc(var(--base)*1.5)}}
.card h2{{font-size:calc(var(--base)*1.25)}}
.card h3{{font-size:calc(var(--base)*1.1)}}
.card .muted{{opacity:.75}}
.card .accent{{color:var(--accent)}}
.card img{{max-width:100%;height:auto;border-radius:max(0px, calc(var(--radius) - 6px))}}
.card .hr{{height:1px;background:linear-gradient(90deg,transparent,rgba(0,0,0,.12),transparent);margin:16px 0}}

.card.center{{display:flex;flex-direction:column;align-items:center;text-align:center}}
.card.left{{display:flex;flex-direction:column;align-items:flex-start;text-align:left}}

.card .header{{font-weight:600;margin-bottom:8px;letter-spacing:.3px}}
.card .footer{{opacity:.7;margin-top:12px;font-size:calc(var(--base)*0.9)}}
.card .hint{{font-style:italic;opacity:.85;margin-top:8px}}
.card .qa{{font-size:calc(var(--base)*1.1);font-weight:var(--q-weight)}}
.card .answer{{margin-top:12px;font-weight:var(--a-weight)}}
.card .extra{{margin-top:12px;padding:12px;border-radius:12px;background:rgba(0,0,0,.04)}}
"#,
        fg = config.foreground,
        accent = config.accent,
        card_width = config.card_width,
        radius = config.radius,
        padding = config.padding,
        font = config.font_family,
        base_size = config.base_size,
        line_height = config.line_height,
        stroke_width = config.stroke_width,
        stroke_color = config.stroke_color,
        shadow_color = config.shadow_color,
        opacity = config.background_opacity,
        q_weight = config.question_weight,
        a_weight = config.answer_weight,
    )
}
