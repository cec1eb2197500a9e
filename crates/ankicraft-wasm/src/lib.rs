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

use std::cell::RefCell;
use std::rc::Rc;

use maud::Render;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::console;

use ankicraft_core::CardConfig;
use ankicraft_core::FieldRole;
use ankicraft_core::Layout;
use ankicraft_core::Session;
use ankicraft_core::Side;
use ankicraft_core::VisibilityOption;
use ankicraft_core::presets;

mod motion;

use motion::MotionWatcher;

/// How long the "Copied" acknowledgement stays on a copy button.
const COPY_ACK_MS: u32 = 1100;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"ankicraft WASM initialized".into());
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct DesignerApp {
    /// Shared with the reduced-motion listener
    session: Rc<RefCell<Session>>,
    /// Dropped together with the app, which unsubscribes the listener
    _motion: Option<MotionWatcher>,
}

#[wasm_bindgen]
impl DesignerApp {
    /// Create a designer seeded from the first preset. `on_motion_change` is
    /// called with the new flag whenever the reduced-motion preference changes.
    #[wasm_bindgen(constructor)]
    pub fn new(on_motion_change: Option<js_sys::Function>) -> Self {
        let session = Rc::new(RefCell::new(Session::default()));
        let motion = MotionWatcher::attach(Rc::clone(&session), on_motion_change);
        Self {
            session,
            _motion: motion,
        }
    }

    /// The preset catalog as a JSON array of `{id, name, config}`.
    #[wasm_bindgen]
    pub fn presets_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(presets())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize presets: {}", e)))
    }

    /// Replace the configuration with a preset. Unknown ids are ignored.
    #[wasm_bindgen]
    pub fn select_preset(&mut self, id: &str) -> bool {
        self.session.borrow_mut().select_preset(id)
    }

    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.borrow().config())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
    }

    /// Replace the configuration from a JSON object with every attribute.
    #[wasm_bindgen]
    pub fn set_config_json(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config: CardConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config JSON: {}", e)))?;
        self.session.borrow_mut().set_config(config);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn field_name(&self, role: &str) -> Result<String, JsValue> {
        let role: FieldRole = role.parse().map_err(js_error)?;
        Ok(self.session.borrow().fields().get(role).to_string())
    }

    #[wasm_bindgen]
    pub fn rename_field(&mut self, role: &str, name: &str) -> Result<(), JsValue> {
        let role: FieldRole = role.parse().map_err(js_error)?;
        self.session.borrow_mut().rename_field(role, name);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn layout(&self) -> String {
        self.session.borrow().layout().class().to_string()
    }

    #[wasm_bindgen]
    pub fn set_layout(&mut self, layout: &str) -> Result<(), JsValue> {
        let layout: Layout = layout.parse().map_err(js_error)?;
        self.session.borrow_mut().set_layout(layout);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn visibility(&self, option: &str) -> Result<bool, JsValue> {
        let option: VisibilityOption = option.parse().map_err(js_error)?;
        Ok(self.session.borrow().visibility().get(option))
    }

    #[wasm_bindgen]
    pub fn set_visibility(&mut self, option: &str, value: bool) -> Result<(), JsValue> {
        let option: VisibilityOption = option.parse().map_err(js_error)?;
        self.session.borrow_mut().set_visibility(option, value);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn side(&self) -> String {
        self.session.borrow().side().class().to_string()
    }

    /// Show a side of the preview. Always restarts the settle animation.
    #[wasm_bindgen]
    pub fn switch_side(&mut self, side: &str) -> Result<(), JsValue> {
        let side: Side = side.parse().map_err(js_error)?;
        self.session.borrow_mut().switch_side(side);
        Ok(())
    }

    /// Changes on every side switch. Use it as the key of the preview node.
    #[wasm_bindgen]
    pub fn render_key(&self) -> f64 {
        self.session.borrow().render_key() as f64
    }

    #[wasm_bindgen]
    pub fn reduce_motion(&self) -> bool {
        self.session.borrow().reduce_motion()
    }

    #[wasm_bindgen]
    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        self.session.borrow_mut().set_reduce_motion(reduce_motion);
    }

    #[wasm_bindgen]
    pub fn show_export(&self) -> bool {
        self.session.borrow().show_export()
    }

    #[wasm_bindgen]
    pub fn toggle_export(&mut self) {
        self.session.borrow_mut().toggle_export();
    }

    #[wasm_bindgen]
    pub fn front_template(&self) -> String {
        self.session.borrow().exports().front.clone()
    }

    #[wasm_bindgen]
    pub fn back_template(&self) -> String {
        self.session.borrow().exports().back.clone()
    }

    #[wasm_bindgen]
    pub fn stylesheet(&self) -> String {
        self.session.borrow().exports().stylesheet.clone()
    }

    /// All three generated blocks as `{front, back, stylesheet}`.
    #[wasm_bindgen]
    pub fn exports_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.borrow().exports())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize exports: {}", e)))
    }

    /// Render the preview of a side as HTML. Without a side, the active one.
    #[wasm_bindgen]
    pub fn preview_html(&self, side: Option<String>) -> Result<String, JsValue> {
        let session = self.session.borrow();
        let card = match side {
            Some(side) => session.preview_side(side.parse().map_err(js_error)?),
            None => session.preview(),
        };
        Ok(card.render().into_string())
    }
}

/// Copy text to the system clipboard. Resolves to whether it worked.
#[wasm_bindgen]
pub async fn copy_text(text: String) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            console::debug_1(&e);
            false
        }
    }
}

/// Milliseconds before a copy button reverts from "Copied".
#[wasm_bindgen]
pub fn copy_ack_ms() -> u32 {
    COPY_ACK_MS
}
