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

use ankicraft_core::Session;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::MediaQueryList;
use web_sys::MediaQueryListEvent;
use web_sys::console;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Keeps a session's reduced-motion flag in sync with the browser
/// preference. The `change` listener lives as long as the watcher.
pub struct MotionWatcher {
    query: MediaQueryList,
    listener: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MotionWatcher {
    /// Returns `None` when there is no window or `matchMedia` is unsupported.
    pub fn attach(session: Rc<RefCell<Session>>, on_change: Option<js_sys::Function>) -> Option<Self> {
        let query = web_sys::window()?
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()?;
        session.borrow_mut().set_reduce_motion(query.matches());

        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| {
                let reduce = event.matches();
                session.borrow_mut().set_reduce_motion(reduce);
                if let Some(callback) = &on_change {
                    if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_bool(reduce)) {
                        console::error_1(&e);
                    }
                }
            },
        );
        if let Err(e) =
            query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        {
            console::error_1(&e);
            return None;
        }
        Some(Self { query, listener })
    }
}

impl Drop for MotionWatcher {
    fn drop(&mut self) {
        if let Err(e) = self
            .query
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref())
        {
            console::error_1(&e);
        }
    }
}
