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

//! ankicraft-core: the generation pipeline behind the ankicraft designer.
//!
//! Given a card configuration, this library produces:
//! - The stylesheet for the note type's Styling section
//! - The front and back card templates
//! - A live preview of either face, with sample content
//!
//! [`Session`] holds the designer state and keeps the exports current.

pub mod color;
pub mod design;
pub mod error;
pub mod presets;
pub mod preview;
pub mod session;
pub mod stylesheet;
pub mod template;
pub mod types;

// Re-exports for convenience
pub use color::{Rgb, composite_with_opacity};
pub use design::Design;
pub use error::{ErrorReport, Fallible, fail};
pub use presets::{Preset, default_preset, find_preset, presets};
pub use preview::{PreviewCard, PreviewInput, render_preview};
pub use session::{Exports, Session};
pub use stylesheet::generate_stylesheet;
pub use template::{generate_back_template, generate_front_template};
pub use types::config::CardConfig;
pub use types::fields::{FieldNames, FieldRole};
pub use types::layout::{Layout, Side};
pub use types::visibility::{Visibility, VisibilityOption};
