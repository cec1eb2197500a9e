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

use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::create_dir_all;
use std::fs::write;
use std::path::PathBuf;

use ankicraft_core::Exports;
use ankicraft_core::Fallible;
use ankicraft_core::Session;
use clap::ValueEnum;

use crate::clipboard::copy_to_clipboard;

/// One of the generated text blocks.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ExportPart {
    /// The front template.
    Front,
    /// The back template.
    Back,
    /// The stylesheet.
    Css,
}

impl ExportPart {
    pub fn text(self, exports: &Exports) -> &str {
        match self {
            ExportPart::Front => &exports.front,
            ExportPart::Back => &exports.back,
            ExportPart::Css => &exports.stylesheet,
        }
    }

    /// The file the part is written to by `export --output`.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportPart::Front => "front.html",
            ExportPart::Back => "back.html",
            ExportPart::Css => "style.css",
        }
    }
}

impl Display for ExportPart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportPart::Front => write!(f, "front"),
            ExportPart::Back => write!(f, "back"),
            ExportPart::Css => write!(f, "css"),
        }
    }
}

const PARTS: [ExportPart; 3] = [ExportPart::Front, ExportPart::Back, ExportPart::Css];

pub fn export_design(
    session: &Session,
    output: Option<String>,
    copy: Option<ExportPart>,
) -> Fallible<()> {
    let exports = session.exports();
    match output {
        Some(directory) => {
            let directory = PathBuf::from(directory);
            create_dir_all(&directory)?;
            for part in PARTS {
                let path = directory.join(part.file_name());
                write(&path, part.text(exports))?;
                log::debug!("Wrote {}", path.display());
            }
        }
        None => {
            let blocks: Vec<&str> = PARTS.iter().map(|part| part.text(exports)).collect();
            println!("{}", blocks.join("\n\n"));
        }
    }
    if let Some(part) = copy {
        if copy_to_clipboard(part.text(exports)) {
            eprintln!("Copied {part} to the clipboard.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use ankicraft_core::Layout;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_export_to_directory() -> Fallible<()> {
        let dir = tempdir()?;
        let output = dir.path().join("out");
        let mut session = Session::default();
        session.select_preset("night");
        session.set_layout(Layout::Left);
        export_design(&session, Some(output.display().to_string()), None)?;

        let front = read_to_string(output.join("front.html"))?;
        let back = read_to_string(output.join("back.html"))?;
        let css = read_to_string(output.join("style.css"))?;
        assert_eq!(front, session.exports().front);
        assert_eq!(back, session.exports().back);
        assert_eq!(css, session.exports().stylesheet);
        assert!(front.contains(r#"<div class="card left front">"#));
        assert!(css.contains("--bg:rgba(11,18,32,0.98);"));
        Ok(())
    }

    #[test]
    fn test_export_to_stdout() -> Fallible<()> {
        export_design(&Session::default(), None, None)
    }

    #[test]
    fn test_parts() {
        let session = Session::default();
        let exports = session.exports();
        assert!(ExportPart::Front.text(exports).starts_with("<!-- Front Template -->"));
        assert!(ExportPart::Back.text(exports).starts_with("<!-- Back Template -->"));
        assert!(ExportPart::Css.text(exports).starts_with("/* Styling for Anki"));
        assert_eq!(ExportPart::Css.to_string(), "css");
    }
}
