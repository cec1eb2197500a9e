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

use std::fs::read_to_string;

use ankicraft_core::Design;
use ankicraft_core::ErrorReport;
use ankicraft_core::Fallible;
use ankicraft_core::Session;

pub mod design;
pub mod export;
pub mod presets;

/// Build the session a command starts from: the design file if there is
/// one, with `preset` taking precedence over the file's own preset.
pub fn initial_session(
    design_path: Option<String>,
    preset: Option<String>,
    reduce_motion: bool,
) -> Fallible<Session> {
    let mut design = match design_path {
        Some(path) => {
            let text = read_to_string(&path).map_err(|e| {
                ErrorReport::new(format!("failed to read design file {path}: {e}"))
            })?;
            log::debug!("Loaded design file {path}");
            Design::parse(&text)?
        }
        None => Design::default(),
    };
    if preset.is_some() {
        design.preset = preset;
    }
    design.into_session(reduce_motion)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use ankicraft_core::Layout;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_default_session() -> Fallible<()> {
        let session = initial_session(None, None, false)?;
        assert_eq!(session.config().background, "#ffffff");
        Ok(())
    }

    #[test]
    fn test_preset_overrides_design_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("design.toml");
        write(&path, "preset = \"night\"\nlayout = \"left\"\n")?;
        let path = path.display().to_string();

        let session = initial_session(Some(path.clone()), None, false)?;
        assert_eq!(session.config().background, "#0b1220");
        assert_eq!(session.layout(), Layout::Left);

        let session = initial_session(Some(path), Some("pastel".to_string()), false)?;
        assert_eq!(session.config().background, "#fff7ed");
        assert_eq!(session.layout(), Layout::Left);
        Ok(())
    }

    #[test]
    fn test_missing_design_file() {
        let result = initial_session(Some("./derpherp.toml".to_string()), None, false);
        let err = result.err().unwrap();
        assert!(
            err.to_string()
                .starts_with("error: failed to read design file ./derpherp.toml")
        );
    }

    #[test]
    fn test_unknown_preset() {
        let result = initial_session(None, Some("neon".to_string()), false);
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: unknown preset: neon"
        );
    }
}
