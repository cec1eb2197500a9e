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

use ankicraft_core::Preset;
use ankicraft_core::presets;

fn format_presets(presets: &[Preset]) -> String {
    let width = presets.iter().map(|p| p.id.len()).max().unwrap_or(0);
    presets
        .iter()
        .map(|preset| format!("{:<width$}  {}", preset.id, preset.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_presets() {
    println!("{}", format_presets(presets()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_presets() {
        assert_eq!(
            format_presets(presets()),
            "clean   Clean\nnight   Night\npastel  Pastel"
        );
    }
}
