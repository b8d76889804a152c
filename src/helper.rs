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

use std::fs::create_dir_all;
use std::fs::write;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;
use crate::loader::DEFAULT_DB_FILE;

/// A small card database: one easy card, one extreme card, and one card
/// whose level is not a known value.
pub const TEST_DB: &str = r#"{
  "version": 2,
  "items": [
    {
      "id": "white-1",
      "legacy_id": 1,
      "level": "white",
      "title_ua": "Обійми",
      "description_ua": "{Boy} обіймає {girl}",
      "category": "action",
      "mood": "romantic",
      "consent_required": false,
      "images": ["/img/white/1.jpg"],
      "time_limit_minutes": null,
      "tags": ["ніжність"]
    },
    {
      "id": "red-1",
      "legacy_id": 1,
      "level": "red",
      "title_ua": "Секрет",
      "description_ua": "{girl} розповідає {boy} секрет",
      "category": "question",
      "mood": "deep",
      "consent_required": true,
      "images": [],
      "time_limit_minutes": 8,
      "tags": []
    },
    {
      "id": "odd-1",
      "level": "purple",
      "title_ua": "Дивна",
      "description_ua": "Ніколи не показується",
      "category": "action",
      "mood": "romantic"
    }
  ]
}"#;

/// Create a temporary game directory with the test database and an image.
pub fn create_test_directory() -> Fallible<TempDir> {
    let dir = tempdir()?;
    write(dir.path().join(DEFAULT_DB_FILE), TEST_DB)?;
    let images = dir.path().join("img").join("white");
    create_dir_all(&images)?;
    write(images.join("1.jpg"), b"\xff\xd8\xff\xe0")?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_directory() -> Fallible<()> {
        let dir = create_test_directory()?;
        assert!(dir.path().join(DEFAULT_DB_FILE).exists());
        assert!(dir.path().join("img/white/1.jpg").exists());
        Ok(())
    }
}
