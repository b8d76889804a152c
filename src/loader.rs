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
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardDatabase;

/// The file name of the card database inside a game directory.
pub const DEFAULT_DB_FILE: &str = "zagrava_db_v1.json";

/// Where the card database is read from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CardSource {
    Url(String),
    File(PathBuf),
}

impl CardSource {
    /// Interpret `value` as a URL if it has an HTTP scheme, otherwise as a
    /// path relative to `directory`.
    pub fn parse(value: &str, directory: &Path) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            CardSource::Url(value.to_string())
        } else {
            CardSource::File(directory.join(value))
        }
    }
}

impl Display for CardSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSource::Url(url) => write!(f, "{url}"),
            CardSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch the cards. Any failure is logged and yields no cards, so callers
/// see a failed load the same way as an empty database.
pub async fn load(source: &CardSource) -> Vec<Card> {
    match load_strict(source).await {
        Ok(cards) => cards,
        Err(e) => {
            log::error!("Failed to load cards from {source}: {e}");
            Vec::new()
        }
    }
}

/// Fetch the cards, reporting failures. Records that cannot be read as
/// cards are logged and skipped.
pub async fn load_strict(source: &CardSource) -> Fallible<Vec<Card>> {
    let start = Instant::now();
    let (cards, rejected) = fetch(source).await?.cards();
    for reason in &rejected {
        log::warn!("Skipping card {reason}");
    }
    let duration = start.elapsed().as_millis();
    log::debug!("Loaded {} cards in {duration}ms.", cards.len());
    Ok(cards)
}

/// Fetch and parse the database document without reading the records.
pub async fn fetch(source: &CardSource) -> Fallible<CardDatabase> {
    log::debug!("Fetching {source}");
    let text = match source {
        CardSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await?;
            let status = response.status();
            if !status.is_success() {
                return fail(format!("server responded with {status}."));
            }
            response.text().await?
        }
        CardSource::File(path) => tokio::fs::read_to_string(path).await?,
    };
    let db: CardDatabase = serde_json::from_str(&text)?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tempfile::tempdir;
    use tokio::net::TcpListener;
    use tokio::spawn;

    use super::*;

    const DB: &str = r#"{
        "version": 2,
        "items": [
            {"id": "1", "title_ua": "Один", "level": "easy", "category": "action", "mood": "deep"},
            {"id": "2", "title_ua": "Два", "level": "red", "category": "game", "mood": "playful"}
        ]
    }"#;

    async fn serve_db() -> Fallible<u16> {
        let port = portpicker::pick_unused_port().expect("no free port");
        let app = Router::new()
            .route("/zagrava_db_v1.json", get(|| async { DB }))
            .route(
                "/broken.json",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "nope") }),
            )
            .route("/garbage.json", get(|| async { "{ not json" }));
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        spawn(async move { axum::serve(listener, app).await });
        Ok(port)
    }

    #[test]
    fn test_parse_source() {
        let dir = PathBuf::from("/games/zagrava");
        assert_eq!(
            CardSource::parse("https://example.com/db.json", &dir),
            CardSource::Url("https://example.com/db.json".to_string())
        );
        assert_eq!(
            CardSource::parse(DEFAULT_DB_FILE, &dir),
            CardSource::File(dir.join(DEFAULT_DB_FILE))
        );
    }

    #[tokio::test]
    async fn test_load_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_DB_FILE);
        std::fs::write(&path, DB)?;
        let cards = load(&CardSource::File(path)).await;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id(), "1");
        assert_eq!(cards[1].id(), "2");
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let source = CardSource::File(PathBuf::from("./derpherp/db.json"));
        assert!(load(&source).await.is_empty());
        assert!(load_strict(&source).await.is_err());
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_empty() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_DB_FILE);
        std::fs::write(&path, "[1, 2, 3]")?;
        assert!(load(&CardSource::File(path)).await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_without_items_is_empty() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_DB_FILE);
        std::fs::write(&path, "{}")?;
        let cards = load_strict(&CardSource::File(path)).await?;
        assert!(cards.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_skips_bad_records() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(DEFAULT_DB_FILE);
        std::fs::write(
            &path,
            r#"{
                "items": [
                    {"id": "1", "title_ua": "Один", "level": "easy", "category": "action", "mood": "deep"},
                    {"id": "2", "level": "easy", "category": "action", "mood": "deep", "consent_required": null},
                    {"title_ua": "Без id", "level": "easy"}
                ]
            }"#,
        )?;
        let cards = load(&CardSource::File(path)).await;
        let ids: Vec<&str> = cards.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(!cards[1].consent_required());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_url() -> Fallible<()> {
        let port = serve_db().await?;
        let source = CardSource::Url(format!("http://127.0.0.1:{port}/zagrava_db_v1.json"));
        let cards = load(&source).await;
        assert_eq!(cards.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_url_failures_are_empty() -> Fallible<()> {
        let port = serve_db().await?;
        for path in ["broken.json", "garbage.json", "missing.json"] {
            let source = CardSource::Url(format!("http://127.0.0.1:{port}/{path}"));
            assert!(load(&source).await.is_empty());
            assert!(load_strict(&source).await.is_err());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_load_unreachable_url_is_empty() {
        let port = portpicker::pick_unused_port().expect("no free port");
        let source = CardSource::Url(format!("http://127.0.0.1:{port}/db.json"));
        assert!(load(&source).await.is_empty());
    }
}
