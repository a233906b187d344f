use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

use crate::error::{LoaderError, Result};
use crate::parser::parse_board_str;
use crate::types::BoardData;

/// Loads big board CSV files from disk or over HTTP
pub struct BoardLoader {
    client: Client,
}

impl BoardLoader {
    /// Create a new board loader
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("bigboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Load a board, degrading to an empty board on any failure
    ///
    /// Failures are logged and never retried. Callers render the empty
    /// result as "no prospects found".
    pub async fn load(&self, source: &str) -> BoardData {
        match self.try_load(source).await {
            Ok(board) => board,
            Err(e) => {
                error!("Failed to load board {}: {}", source, e);
                BoardData::new(source.to_string())
            }
        }
    }

    /// Load and parse a board, surfacing the failure
    pub async fn try_load(&self, source: &str) -> Result<BoardData> {
        info!("Loading board from: {}", source);

        let text = self.fetch_text(source).await?;
        info!("Fetched board text ({} bytes)", text.len());

        let parsed = parse_board_str(source, &text)?;
        info!("Parsed {} prospects from {}", parsed.records.len(), source);

        Ok(BoardData::with_records(source.to_string(), parsed.headers, parsed.records))
    }

    /// Fetch the raw CSV text for a path or URL
    async fn fetch_text(&self, source: &str) -> Result<String> {
        if is_remote(source) {
            let response = self.client.get(source).send().await?;

            if !response.status().is_success() {
                return Err(LoaderError::Status {
                    url: source.to_string(),
                    status: response.status(),
                });
            }

            Ok(response.text().await?)
        } else {
            tokio::fs::read_to_string(source)
                .await
                .map_err(|e| LoaderError::Io { path: source.to_string(), source: e })
        }
    }
}

/// Whether a board source should be fetched over HTTP
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_remote_detection() {
        assert!(is_remote("https://example.com/boards/2025.csv"));
        assert!(is_remote("http://localhost:8000/2024.csv"));
        assert!(!is_remote("data/boards/2025.csv"));
        assert!(!is_remote("/srv/bigboard/2023.csv"));
    }

    #[tokio::test]
    async fn test_load_local_board() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Role,Pick").unwrap();
        writeln!(file, "Cooper Flagg,Wing,1").unwrap();
        writeln!(file, "Tre Johnson,Guard").unwrap();

        let loader = BoardLoader::new().unwrap();
        let source = file.path().to_string_lossy().to_string();
        let board = loader.load(&source).await;

        assert_eq!(board.len(), 2);
        assert_eq!(board.headers, vec!["Name", "Role", "Pick"]);
        assert_eq!(board.records[1].get("Pick"), None);
    }

    #[test]
    fn test_quoted_fields_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Pre-Draft Team,Height").unwrap();
        writeln!(file, "\"Bailey, Ace\",Rutgers,\"6'10\"\"\"").unwrap();

        let loader = BoardLoader::new().unwrap();
        let source = file.path().to_string_lossy().to_string();
        let board = tokio_test::block_on(loader.try_load(&source)).unwrap();

        assert_eq!(board.records[0].get("Name"), Some("Bailey, Ace"));
        assert_eq!(board.records[0].get("Height"), Some("6'10\""));
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_board() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.csv").to_string_lossy().to_string();

        let loader = BoardLoader::new().unwrap();
        let board = loader.load(&source).await;
        assert!(board.is_empty());
        assert_eq!(board.source, source);

        let err = loader.try_load(&source).await.unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_remote_board() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boards/2025.csv"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("Name,Role,Pick\nCooper Flagg,Wing,1\nDylan Harper,Guard,2\n"),
            )
            .mount(&server)
            .await;

        let loader = BoardLoader::new().unwrap();
        let source = format!("{}/boards/2025.csv", server.uri());
        let board = loader.try_load(&source).await.unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board.source, source);
        assert_eq!(board.headers, vec!["Name", "Role", "Pick"]);
        assert_eq!(board.records[1].get("Name"), Some("Dylan Harper"));
    }

    #[tokio::test]
    async fn test_remote_error_status_yields_empty_board() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boards/1999.csv"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let loader = BoardLoader::new().unwrap();
        let source = format!("{}/boards/1999.csv", server.uri());

        let err = loader.try_load(&source).await.unwrap_err();
        match err {
            LoaderError::Status { url, status } => {
                assert_eq!(url, source);
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("expected status error, got {other:?}"),
        }

        let board = loader.load(&source).await;
        assert!(board.is_empty());
        assert!(board.headers.is_empty());
        assert_eq!(board.source, source);
    }
}
