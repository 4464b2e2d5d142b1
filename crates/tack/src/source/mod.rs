//! Ticket sources for the board.
//!
//! A [`TicketSource`] supplies the one-shot `{tickets, users}` feed the board
//! is built from. Two backends exist: [`HttpSource`] fetches the document
//! from the board API, and [`FileSource`] reads a previously saved document
//! from disk. Both decode tolerantly via `tack-feed`: malformed records are
//! logged and skipped, and a missing or malformed `tickets`/`users` field
//! degrades to an empty sequence rather than an error.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use tack_feed::Document;

use crate::domain::{Feed, Ticket, User};
use crate::error::Result;

/// The board API endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Environment variable overriding the default endpoint.
pub const ENDPOINT_ENV_VAR: &str = "TACK_ENDPOINT";

/// Name of the document field holding tickets.
const TICKETS_FIELD: &str = "tickets";

/// Name of the document field holding users.
const USERS_FIELD: &str = "users";

/// A provider of the board feed.
///
/// Implementations must be `Send + Sync` so a source can be held behind
/// `Box<dyn TicketSource>` and used from async contexts.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Load the feed.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be obtained or is not a
    /// JSON object at all. Problems below the document root (missing fields,
    /// malformed records) are logged and absorbed instead.
    async fn load(&self) -> Result<Feed>;

    /// Human-readable description of where the feed comes from, for logs
    /// and error messages.
    fn describe(&self) -> String;
}

/// Decode a feed document into a [`Feed`], logging every warning.
///
/// This is the defined recovery policy for degraded payloads: whatever
/// decodes cleanly is kept, everything else is reported and dropped.
fn feed_from_document(doc: &Document) -> Feed {
    let tickets = doc.records::<Ticket>(TICKETS_FIELD);
    let users = doc.records::<User>(USERS_FIELD);

    for warning in tickets.warnings.iter().chain(users.warnings.iter()) {
        tracing::warn!("{}", warning.description());
    }

    Feed {
        tickets: tickets.records,
        users: users.records,
    }
}

/// Ticket source backed by the board HTTP API.
pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a source using the configured endpoint: an explicit override
    /// if given, else the `TACK_ENDPOINT` environment variable, else the
    /// built-in default.
    #[must_use]
    pub fn from_config(override_endpoint: Option<&str>) -> Self {
        let endpoint = override_endpoint
            .map(str::to_string)
            .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// The endpoint this source fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw document body without decoding it into a feed.
    ///
    /// Used by the `fetch` command to save the document for later offline
    /// use; the body is still validated as a parseable document.
    pub async fn fetch_raw(&self) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching board feed");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Document::parse(&body)?;
        Ok(body)
    }
}

#[async_trait]
impl TicketSource for HttpSource {
    async fn load(&self) -> Result<Feed> {
        let body = self.fetch_raw().await?;
        let doc = Document::parse(&body)?;
        Ok(feed_from_document(&doc))
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Ticket source backed by a saved feed document on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TicketSource for FileSource {
    async fn load(&self) -> Result<Feed> {
        tracing::debug!(path = %self.path.display(), "Reading board feed");
        let body = tokio::fs::read_to_string(&self.path).await?;
        let doc = Document::parse(&body)?;
        Ok(feed_from_document(&doc))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Create a source from the CLI's source selection: a file if one was
/// given, otherwise the configured HTTP endpoint.
#[must_use]
pub fn create_source(file: Option<&Path>, endpoint: Option<&str>) -> Box<dyn TicketSource> {
    match file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::from_config(endpoint)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_from_document_decodes_both_fields() {
        let doc = Document::parse(
            r#"{
                "tickets": [
                    {"id": "CAM-1", "title": "t", "status": "Todo", "priority": 1, "userId": "u1", "tag": []}
                ],
                "users": [{"id": "u1", "name": "Alice"}]
            }"#,
        )
        .unwrap();

        let feed = feed_from_document(&doc);
        assert_eq!(feed.tickets.len(), 1);
        assert_eq!(feed.users.len(), 1);
        assert_eq!(feed.users[0].name, "Alice");
    }

    #[test]
    fn test_feed_from_document_degrades_to_empty_sequences() {
        let doc = Document::parse(r#"{"tickets": "nope"}"#).unwrap();

        let feed = feed_from_document(&doc);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_http_source_endpoint_precedence() {
        // An explicit override always wins; the built-in default applies
        // when nothing else is configured. The env var path is not covered
        // here since mutating the environment is process-global.
        let explicit = HttpSource::from_config(Some("http://localhost:9999/feed"));
        assert_eq!(explicit.endpoint(), "http://localhost:9999/feed");

        if std::env::var(ENDPOINT_ENV_VAR).is_err() {
            let fallback = HttpSource::from_config(None);
            assert_eq!(fallback.endpoint(), DEFAULT_ENDPOINT);
        }
    }

    #[test]
    fn test_create_source_prefers_file() {
        let source = create_source(Some(Path::new("board.json")), None);
        assert_eq!(source.describe(), "board.json");

        let source = create_source(None, Some("http://example.test/feed"));
        assert_eq!(source.describe(), "http://example.test/feed");
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_an_error() {
        let source = FileSource::new("/nonexistent/board.json");
        let result = source.load().await;
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
