use async_trait::async_trait;
use cinesync_models::ListMovie;
use serde::Deserialize;
use tracing::debug;

use crate::definition::ListDefinition;
use crate::error::ListError;
use crate::traits::ImportList;

/// A Radarr-compatible list endpoint: a JSON array of movie resources of
/// which only the TMDB id is taken.
pub struct RadarrListImport {
    definition: ListDefinition,
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct MovieResultResource {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RadarrErrors {
    errors: Vec<RadarrErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct RadarrErrorEntry {
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

impl RadarrListImport {
    pub fn new(definition: ListDefinition, url: String, client: reqwest::Client) -> Self {
        Self {
            definition,
            url,
            client,
        }
    }

    /// Parse a response body. An error envelope takes precedence over the
    /// movie array: some endpoints answer 200 with `{"errors": [...]}`.
    pub fn parse_response(content: &str) -> Result<Vec<ListMovie>, ListError> {
        if let Ok(envelope) = serde_json::from_str::<RadarrErrors>(content) {
            if !envelope.errors.is_empty() {
                let message = envelope
                    .errors
                    .into_iter()
                    .filter_map(|e| e.error_message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ListError::Remote(message));
            }
        }

        let resources: Vec<MovieResultResource> = serde_json::from_str(content)?;

        Ok(resources
            .into_iter()
            .map(|resource| ListMovie {
                tmdb_id: resource.id,
                ..ListMovie::default()
            })
            .collect())
    }
}

#[async_trait]
impl ImportList for RadarrListImport {
    fn definition(&self) -> &ListDefinition {
        &self.definition
    }

    async fn fetch(&self) -> Result<Vec<ListMovie>, ListError> {
        debug!(list = %self.definition.name, url = %self.url, "fetching radarr list");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let content = response.text().await?;
        Self::parse_response(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_movie_resources() {
        let movies =
            RadarrListImport::parse_response(r#"[{"id": 603}, {"id": 550}]"#).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].tmdb_id, 603);
        assert_eq!(movies[1].tmdb_id, 550);
        assert!(movies[0].imdb_id.is_empty());
    }

    #[test]
    fn empty_array_yields_no_movies() {
        let movies = RadarrListImport::parse_response("[]").unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn error_envelope_is_a_remote_error() {
        let result = RadarrListImport::parse_response(
            r#"{"errors": [{"errorMessage": "list not found"}]}"#,
        );
        match result {
            Err(ListError::Remote(message)) => assert!(message.contains("list not found")),
            other => panic!("expected remote error, got {:?}", other.map(|m| m.len())),
        }
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let result = RadarrListImport::parse_response("not json");
        assert!(matches!(result, Err(ListError::Parse(_))));
    }
}
