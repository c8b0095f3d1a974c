use async_trait::async_trait;
use cinesync_models::ListMovie;
use serde::Deserialize;
use tracing::debug;

use crate::definition::ListDefinition;
use crate::error::ListError;
use crate::traits::ImportList;

/// The StevenLu popular-movies feed: a JSON array of `{title, imdb_id}`
/// entries. Items arrive without a TMDB id and rely on the metadata mapper
/// for identity resolution.
pub struct StevenLuImport {
    definition: ListDefinition,
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct StevenLuResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    imdb_id: String,
}

impl StevenLuImport {
    pub fn new(definition: ListDefinition, url: String, client: reqwest::Client) -> Self {
        Self {
            definition,
            url,
            client,
        }
    }

    pub fn parse_response(content: &str) -> Result<Vec<ListMovie>, ListError> {
        let entries: Vec<StevenLuResponse> = serde_json::from_str(content)?;

        Ok(entries
            .into_iter()
            .map(|entry| ListMovie {
                title: entry.title,
                imdb_id: entry.imdb_id,
                ..ListMovie::default()
            })
            .collect())
    }
}

#[async_trait]
impl ImportList for StevenLuImport {
    fn definition(&self) -> &ListDefinition {
        &self.definition
    }

    async fn fetch(&self) -> Result<Vec<ListMovie>, ListError> {
        debug!(list = %self.definition.name, url = %self.url, "fetching stevenlu feed");

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
