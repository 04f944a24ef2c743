use crate::{config::FetchConfig, errors::DocFetchError};
use tracing::info;

/// The raw text of a fetched resource.
#[derive(Debug, Clone)]
pub struct RemoteDocument {
    pub url: String,
    pub body: String,
}

/// Issues the single GET request of a run.
///
/// No retries and no timeout: the transport defaults apply.
pub struct DocumentFetcher {
    client: reqwest::Client,
}

impl DocumentFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, DocFetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<RemoteDocument, DocFetchError> {
        info!("Fetching document from: {url}");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DocFetchError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await?;
        info!("Fetched {} bytes from {url}", body.len());
        Ok(RemoteDocument {
            url: url.to_string(),
            body,
        })
    }
}
