use std::{env, time::Duration};

use async_trait::async_trait;
use log::{debug, warn};

use crate::food::{FoodItem, SearchResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait FoodLookup: Send + Sync {
    async fn search_foods(&self, query: &str, max_results: usize) -> Result<Vec<FoodItem>>;
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `USDA_API_KEY`, `USDA_BASE_URL` and `USDA_TIMEOUT_SECS` from the
    /// process environment. Callers load `.env` beforehand.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Returns `None` when no API key is set or the key is blank.
    ///
    /// A timeout that is not a positive whole number of seconds is ignored
    /// with a warning, and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup("USDA_API_KEY").filter(|key| !key.trim().is_empty())?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup("USDA_BASE_URL").filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url.trim().to_owned();
        }
        if let Some(raw) = lookup("USDA_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid value {:?} for USDA_TIMEOUT_SECS", raw),
            }
        }
        Some(config)
    }
}

pub struct ClientImpl {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ClientImpl {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|_| Error::CommunicationError)?;
        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/foods/search", self.config.base_url.trim_end_matches('/'))
    }
}

pub fn create(config: ClientConfig) -> Result<Box<dyn FoodLookup>> {
    Ok(Box::new(ClientImpl::new(config)?))
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    if resp.status().is_client_error() {
        Err(Error::RequestError)
    } else if resp.status().is_server_error() {
        Err(Error::InternalServerError)
    } else {
        Ok(resp)
    }
}

#[async_trait]
impl FoodLookup for ClientImpl {
    async fn search_foods(&self, query: &str, max_results: usize) -> Result<Vec<FoodItem>> {
        if query.trim().is_empty() || max_results == 0 {
            return Err(Error::RequestError);
        }

        debug!("Searching FoodData Central for {:?}", query);
        let response: SearchResponse = self
            .client
            .get(self.search_url())
            .query(&[
                ("query", query),
                ("pageSize", &max_results.to_string()),
                ("api_key", &self.config.api_key),
            ])
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?
            .json()
            .await
            .map_err(|_| Error::ResponseError)?;

        Ok(response.into_items(max_results))
    }
}
