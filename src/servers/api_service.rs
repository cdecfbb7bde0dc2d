//! `mx-api-service` server: EGLD economics tools backed by the MultiversX API.
//!
//! Every tool issues `GET {base}/economics?fields=<field>` and answers with
//! `{ "<field>": value }` as pretty-printed JSON text. HTTP-layer failures
//! are reported as `API error: ...` content rather than request errors.

use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

use crate::catalog::{
    helpers::{empty_object_schema, handler_fn, with_tool},
    CapabilityCatalog, CatalogError, ContentItem, HandlerError, HandlerResult,
};

/// Server identifier
pub const SERVER_NAME: &str = "mx-api-service";
/// Server version
pub const SERVER_VERSION: &str = "0.0.1";
/// Public MultiversX API
pub const DEFAULT_API_URL: &str = "https://api.multiversx.com";

/// A single field of the `/economics` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomicsField {
    Price,
    TotalSupply,
    CirculatingSupply,
    MarketCap,
    Staked,
}

impl EconomicsField {
    /// Every field, in the order the tools are advertised
    pub const ALL: [EconomicsField; 5] = [
        EconomicsField::Price,
        EconomicsField::TotalSupply,
        EconomicsField::CirculatingSupply,
        EconomicsField::MarketCap,
        EconomicsField::Staked,
    ];

    /// Name of the field in the API query and response
    pub fn as_str(self) -> &'static str {
        match self {
            EconomicsField::Price => "price",
            EconomicsField::TotalSupply => "totalSupply",
            EconomicsField::CirculatingSupply => "circulatingSupply",
            EconomicsField::MarketCap => "marketCap",
            EconomicsField::Staked => "staked",
        }
    }

    /// Name of the tool exposing this field
    pub fn tool_name(self) -> &'static str {
        match self {
            EconomicsField::Price => "get_egld_price",
            EconomicsField::TotalSupply => "get_egld_total_supply",
            EconomicsField::CirculatingSupply => "get_egld_circulating_supply",
            EconomicsField::MarketCap => "get_egld_market_cap",
            EconomicsField::Staked => "get_egld_staked",
        }
    }

    fn description(self) -> &'static str {
        match self {
            EconomicsField::Price => "Retrieves the price of EGLD",
            EconomicsField::TotalSupply => "Retrieves the total supply of EGLD",
            EconomicsField::CirculatingSupply => "Retrieves the circulating supply of EGLD",
            EconomicsField::MarketCap => "Retrieves the market cap of EGLD",
            EconomicsField::Staked => "Retrieves the staked amount of EGLD",
        }
    }
}

/// HTTP client for the `/economics` endpoint
#[derive(Debug, Clone)]
pub struct EconomicsClient {
    http: Client,
    base_url: String,
}

impl EconomicsClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches a single economics field.
    ///
    /// Returns `Ok(None)` when the API answers without that field.
    pub async fn fetch(&self, field: EconomicsField) -> Result<Option<Value>, HandlerError> {
        let url = format!("{}/economics", self.base_url);
        debug!(%url, field = field.as_str(), "querying economics");

        let response = self
            .http
            .get(&url)
            .query(&[("fields", field.as_str())])
            .send()
            .await
            .map_err(upstream)?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the API's own explanation when the error body carries one.
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            return Err(HandlerError::Upstream(message));
        }

        let mut body: Value = response.json().await.map_err(upstream)?;
        Ok(body.get_mut(field.as_str()).map(Value::take))
    }
}

fn upstream(err: reqwest::Error) -> HandlerError {
    HandlerError::Upstream(err.to_string())
}

/// Runs one economics tool: fetch the field and render it as JSON text.
async fn economics_tool(client: EconomicsClient, field: EconomicsField) -> HandlerResult {
    let mut payload = Map::new();
    if let Some(value) = client.fetch(field).await? {
        payload.insert(field.as_str().to_string(), value);
    }

    let text = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
    Ok(vec![ContentItem::text(text)])
}

/// Registers the five economics tools.
pub fn register(
    catalog: &mut CapabilityCatalog,
    client: EconomicsClient,
) -> Result<(), CatalogError> {
    for field in EconomicsField::ALL {
        let client = client.clone();
        with_tool(
            catalog,
            field.tool_name(),
            field.description(),
            empty_object_schema(),
            handler_fn(move |_params| economics_tool(client.clone(), field)),
        )?;
    }
    Ok(())
}
