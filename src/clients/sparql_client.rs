use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparqlError {
    #[error("Wikidata query {query} failed: {message}")]
    QueryFailed { query: String, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Extracts the trailing path segment of an entity IRI
/// (`http://www.wikidata.org/entity/Q123` gives `Q123`)
pub fn read_id_from_url(url: &str) -> Option<String> {
    url.rsplit('/').next().map(|id| id.to_string())
}

/// Flattens a sparql json response into one map per binding, keeping only the
/// `value` part of each `{type, value}` descriptor. Binding order is preserved.
pub fn parse_bindings(body: &str) -> Result<Vec<HashMap<String, String>>, SparqlError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| SparqlError::MalformedResponse(e.to_string()))?;
    let bindings = json["results"]["bindings"]
        .as_array()
        .ok_or_else(|| SparqlError::MalformedResponse("missing results.bindings".to_string()))?;

    Ok(bindings
        .iter()
        .map(|binding| {
            binding
                .as_object()
                .map(|entries| {
                    entries
                        .iter()
                        .map(|(k, v)| (k.clone(), v["value"].as_str().unwrap_or("").to_string()))
                        .collect()
                })
                .unwrap_or_default()
        })
        .collect())
}

pub struct SparqlClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SparqlClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
        }
    }

    /// Full query-string url for a sparql query, with `format=json` and the
    /// query percent-encoded
    pub fn query_url(&self, query: &str) -> Result<reqwest::Url, SparqlError> {
        reqwest::Url::parse_with_params(&self.endpoint, &[("format", "json"), ("query", query)])
            .map_err(|e| SparqlError::QueryFailed {
                query: query.to_string(),
                message: e.to_string(),
            })
    }

    /// Single blocking GET, no retry. Error statuses and transport failures
    /// surface as `QueryFailed` with the attempted query.
    pub fn query(&self, query: &str) -> Result<Vec<HashMap<String, String>>, SparqlError> {
        log::debug!("Sparql query: {}", query);
        let url = self.query_url(query)?;
        let response = self
            .client
            .get(url)
            .header("Accept", "application/sparql-results+json")
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|mut response| response.text())
            .map_err(|e| SparqlError::QueryFailed {
                query: query.to_string(),
                message: e.to_string(),
            })?;
        log::trace!("Query response: {:?}", response);
        parse_bindings(&response)
    }
}
