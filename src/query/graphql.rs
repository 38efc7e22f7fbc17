//! GraphQL source implementation.
//!
//! Speaks plain GraphQL-over-HTTP: every operation is a `POST` of
//! `{"query": ..., "variables": ...}` to a single endpoint, answered by an
//! envelope of `{"data": ..., "errors": [...]}`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::query::{PokemonDetail, PokemonSource, PokemonSummary, QueryError};

// ============================================================================
// Query Documents
// ============================================================================

pub const LIST_POKEMONS: &str = "\
query pokemons($first: Int!) {
  pokemons(first: $first) {
    id
    number
    name
    image
    types
  }
}";

pub const GET_POKEMON: &str = "\
query pokemon($id: String, $name: String) {
  pokemon(id: $id, name: $name) {
    id
    number
    name
    weight {
      minimum
      maximum
    }
    height {
      minimum
      maximum
    }
    classification
    types
    resistant
    weaknesses
    fleeRate
    maxCP
    maxHP
    image
  }
}";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Serialize, Debug)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize, Debug)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize, Debug)]
struct PokemonsData {
    pokemons: Option<Vec<PokemonSummary>>,
}

#[derive(Deserialize, Debug)]
struct PokemonData {
    pokemon: Option<PokemonDetail>,
}

// ============================================================================
// Source Implementation
// ============================================================================

/// Pokédex backend reached over GraphQL.
pub struct GraphQlSource {
    endpoint: String,
    list_size: u32,
    client: reqwest::Client,
}

impl GraphQlSource {
    /// Creates a new GraphQL source.
    ///
    /// # Arguments
    /// * `endpoint` - Full URL the queries are POSTed to
    /// * `list_size` - How many Pokémon the list query asks for
    /// * `timeout` - Upper bound for each request, connect included
    pub fn new(endpoint: String, list_size: u32, timeout: Duration) -> Result<Self, QueryError> {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(QueryError::Config(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Config(format!("HTTP client setup failed: {e}")))?;
        Ok(Self {
            endpoint,
            list_size,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one operation and unwraps the GraphQL envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, QueryError> {
        let request = GraphQlRequest { query, variables };
        debug!("GraphQL request to {}: {}", self.endpoint, request.variables);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        debug!("GraphQL response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GraphQL endpoint error: {} - {}", status, err_body);
            return Err(QueryError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;
        let envelope: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|e| QueryError::Parse(e.to_string()))?;

        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
            warn!("GraphQL errors: {:?}", messages);
            return Err(QueryError::GraphQl(messages));
        }

        envelope
            .data
            .ok_or_else(|| QueryError::Parse("response carried neither data nor errors".to_string()))
    }
}

#[async_trait]
impl PokemonSource for GraphQlSource {
    fn name(&self) -> &str {
        "GraphQL"
    }

    async fn list_pokemons(&self) -> Result<Vec<PokemonSummary>, QueryError> {
        let data: PokemonsData = self
            .execute(LIST_POKEMONS, json!({ "first": self.list_size }))
            .await?;
        let pokemons = data.pokemons.unwrap_or_default();
        info!("Fetched {} Pokémon", pokemons.len());
        Ok(pokemons)
    }

    async fn get_pokemon(&self, name: &str) -> Result<Option<PokemonDetail>, QueryError> {
        let data: PokemonData = self.execute(GET_POKEMON, json!({ "name": name })).await?;
        match &data.pokemon {
            Some(p) => info!("Fetched details for {} (#{})", p.name, p.number),
            None => info!("No Pokémon named {:?}", name),
        }
        Ok(data.pokemon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_http_endpoint() {
        let result = GraphQlSource::new("ftp://example.com".to_string(), 10, Duration::from_secs(1));
        assert!(matches!(result, Err(QueryError::Config(_))));
    }

    #[test]
    fn test_envelope_with_errors_and_null_data_parses() {
        let body = r#"{"data":null,"errors":[{"message":"boom","locations":[]}]}"#;
        let envelope: GraphQlResponse<PokemonData> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors[0].message, "boom");
    }

    #[test]
    fn test_detail_query_selects_every_detail_field() {
        for field in ["classification", "resistant", "weaknesses", "fleeRate", "maxCP", "maxHP"] {
            assert!(GET_POKEMON.contains(field), "missing {field}");
        }
    }
}
