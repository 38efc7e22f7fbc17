use std::fmt;

use async_trait::async_trait;

use super::types::{PokemonDetail, PokemonSummary};

/// Errors that can occur while talking to the query layer.
///
/// Every variant is a "network or server" failure from the caller's point
/// of view. A Pokémon that doesn't exist is not an error: `get_pokemon`
/// returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Source misconfigured (bad endpoint URL, unusable HTTP client).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// Endpoint answered 200 but the GraphQL envelope carried `errors`.
    GraphQl(Vec<String>),
    /// Failed to parse the endpoint's response.
    Parse(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Config(msg) => write!(f, "config error: {msg}"),
            QueryError::Network(msg) => write!(f, "network error: {msg}"),
            QueryError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            QueryError::GraphQl(messages) => {
                write!(f, "GraphQL error: {}", messages.join("; "))
            }
            QueryError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// The two operations the Pokédex needs from its backend.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Returns the name of the source, for logs and the title bar.
    fn name(&self) -> &str;

    /// Fetches the full collection in backend order.
    async fn list_pokemons(&self) -> Result<Vec<PokemonSummary>, QueryError>;

    /// Fetches one Pokémon by name. `Ok(None)` means no match.
    async fn get_pokemon(&self, name: &str) -> Result<Option<PokemonDetail>, QueryError>;
}
