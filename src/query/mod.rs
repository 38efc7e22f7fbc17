pub mod graphql;
pub mod source;
pub mod types;

pub use graphql::GraphQlSource;
pub use source::{PokemonSource, QueryError};
pub use types::{PokemonDetail, PokemonDimension, PokemonSummary};
