use std::time::Duration;

use pokedex::query::{GraphQlSource, PokemonSource, QueryError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn source_for(server: &MockServer) -> GraphQlSource {
    GraphQlSource::new(format!("{}/graphql", server.uri()), 151, Duration::from_secs(5))
        .expect("mock endpoint is a valid URL")
}

fn pikachu_json() -> serde_json::Value {
    json!({
        "id": "UG9rZW1vbjowMjU=",
        "number": "025",
        "name": "Pikachu",
        "weight": { "minimum": "5.25kg", "maximum": "6.75kg" },
        "height": { "minimum": "0.35m", "maximum": "0.45m" },
        "classification": "Mouse Pokémon",
        "types": ["Electric"],
        "resistant": ["Electric", "Flying", "Steel"],
        "weaknesses": ["Ground"],
        "fleeRate": 0.1,
        "maxCP": 787,
        "maxHP": 887,
        "image": "https://img.pokemondb.net/artwork/pikachu.jpg"
    })
}

// ============================================================================
// List Query
// ============================================================================

#[tokio::test]
async fn test_list_sends_query_with_first_variable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({ "variables": { "first": 151 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "pokemons": [
                    { "id": "a", "number": "001", "name": "Bulbasaur", "image": "b.jpg", "types": ["Grass", "Poison"] },
                    { "id": "b", "number": "004", "name": "Charmander", "image": "c.jpg", "types": ["Fire"] }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pokemons = source_for(&mock_server).list_pokemons().await.unwrap();

    assert_eq!(pokemons.len(), 2);
    assert_eq!(pokemons[0].name, "Bulbasaur");
    assert_eq!(pokemons[0].types, vec!["Grass", "Poison"]);
    assert_eq!(pokemons[1].number, "004");
}

#[tokio::test]
async fn test_list_null_collection_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "pokemons": null } })))
        .mount(&mock_server)
        .await;

    let pokemons = source_for(&mock_server).list_pokemons().await.unwrap();
    assert!(pokemons.is_empty());
}

#[tokio::test]
async fn test_list_http_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let result = source_for(&mock_server).list_pokemons().await;

    assert_eq!(
        result,
        Err(QueryError::Api {
            status: 503,
            message: "maintenance".to_string()
        })
    );
}

// ============================================================================
// Detail Query
// ============================================================================

#[tokio::test]
async fn test_detail_by_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "name": "Pikachu" } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "pokemon": pikachu_json() } })),
        )
        .mount(&mock_server)
        .await;

    let pokemon = source_for(&mock_server)
        .get_pokemon("Pikachu")
        .await
        .unwrap()
        .expect("Pikachu exists");

    assert_eq!(pokemon.number, "025");
    assert_eq!(pokemon.classification, "Mouse Pokémon");
    assert_eq!(pokemon.max_cp, 787);
    assert_eq!(pokemon.max_hp, 887);
    assert_eq!(pokemon.weaknesses, vec!["Ground"]);
    assert_eq!(pokemon.resistant.len(), 3);
    assert_eq!(pokemon.weight.maximum, "6.75kg");
}

#[tokio::test]
async fn test_detail_null_pokemon_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "pokemon": null } })))
        .mount(&mock_server)
        .await;

    let result = source_for(&mock_server).get_pokemon("Missingno").await;
    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn test_detail_repeated_fetch_is_equal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "pokemon": pikachu_json() } })),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let source = source_for(&mock_server);
    let first = source.get_pokemon("Pikachu").await.unwrap();
    let second = source.get_pokemon("Pikachu").await.unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_graphql_errors_are_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Cannot query field \"pokemons\"" },
                { "message": "Variable \"$first\" is required" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let result = source_for(&mock_server).list_pokemons().await;

    match result {
        Err(QueryError::GraphQl(messages)) => {
            assert_eq!(messages.len(), 2);
            assert!(messages[0].contains("pokemons"));
        }
        other => panic!("expected GraphQl error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let result = source_for(&mock_server).get_pokemon("Pikachu").await;
    assert!(matches!(result, Err(QueryError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let source = GraphQlSource::new(
        "http://127.0.0.1:9/graphql".to_string(),
        151,
        Duration::from_secs(2),
    )
    .unwrap();

    let result = source.list_pokemons().await;
    assert!(matches!(result, Err(QueryError::Network(_))));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "pokemons": [] } }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let source = GraphQlSource::new(
        format!("{}/graphql", mock_server.uri()),
        151,
        Duration::from_millis(200),
    )
    .unwrap();

    let result = source.list_pokemons().await;
    assert!(matches!(result, Err(QueryError::Network(_))));
}
