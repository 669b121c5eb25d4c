use serde::{Deserialize, Serialize};

/// Payload returned by the joke API.
///
/// Example response:
/// `{"type":"success","value":{"id":565,"joke":"...","categories":["nerdy"]}}`
///
/// No field carries a serde default: a payload missing a key fails to decode
/// and the failure propagates to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokeResponse {
    /// Status tag from the API, e.g. "success".
    #[serde(rename = "type")]
    pub kind: String,
    pub value: JokeValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokeValue {
    pub id: i64,
    pub joke: String,
    /// Array order is preserved from the response; it carries no meaning.
    pub categories: Vec<String>,
}
