use crate::config::Endpoints;
use crate::elimination::Item;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

/// Shown to the user whenever the profile batch cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error fetching data";

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileBatch {
    pub results: Vec<Profile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub picture: Picture,
    pub name: ProfileName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Picture {
    pub large: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0} while fetching profiles")]
    Status(u16),
    #[error("malformed profile batch: {0}")]
    Parse(String),
    #[error("profile batch does not contain any profiles")]
    Empty,
}

impl LoadError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

pub async fn fetch_profiles(endpoints: &Endpoints) -> Result<Vec<Item>, LoadError> {
    let response = Request::get(&endpoints.dataset_url)
        .send()
        .await
        .map_err(LoadError::network)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response.text().await.map_err(LoadError::network)?;
    parse_batch(&text)
}

pub fn parse_batch(text: &str) -> Result<Vec<Item>, LoadError> {
    let batch: ProfileBatch = serde_json::from_str(text).map_err(LoadError::parse)?;
    if batch.results.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(items_from_batch(batch))
}

/// Each profile becomes an item indexed by its position in the batch.
pub fn items_from_batch(batch: ProfileBatch) -> Vec<Item> {
    batch
        .results
        .into_iter()
        .enumerate()
        .map(|(index, profile)| Item {
            url: profile.picture.large,
            name: format!("{} {}", profile.name.first, profile.name.last),
            index,
            rejected: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(first: &str, last: &str, picture: &str) -> serde_json::Value {
        json!({
            "gender": "female",
            "name": { "title": "Ms", "first": first, "last": last },
            "email": "someone@example.com",
            "picture": {
                "large": picture,
                "medium": "https://example.test/med.jpg",
                "thumbnail": "https://example.test/thumb.jpg"
            }
        })
    }

    #[test]
    fn maps_profiles_in_order() {
        let body = json!({
            "results": [
                profile("Ada", "Lovelace", "https://example.test/ada.jpg"),
                profile("Grace", "Hopper", "https://example.test/grace.jpg"),
            ],
            "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
        });

        let items = parse_batch(&body.to_string()).expect("valid batch");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Ada Lovelace");
        assert_eq!(items[0].url, "https://example.test/ada.jpg");
        assert_eq!(items[0].index, 0);
        assert_eq!(items[1].name, "Grace Hopper");
        assert_eq!(items[1].index, 1);
        assert!(items.iter().all(|item| !item.rejected));
    }

    #[test]
    fn empty_batch_is_an_error() {
        let err = parse_batch(r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn missing_picture_is_a_parse_error() {
        let body = json!({ "results": [ { "name": { "first": "A", "last": "B" } } ] });
        let err = parse_batch(&body.to_string()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(
            LoadError::Status(500).to_string(),
            "HTTP 500 while fetching profiles"
        );
    }
}
