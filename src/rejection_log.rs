use crate::elimination::Item;
use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{error, info, Level};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

/// One entry in the remote, append-only rejection log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionRecord {
    pub name: String,
    pub url: String,
    pub rejected: bool,
    pub timestamp: String,
}

impl RejectionRecord {
    pub fn new(item: &Item, at: DateTime<Utc>) -> Self {
        Self {
            name: item.name.clone(),
            url: item.url.clone(),
            rejected: true,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("could not build request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0} while posting rejection")]
    Status(u16),
}

pub async fn post_rejection(url: &str, record: &RejectionRecord) -> Result<(), LogError> {
    let response = Request::post(url)
        .json(record)
        .map_err(|err| LogError::Encode(err.to_string()))?
        .send()
        .await
        .map_err(|err| LogError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(LogError::Status(response.status()));
    }

    Ok(())
}

/// Posts the rejection in the background. The outcome only reaches the
/// console; the elimination never waits on it.
pub fn record_rejection(url: String, item: Item) {
    let record = RejectionRecord::new(&item, Utc::now());
    spawn_local(async move {
        let result = post_rejection(&url, &record).await;
        log_outcome(&record, result);
    });
}

/// Reports how a post went. Returns the level it was reported at.
pub fn log_outcome(record: &RejectionRecord, result: Result<(), LogError>) -> Level {
    match result {
        Ok(()) => {
            info!("Logged rejection of {}", record.name);
            Level::Info
        }
        Err(err) => {
            error!("Error posting rejection of {}: {}", record.name, err);
            Level::Error
        }
    }
}
