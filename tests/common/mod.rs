//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thickm::clients::{HttpError, HttpRequest, HttpResponse, Transport};
use thickm::{BaseUrl, CollectionLayout, Resource, RestClient, ThickmConfig};

/// Transport that records requests and replays queued responses.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub fn reply(&self, code: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::with_body(code, body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::with_body(200, json!({}))))
    }
}

/// Collections wrapped as `{"_items": [...], "_meta": {...}}`.
pub struct MyApiLayout;

impl CollectionLayout for MyApiLayout {
    const ITEMS_FIELD: Option<&'static str> = Some("_items");
    const META_FIELD: Option<&'static str> = Some("_meta");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            extra: Map::new(),
        }
    }
}

impl Resource for User {
    type Layout = MyApiLayout;

    const NAME: &'static str = "users";
    const PRIMARY_FIELD: &'static str = "_id";
}

pub fn config(base: &str) -> ThickmConfig {
    ThickmConfig::builder()
        .base_url(BaseUrl::new(base).unwrap())
        .build()
        .unwrap()
}

pub fn recording_client(base: &str) -> RestClient<RecordingTransport> {
    RestClient::with_transport(config(base), RecordingTransport::default())
}
