//! Shared helpers for API integration tests.
#![allow(dead_code)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum_test::TestServer;

use factura_api::services::VisionModel;
use factura_api::setup::build_app;
use factura_core::Config;

/// Scripted stand-in for the remote model: replies rotate in call order.
pub struct ScriptedModel {
    replies: Vec<String>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    /// One fenced-JSON reply, repeated for every call.
    pub fn fenced(reply_json: &str) -> Arc<Self> {
        let fenced = format!("```json\n{}\n```", reply_json);
        Self::new(&[fenced.as_str()])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionModel for ScriptedModel {
    async fn generate(&self, _: &str, _: &str, _: &str) -> Result<String> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.replies[index % self.replies.len()].clone())
    }
}

/// Always fails, standing in for a model outage.
pub struct FailingModel;

#[async_trait]
impl VisionModel for FailingModel {
    async fn generate(&self, _: &str, _: &str, _: &str) -> Result<String> {
        Err(anyhow::anyhow!("model unavailable"))
    }
}

/// Config for tests: no network targets, fast progress ticks.
pub fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        gemini_api_key: "test-key".to_string(),
        gemini_model: "models/gemini-1.5-pro".to_string(),
        gemini_base_url: "http://127.0.0.1:0".to_string(),
        max_file_size_bytes: 25 * 1024 * 1024,
        progress_tick_ms: 1,
    }
}

pub fn setup_test_app(model: Arc<dyn VisionModel>) -> TestServer {
    let (_state, router) = build_app(test_config(), model).expect("build app");
    TestServer::new(router).expect("test server")
}
