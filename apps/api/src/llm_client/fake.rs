//! Deterministic `TextCompletion` for tests. Never touches the network.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Completion, CompletionRequest, LlmError, TextCompletion};

/// A recorded call, owned so tests can inspect it after the request returns.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Empty,
    Fail,
}

pub struct FakeCompletion {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeCompletion {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::with_reply(Reply::Empty)
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Fail)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for FakeCompletion {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            prompt: request.prompt.to_string(),
            temperature: request.temperature,
        });

        match &self.reply {
            Reply::Text(text) => Ok(Completion {
                text: Some(text.clone()),
                usage: None,
            }),
            Reply::Empty => Ok(Completion::default()),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "simulated network error".to_string(),
            }),
        }
    }
}
