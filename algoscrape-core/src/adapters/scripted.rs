//! Scripted transport for unit tests
//!
//! Replays a fixed sequence of responses and records every URL requested.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::ports::HttpTransport;

enum Reply {
    Body(String),
    Fail(String),
}

/// Transport answering each request with the next scripted reply
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub fn body(self, body: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Body(body.into()));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Fail(message.into()));
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(Error::transport(message)),
            None => Err(Error::transport(format!("no scripted response for {}", url))),
        }
    }
}
