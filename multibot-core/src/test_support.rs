//! Hand-written bot client mocks shared across unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::bot::{BotClient, BotFactory};
use crate::error::{MultibotError, Result};
use crate::types::CommandSpec;

#[derive(Debug)]
pub struct MockClient {
    token: String,
    started: AtomicBool,
    stopped: AtomicBool,
    commands_set: AtomicBool,
    commands: Mutex<Vec<CommandSpec>>,
    fail_start: bool,
}

impl MockClient {
    pub fn new(token: &str) -> Self {
        Self::build(token, false)
    }

    pub fn failing(token: &str) -> Self {
        Self::build(token, true)
    }

    fn build(token: &str, fail_start: bool) -> Self {
        Self {
            token: token.to_string(),
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
            commands_set: AtomicBool::new(false),
            commands: Mutex::new(Vec::new()),
            fail_start,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    pub fn commands_were_set(&self) -> bool {
        self.commands_set.load(Ordering::SeqCst)
    }

    pub fn applied_commands(&self) -> Vec<CommandSpec> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl BotClient for MockClient {
    fn token(&self) -> &str {
        &self.token
    }

    async fn start(&self) -> Result<()> {
        if self.fail_start {
            return Err(MultibotError::Client("connection refused".into()));
        }
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn set_commands(&self, commands: &[CommandSpec]) -> Result<()> {
        self.commands_set.store(true, Ordering::SeqCst);
        *self.commands.lock().unwrap() = commands.to_vec();
        Ok(())
    }
}

/// Records every client it creates; `failing_for` tokens produce clients whose `start` fails.
pub struct MockFactory {
    created: Mutex<Vec<Arc<MockClient>>>,
    fail_tokens: Vec<String>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            fail_tokens: Vec::new(),
        }
    }

    pub fn failing_for(tokens: &[&str]) -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            fail_tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn created_clients(&self) -> Vec<Arc<MockClient>> {
        self.created.lock().unwrap().clone()
    }
}

impl BotFactory for MockFactory {
    fn create(&self, token: &str) -> Arc<dyn BotClient> {
        let client = if self.fail_tokens.iter().any(|t| t == token) {
            Arc::new(MockClient::failing(token))
        } else {
            Arc::new(MockClient::new(token))
        };
        self.created.lock().unwrap().push(client.clone());
        client
    }
}
