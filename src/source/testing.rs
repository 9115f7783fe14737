//! Scripted metric sources for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};

use super::MetricSource;

/// Replays a fixed script of readings; repeats the last entry once exhausted.
#[derive(Debug)]
pub struct ScriptedSource {
    name: String,
    script: Mutex<VecDeque<Result<f64, String>>>,
    last: Mutex<Result<f64, String>>,
    delay: Duration,
}

impl ScriptedSource {
    pub fn new(name: &str, script: Vec<Result<f64, String>>) -> Self {
        Self {
            name: name.to_string(),
            script: Mutex::new(script.into()),
            last: Mutex::new(Ok(0.0)),
            delay: Duration::ZERO,
        }
    }

    pub fn values(name: &str, values: &[f64]) -> Self {
        Self::new(name, values.iter().map(|v| Ok(*v)).collect())
    }

    pub fn failing(name: &str, cause: &str) -> Self {
        Self::new(name, vec![Err(cause.to_string())])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl MetricSource for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<f64> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }
        last.clone().map_err(|e| anyhow!(e))
    }
}
