use std::sync::{Arc, Mutex, PoisonError};

use crate::{scoring::ScoreResult, validator::InputError};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(InputError),
    Valid,
}

/// Application operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    Game,
    History,
}

/// Display mode for the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryViewMode {
    Stats,
    List,
}

/// A counted guess and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub score: ScoreResult,
}
