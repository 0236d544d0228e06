//! Session model
//!
//! State owned by one user session: conversion history and the dark-mode flag.
//! Nothing here is shared between sessions.

use serde::Serialize;

use super::conversion_record::{ConversionRecord, ConversionRecordCreate};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    history: Vec<ConversionRecord>,
    dark_mode: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a successful conversion and return the stored record
    pub fn record(&mut self, data: ConversionRecordCreate) -> &ConversionRecord {
        self.history.push(ConversionRecord::new(data));
        &self.history[self.history.len() - 1]
    }

    /// History in insertion order
    pub fn history(&self) -> &[ConversionRecord] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the dark-mode flag and return the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
