//! Per-player typing state.
//!
//! A [`PlayerState`] never owns its display field. Every input method takes
//! the field as `&mut TextSurface` and only edits its text.

use keyrace_types::{KeyToken, TextSurface, READY_MARKER};

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    name: String,
    name_buffer: String,
    ready: bool,
    /// Correctly typed characters of the current word.
    progress: usize,
    score: u32,
    /// Display slot, assigned in join order.
    slot: usize,
}

impl PlayerState {
    pub fn new(slot: usize) -> Self {
        Self {
            name: String::new(),
            name_buffer: String::new(),
            ready: false,
            progress: 0,
            score: 0,
            slot,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Feed one lobby keystroke into the name being entered.
    ///
    /// Ignored once the name has been confirmed.
    pub fn submit_name_char(&mut self, token: KeyToken, field: &mut TextSurface) {
        if self.ready {
            return;
        }
        match token {
            KeyToken::Char(c) => {
                self.name_buffer.push(c);
                field.push(c);
            }
            KeyToken::Confirm => {
                self.name = self.name_buffer.clone();
                self.ready = true;
                field.append(READY_MARKER);
            }
            KeyToken::Erase => {
                if self.name_buffer.pop().is_some() {
                    field.pop();
                }
            }
            KeyToken::Abort => {}
        }
    }

    /// Feed one race keystroke against `target`.
    ///
    /// Returns `true` only on the call that completes the word. A character
    /// that does not match the next expected one is ignored.
    pub fn submit_race_char(
        &mut self,
        token: KeyToken,
        target: &str,
        field: &mut TextSurface,
    ) -> bool {
        if self.ready {
            return false;
        }
        let Some(c) = token.as_char() else {
            return false;
        };
        if target.chars().nth(self.progress) != Some(c) {
            return false;
        }

        field.push(c);
        self.progress += 1;
        if self.progress == target.chars().count() {
            self.progress = 0;
            self.ready = true;
            field.clear();
            return true;
        }
        false
    }

    /// Make the player race again on a fresh word.
    pub fn reset_for_new_word(&mut self, field: &mut TextSurface) {
        self.ready = false;
        self.progress = 0;
        field.clear();
    }

    /// Count the current word as done without typing it (empty words).
    pub(crate) fn complete_untyped(&mut self) {
        self.ready = true;
        self.progress = 0;
    }

    /// Scores only grow; `u32` keeps deltas non-negative.
    pub fn add_score(&mut self, points: u32) -> Result<(), GameError> {
        self.score = self
            .score
            .checked_add(points)
            .ok_or(GameError::Invariant("score overflow"))?;
        Ok(())
    }
}
