//! Round lifecycle: name-entry lobby, repeated word races, final scoreboard.
//!
//! A [`Session`] is the explicit context object for one game. It owns the
//! device registry, the display surfaces and the phase, and processes one
//! keystroke at a time to completion. Words are pulled from a
//! [`WordSource`] only when a new round is due.
//!
//! # Word refresh rule
//!
//! A new word is fetched when nobody is still racing, or when exactly one
//! player is left in a game of two or more. In the second case the last
//! racer is cut off; with rank scoring they would have earned 0 anyway.

use std::fmt;

use keyrace_types::{
    DeviceId, KeyToken, Phase, TextSurface, DEFAULT_MAX_PLAYERS, FINISHED_BANNER,
};

use crate::display::Display;
use crate::error::GameError;
use crate::player::PlayerState;
use crate::registry::DeviceRegistry;
use crate::scoring::{RankScore, ScoreRule};
use crate::words::WordSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_players: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

/// What the event loop should do after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The word list ran out; the scoreboard is on the display.
    Finished,
    /// Quit immediately without scoring.
    Aborted,
}

/// One row of the final scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
}

impl From<&PlayerState> for ScoreLine {
    fn from(player: &PlayerState) -> Self {
        Self {
            name: player.name().to_string(),
            score: player.score(),
        }
    }
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} has {} points.", self.name, self.score)
    }
}

#[derive(Debug, Clone)]
pub struct Session<R = RankScore> {
    registry: DeviceRegistry,
    display: Display,
    phase: Phase,
    target_word: String,
    /// Players that have not finished the current word.
    pending: usize,
    rule: R,
}

impl Session<RankScore> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rule(config, RankScore)
    }
}

impl<R: ScoreRule> Session<R> {
    pub fn with_rule(config: SessionConfig, rule: R) -> Self {
        Self {
            registry: DeviceRegistry::new(config.max_players),
            display: Display::new(config.max_players),
            phase: Phase::Lobby,
            target_word: String::new(),
            pending: 0,
            rule,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn players(&self) -> &[PlayerState] {
        self.registry.players()
    }

    pub fn player(&self, device: DeviceId) -> Option<&PlayerState> {
        self.registry.get(device)
    }

    pub fn status(&self) -> &TextSurface {
        self.display.status()
    }

    /// Every surface the renderer should draw.
    pub fn surfaces(&self) -> impl Iterator<Item = &TextSurface> {
        self.display.surfaces()
    }

    /// Current scores in join order.
    pub fn scoreboard(&self) -> Vec<ScoreLine> {
        self.registry.players().iter().map(ScoreLine::from).collect()
    }

    /// Process one keystroke from `device`.
    pub fn handle_key<W>(
        &mut self,
        device: DeviceId,
        token: KeyToken,
        words: &mut W,
    ) -> Result<Flow, GameError>
    where
        W: WordSource + ?Sized,
    {
        if token == KeyToken::Abort {
            tracing::info!(%device, phase = %self.phase, "abort requested");
            return Ok(Flow::Aborted);
        }
        match self.phase {
            Phase::Lobby => self.lobby_key(device, token, words),
            Phase::Racing => self.race_key(device, token, words),
            Phase::Finished => Ok(Flow::Finished),
        }
    }

    fn lobby_key<W>(
        &mut self,
        device: DeviceId,
        token: KeyToken,
        words: &mut W,
    ) -> Result<Flow, GameError>
    where
        W: WordSource + ?Sized,
    {
        let player = self.registry.resolve(device)?;
        let field = self
            .display
            .field_mut(player.slot())
            .ok_or(GameError::Invariant("player slot has no display field"))?;
        player.submit_name_char(token, field);

        if self.registry.all_ready() {
            self.start_race(words)
        } else {
            Ok(Flow::Continue)
        }
    }

    fn start_race<W>(&mut self, words: &mut W) -> Result<Flow, GameError>
    where
        W: WordSource + ?Sized,
    {
        tracing::info!(players = self.registry.len(), "all players ready, race starts");
        self.phase = Phase::Racing;
        self.reset_players();
        self.pending = 0;
        self.refresh_word(words)
    }

    fn race_key<W>(
        &mut self,
        device: DeviceId,
        token: KeyToken,
        words: &mut W,
    ) -> Result<Flow, GameError>
    where
        W: WordSource + ?Sized,
    {
        let player_count = self.registry.len();
        let player = self
            .registry
            .get_mut(device)
            .ok_or(GameError::IllegalJoin { device })?;
        let field = self
            .display
            .field_mut(player.slot())
            .ok_or(GameError::Invariant("player slot has no display field"))?;

        if !player.submit_race_char(token, &self.target_word, field) {
            return Ok(Flow::Continue);
        }

        self.pending = self
            .pending
            .checked_sub(1)
            .ok_or(GameError::Invariant("word finished with nobody pending"))?;
        let rank = player_count - self.pending;
        let points = self.rule.points(rank, self.pending);
        player.add_score(points)?;
        tracing::info!(%device, rank, points, total = player.score(), "word finished");

        self.refresh_word(words)
    }

    fn word_due(&self) -> bool {
        self.pending == 0 || (self.pending == 1 && self.registry.len() > 1)
    }

    fn refresh_word<W>(&mut self, words: &mut W) -> Result<Flow, GameError>
    where
        W: WordSource + ?Sized,
    {
        while self.word_due() {
            let Some(word) = words.next_word()? else {
                self.finish();
                return Ok(Flow::Finished);
            };
            tracing::debug!(word = %word, "next word");

            self.reset_players();
            self.display.status_mut().replace(&word);
            self.target_word = word;
            self.pending = self.registry.len();

            // Nobody can type an empty word; count it as done by everyone.
            if self.target_word.is_empty() {
                for player in self.registry.players_mut() {
                    player.complete_untyped();
                }
                self.pending = 0;
            }
        }
        Ok(Flow::Continue)
    }

    fn reset_players(&mut self) {
        for player in self.registry.players_mut() {
            if let Some(field) = self.display.field_mut(player.slot()) {
                player.reset_for_new_word(field);
            }
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.display.status_mut().replace(FINISHED_BANNER);
        for player in self.registry.players() {
            if let Some(field) = self.display.field_mut(player.slot()) {
                field.replace(&ScoreLine::from(player).to_string());
            }
        }
        tracing::info!(players = self.registry.len(), "word list exhausted, game over");
    }
}
