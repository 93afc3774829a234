//! Keyboard-to-player mapping.
//!
//! Players are created lazily on a keyboard's first keystroke and live for
//! the whole session. Slots are handed out in join order.

use std::collections::HashMap;

use keyrace_types::DeviceId;

use crate::error::GameError;
use crate::player::PlayerState;

#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    max_players: usize,
    by_device: HashMap<DeviceId, usize>,
    players: Vec<PlayerState>,
}

impl DeviceRegistry {
    pub fn new(max_players: usize) -> Self {
        Self {
            max_players,
            by_device: HashMap::with_capacity(max_players),
            players: Vec::with_capacity(max_players),
        }
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    /// Return the player behind `device`, registering it if unseen.
    ///
    /// Fails with [`GameError::CapacityExceeded`] when an unseen keyboard
    /// arrives after every slot is taken.
    pub fn resolve(&mut self, device: DeviceId) -> Result<&mut PlayerState, GameError> {
        let index = match self.by_device.get(&device) {
            Some(&index) => index,
            None => {
                if self.is_full() {
                    return Err(GameError::CapacityExceeded {
                        max_players: self.max_players,
                    });
                }
                let slot = self.players.len();
                self.players.push(PlayerState::new(slot));
                self.by_device.insert(device, slot);
                tracing::info!(%device, slot, "player joined");
                slot
            }
        };
        Ok(&mut self.players[index])
    }

    /// Look up an already registered keyboard without registering it.
    pub fn get_mut(&mut self, device: DeviceId) -> Option<&mut PlayerState> {
        let index = *self.by_device.get(&device)?;
        self.players.get_mut(index)
    }

    pub fn get(&self, device: DeviceId) -> Option<&PlayerState> {
        let index = *self.by_device.get(&device)?;
        self.players.get(index)
    }

    /// Players in join order.
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [PlayerState] {
        &mut self.players
    }

    /// True when at least one player is registered and all are ready.
    pub fn all_ready(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(PlayerState::is_ready)
    }
}
