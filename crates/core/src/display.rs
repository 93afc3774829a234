//! Text surfaces owned by a session: one status line plus one field per
//! player slot.
//!
//! The layout is fixed at creation; race logic only edits text.

use keyrace_types::{TextSurface, LOBBY_PROMPT, PLAYER_COLORS, STATUS_COLOR};

/// First terminal row used by player fields.
const FIELD_TOP: u16 = 4;
/// Rows between consecutive player fields.
const FIELD_SPACING: u16 = 2;
const LEFT_MARGIN: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    status: TextSurface,
    fields: Vec<TextSurface>,
}

impl Display {
    pub fn new(slots: usize) -> Self {
        let fields = (0..slots)
            .map(|slot| {
                let row = FIELD_TOP.saturating_add((slot as u16).saturating_mul(FIELD_SPACING));
                TextSurface::new(LEFT_MARGIN, row, PLAYER_COLORS[slot % PLAYER_COLORS.len()])
            })
            .collect();
        Self {
            status: TextSurface::new(LEFT_MARGIN, 1, STATUS_COLOR).with_text(LOBBY_PROMPT),
            fields,
        }
    }

    pub fn status(&self) -> &TextSurface {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut TextSurface {
        &mut self.status
    }

    pub fn fields(&self) -> &[TextSurface] {
        &self.fields
    }

    /// Field for a player slot.
    pub fn field_mut(&mut self, slot: usize) -> Option<&mut TextSurface> {
        self.fields.get_mut(slot)
    }

    /// Status line first, then every player field.
    pub fn surfaces(&self) -> impl Iterator<Item = &TextSurface> {
        std::iter::once(&self.status).chain(self.fields.iter())
    }
}
