//! Card feed state.
//!
//! DESIGN
//! ======
//! The list only changes with server-confirmed cards: new cards are prepended,
//! removals filter by id and like changes replace the entry by id. Server
//! order is otherwise preserved.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use crate::net::types::Card;

/// In-memory card list, newest additions first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardsState {
    pub items: Vec<Card>,
}

impl CardsState {
    /// Replace the whole list with the server's.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.items = cards;
    }

    pub fn prepend(&mut self, card: Card) {
        self.items.insert(0, card);
    }

    /// Drop every card with `card_id`. Unknown ids are a no-op.
    pub fn remove(&mut self, card_id: &str) {
        self.items.retain(|card| card.id != card_id);
    }

    /// Swap in the server's version of a card, keeping its position.
    pub fn replace(&mut self, updated: Card) {
        if let Some(slot) = self.items.iter_mut().find(|card| card.id == updated.id) {
            *slot = updated;
        }
    }
}
