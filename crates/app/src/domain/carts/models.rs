//! Cart Models

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of addressable cart slots; slots are numbered `1..=CART_SLOTS`.
pub const CART_SLOTS: u16 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cart slot {0} is outside 1..=300")]
pub struct CartSlotError(pub i64);

/// One addressable position in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct CartSlot(u16);

impl CartSlot {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(CART_SLOTS);

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Every valid slot in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=CART_SLOTS).map(Self)
    }
}

impl TryFrom<i64> for CartSlot {
    type Error = CartSlotError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|slot| (1..=CART_SLOTS).contains(slot))
            .map(Self)
            .ok_or(CartSlotError(value))
    }
}

impl TryFrom<u16> for CartSlot {
    type Error = CartSlotError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<CartSlot> for u16 {
    fn from(slot: CartSlot) -> Self {
        slot.0
    }
}

impl fmt::Display for CartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Per-user slot to quantity map, persisted as a JSON object keyed by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartData(BTreeMap<CartSlot, u32>);

impl CartData {
    /// A cart with every slot present at quantity zero.
    #[must_use]
    pub fn empty() -> Self {
        Self(CartSlot::all().map(|slot| (slot, 0)).collect())
    }

    #[must_use]
    pub fn quantity(&self, slot: CartSlot) -> u32 {
        self.0.get(&slot).copied().unwrap_or_default()
    }

    /// Add one unit to `slot` and return the new quantity.
    pub fn increment(&mut self, slot: CartSlot) -> u32 {
        let quantity = self.0.entry(slot).or_default();

        *quantity = quantity.saturating_add(1);

        *quantity
    }

    /// Remove one unit from `slot` when it holds any, returning the new quantity.
    pub fn decrement(&mut self, slot: CartSlot) -> u32 {
        let quantity = self.0.entry(slot).or_default();

        *quantity = quantity.saturating_sub(1);

        *quantity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.0.values().map(|quantity| u64::from(*quantity)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CartSlot, u32)> + '_ {
        self.0.iter().map(|(slot, quantity)| (*slot, *quantity))
    }
}
