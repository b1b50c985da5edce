//! The player's inventory.

use zuul_foundation::{Error, MAX_CARRY_WEIGHT, Result, Weight};

use crate::item::Item;

/// An ordered, weight-limited collection of carried items.
///
/// Like [`World`](crate::World), an inventory is a persistent value: adding
/// or removing returns a new inventory and leaves the original unchanged.
#[derive(Clone, Debug)]
pub struct Inventory {
    items: im::Vector<Item>,
    capacity: Weight,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(MAX_CARRY_WEIGHT)
    }
}

impl Inventory {
    /// Creates an empty inventory with the given carry limit.
    #[must_use]
    pub fn new(capacity: Weight) -> Self {
        Self {
            items: im::Vector::new(),
            capacity,
        }
    }

    /// Returns the carry limit.
    #[must_use]
    pub const fn capacity(&self) -> Weight {
        self.capacity
    }

    /// Returns the number of carried items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over carried items in pickup order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Sum of the weights of all carried items.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.items.iter().map(Item::weight).sum()
    }

    /// Finds a carried item by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Returns true if an item with this name is carried, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Checks that `item` fits under the carry limit.
    ///
    /// # Errors
    ///
    /// Returns `TooHeavy` with the current total if it does not.
    pub fn check_capacity(&self, item: &Item) -> Result<()> {
        let current = self.total_weight();
        match current.checked_add(item.weight()) {
            Some(total) if total <= self.capacity => Ok(()),
            _ => Err(Error::too_heavy(current, self.capacity)),
        }
    }

    /// Returns a new inventory with `item` appended.
    ///
    /// # Errors
    ///
    /// Returns `TooHeavy` if the item does not fit.
    pub fn insert(&self, item: Item) -> Result<Self> {
        self.check_capacity(&item)?;
        let mut items = self.items.clone();
        items.push_back(item);
        Ok(Self {
            items,
            capacity: self.capacity,
        })
    }

    /// Returns a new inventory without the first item matching `name`,
    /// together with that item.
    ///
    /// # Errors
    ///
    /// Returns `NotCarrying` if no such item is carried.
    pub fn remove(&self, name: &str) -> Result<(Self, Item)> {
        let index = self
            .items
            .iter()
            .position(|item| item.is_named(name))
            .ok_or_else(|| Error::not_carrying(name))?;
        let mut items = self.items.clone();
        let item = items.remove(index);
        Ok((
            Self {
                items,
                capacity: self.capacity,
            },
            item,
        ))
    }
}
