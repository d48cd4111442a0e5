use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

// =============================================================================
// 1. ENTITY TRAIT (Hooks, Patches, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be kept in a [`Store`]
pub trait Entity: Debug {
    type Id: Eq + Hash + Copy + Display + Debug;
    type Patch: Debug;

    // --- Custom Actions ---
    type Action: Debug;
    type ActionResult: Debug;

    type Error: std::error::Error;

    /// Get the ID of the entity
    fn id(&self) -> Self::Id;

    /// Error returned when `id` is not in the store
    fn not_found(id: Self::Id) -> Self::Error;

    /// Error returned when inserting an id the store already holds
    fn already_exists(id: Self::Id) -> Self::Error;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// In-memory, id-keyed home for one kind of entity.
///
/// Entities are mutated in place, so everything holding an id sees the
/// same state.
#[derive(Debug)]
pub struct Store<T: Entity> {
    items: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: Entity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Store<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Runs the `on_create` hook and stores the entity under its own id.
    pub fn insert(&mut self, mut item: T) -> Result<T::Id, T::Error> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(T::already_exists(id));
        }
        item.on_create()?;
        self.items.insert(id, item);
        self.order.push(id);
        Ok(id)
    }

    pub fn get(&self, id: T::Id) -> Result<&T, T::Error> {
        self.items.get(&id).ok_or_else(|| T::not_found(id))
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.items.contains_key(&id)
    }

    pub fn update(&mut self, id: T::Id, patch: T::Patch) -> Result<&T, T::Error> {
        let item = self.items.get_mut(&id).ok_or_else(|| T::not_found(id))?;
        item.on_update(patch)?;
        Ok(item)
    }

    pub fn perform_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let item = self.items.get_mut(&id).ok_or_else(|| T::not_found(id))?;
        item.handle_action(action)
    }

    /// Entities in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// 3. TESTS
// =============================================================================
