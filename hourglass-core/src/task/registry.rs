//! Task table
//!
//! Maps every [`TaskId`] to a value for the whole process lifetime.
//! Registration happens during construction, before any task body runs,
//! so peers can be resolved without caring about construction order.

use super::{TaskError, TaskId};

/// Fixed-size table keyed by task identity
#[derive(Debug, Clone)]
pub struct Registry<T> {
    slots: [Option<T>; TaskId::COUNT],
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None, None, None],
        }
    }

    /// Bind a value to a task identity
    ///
    /// A second registration under the same identity replaces the first
    /// one; the replaced value is returned.
    pub fn register(&mut self, id: TaskId, value: T) -> Option<T> {
        self.slots[id.index()].replace(value)
    }

    /// Get the value bound to a task identity
    pub fn lookup(&self, id: TaskId) -> Result<&T, TaskError> {
        self.slots[id.index()].as_ref().ok_or(TaskError::NotFound)
    }

    /// Get the value bound to a task identity, mutably
    pub fn lookup_mut(&mut self, id: TaskId) -> Result<&mut T, TaskError> {
        self.slots[id.index()].as_mut().ok_or(TaskError::NotFound)
    }

    /// Resolve a task by its name
    pub fn lookup_name(&self, name: &str) -> Result<(TaskId, &T), TaskError> {
        let id = TaskId::from_name(name).ok_or(TaskError::NotFound)?;
        self.lookup(id).map(|value| (id, value))
    }

    /// Check whether a task identity has been registered
    pub fn is_registered(&self, id: TaskId) -> bool {
        self.slots[id.index()].is_some()
    }

    /// Iterate over registered tasks
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &T)> {
        TaskId::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(id, slot)| slot.as_ref().map(|value| (id, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unregistered() {
        let registry: Registry<u8> = Registry::new();
        assert_eq!(registry.lookup(TaskId::Clock), Err(TaskError::NotFound));
        assert!(!registry.is_registered(TaskId::Clock));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = Registry::new();
        assert_eq!(registry.register(TaskId::Hourglass, 1), None);
        assert_eq!(registry.register(TaskId::Hourglass, 2), Some(1));
        assert_eq!(registry.lookup(TaskId::Hourglass), Ok(&2));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = Registry::new();
        registry.register(TaskId::Settings, "drain");

        assert_eq!(
            registry.lookup_name("setup"),
            Ok((TaskId::Settings, &"drain"))
        );
        assert_eq!(registry.lookup_name("clock"), Err(TaskError::NotFound));
        assert_eq!(registry.lookup_name("ntp"), Err(TaskError::NotFound));
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut registry = Registry::new();
        registry.register(TaskId::Clock, 'c');
        registry.register(TaskId::Accel, 'a');

        let mut it = registry.iter();
        assert_eq!(it.next(), Some((TaskId::Accel, &'a')));
        assert_eq!(it.next(), Some((TaskId::Clock, &'c')));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_lookup_mut() {
        let mut registry = Registry::new();
        registry.register(TaskId::Display, 0u32);
        *registry.lookup_mut(TaskId::Display).unwrap() += 5;
        assert_eq!(registry.lookup(TaskId::Display), Ok(&5));
    }
}
