//! Registry of mounted instances keyed by container identity.
//!
//! Lets a host find the live clock on a container without writing anything
//! onto the container itself. Entries record the owner id so an instance only
//! ever removes its own registration.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use uuid::Uuid;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    owner: Uuid,
    value: V,
}

/// Container → instance map with owner-checked removal.
#[derive(Debug)]
pub struct MountRegistry<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Default for MountRegistry<K, V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: PartialEq, V> MountRegistry<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` for `key`, replacing any previous registration.
    pub fn register(&mut self, key: K, owner: Uuid, value: V) {
        self.entries.retain(|e| e.key != key);
        self.entries.push(Entry { key, owner, value });
    }

    /// Remove the registration for `key` if it belongs to `owner`.
    ///
    /// Returns whether an entry was removed.
    pub fn unregister(&mut self, key: &K, owner: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.key == *key && e.owner == owner));
        self.entries.len() != before
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|e| e.key == *key).map(|e| &e.value)
    }

    /// Owner id registered for `key`.
    #[must_use]
    pub fn owner(&self, key: &K) -> Option<Uuid> {
        self.entries.iter().find(|e| e.key == *key).map(|e| e.owner)
    }

    /// Drop entries whose value no longer passes `alive`.
    pub fn prune(&mut self, alive: impl Fn(&V) -> bool) {
        self.entries.retain(|e| alive(&e.value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
