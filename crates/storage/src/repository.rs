use crate::error::StorageError;
use crate::store::KeyValueStore;
use chrono::{DateTime, SubsecRound, Utc};
use core_types::{CustomEntry, EntryId, NewEntry, Theme};

/// Key holding the JSON array of custom entries.
pub const ENTRIES_KEY: &str = "exec-dashboard-custom-entries";
/// Key holding the plain-text theme preference.
pub const THEME_KEY: &str = "exec-dashboard-theme";

/// The `LocalRepository` provides a high-level, application-specific interface
/// to the durable key-value store: the custom entry list and the theme
/// preference.
///
/// Reads never fail: a missing, unreadable or malformed value is logged and
/// treated as empty. Writes report their errors.
#[derive(Debug, Clone)]
pub struct LocalRepository<S> {
    store: S,
}

impl<S: KeyValueStore> LocalRepository<S> {
    /// Creates a new `LocalRepository` over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All stored entries in insertion order.
    pub fn list_entries(&self) -> Vec<CustomEntry> {
        let raw = match self.store.get(ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read custom entries; treating as empty.");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<CustomEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Stored custom entries are malformed; treating as empty."
                );
                Vec::new()
            }
        }
    }

    /// Appends a new entry with a fresh id and persists the full list.
    ///
    /// `added_at` is stored at millisecond precision.
    pub fn add_entry(
        &mut self,
        entry: NewEntry,
        added_at: DateTime<Utc>,
    ) -> Result<CustomEntry, StorageError> {
        let mut entries = self.list_entries();
        let created = CustomEntry::from_new(EntryId::generate(), entry, added_at.trunc_subsecs(3));
        entries.push(created.clone());
        self.save_entries(&entries)?;

        tracing::info!(id = %created.id, label = %created.label(), "Custom entry stored.");
        Ok(created)
    }

    /// Deletes the entry with `id`, keeping the others in their original order.
    ///
    /// Returns `false` when no entry had that id; the list is left as it was.
    pub fn remove_entry(&mut self, id: &EntryId) -> Result<bool, StorageError> {
        let mut entries = self.list_entries();
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        if entries.len() == before {
            tracing::debug!(id = %id, "No custom entry with this id.");
            return Ok(false);
        }
        self.save_entries(&entries)?;
        tracing::info!(id = %id, "Custom entry removed.");
        Ok(true)
    }

    /// Deletes every stored entry. Safe to call when nothing is stored.
    pub fn clear_entries(&mut self) -> Result<(), StorageError> {
        self.store.remove(ENTRIES_KEY)?;
        tracing::info!("Custom entries cleared.");
        Ok(())
    }

    fn save_entries(&mut self, entries: &[CustomEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(ENTRIES_KEY, &json)
    }

    /// The saved theme, or the host preference when nothing usable is saved.
    pub fn load_theme(&self, prefers_light: bool) -> Theme {
        let fallback = if prefers_light { Theme::Light } else { Theme::Dark };
        match self.store.get(THEME_KEY) {
            Ok(Some(saved)) if !saved.trim().is_empty() => Theme::from_stored(&saved),
            Ok(_) => fallback,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read theme preference; using default.");
                fallback
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
