//! Process-wide memoization of dictionary sets.
//!
//! Each distinct [`DictionaryConfig`] gets one slot. The first caller for a
//! slot builds the set while holding the slot's mutex, so concurrent callers
//! for the same config wait and then share the result; callers for other
//! configs are not blocked. A failed build leaves the slot empty.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::{DictError, Dictionaries, DictionaryConfig};

type Slot = Arc<Mutex<Option<Arc<Dictionaries>>>>;

#[derive(Default)]
pub struct DictionaryRegistry {
    slots: Mutex<HashMap<DictionaryConfig, Slot>>,
}

impl DictionaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static DictionaryRegistry {
        static INSTANCE: OnceLock<DictionaryRegistry> = OnceLock::new();
        INSTANCE.get_or_init(DictionaryRegistry::new)
    }

    /// Return the memoized set for `config`, loading it on first use.
    pub fn get_or_load(&self, config: &DictionaryConfig) -> Result<Arc<Dictionaries>, DictError> {
        self.get_or_try_init(config, || Dictionaries::load(config))
    }

    /// Like [`get_or_load`](Self::get_or_load) with a caller-supplied builder.
    pub fn get_or_try_init<F>(
        &self,
        config: &DictionaryConfig,
        init: F,
    ) -> Result<Arc<Dictionaries>, DictError>
    where
        F: FnOnce() -> Result<Dictionaries, DictError>,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(config.clone()).or_default())
        };

        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dicts) = guard.as_ref() {
            debug!(home = %config.home.display(), "dictionary cache hit");
            return Ok(Arc::clone(dicts));
        }
        let dicts = Arc::new(init()?);
        *guard = Some(Arc::clone(&dicts));
        Ok(dicts)
    }

    /// Whether a fully built set is cached for `config`.
    pub fn contains(&self, config: &DictionaryConfig) -> bool {
        let slot = {
            let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            match slots.get(config) {
                Some(slot) => Arc::clone(slot),
                None => return false,
            }
        };
        let guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        guard.is_some()
    }

    /// Drop the cached set for `config`; the next request rebuilds it.
    pub fn evict(&self, config: &DictionaryConfig) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(config).is_some()
    }
}
