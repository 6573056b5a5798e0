//! Key-value storage for the plugin blob, as provided by the host

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::error::StoreError;
use crate::storage::PluginStorage;

/// Called with the new value after every successful `set`.
pub type Listener = Box<dyn Fn(&PluginStorage)>;

/// The host's persistence facility: a single blob with get/set/change-notify.
pub trait KeyValueStore {
    /// The stored blob, or `None` if nothing has been stored yet.
    fn get(&self) -> Option<PluginStorage>;
    fn set(&self, value: PluginStorage) -> Result<(), StoreError>;
    fn on_change(&self, listener: Listener);
}

#[derive(Default)]
struct Listeners(RefCell<Vec<Rc<dyn Fn(&PluginStorage)>>>);

impl Listeners {
    fn push(&self, listener: Listener) {
        self.0.borrow_mut().push(Rc::from(listener));
    }

    /// Calls the listeners registered before this call. A listener may register
    /// more; those see the next change.
    fn notify(&self, value: &PluginStorage) {
        let listeners = self.0.borrow().clone();
        trace!("notifying {} storage listeners", listeners.len());
        for listener in listeners {
            listener(value);
        }
    }
}

/// In-process store; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    value: RefCell<Option<PluginStorage>>,
    listeners: Listeners,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn from_value(value: PluginStorage) -> MemoryStore {
        MemoryStore {
            value: RefCell::new(Some(value)),
            listeners: Listeners::default(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self) -> Option<PluginStorage> {
        self.value.borrow().clone()
    }

    fn set(&self, value: PluginStorage) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.clone());
        self.listeners.notify(&value);
        Ok(())
    }

    fn on_change(&self, listener: Listener) {
        self.listeners.push(listener);
    }
}

/// Persists the blob as pretty-printed JSON in a single file.
///
/// A missing file reads as `None`. So does an unparsable one, after logging a warning; the
/// next `set` overwrites it.
pub struct JsonFileStore {
    path: PathBuf,
    listeners: Listeners,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> JsonFileStore {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
            listeners: Listeners::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Option<PluginStorage>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(PluginStorage::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self) -> Option<PluginStorage> {
        self.try_load().unwrap_or_else(|e| {
            warn!("Ignoring plugin storage at '{}': {e}", self.path.display());
            None
        })
    }

    fn set(&self, value: PluginStorage) -> Result<(), StoreError> {
        let json = value.to_json()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        debug!("Wrote plugin storage to '{}'", self.path.display());

        self.listeners.notify(&value);
        Ok(())
    }

    fn on_change(&self, listener: Listener) {
        self.listeners.push(listener);
    }
}
