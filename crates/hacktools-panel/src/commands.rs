//! Named commands the host can run from buttons, the command palette or key bindings

use tracing::debug;

use crate::clipboard::Clipboard;
use crate::error::PanelError;
use crate::store::KeyValueStore;

/// Prefix shared by every command id and the page path.
pub const PLUGIN_ID: &str = "hack-tools";

pub const DECREMENT: &str = "hack-tools.decrement";
pub const COPY_NULL_BYTE: &str = "hack-tools.copy-null-byte";

/// What `copy-null-byte` places on the clipboard.
pub const NULL_BYTE: &str = "\0";

pub type Handler<Ctx> = Box<dyn Fn(&Ctx) -> Result<(), PanelError>>;

pub struct Command<Ctx> {
    id: String,
    name: String,
    run: Handler<Ctx>,
}

impl<Ctx> Command<Ctx> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name suitable for display to a user
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Commands keyed by id, plus the subset offered in the command palette.
pub struct CommandRegistry<Ctx> {
    commands: Vec<Command<Ctx>>,
    palette: Vec<String>,
}

impl<Ctx> Default for CommandRegistry<Ctx> {
    fn default() -> Self {
        CommandRegistry {
            commands: Vec::new(),
            palette: Vec::new(),
        }
    }
}

impl<Ctx> CommandRegistry<Ctx> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `run` under `id`. Ids are unique.
    pub fn register<F>(&mut self, id: &str, name: &str, run: F) -> Result<(), PanelError>
    where
        F: Fn(&Ctx) -> Result<(), PanelError> + 'static,
    {
        if self.get(id).is_some() {
            return Err(PanelError::DuplicateCommand(id.to_string()));
        }

        debug!("Registering command {id} ({name})");
        self.commands.push(Command {
            id: id.to_string(),
            name: name.to_string(),
            run: Box::new(run),
        });
        Ok(())
    }

    /// Offer an already registered command in the command palette.
    pub fn register_in_palette(&mut self, id: &str) -> Result<(), PanelError> {
        if self.get(id).is_none() {
            return Err(PanelError::UnknownCommand(id.to_string()));
        }
        if !self.palette.iter().any(|p| p == id) {
            self.palette.push(id.to_string());
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Command<Ctx>> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn run(&self, id: &str, ctx: &Ctx) -> Result<(), PanelError> {
        let command = self
            .get(id)
            .ok_or_else(|| PanelError::UnknownCommand(id.to_string()))?;

        debug!("Running command {}", command.id);
        (command.run)(ctx)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command<Ctx>> {
        self.commands.iter()
    }

    /// Palette entries in registration order.
    pub fn palette(&self) -> impl Iterator<Item = &Command<Ctx>> {
        self.palette.iter().filter_map(|id| self.get(id))
    }
}

/// The stored count; zero when nothing has been stored yet.
pub fn current_count(store: &dyn KeyValueStore) -> i64 {
    store.get().map(|s| s.count).unwrap_or(0)
}

/// Store `count - 1`, keeping everything else in the blob. The count stops at `i64::MIN`.
pub fn decrement(store: &dyn KeyValueStore) -> Result<(), PanelError> {
    let mut storage = store.get().unwrap_or_default();
    storage.count = storage.count.saturating_sub(1);
    store.set(storage)?;
    Ok(())
}

pub fn copy_null_byte(clipboard: &dyn Clipboard) -> Result<(), PanelError> {
    clipboard.write_text(NULL_BYTE);
    Ok(())
}
