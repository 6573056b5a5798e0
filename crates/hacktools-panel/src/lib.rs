//! Orchestration of the HackTools sidebar page over host-provided collaborators.
//!
//! The host supplies a [`store::KeyValueStore`] for the persisted plugin blob and a
//! [`clipboard::Clipboard`]. [`panel::Panel`] wires the transforms from
//! `hacktools-transform` into editable panes, registers the plugin's commands and keeps
//! saved snippets in the store.

#![forbid(unsafe_code)]

pub mod clipboard;
pub mod commands;
pub mod error;
pub mod panel;
pub mod storage;
pub mod store;

pub use error::{PanelError, StoreError};
pub use panel::{Direction, Output, Panel};
