//! The HackTools page: editable panes whose outputs are recomputed on every edit

use std::cell::Cell;
use std::rc::Rc;

use hacktools_transform::{
    DecodedToken, decode_base64, decode_token, decode_url, display_text, encode_base64,
    encode_token, encode_url,
};
use tracing::{debug, trace};

use crate::clipboard::Clipboard;
use crate::commands::{
    COPY_NULL_BYTE, CommandRegistry, DECREMENT, copy_null_byte, current_count, decrement,
};
use crate::error::PanelError;
use crate::storage::{PluginStorage, Snippet};
use crate::store::KeyValueStore;

/// Path of the page within the host.
pub const PAGE: &str = "/hack-tools";

/// How the page is listed in the host's sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const SIDEBAR_ITEM: SidebarItem = SidebarItem {
    label: "HackTools",
    path: PAGE,
    icon: "fas fa-rocket",
};

/// The collaborators the host injects.
pub struct Host<S, C> {
    pub store: S,
    pub clipboard: C,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTransform {
    Base64,
    Url,
}

impl TextTransform {
    fn apply(self, direction: Direction, input: &str) -> String {
        match (self, direction) {
            (TextTransform::Base64, Direction::Encode) => display_text(encode_base64(input)),
            (TextTransform::Base64, Direction::Decode) => display_text(decode_base64(input)),
            (TextTransform::Url, Direction::Encode) => encode_url(input),
            (TextTransform::Url, Direction::Decode) => display_text(decode_url(input)),
        }
    }
}

/// A single input field with a single output field.
#[derive(Debug)]
pub struct TextPane {
    transform: TextTransform,
    direction: Direction,
    input: String,
    output: String,
}

impl TextPane {
    fn new(transform: TextTransform) -> TextPane {
        TextPane {
            transform,
            direction: Direction::default(),
            input: String::new(),
            output: String::new(),
        }
    }

    fn refresh(&mut self) {
        self.output = self.transform.apply(self.direction, &self.input);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text on display: the transform output or a failure marker.
    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Token fields: a token to split, and header/payload/signature to join.
#[derive(Debug, Default)]
pub struct TokenPane {
    token: String,
    decoded: DecodedToken,
    header: String,
    payload: String,
    signature: String,
    encoded: String,
}

impl TokenPane {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn decoded(&self) -> &DecodedToken {
        &self.decoded
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The header, payload and signature inputs last joined.
    pub fn parts(&self) -> (&str, &str, &str) {
        (&self.header, &self.payload, &self.signature)
    }
}

/// Every output field a copy button can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Base64,
    Url,
    TokenHeader,
    TokenPayload,
    TokenSignature,
    EncodedToken,
}

pub struct Panel<S, C> {
    host: Host<S, C>,
    commands: CommandRegistry<Host<S, C>>,
    base64: TextPane,
    url: TextPane,
    token: TokenPane,
    count: Rc<Cell<i64>>,
}

impl<S, C> Panel<S, C>
where
    S: KeyValueStore + 'static,
    C: Clipboard + 'static,
{
    /// Build the page, register its commands and start tracking the stored count.
    pub fn new(store: S, clipboard: C) -> Result<Self, PanelError> {
        let count = Rc::new(Cell::new(current_count(&store)));
        let displayed = Rc::clone(&count);
        store.on_change(Box::new(move |storage: &PluginStorage| {
            displayed.set(storage.count)
        }));

        let mut commands = CommandRegistry::new();
        commands.register(COPY_NULL_BYTE, "CopyNullByte", |host: &Host<S, C>| {
            copy_null_byte(&host.clipboard)
        })?;
        commands.register(DECREMENT, "Decrement", |host: &Host<S, C>| {
            decrement(&host.store)
        })?;
        commands.register_in_palette(DECREMENT)?;

        debug!(
            "Registered page {} as sidebar item '{}'",
            SIDEBAR_ITEM.path, SIDEBAR_ITEM.label
        );

        Ok(Panel {
            host: Host { store, clipboard },
            commands,
            base64: TextPane::new(TextTransform::Base64),
            url: TextPane::new(TextTransform::Url),
            token: TokenPane::default(),
            count,
        })
    }

    pub fn sidebar_item(&self) -> SidebarItem {
        SIDEBAR_ITEM
    }

    pub fn host(&self) -> &Host<S, C> {
        &self.host
    }

    pub fn commands(&self) -> &CommandRegistry<Host<S, C>> {
        &self.commands
    }

    pub fn run_command(&self, id: &str) -> Result<(), PanelError> {
        self.commands.run(id, &self.host)
    }

    /// The count as last reported by the store's change notification.
    pub fn count(&self) -> i64 {
        self.count.get()
    }

    pub fn base64(&self) -> &TextPane {
        &self.base64
    }

    pub fn url(&self) -> &TextPane {
        &self.url
    }

    pub fn token(&self) -> &TokenPane {
        &self.token
    }

    pub fn edit_base64(&mut self, input: &str) {
        trace!("base64 input: {} bytes", input.len());
        self.base64.input = input.to_string();
        self.base64.refresh();
    }

    pub fn set_base64_direction(&mut self, direction: Direction) {
        self.base64.direction = direction;
        self.base64.refresh();
    }

    pub fn edit_url(&mut self, input: &str) {
        trace!("url input: {} bytes", input.len());
        self.url.input = input.to_string();
        self.url.refresh();
    }

    pub fn set_url_direction(&mut self, direction: Direction) {
        self.url.direction = direction;
        self.url.refresh();
    }

    pub fn edit_token(&mut self, token: &str) {
        trace!("token input: {} bytes", token.len());
        self.token.token = token.to_string();
        self.token.decoded = decode_token(token);
    }

    pub fn edit_token_parts(&mut self, header: &str, payload: &str, signature: &str) {
        self.token.header = header.to_string();
        self.token.payload = payload.to_string();
        self.token.signature = signature.to_string();
        self.token.encoded = display_text(encode_token(header, payload, signature));
    }

    /// The text currently shown in `output`.
    pub fn output(&self, output: Output) -> &str {
        match output {
            Output::Base64 => self.base64.output(),
            Output::Url => self.url.output(),
            Output::TokenHeader => &self.token.decoded.header,
            Output::TokenPayload => &self.token.decoded.payload,
            Output::TokenSignature => &self.token.decoded.signature,
            Output::EncodedToken => &self.token.encoded,
        }
    }

    /// Copy the displayed text of `output` verbatim.
    pub fn copy_output(&self, output: Output) {
        debug!("Copying {:?} output", output);
        self.host.clipboard.write_text(self.output(output));
    }

    pub fn snippets(&self) -> Vec<Snippet> {
        self.host
            .store
            .get()
            .map(|s| s.snippets)
            .unwrap_or_default()
    }

    /// Save `value` under `name`, replacing any snippet of that name.
    pub fn save_snippet(&self, name: &str, value: &str) -> Result<(), PanelError> {
        if name.trim().is_empty() {
            return Err(PanelError::EmptySnippetName);
        }

        let mut storage = self.host.store.get().unwrap_or_default();
        storage.upsert_snippet(Snippet {
            name: name.to_string(),
            value: value.to_string(),
        });
        self.host.store.set(storage)?;
        Ok(())
    }

    /// Save the text currently shown in `output` as a snippet.
    pub fn save_output_as_snippet(&self, name: &str, output: Output) -> Result<(), PanelError> {
        self.save_snippet(name, self.output(output))
    }

    pub fn remove_snippet(&self, name: &str) -> Result<(), PanelError> {
        let mut storage = self.host.store.get().unwrap_or_default();
        if storage.remove_snippet(name).is_none() {
            return Err(PanelError::UnknownSnippet(name.to_string()));
        }
        self.host.store.set(storage)?;
        Ok(())
    }

    pub fn copy_snippet(&self, name: &str) -> Result<(), PanelError> {
        let storage = self.host.store.get().unwrap_or_default();
        let snippet = storage
            .snippet(name)
            .ok_or_else(|| PanelError::UnknownSnippet(name.to_string()))?;

        self.host.clipboard.write_text(&snippet.value);
        Ok(())
    }
}
