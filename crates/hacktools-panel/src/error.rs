use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing plugin storage: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("no snippet named '{0}'")]
    UnknownSnippet(String),

    #[error("snippet name must not be empty")]
    EmptySnippetName,

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
