use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("unknown theme preference {0:?}")]
    UnknownTheme(String),
    #[error("hacker-mode transition already in progress")]
    TransitionInProgress,
    #[error("unknown tab {0:?}")]
    UnknownTab(String),
}
