use nix::sys::signal::Signal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreezeError {
    #[error("Failed to install handler for {signal}: {source}")]
    HandlerInstall {
        signal: Signal,
        #[source]
        source: nix::Error,
    },

    #[error("Signal wait failed: {0}")]
    Suspend(#[source] nix::Error),
}

pub type Result<T> = std::result::Result<T, FreezeError>;
