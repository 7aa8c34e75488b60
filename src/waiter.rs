use crate::error::Result;
use crate::signals;
use nix::sys::signal::Signal;
use std::process::ExitCode;

/// Exit status of the process once the waiter reaches its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Woken by a signal.
    Signalled = 0,
    /// Handlers could not be installed.
    SetupFailed = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Init,
    HandlersInstalled,
    Suspended,
    Terminated(ExitStatus),
}

pub struct Waiter {
    signals: Vec<Signal>,
    state: State,
}

impl Waiter {
    pub fn new(signals: impl Into<Vec<Signal>>) -> Self {
        Self {
            signals: signals.into(),
            state: State::Init,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Install handlers for the configured signals. Only acts in `Init`.
    pub fn install(&mut self) -> Result<()> {
        if self.state != State::Init {
            return Ok(());
        }

        match signals::install_handlers(&self.signals) {
            Ok(()) => {
                self.state = State::HandlersInstalled;
                Ok(())
            }
            Err(e) => {
                self.state = State::Terminated(ExitStatus::SetupFailed);
                Err(e)
            }
        }
    }

    /// Sleep until a signal arrives. A handled signal exits the process from
    /// its handler; any other return from the wait also ends in `Signalled`.
    pub fn suspend(&mut self) -> ExitStatus {
        match self.state {
            State::HandlersInstalled => {}
            State::Terminated(status) => return status,
            _ => return ExitStatus::SetupFailed,
        }

        self.state = State::Suspended;
        log::trace!("Suspending with empty signal mask");
        if let Err(e) = signals::suspend() {
            log::debug!("{}", e);
        }
        log::debug!("Signal wait returned");

        self.state = State::Terminated(ExitStatus::Signalled);
        ExitStatus::Signalled
    }

    pub fn run(mut self) -> ExitStatus {
        if let Err(e) = self.install() {
            log::debug!("{} (state: {:?})", e, self.state());
            return ExitStatus::SetupFailed;
        }
        self.suspend()
    }
}

impl Default for Waiter {
    fn default() -> Self {
        Self::new(signals::TERMINATION_SIGNALS)
    }
}
