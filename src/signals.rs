use crate::error::{FreezeError, Result};
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

/// Signals that ask the process to stop.
pub const TERMINATION_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGTERM];

/// Runs in signal context: only `_exit` is called here.
extern "C" fn terminate(_signum: libc::c_int) {
    unsafe { libc::_exit(0) }
}

/// Handler disposition for the termination signals: empty mask, no flags.
pub fn termination_action() -> SigAction {
    SigAction::new(
        SigHandler::Handler(terminate),
        SaFlags::empty(),
        SigSet::empty(),
    )
}

/// Install the termination handler for every signal in `signals`, stopping
/// at the first failure.
pub fn install_handlers(signals: &[Signal]) -> Result<()> {
    let action = termination_action();
    for &signal in signals {
        // Safety: `terminate` only calls the async-signal-safe `_exit`.
        unsafe { sigaction(signal, &action) }
            .map_err(|source| FreezeError::HandlerInstall { signal, source })?;
        log::debug!("Installed termination handler for {}", signal);
    }
    Ok(())
}

/// Atomically clear the blocked mask and sleep until a signal is dispatched.
/// Returns `Ok(())` when a handled signal interrupted the wait.
pub fn suspend() -> Result<()> {
    SigSet::empty().suspend().map_err(FreezeError::Suspend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_signals_are_int_and_term() {
        assert_eq!(TERMINATION_SIGNALS, [Signal::SIGINT, Signal::SIGTERM]);
    }

    #[test]
    fn test_termination_action_has_no_flags_or_mask() {
        let action = termination_action();
        assert_eq!(action.flags(), SaFlags::empty());
        for signal in Signal::iterator() {
            assert!(!action.mask().contains(signal), "{} unexpectedly masked", signal);
        }
        assert!(matches!(action.handler(), SigHandler::Handler(_)));
    }

    #[test]
    fn test_install_fails_for_sigkill() {
        let err = install_handlers(&[Signal::SIGKILL]).unwrap_err();
        match err {
            FreezeError::HandlerInstall { signal, source } => {
                assert_eq!(signal, Signal::SIGKILL);
                assert_eq!(source, nix::errno::Errno::EINVAL);
            }
            other => panic!("expected HandlerInstall, got {:?}", other),
        }
    }

    #[test]
    fn test_install_stops_at_first_failure() {
        let err = install_handlers(&[Signal::SIGSTOP, Signal::SIGKILL]).unwrap_err();
        assert!(matches!(
            err,
            FreezeError::HandlerInstall { signal: Signal::SIGSTOP, .. }
        ));
    }

    #[test]
    fn test_install_writes_disposition() {
        // SIGUSR2 is not used by the test harness; restore the default afterwards.
        install_handlers(&[Signal::SIGUSR2]).unwrap();
        let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
        let previous = unsafe { sigaction(Signal::SIGUSR2, &default) }.unwrap();
        assert!(matches!(previous.handler(), SigHandler::Handler(_)));
        assert!(!previous.flags().contains(SaFlags::SA_RESTART));
        assert!(!previous.flags().contains(SaFlags::SA_SIGINFO));
        assert!(!previous.flags().contains(SaFlags::SA_RESETHAND));
    }
}
