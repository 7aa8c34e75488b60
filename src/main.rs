mod error;
mod signals;
mod waiter;

use std::process::ExitCode;
use waiter::Waiter;

fn main() -> ExitCode {
    env_logger::init();
    Waiter::default().run().into()
}
