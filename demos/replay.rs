//! Replay a key sequence through a calculator session
//!
//! Prints every display frame and notification as the keys are applied.
//! A sixth consecutive operator ends the run with a non-zero exit code.
//!
//! Run with: cargo run --example replay -- "12+3×4="
//! Set RUST_LOG=zcalc=debug to see each dispatch.

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zcalc::core::parse_keys;
use zcalc::effects::{Calculator, DisplaySink, Frame, NotificationSink};

struct Console;

impl DisplaySink for Console {
    fn show(&mut self, frame: &Frame) {
        if frame.secondary_visible {
            println!("{:>12}  [{}]", frame.primary, frame.secondary);
        } else {
            println!("{:>12}", frame.primary);
        }
    }
}

impl NotificationSink for Console {
    fn notify(&mut self, message: &str) {
        println!("  ! {message}");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keys = std::env::args().skip(1).collect::<Vec<_>>().join("");
    let actions = match parse_keys(&keys) {
        Ok(actions) => actions,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut calculator = Calculator::new();
    let mut console = Console;
    calculator.boot(&mut console);

    match calculator.run(actions, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(fatal) => {
            eprintln!("fatal: {fatal}");
            ExitCode::FAILURE
        }
    }
}
