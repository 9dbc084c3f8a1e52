//! Operator console: line commands from stdin, applied to input latches.
//!
//! Parsing and validation happen here, at the boundary — malformed input
//! never reaches the controller.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use lift_common::types::Inputs;
use tracing::warn;

/// A parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    /// Command the lift upward.
    Up,
    /// Command the lift downward.
    Down,
    /// Explicit hold request.
    Hold,
    /// Clear the up/down/hold latches.
    Stop,
    /// Toggle the emergency stop channel.
    EstopToggle,
    /// Pulse the fault reset for one scan.
    ResetFault,
    /// Set the load weight [kg].
    SetLoad(f64),
    /// Exit the simulation.
    Quit,
    /// Print usage.
    Help,
}

impl ConsoleCommand {
    /// Parse a console line. Returns `None` for unknown or malformed
    /// input, including non-finite or negative load values.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "u" => Some(Self::Up),
            "d" => Some(Self::Down),
            "h" => Some(Self::Hold),
            "s" => Some(Self::Stop),
            "e" => Some(Self::EstopToggle),
            "r" => Some(Self::ResetFault),
            "q" => Some(Self::Quit),
            "help" => Some(Self::Help),
            _ => {
                let rest = line.strip_prefix('l')?.trim();
                let kg: f64 = rest.parse().ok()?;
                // The core's contract: load is a non-negative finite real.
                if kg.is_finite() && kg >= 0.0 {
                    Some(Self::SetLoad(kg))
                } else {
                    None
                }
            }
        }
    }
}

/// Apply a command to the operator input latches.
///
/// Up/down/hold are mutually exclusive latches; `reset_fault` stays set
/// only until the scan loop's next pulse default. `Quit` and `Help` are
/// handled by the loop and the reader thread respectively.
pub fn apply(cmd: ConsoleCommand, inputs: &mut Inputs) {
    match cmd {
        ConsoleCommand::Up => {
            inputs.cmd_up = true;
            inputs.cmd_down = false;
            inputs.cmd_hold = false;
        }
        ConsoleCommand::Down => {
            inputs.cmd_down = true;
            inputs.cmd_up = false;
            inputs.cmd_hold = false;
        }
        ConsoleCommand::Hold => {
            inputs.cmd_hold = true;
            inputs.cmd_up = false;
            inputs.cmd_down = false;
        }
        ConsoleCommand::Stop => {
            inputs.cmd_up = false;
            inputs.cmd_down = false;
            inputs.cmd_hold = false;
        }
        ConsoleCommand::EstopToggle => inputs.estop = !inputs.estop,
        ConsoleCommand::ResetFault => inputs.reset_fault = true,
        ConsoleCommand::SetLoad(kg) => inputs.load_kg = kg,
        ConsoleCommand::Quit | ConsoleCommand::Help => {}
    }
}

/// Print the console usage text.
pub fn print_help() {
    println!("Commands:");
    println!("  u       command up");
    println!("  d       command down");
    println!("  h       hold");
    println!("  s       stop commands (clear u/d/h)");
    println!("  e       toggle emergency stop");
    println!("  r       reset fault (only if stopped + estop released)");
    println!("  l <kg>  set load kg (e.g. l 900)");
    println!("  q       quit");
    println!("  help    print this text");
}

/// Spawn the stdin reader thread.
///
/// Lines are parsed here; only valid commands reach the scan loop. The
/// thread exits when stdin closes or the receiver is dropped.
pub fn spawn_reader() -> Receiver<ConsoleCommand> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match ConsoleCommand::parse(&line) {
                Some(ConsoleCommand::Help) => print_help(),
                Some(cmd) => {
                    if tx.send(cmd).is_err() {
                        break;
                    }
                }
                None => warn!("unknown command {:?}, type 'help'", line.trim()),
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_commands_parse() {
        assert_eq!(ConsoleCommand::parse("u"), Some(ConsoleCommand::Up));
        assert_eq!(ConsoleCommand::parse("d"), Some(ConsoleCommand::Down));
        assert_eq!(ConsoleCommand::parse("h"), Some(ConsoleCommand::Hold));
        assert_eq!(ConsoleCommand::parse("s"), Some(ConsoleCommand::Stop));
        assert_eq!(ConsoleCommand::parse("e"), Some(ConsoleCommand::EstopToggle));
        assert_eq!(ConsoleCommand::parse("r"), Some(ConsoleCommand::ResetFault));
        assert_eq!(ConsoleCommand::parse("q"), Some(ConsoleCommand::Quit));
        assert_eq!(ConsoleCommand::parse("help"), Some(ConsoleCommand::Help));
    }

    #[test]
    fn load_command_parses_with_and_without_space() {
        assert_eq!(
            ConsoleCommand::parse("l 900"),
            Some(ConsoleCommand::SetLoad(900.0))
        );
        assert_eq!(
            ConsoleCommand::parse("l900"),
            Some(ConsoleCommand::SetLoad(900.0))
        );
        assert_eq!(
            ConsoleCommand::parse("  l 0  "),
            Some(ConsoleCommand::SetLoad(0.0))
        );
    }

    #[test]
    fn malformed_load_is_rejected_at_the_boundary() {
        assert_eq!(ConsoleCommand::parse("l"), None);
        assert_eq!(ConsoleCommand::parse("l abc"), None);
        assert_eq!(ConsoleCommand::parse("l -5"), None);
        assert_eq!(ConsoleCommand::parse("l NaN"), None);
        assert_eq!(ConsoleCommand::parse("l inf"), None);
    }

    #[test]
    fn unknown_lines_are_rejected() {
        assert_eq!(ConsoleCommand::parse(""), None);
        assert_eq!(ConsoleCommand::parse("x"), None);
        assert_eq!(ConsoleCommand::parse("up"), None);
    }

    #[test]
    fn up_down_hold_are_mutually_exclusive_latches() {
        let mut inputs = Inputs::default();

        apply(ConsoleCommand::Up, &mut inputs);
        assert!(inputs.cmd_up && !inputs.cmd_down && !inputs.cmd_hold);

        apply(ConsoleCommand::Down, &mut inputs);
        assert!(!inputs.cmd_up && inputs.cmd_down && !inputs.cmd_hold);

        apply(ConsoleCommand::Hold, &mut inputs);
        assert!(!inputs.cmd_up && !inputs.cmd_down && inputs.cmd_hold);

        apply(ConsoleCommand::Stop, &mut inputs);
        assert!(!inputs.cmd_up && !inputs.cmd_down && !inputs.cmd_hold);
    }

    #[test]
    fn estop_toggles() {
        let mut inputs = Inputs::default();
        apply(ConsoleCommand::EstopToggle, &mut inputs);
        assert!(inputs.estop);
        apply(ConsoleCommand::EstopToggle, &mut inputs);
        assert!(!inputs.estop);
    }

    #[test]
    fn reset_sets_the_pulse() {
        let mut inputs = Inputs::default();
        apply(ConsoleCommand::ResetFault, &mut inputs);
        assert!(inputs.reset_fault);
    }

    #[test]
    fn set_load_updates_weight() {
        let mut inputs = Inputs::default();
        apply(ConsoleCommand::SetLoad(950.0), &mut inputs);
        assert_eq!(inputs.load_kg, 950.0);
    }
}
