//! Outcome display: the two console lines, or JSON for machine consumers.

use crate::trigger::ResetOutcome;

/// The human-readable line for an outcome.
pub fn log_line(outcome: &ResetOutcome) -> String {
    match outcome {
        ResetOutcome::Completed { status } => {
            format!("Database reset successfully. Status: {status}")
        }
        ResetOutcome::Failed { error } => format!("Error resetting database: {error}"),
    }
}

/// Print an outcome: success to stdout, failure to stderr. JSON mode goes
/// to stdout on both branches so other programs can read it.
pub fn emit(outcome: &ResetOutcome, json: bool) {
    if json {
        let line = serde_json::to_string(outcome).expect("outcome serializes to JSON");
        println!("{line}");
        return;
    }
    match outcome {
        ResetOutcome::Completed { .. } => println!("{}", log_line(outcome)),
        ResetOutcome::Failed { .. } => eprintln!("{}", log_line(outcome)),
    }
}
