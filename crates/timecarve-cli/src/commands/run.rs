use std::fs;
use std::io::Read;

use timecarve_core::{Command, Session};

use super::OutputOpts;

/// Apply a JSON array of commands to a fresh session and print the result.
pub fn run(
    script: &str,
    duration: f64,
    allow_overlap: bool,
    output: &OutputOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if script == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(script)?
    };
    let commands: Vec<Command> = serde_json::from_str(&text)?;

    let mut session = Session::new(duration);
    session.set_overlap_policy(!allow_overlap);
    for command in commands {
        session.apply(command);
    }

    super::emit(&session, output)
}
