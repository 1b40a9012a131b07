use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::{OperationError, Result};

fn describe(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

fn finish(command: String, output: Output) -> Result<String> {
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(OperationError::CommandFailed { command, stderr })
    }
}

/// Run a tool in `workdir` and return its trimmed standard output.
pub(crate) fn run_tool(workdir: &Path, program: &str, args: &[String]) -> Result<String> {
    let command = describe(program, args);
    debug!(command = %command, workdir = %workdir.display(), "running tool");

    let output = Command::new(program)
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|source| OperationError::CommandSpawn {
            command: command.clone(),
            source,
        })?;

    finish(command, output)
}

/// Run a long-lived tool with its standard output on the console.
///
/// Standard error is still captured for the failure report.
pub(crate) fn run_tool_streaming(workdir: &Path, program: &str, args: &[String]) -> Result<()> {
    let command = describe(program, args);
    debug!(command = %command, workdir = %workdir.display(), "running tool");

    let output = Command::new(program)
        .args(args)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .output()
        .map_err(|source| OperationError::CommandSpawn {
            command: command.clone(),
            source,
        })?;

    finish(command, output).map(|_| ())
}
