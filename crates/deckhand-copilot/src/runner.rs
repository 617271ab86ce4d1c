//! Generic external command runner
//!
//! Runs an argv with captured output. Commands are always built as
//! structured argument lists, never interpolated into a shell string.

use crate::error::{CopilotError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Captured result of an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stdout split into non-empty lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Split an operator-supplied command string into an argv.
///
/// The string is executed verbatim, so an untrusted parameter source is an
/// unchecked command-injection surface. Callers must only feed this from
/// trusted pipeline configuration.
pub fn split_command(command: &str) -> Result<Vec<String>> {
    let argv =
        shlex::split(command).ok_or_else(|| CopilotError::UnparseableCommand(command.to_string()))?;

    if argv.is_empty() {
        return Err(CopilotError::EmptyCommand);
    }

    Ok(argv)
}

/// Run an argv, capturing stdout and stderr.
///
/// A non-zero exit status is an error carrying the exit code.
pub async fn run(argv: &[String]) -> Result<CommandOutput> {
    let (program, args) = argv.split_first().ok_or(CopilotError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Running: {}", argv.join(" "));

    let output = cmd.output().await?;
    into_result(output)
}

/// Run an argv with a wall-clock budget.
///
/// Exceeding the budget is a distinct failure from a non-zero exit.
pub async fn run_with_timeout(argv: &[String], budget: Duration) -> Result<CommandOutput> {
    let (program, args) = argv.split_first().ok_or(CopilotError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true);

    tracing::debug!(
        "Running with {}s budget: {}",
        budget.as_secs(),
        argv.join(" ")
    );

    let output = match timeout(budget, cmd.output()).await {
        Ok(output) => output?,
        Err(_) => return Err(CopilotError::Timeout(budget.as_secs())),
    };

    into_result(output)
}

fn into_result(output: std::process::Output) -> Result<CommandOutput> {
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        return Err(CopilotError::CommandFailed {
            code: exit_code,
            stderr,
        });
    }

    Ok(CommandOutput {
        exit_code,
        stdout,
        stderr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_command() {
        let argv = split_command("ls -lrt /tmp").unwrap();
        assert_eq!(argv, ["ls", "-lrt", "/tmp"]);
    }

    #[test]
    fn test_split_command_quoted() {
        let argv = split_command("echo 'hello world'").unwrap();
        assert_eq!(argv, ["echo", "hello world"]);
    }

    #[test]
    fn test_split_command_empty() {
        assert!(matches!(split_command(""), Err(CopilotError::EmptyCommand)));
        assert!(matches!(
            split_command("   "),
            Err(CopilotError::EmptyCommand)
        ));
    }

    #[test]
    fn test_split_command_unbalanced_quote() {
        assert!(matches!(
            split_command("echo 'unterminated"),
            Err(CopilotError::UnparseableCommand(_))
        ));
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = run(&argv(&["echo", "hello"])).await.unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_run_nonzero_exit_carries_code() {
        let result = run(&argv(&["sh", "-c", "exit 2"])).await;
        match result {
            Err(CopilotError::CommandFailed { code, .. }) => assert_eq!(code, 2),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_with_timeout_expires() {
        let result = run_with_timeout(&argv(&["sleep", "5"]), Duration::from_millis(100)).await;
        assert!(matches!(result, Err(CopilotError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_run_with_timeout_completes() {
        let output = run_with_timeout(&argv(&["echo", "done"]), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(output.stdout.trim(), "done");
    }

    #[tokio::test]
    async fn test_timeout_is_distinct_from_failure() {
        // A non-zero exit inside the budget is CommandFailed, not Timeout
        let result = run_with_timeout(&argv(&["sh", "-c", "exit 3"]), Duration::from_secs(5)).await;
        assert!(matches!(
            result,
            Err(CopilotError::CommandFailed { code: 3, .. })
        ));
    }

    #[test]
    fn test_stdout_lines() {
        let output = CommandOutput {
            exit_code: 0,
            stdout: "app-one\napp-two\n\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.stdout_lines(), ["app-one", "app-two"]);
    }
}
