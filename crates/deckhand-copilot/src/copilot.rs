//! copilot CLI wrapper
//!
//! Wraps the AWS Copilot CLI commands used by the deployment pipeline.

use crate::error::{CopilotError, Result};
use crate::runner::{self, CommandOutput};
use std::time::Duration;
use tokio::process::Command;

/// Wall-clock budget for a deploy (10 minutes)
pub const DEPLOY_TIMEOUT: Duration = Duration::from_secs(600);

/// copilot CLI wrapper
pub struct Copilot {
    program: String,
}

impl Default for Copilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Copilot {
    pub fn new() -> Self {
        Self {
            program: "copilot".to_string(),
        }
    }

    /// Use a different binary name/path (tests point this at a stub).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the copilot CLI is installed
    pub async fn check_installed(&self) -> Result<()> {
        let which = Command::new("which").arg(&self.program).output().await?;

        if !which.status.success() {
            return Err(CopilotError::CopilotNotFound);
        }

        Ok(())
    }

    /// List all Copilot applications (`copilot app ls`)
    pub async fn list_apps(&self) -> Result<Vec<String>> {
        let output = self.run(&["app", "ls"]).await?;
        Ok(output
            .stdout_lines()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// List services of an application (`copilot svc ls --app <APP>`)
    pub async fn list_services(&self, app: &str) -> Result<CommandOutput> {
        self.run(&["svc", "ls", "--app", app]).await
    }

    /// Force a redeploy of a service
    /// (`copilot deploy --name <SVC> --app <APP> --env <ENV> --force`)
    ///
    /// Bounded by [`DEPLOY_TIMEOUT`]; exceeding it is a distinct timeout
    /// failure. The runner's output is returned unchanged.
    pub async fn deploy(&self, svc: &str, app: &str, env: &str) -> Result<CommandOutput> {
        let argv = self.argv(&[
            "deploy", "--name", svc, "--app", app, "--env", env, "--force",
        ]);
        runner::run_with_timeout(&argv, DEPLOY_TIMEOUT).await
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        runner::run(&self.argv(args)).await
    }

    fn argv(&self, args: &[&str]) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(args.iter().map(|s| s.to_string()));
        argv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_argv_shape() {
        let copilot = Copilot::new();
        let argv = copilot.argv(&[
            "deploy", "--name", "api", "--app", "hello-copilot", "--env", "Dev", "--force",
        ]);
        assert_eq!(
            argv,
            [
                "copilot",
                "deploy",
                "--name",
                "api",
                "--app",
                "hello-copilot",
                "--env",
                "Dev",
                "--force"
            ]
        );
    }

    #[test]
    fn test_deploy_timeout_is_ten_minutes() {
        assert_eq!(DEPLOY_TIMEOUT, Duration::from_secs(600));
    }

    #[tokio::test]
    async fn test_check_installed_missing_binary() {
        let copilot = Copilot::with_program("copilot-binary-that-does-not-exist");
        assert!(matches!(
            copilot.check_installed().await,
            Err(CopilotError::CopilotNotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_apps_via_stub() {
        // `echo` as the program: `echo app ls` prints "app ls"
        let copilot = Copilot::with_program("echo");
        let apps = copilot.list_apps().await.unwrap();
        assert_eq!(apps, ["app ls"]);
    }
}
