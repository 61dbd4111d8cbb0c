//! Subprocess transport.

use super::Transport;
use crate::config::models::TransportConfig;
use crate::source::base::SourceError;
use async_trait::async_trait;
use sk_protocol::request::RemoteRequest;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Answers requests by running an external command.
///
/// The command gets its configured arguments followed by the request's
/// `field=query` pair, with `SUGGEST_ENDPOINT` and `SUGGEST_METHOD` set in
/// its environment. Its stdout is the response body; a non-zero exit status
/// is a transport failure.
#[derive(Debug, Clone)]
pub struct CommandTransport {
    command: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandTransport {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
        }
    }
}

#[async_trait]
impl Transport for CommandTransport {
    async fn send(&self, request: &RemoteRequest) -> Result<String, SourceError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .arg(request.form_pair())
            .env("SUGGEST_ENDPOINT", &request.endpoint)
            .env("SUGGEST_METHOD", request.method.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(command = %self.command, query = %request.query, "sending remote request");

        let output = cmd.output().await.map_err(|e| {
            SourceError::Transport(format!("Failed to spawn command '{}': {}", self.command, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Transport(format!(
                "Command '{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| SourceError::MalformedResponse(format!("Response is not valid UTF-8: {e}")))
    }
}
