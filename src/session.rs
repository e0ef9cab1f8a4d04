//! Session launcher: starts the remote echo session over ssh

use crate::{
    error::{AppError, Result},
    logging::Logger,
    models::Config,
};
use std::process::Stdio;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

/// A running remote session and its two byte streams
///
/// Writes to [`Session::stdin`] reach the remote echo command; its output
/// comes back on [`Session::stdout`]. The session process is killed when the
/// `Session` is dropped.
#[derive(Debug)]
pub struct Session {
    child: Child,
    stdin: ChildStdin,
    stdout: ChildStdout,
}

impl Session {
    /// Spawn `<ssh_program> <host> -- <remote_command>` with piped stdio
    ///
    /// stderr is inherited so password prompts and ssh diagnostics stay
    /// visible. There is no retry: any failure here ends the run.
    pub fn launch(config: &Config) -> Result<Self> {
        let logger = Logger::with_config("SESSION", config);
        let args = config.session_args();

        logger
            .info("Starting remote session")
            .field("program", &config.ssh_program)
            .field("args", args)
            .log();

        let mut child = Command::new(&config.ssh_program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AppError::launch(format!("failed to start `{}`: {}", config.ssh_program, e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::launch("session stdin is not available"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::launch("session stdout is not available"))?;

        logger
            .debug("Remote session started")
            .field("pid", child.id())
            .log();

        Ok(Self { child, stdin, stdout })
    }

    /// Both streams at once, for the sampling loop
    pub fn streams(&mut self) -> (&mut ChildStdin, &mut ChildStdout) {
        (&mut self.stdin, &mut self.stdout)
    }

    /// OS process id, if the process has not been reaped yet
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }
}
