use std::{future::Future, io, process::Stdio};

use tokio::{io::AsyncWriteExt, process::Command};

use super::{
    error::GenerationError,
    service::{ApiKey, GenerationOptions},
};

/// Environment variable carrying the credential into external generators.
pub const API_KEY_ENV: &str = "LESSON_GENERATOR_API_KEY";

/// A source of model-generated lesson text.
pub trait TextGenerator {
    fn generate(
        &self,
        credential: &ApiKey,
        prompt: &str,
        options: &GenerationOptions,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Runs an external program that reads the prompt on stdin and prints the lesson.
///
/// The credential and model settings are passed through the environment:
/// [`API_KEY_ENV`], `LESSON_MODEL`, `LESSON_TEMPERATURE` and `LESSON_MAX_TOKENS`.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds a generator from an argv list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TextGenerator for CommandGenerator {
    async fn generate(
        &self,
        credential: &ApiKey,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let spawn_err = |source: io::Error| GenerationError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(API_KEY_ENV, credential.expose())
            .env("LESSON_MODEL", &options.model)
            .env("LESSON_TEMPERATURE", options.temperature.to_string())
            .env("LESSON_MAX_TOKENS", options.max_tokens.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_err)?;

        // A generator may exit without reading its stdin; its output still counts.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(prompt.as_bytes()).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    log::debug!("{} closed stdin before reading the whole prompt", self.program);
                }
                Err(source) => {
                    return Err(GenerationError::PromptWrite {
                        program: self.program.clone(),
                        source,
                    });
                }
            }
        }

        let output = child.wait_with_output().await.map_err(spawn_err)?;
        if !output.status.success() {
            return Err(GenerationError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)?;
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
