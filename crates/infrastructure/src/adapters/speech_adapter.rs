//! Speech adapters - Implement SpeechOutputPort as text sinks
//!
//! The console adapter writes one spoken line per output line; the recording
//! adapter keeps lines in memory for hosts that forward them elsewhere.

use std::io::Write;

use application::error::ApplicationError;
use application::ports::SpeechOutputPort;
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

/// Writes each sentence as a line to a writer (stdout by default)
pub struct ConsoleSpeechAdapter {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleSpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSpeechAdapter").finish_non_exhaustive()
    }
}

impl ConsoleSpeechAdapter {
    /// Speak to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

#[async_trait]
impl SpeechOutputPort for ConsoleSpeechAdapter {
    async fn say(&self, sentence: &str) -> Result<(), ApplicationError> {
        debug!(sentence, "Speaking");
        let mut writer = self.writer.lock();
        writeln!(writer, "{sentence}")
            .and_then(|()| writer.flush())
            .map_err(|e| ApplicationError::SpeechOutput(e.to_string()))
    }
}

/// Keeps every sentence in memory, in order
#[derive(Debug, Default)]
pub struct RecordingSpeechAdapter {
    lines: Mutex<Vec<String>>,
}

impl RecordingSpeechAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sentences spoken so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return the sentences spoken so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

#[async_trait]
impl SpeechOutputPort for RecordingSpeechAdapter {
    async fn say(&self, sentence: &str) -> Result<(), ApplicationError> {
        debug!(sentence, "Recording");
        self.lines.lock().push(sentence.to_string());
        Ok(())
    }
}
