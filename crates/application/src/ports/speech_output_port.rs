//! Speech output port - the host's "say this sentence" sink

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speaking (or printing) one sentence at a time
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechOutputPort: Send + Sync {
    /// Emit a single sentence
    async fn say(&self, sentence: &str) -> Result<(), ApplicationError>;
}
