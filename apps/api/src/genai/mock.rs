//! Canned [`GenerativeModel`] used by pipeline and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenAiError, GenerativeModel, InlineImage};

/// Returns fixed extraction and evaluation texts, recording every text
/// prompt it receives so tests can assert on prompt construction.
pub struct StubModel {
    extraction: String,
    evaluation: String,
    pub prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new(extraction: &str, evaluation: &str) -> Self {
        Self {
            extraction: extraction.to_string(),
            evaluation: evaluation.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn describe_image(
        &self,
        _instruction: &str,
        _image: &InlineImage,
    ) -> Result<String, GenAiError> {
        Ok(self.extraction.clone())
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.evaluation.clone())
    }
}
