//! Single-turn chat on top of a causal language model
//!
//! Each reply is produced from the user's text alone. The text gets the
//! end-of-sequence marker appended, is encoded, and is continued by the model
//! within a fixed total token budget. Only the newly generated span is decoded.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm::{GenerateRequest, GenerationConfig, LanguageModel, LlmError, TokenCodec};

/// Turns one user message into one model reply
pub struct ChatEngine {
    codec: Arc<dyn TokenCodec>,
    model: Arc<dyn LanguageModel>,
    config: GenerationConfig,
}

impl ChatEngine {
    /// Create an engine
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidRequest` if the budget in `config` leaves no
    /// room for a reply.
    pub fn new(
        codec: Arc<dyn TokenCodec>,
        model: Arc<dyn LanguageModel>,
        config: GenerationConfig,
    ) -> Result<Self, LlmError> {
        config.validate()?;
        Ok(Self {
            codec,
            model,
            config,
        })
    }

    /// Build the generate request for `text`
    ///
    /// Prompts longer than the input budget lose their oldest tokens, so the
    /// trailing EOS marker always survives. The kept text is what the
    /// inference server will tokenize, so the ids and the reply budget are
    /// taken from re-encoding it.
    pub fn prepare(&self, text: &str) -> Result<GenerateRequest, LlmError> {
        let prompt = format!("{}{}", text, self.codec.eos_token());
        let input_ids = self.codec.encode(&prompt)?;

        let budget = self.config.input_budget();
        let (inputs, input_ids) = if input_ids.len() > budget {
            warn!(
                prompt_tokens = input_ids.len(),
                budget, "prompt exceeds token budget, dropping oldest tokens"
            );
            self.truncate_left(&input_ids, budget)?
        } else {
            (prompt, input_ids)
        };

        Ok(GenerateRequest {
            inputs,
            max_new_tokens: self.config.max_length - input_ids.len(),
            input_ids,
        })
    }

    /// Drop leading ids until the rest decodes to whole characters and
    /// re-encodes within `budget`
    ///
    /// A byte-level vocabulary can split one character over several ids; a
    /// cut inside it would decode to U+FFFD and re-encode longer.
    fn truncate_left(&self, ids: &[u32], budget: usize) -> Result<(String, Vec<u32>), LlmError> {
        let last = ids.len().saturating_sub(1);
        let mut start = ids.len().saturating_sub(budget);

        loop {
            let text = self.codec.decode(&ids[start..], false)?;
            if text.starts_with(char::REPLACEMENT_CHARACTER) && start < last {
                start += 1;
                continue;
            }

            let reencoded = self.codec.encode(&text)?;
            if reencoded.len() <= budget {
                return Ok((text, reencoded));
            }
            if start >= last {
                return Err(LlmError::InvalidRequest(format!(
                    "prompt cannot be fitted into {} tokens",
                    budget
                )));
            }
            start = (start + reencoded.len() - budget).min(last);
        }
    }

    /// Generate the reply to one message
    pub async fn respond(&self, text: &str) -> Result<String, LlmError> {
        let request = self.prepare(text)?;
        let prompt_len = request.input_ids.len();

        let output = self.model.generate(request).await?;

        let continuation = output.sequence.get(prompt_len..).unwrap_or(&[]);
        let reply = self.codec.decode(continuation, true)?;
        debug!(
            prompt_tokens = prompt_len,
            reply_tokens = continuation.len(),
            "reply decoded"
        );

        Ok(reply)
    }
}
