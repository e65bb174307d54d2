//! Conversion between the core types and TGI wire types

use crate::llm::core::{
    error::LlmError,
    types::{FinishReason, GenerateOutput, GenerateRequest},
};

use super::types::{TgiParameters, TgiRequest, TgiResponse};

/// Convert a core request into a TGI request
///
/// The server re-tokenizes `inputs`; per-token details are requested so the
/// continuation comes back as ids.
pub fn to_tgi_request(request: &GenerateRequest) -> Result<TgiRequest, LlmError> {
    if request.max_new_tokens == 0 {
        return Err(LlmError::InvalidRequest(
            "max_new_tokens must be at least 1".to_string(),
        ));
    }

    let max_new_tokens = u32::try_from(request.max_new_tokens).map_err(|_| {
        LlmError::InvalidRequest(format!("max_new_tokens {} is too large", request.max_new_tokens))
    })?;

    Ok(TgiRequest {
        inputs: request.inputs.clone(),
        parameters: TgiParameters {
            max_new_tokens,
            details: true,
            return_full_text: false,
            do_sample: false,
        },
    })
}

/// Convert a TGI response into a full sequence (prompt ids + generated ids)
pub fn from_tgi_response(input_ids: &[u32], response: TgiResponse) -> Result<GenerateOutput, LlmError> {
    let details = response.details.ok_or_else(|| {
        LlmError::InvalidResponse("response is missing token details".to_string())
    })?;

    let mut sequence = Vec::with_capacity(input_ids.len() + details.tokens.len());
    sequence.extend_from_slice(input_ids);
    sequence.extend(details.tokens.iter().map(|t| t.id));

    Ok(GenerateOutput {
        sequence,
        finish_reason: FinishReason::from_provider(&details.finish_reason),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::tgi::types::{TgiDetails, TgiToken};

    fn request(max_new_tokens: usize) -> GenerateRequest {
        GenerateRequest {
            inputs: "hello<|endoftext|>".to_string(),
            input_ids: vec![31373, 50256],
            max_new_tokens,
        }
    }

    #[test]
    fn test_to_tgi_request() {
        let tgi = to_tgi_request(&request(998)).unwrap();
        assert_eq!(tgi.inputs, "hello<|endoftext|>");
        assert_eq!(tgi.parameters.max_new_tokens, 998);
        assert!(tgi.parameters.details);
        assert!(!tgi.parameters.return_full_text);
        assert!(!tgi.parameters.do_sample);
    }

    #[test]
    fn test_to_tgi_request_rejects_zero_budget() {
        assert!(matches!(
            to_tgi_request(&request(0)),
            Err(LlmError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_from_tgi_response_prepends_prompt() {
        let response = TgiResponse {
            generated_text: "Hi".to_string(),
            details: Some(TgiDetails {
                finish_reason: "eos_token".to_string(),
                generated_tokens: 2,
                tokens: vec![
                    TgiToken { id: 17250, text: "Hi".to_string(), logprob: None, special: false },
                    TgiToken { id: 50256, text: "<|endoftext|>".to_string(), logprob: None, special: true },
                ],
            }),
        };

        let output = from_tgi_response(&[31373, 50256], response).unwrap();
        assert_eq!(output.sequence, vec![31373, 50256, 17250, 50256]);
        assert_eq!(output.finish_reason, FinishReason::EosToken);
    }

    #[test]
    fn test_from_tgi_response_requires_details() {
        let response = TgiResponse {
            generated_text: "Hi".to_string(),
            details: None,
        };
        assert!(matches!(
            from_tgi_response(&[1], response),
            Err(LlmError::InvalidResponse(_))
        ));
    }
}
