//! OpenAI SSE stream to [`StreamEvent`] adapter.
//!
//! Maps `async-openai`'s [`ChatCompletionResponseStream`] chunks to the
//! relay-agnostic [`StreamEvent`] enum. Only text content is expected;
//! empty deltas are dropped so downstream accumulation only ever sees
//! non-empty fragments.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};

use async_openai::types::chat::{ChatCompletionResponseStream, FinishReason};

use parlor_types::llm::{RelayError, StopReason, StreamEvent, Usage};

/// Map a provider finish reason to a [`StopReason`].
///
/// Tool and filter outcomes collapse to `EndTurn`: no tools are ever
/// requested, so those reasons cannot legitimately occur.
pub(crate) fn map_finish_reason(finish_reason: FinishReason) -> StopReason {
    match finish_reason {
        FinishReason::Stop => StopReason::EndTurn,
        FinishReason::Length => StopReason::MaxTokens,
        FinishReason::ToolCalls => StopReason::EndTurn,
        FinishReason::ContentFilter => StopReason::EndTurn,
        FinishReason::FunctionCall => StopReason::EndTurn,
    }
}

/// Map an async-openai response stream to a stream of [`StreamEvent`]s.
///
/// Event order:
/// 1. `Connected` -- immediately on entry
/// 2. `TextDelta` -- for each non-empty content chunk
/// 3. `MessageDelta` -- when a finish_reason appears
/// 4. `Usage` -- token usage (requires `stream_options.include_usage`)
/// 5. `Done` -- at the end of the stream
pub fn map_openai_stream(
    stream: ChatCompletionResponseStream,
) -> Pin<Box<dyn Stream<Item = Result<StreamEvent, RelayError>> + Send + 'static>> {
    Box::pin(async_stream::try_stream! {
        yield StreamEvent::Connected;

        let mut stream = stream;

        while let Some(result) = stream.next().await {
            let chunk = result.map_err(|e| RelayError::Stream(e.to_string()))?;

            // The final chunk carries usage with an empty choices array
            // when stream_options.include_usage is set on the request.
            if let Some(usage) = chunk.usage.as_ref() {
                yield StreamEvent::Usage(Usage {
                    input_tokens: usage.prompt_tokens,
                    output_tokens: usage.completion_tokens,
                });
            }

            for choice in &chunk.choices {
                if let Some(text) = choice.delta.content.clone() {
                    if !text.is_empty() {
                        yield StreamEvent::TextDelta { text };
                    }
                }

                if let Some(finish_reason) = choice.finish_reason.clone() {
                    yield StreamEvent::MessageDelta {
                        stop_reason: map_finish_reason(finish_reason),
                    };
                }
            }
        }

        yield StreamEvent::Done;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reason_mapping() {
        assert_eq!(map_finish_reason(FinishReason::Stop), StopReason::EndTurn);
        assert_eq!(
            map_finish_reason(FinishReason::Length),
            StopReason::MaxTokens
        );
        // No tools are requested; these collapse to a normal end of turn.
        assert_eq!(
            map_finish_reason(FinishReason::ToolCalls),
            StopReason::EndTurn
        );
        assert_eq!(
            map_finish_reason(FinishReason::ContentFilter),
            StopReason::EndTurn
        );
        assert_eq!(
            map_finish_reason(FinishReason::FunctionCall),
            StopReason::EndTurn
        );
    }
}
