use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Persona sent as the system message of every summary request.
pub const SYSTEM_PROMPT: &str = "You are the editor of a Telegram channel newsletter.";

/// Sampling temperature for summary requests. Kept low so summaries are near-deterministic.
pub const SUMMARY_TEMPERATURE: f64 = 0.2;

/// Upper bound on the summary length requested from the model.
pub const SUMMARY_CHAR_BUDGET: usize = 400;

#[must_use]
pub fn build_user_prompt(text: &str) -> String {
    format!(
        "Summarize the Telegram message below as 2-3 key bullet points. \
         Prioritize important figures, dates and calls to action, \
         and keep the whole summary within {SUMMARY_CHAR_BUDGET} characters.\n\n\
         Message:\n{text}"
    )
}

/// System persona followed by the user instruction embedding `text`.
#[must_use]
pub fn build_prompt(text: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(build_user_prompt(text)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
