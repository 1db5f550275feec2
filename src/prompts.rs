// Prompt text for the financial co-pilot

use crate::error::Result;
use crate::schema::{Message, UserId, UserRecord};

pub const GREETING: &str = "Hello! How can I help you with your finances today? Please include a UserID (e.g., AADI-001) in your question.";

pub const MISSING_USER_ID: &str = "I can't seem to find a UserID in your question. Please include a UserID (like AADI-001) so I can access the correct financial data.";

pub const PERSONA: &str = "You are 'Aadi', an expert AI financial co-pilot. Your primary goal is to provide comprehensive, well-researched financial advice by analyzing the user's complete financial data.";

pub const TASK_INSTRUCTIONS: &str = r#"**Your Task:**
1.  Analyze the user's latest question in the context of the entire conversation history.
2.  Thoroughly examine ALL relevant sections of the provided JSON data (User data, Credit report, EPF, Net worth, and Transactions) to formulate your answer. Do not limit your analysis to just one section.
3.  If the user's question is ambitious or vague (e.g., "How can I retire at 40?"), first ask clarifying questions to understand their goals (e.g., "That's a great goal! To help you, could you tell me what kind of lifestyle you envision in retirement?"). Then, wait for their response before providing a detailed plan.
4.  Provide your answer in a clear, conversational, and helpful tone."#;

pub const CLOSING_REMINDER: &str = "Please provide your expert response now. If the question is about retirement or a complex goal, ask a clarifying question first.";

/// Renders the conversation as `role: content` lines, oldest first.
pub fn format_history(history: &[Message]) -> String {
    history
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the single text prompt sent to the model for one turn.
///
/// `history` must already contain the user's latest message. The whole
/// `record` is embedded, never a subset.
pub fn build_prompt(
    history: &[Message],
    record: &UserRecord,
    user_id: &UserId,
    question: &str,
) -> Result<String> {
    let record_json = serde_json::to_string_pretty(record)?;

    Ok(format!(
        "{persona}\n\n\
         {task}\n\n\
         **Conversation History:**\n\
         {history}\n\n\
         **Complete Financial Data for {user_id}:**\n\
         ```json\n\
         {record_json}\n\
         ```\n\n\
         **User's Latest Question:** \"{question}\"\n\n\
         {closing}\n",
        persona = PERSONA,
        task = TASK_INSTRUCTIONS,
        history = format_history(history),
        user_id = user_id,
        record_json = record_json,
        question = question,
        closing = CLOSING_REMINDER,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> UserRecord {
        match json!({
            "UserID": "AADI-001",
            "netWorth": 5000,
            "creditReport": {"score": 780},
            "epf": {"balance": 120000},
            "transactions": [{"amount": -250, "merchant": "Grocer"}]
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn history() -> Vec<Message> {
        vec![
            Message::assistant(GREETING),
            Message::user("What is my net worth? AADI-001"),
        ]
    }

    #[test]
    fn test_history_lines_in_order() {
        let rendered = format_history(&history());
        assert_eq!(
            rendered,
            format!(
                "assistant: {}\nuser: What is my net worth? AADI-001",
                GREETING
            )
        );
        assert_eq!(format_history(&[]), "");
    }

    #[test]
    fn test_prompt_embeds_every_section() {
        let id = UserId::parse("AADI-001").unwrap();
        let prompt =
            build_prompt(&history(), &record(), &id, "What is my net worth? AADI-001").unwrap();

        assert!(prompt.starts_with(PERSONA));
        assert!(prompt.contains(TASK_INSTRUCTIONS));
        assert!(prompt.contains("**Complete Financial Data for AADI-001:**"));
        assert!(prompt.contains("\"netWorth\": 5000"));
        assert!(prompt.contains("\"score\": 780"));
        assert!(prompt.contains("\"balance\": 120000"));
        assert!(prompt.contains("\"merchant\": \"Grocer\""));
        assert!(prompt.contains("user: What is my net worth? AADI-001"));
        assert!(prompt.contains("**User's Latest Question:** \"What is my net worth? AADI-001\""));
        assert!(prompt.trim_end().ends_with(CLOSING_REMINDER));
    }

    #[test]
    fn test_history_precedes_record_and_question() {
        let id = UserId::parse("AADI-001").unwrap();
        let prompt = build_prompt(&history(), &record(), &id, "q").unwrap();

        let history_at = prompt.find("**Conversation History:**").unwrap();
        let data_at = prompt.find("**Complete Financial Data").unwrap();
        let question_at = prompt.find("**User's Latest Question:**").unwrap();
        assert!(history_at < data_at && data_at < question_at);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let id = UserId::parse("AADI-001").unwrap();
        let first = build_prompt(&history(), &record(), &id, "and last year?").unwrap();
        let second = build_prompt(&history(), &record(), &id, "and last year?").unwrap();
        assert_eq!(first, second);
    }
}
