//! FAQ record

use super::kind::{Content, ContentKind};
use serde::{Deserialize, Serialize};

/// A question/answer pair shown on the FAQ screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Content for Faq {
    const KIND: ContentKind = ContentKind::Faq;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_keeps_order() {
        let json = r#"[
            {"question": "Was ist eine Umweltzone?", "answer": "Ein Gebiet."},
            {"question": "Wer braucht eine Plakette?", "answer": "Alle."}
        ]"#;
        let faqs: Vec<Faq> = serde_json::from_str(json).unwrap();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "Was ist eine Umweltzone?");
        assert_eq!(faqs[1].answer, "Alle.");
    }

    #[test]
    fn test_missing_answer_is_rejected() {
        let result: Result<Vec<Faq>, _> = serde_json::from_str(r#"[{"question": "?"}]"#);
        assert!(result.is_err());
    }
}
