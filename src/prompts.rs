//! Fixed prompt templates sent to the model.
//!
//! There are exactly two system instructions. Both ask for a short numbered
//! list and nothing else, so the youth counsellor using the tool still has to
//! do the creative work.

use crate::models::BreakdownKind;

/// System instruction for breaking an educational or social topic into
/// three to five sub-topics.
pub const TOPIC_SYSTEM_INSTRUCTION: &str = "אתה עוזר למדריכי נוער בסיעור מוחות. המשתמש ייתן לך נושא חינוכי או חברתי. תפקידך היחיד הוא לפרק את הנושא ל-3 עד 5 תתי-נושאים או רכיבי בסיס מהם הוא מורכב. החזר את התשובה כרשימה ממוספרת פשוטה בלבד, ללא הקדמות, ללא סיכומים וללא הסברים ארוכים. אל תציע למשתמש רעיונות לפעילות, תן לו רק את אבני הבניין כדי שיוכל לחשוב עליהן לבד.";

/// System instruction for breaking a game or method into three to five
/// mechanical components or base rules.
pub const METHOD_SYSTEM_INSTRUCTION: &str = "אתה עוזר למדריכי נוער בסיעור מוחות. המשתמש ייתן לך שם של משחק או מתודה. תפקידך היחיד הוא לפרק את המתודה ל-3 עד 5 רכיבים מכניים או חוקי בסיס (למשל: לוח, תורים, קוביות, ניקוד, התייעצות קבוצתית). החזר את התשובה כרשימה ממוספרת פשוטה בלבד, ללא הקדמות, ללא סיכומים, וללא הצעות שדרוג למשחק. רק פירוק טכני כדי שהמדריך יפעיל את הראש שלו.";

pub const TOPIC_LABEL: &str = "נושא";
pub const METHOD_LABEL: &str = "מתודה";

/// System instruction and user prompt for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    pub system_instruction: &'static str,
    pub user_prompt: String,
}

impl BreakdownKind {
    #[must_use]
    pub const fn system_instruction(self) -> &'static str {
        match self {
            Self::Topic => TOPIC_SYSTEM_INSTRUCTION,
            Self::Method => METHOD_SYSTEM_INSTRUCTION,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Topic => TOPIC_LABEL,
            Self::Method => METHOD_LABEL,
        }
    }
}

/// Builds the prompt pair for `kind` and the caller's query.
#[must_use]
pub fn build_prompt(kind: BreakdownKind, query: &str) -> PromptBundle {
    PromptBundle {
        system_instruction: kind.system_instruction(),
        user_prompt: format!("פרק את ה{} הבא/ה לרכיבים: {query}", kind.label()),
    }
}
