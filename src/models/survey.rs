use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A survey definition plus the responses collected against it.
///
/// Templates are surveys flagged reusable: they never accept responses and
/// only exist as a source for new surveys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: Uuid,
    pub title: String,
    pub questions: Vec<Question>,
    pub responses: Vec<ResponseRecord>,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
}

/// Listing row for a survey or template.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub id: Uuid,
    pub title: String,
    pub question_count: usize,
    pub response_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Survey> for SurveySummary {
    fn from(survey: &Survey) -> Self {
        SurveySummary {
            id: survey.id,
            title: survey.title.clone(),
            question_count: survey.questions.len(),
            response_count: survey.responses.len(),
            created_at: survey.created_at,
        }
    }
}

/// A single question. Immutable once the survey is created.
///
/// Serializes as `{"text": ..., "type": "text" | "radio" | "checkbox",
/// "options": [...]}` with `options` present only for choice kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Radio { options: Vec<String> },
    Checkbox { options: Vec<String> },
}

pub(crate) const SELECTED: &str = "selected";
pub(crate) const NOT_SELECTED: &str = "not selected";

impl Question {
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Text => &[],
            QuestionKind::Radio { options } | QuestionKind::Checkbox { options } => options,
        }
    }

    /// Form control name for this kind, also the serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            QuestionKind::Text => "text",
            QuestionKind::Radio { .. } => "radio",
            QuestionKind::Checkbox { .. } => "checkbox",
        }
    }

    /// Blank answer in this question's shape.
    pub fn empty_answer(&self) -> Answer {
        match &self.kind {
            QuestionKind::Checkbox { .. } => Answer::Many(Vec::new()),
            _ => Answer::One(String::new()),
        }
    }

    /// Coerce a submitted answer into this question's shape.
    pub fn normalize(&self, answer: Answer) -> Answer {
        match (&self.kind, answer) {
            (QuestionKind::Checkbox { .. }, Answer::One(value)) => {
                if value.is_empty() {
                    Answer::Many(Vec::new())
                } else {
                    Answer::Many(vec![value])
                }
            }
            (QuestionKind::Checkbox { .. }, many @ Answer::Many(_)) => many,
            (_, Answer::Many(values)) => Answer::One(values.join(", ")),
            (_, one @ Answer::One(_)) => one,
        }
    }

    /// Column labels this question contributes to a reshaped table.
    ///
    /// One column for text/radio; one per declared option for checkbox,
    /// labeled `{label}_{option}`.
    pub fn column_labels(&self, label: &str) -> Vec<String> {
        match &self.kind {
            QuestionKind::Text | QuestionKind::Radio { .. } => vec![label.to_string()],
            QuestionKind::Checkbox { options } => options
                .iter()
                .map(|option| format!("{label}_{option}"))
                .collect(),
        }
    }

    /// Cells for one answer, positionally aligned with `column_labels`.
    /// A missing answer reads as empty / nothing selected.
    pub fn answer_cells(&self, answer: Option<&Answer>) -> Vec<String> {
        match &self.kind {
            QuestionKind::Text | QuestionKind::Radio { .. } => {
                let cell = match answer {
                    Some(Answer::One(value)) => value.clone(),
                    Some(Answer::Many(values)) => values.join(", "),
                    None => String::new(),
                };
                vec![cell]
            }
            QuestionKind::Checkbox { options } => {
                let is_selected = |option: &str| match answer {
                    Some(Answer::Many(values)) => values.iter().any(|v| v == option),
                    Some(Answer::One(value)) => value == option,
                    None => false,
                };
                options
                    .iter()
                    .map(|option| {
                        if is_selected(option) {
                            SELECTED.to_string()
                        } else {
                            NOT_SELECTED.to_string()
                        }
                    })
                    .collect()
            }
        }
    }
}

/// One respondent's answer to one question: a single string for text/radio,
/// the selected options for checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

impl Answer {
    /// Individual countable values; a checkbox answer contributes one per
    /// selection.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::One(value) => vec![value.as_str()],
            Answer::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// One respondent's full answer set, positionally aligned with the survey's
/// questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
    pub answers: Vec<Answer>,
}
