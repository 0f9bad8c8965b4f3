use crate::models::{Question, ResponseRecord};

/// Flat tabular view of a survey's responses. The column set is fully
/// determined by the questions; zero responses yield zero rows under the
/// same headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Human-readable column label per question. Two questions sharing the same
/// text each get a ` (Q{position})` suffix so spreadsheet headers never
/// collide.
pub fn question_labels(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            let duplicated = questions
                .iter()
                .enumerate()
                .any(|(other_idx, other)| other_idx != idx && other.text == question.text);
            if duplicated {
                format!("{} (Q{})", question.text, idx + 1)
            } else {
                question.text.clone()
            }
        })
        .collect()
}

/// Reshape heterogeneous per-question answers into uniform rows: one row per
/// response, `timestamp` first, then one column per text/radio question and
/// one per declared checkbox option. Short answer lists read as empty cells.
pub fn reshape(questions: &[Question], responses: &[ResponseRecord]) -> ResponseTable {
    let labels = question_labels(questions);

    let mut columns = vec!["timestamp".to_string()];
    for (question, label) in questions.iter().zip(&labels) {
        columns.extend(question.column_labels(label));
    }

    let rows = responses
        .iter()
        .map(|response| {
            let mut row = vec![response.submitted_at.to_rfc3339()];
            for (idx, question) in questions.iter().enumerate() {
                row.extend(question.answer_cells(response.answers.get(idx)));
            }
            row
        })
        .collect();

    ResponseTable { columns, rows }
}
