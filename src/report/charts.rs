use crate::models::{Question, QuestionKind, ResponseRecord};

/// Free-text questions chart at most this many distinct values.
const TEXT_BAR_LIMIT: usize = 10;

/// Per-question frequency data, ready to render as a bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyChart {
    pub question: String,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub value: String,
    pub count: usize,
    /// Bar length as a percentage of the most frequent value.
    pub width: u8,
}

/// Count occurrence frequency of each distinct observed answer value, one
/// chart per question in question order. Checkbox selections are counted
/// independently across responses; free text keeps only the top
/// `TEXT_BAR_LIMIT` most frequent literals. Questions with zero non-empty
/// answers are skipped entirely.
pub fn to_frequency_charts(
    questions: &[Question],
    responses: &[ResponseRecord],
) -> Vec<FrequencyChart> {
    questions
        .iter()
        .enumerate()
        .filter_map(|(idx, question)| {
            // first-observed order
            let mut counts: Vec<(String, usize)> = Vec::new();
            for response in responses {
                let Some(answer) = response.answers.get(idx) else {
                    continue;
                };
                for value in answer.values() {
                    if value.is_empty() {
                        continue;
                    }
                    match counts.iter_mut().find(|entry| entry.0 == value) {
                        Some(entry) => entry.1 += 1,
                        None => counts.push((value.to_string(), 1)),
                    }
                }
            }
            if counts.is_empty() {
                return None;
            }

            if matches!(question.kind, QuestionKind::Text) {
                // stable sort keeps first-observed order among ties
                counts.sort_by(|a, b| b.1.cmp(&a.1));
                counts.truncate(TEXT_BAR_LIMIT);
            }

            let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(1);
            let bars = counts
                .into_iter()
                .map(|(value, count)| ChartBar {
                    value,
                    count,
                    width: ((count * 100) / max) as u8,
                })
                .collect();

            Some(FrequencyChart {
                question: question.text.clone(),
                bars,
            })
        })
        .collect()
}
