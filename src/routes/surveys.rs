use axum::extract::{Path, RawForm, State};
use axum::response::Response;
use uuid::Uuid;

use crate::error::AppError;
use crate::flash::{self, FlashLevel};
use crate::models::{Answer, Question, QuestionKind};
use crate::state::SharedState;

/// Typed creation payload assembled from the raw form fields before anything
/// reaches the store.
struct CreateSurveyForm {
    title: String,
    is_template: bool,
    questions: Vec<Question>,
}

/// The creation form posts `title`, an optional `is_template` checkbox, and
/// parallel `question_text` / `question_type` / `question_options` fields
/// (options one per line). Rows with blank text are unused builder slots.
fn parse_create_form(body: &[u8]) -> CreateSurveyForm {
    let mut title = String::new();
    let mut is_template = false;
    let mut texts: Vec<String> = Vec::new();
    let mut types: Vec<String> = Vec::new();
    let mut options: Vec<String> = Vec::new();

    for (key, value) in form_urlencoded::parse(body) {
        match &*key {
            "title" => title = value.into_owned(),
            "is_template" => is_template = matches!(&*value, "on" | "true" | "1"),
            "question_text" => texts.push(value.into_owned()),
            "question_type" => types.push(value.into_owned()),
            "question_options" => options.push(value.into_owned()),
            _ => {}
        }
    }

    let mut questions = Vec::new();
    for (idx, text) in texts.iter().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let declared: Vec<String> = options
            .get(idx)
            .map(|raw| {
                raw.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let kind = match types.get(idx).map(String::as_str).unwrap_or("text") {
            "radio" => QuestionKind::Radio { options: declared },
            "checkbox" => QuestionKind::Checkbox { options: declared },
            _ => QuestionKind::Text,
        };
        questions.push(Question {
            text: text.to_string(),
            kind,
        });
    }

    CreateSurveyForm {
        title,
        is_template,
        questions,
    }
}

/// Answers post as `q{index}` fields, repeated for checkbox selections.
fn parse_answers(questions: &[Question], body: &[u8]) -> Vec<Answer> {
    let mut fields: Vec<Vec<String>> = vec![Vec::new(); questions.len()];
    for (key, value) in form_urlencoded::parse(body) {
        if let Some(idx) = key.strip_prefix('q').and_then(|rest| rest.parse::<usize>().ok()) {
            if let Some(slot) = fields.get_mut(idx) {
                slot.push(value.into_owned());
            }
        }
    }

    questions
        .iter()
        .zip(fields)
        .map(|(question, values)| match question.kind {
            QuestionKind::Checkbox { .. } => Answer::Many(values),
            _ => Answer::One(
                values
                    .into_iter()
                    .next()
                    .map(|value| value.trim().to_string())
                    .unwrap_or_default(),
            ),
        })
        .collect()
}

pub async fn create(
    State(state): State<SharedState>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let form = parse_create_form(&body);
    match state
        .store
        .create(&form.title, form.questions, form.is_template)
        .await
    {
        Ok(id) => {
            tracing::info!(survey_id = %id, is_template = form.is_template, "Survey created");
            let (dest, noun) = if form.is_template {
                ("/templates", "Template")
            } else {
                ("/", "Survey")
            };
            Ok(flash::redirect(
                dest,
                FlashLevel::Success,
                &format!("{noun} created"),
            ))
        }
        Err(AppError::Validation(msg)) => Ok(flash::redirect("/create", FlashLevel::Danger, &msg)),
        Err(e) => Err(e),
    }
}

pub async fn submit(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let survey = state.store.get(id).await?;
    let answers = parse_answers(&survey.questions, &body);

    match state.store.append_response(id, answers).await {
        Ok(()) => {
            tracing::info!(survey_id = %id, "Response recorded");
            Ok(flash::redirect(
                &format!("/survey/{id}/results"),
                FlashLevel::Success,
                "Thanks! Your answers were recorded",
            ))
        }
        Err(AppError::WrongKind(msg)) => {
            Ok(flash::redirect("/templates", FlashLevel::Warning, &msg))
        }
        Err(e) => Err(e),
    }
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.store.delete(id, false).await {
        Ok(()) => {
            tracing::info!(survey_id = %id, "Survey deleted");
            Ok(flash::redirect(
                "/responses",
                FlashLevel::Success,
                "Survey deleted",
            ))
        }
        Err(AppError::WrongKind(msg)) => {
            Ok(flash::redirect("/responses", FlashLevel::Warning, &msg))
        }
        Err(e) => Err(e),
    }
}
