use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::error::AppError;
use crate::flash::{self, Flash, FlashLevel};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "responses.html")]
#[allow(dead_code)]
struct ResponsesTemplate {
    flash: Flash,
    surveys: Vec<SurveyRow>,
}

#[allow(dead_code)]
struct SurveyRow {
    id: String,
    title: String,
    response_count: usize,
    created_at: String,
}

/// Active surveys with links to their collected responses.
pub async fn list_page(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, flash) = flash::take(jar);

    let surveys = state
        .store
        .list(false)
        .await
        .into_iter()
        .map(|summary| SurveyRow {
            id: summary.id.to_string(),
            title: summary.title,
            response_count: summary.response_count,
            created_at: summary.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let template = ResponsesTemplate { flash, surveys };
    Ok((jar, Html(template.render().unwrap_or_default())))
}

#[derive(Template)]
#[template(path = "survey.html")]
#[allow(dead_code)]
struct SurveyTemplate {
    flash: Flash,
    survey_id: String,
    title: String,
    fields: Vec<QuestionField>,
}

#[allow(dead_code)]
struct QuestionField {
    index: usize,
    text: String,
    control: &'static str,
    options: Vec<String>,
}

/// The respondent-facing question form.
pub async fn fill_page(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let survey = state.store.get(id).await?;
    if survey.is_template {
        return Ok(flash::redirect(
            "/templates",
            FlashLevel::Warning,
            "Templates cannot be filled out directly",
        ));
    }

    let (jar, flash) = flash::take(jar);

    let fields = survey
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionField {
            index,
            text: question.text.clone(),
            control: question.kind_name(),
            options: question.options().to_vec(),
        })
        .collect();

    let template = SurveyTemplate {
        flash,
        survey_id: survey.id.to_string(),
        title: survey.title,
        fields,
    };
    Ok((jar, Html(template.render().unwrap_or_default())).into_response())
}
