use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "index.html")]
#[allow(dead_code)]
struct IndexTemplate {
    flash: Flash,
    surveys: Vec<SurveyRow>,
}

#[allow(dead_code)]
struct SurveyRow {
    id: String,
    title: String,
    question_count: usize,
    response_count: usize,
    created_at: String,
}

pub async fn index(
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
            question_count: summary.question_count,
            response_count: summary.response_count,
            created_at: summary.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let template = IndexTemplate { flash, surveys };
    Ok((jar, Html(template.render().unwrap_or_default())))
}
