use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "templates.html")]
#[allow(dead_code)]
struct TemplatesTemplate {
    flash: Flash,
    templates: Vec<TemplateRow>,
}

#[allow(dead_code)]
struct TemplateRow {
    id: String,
    title: String,
    question_count: usize,
    created_at: String,
}

pub async fn list_page(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, flash) = flash::take(jar);

    let templates = state
        .store
        .list(true)
        .await
        .into_iter()
        .map(|summary| TemplateRow {
            id: summary.id.to_string(),
            title: summary.title,
            question_count: summary.question_count,
            created_at: summary.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let template = TemplatesTemplate { flash, templates };
    Ok((jar, Html(template.render().unwrap_or_default())))
}
