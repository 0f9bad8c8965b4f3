use askama::Template;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::report::{self, FrequencyChart};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "responses_view.html")]
#[allow(dead_code)]
struct ResponsesViewTemplate {
    flash: Flash,
    survey_id: String,
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Tabular preview of collected responses.
pub async fn preview_table(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let survey = state.store.get(id).await?;
    let (jar, flash) = flash::take(jar);

    let table = report::reshape(&survey.questions, &survey.responses);
    let template = ResponsesViewTemplate {
        flash,
        survey_id: survey.id.to_string(),
        title: survey.title,
        columns: table.columns,
        rows: table.rows,
    };
    Ok((jar, Html(template.render().unwrap_or_default())))
}

#[derive(Template)]
#[template(path = "results.html")]
#[allow(dead_code)]
struct ResultsTemplate {
    flash: Flash,
    survey_id: String,
    title: String,
    response_count: usize,
    charts: Vec<FrequencyChart>,
}

/// Per-question frequency charts.
pub async fn charts_page(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let survey = state.store.get(id).await?;
    let (jar, flash) = flash::take(jar);

    let charts = report::to_frequency_charts(&survey.questions, &survey.responses);
    let template = ResultsTemplate {
        flash,
        survey_id: survey.id.to_string(),
        title: survey.title,
        response_count: survey.responses.len(),
        charts,
    };
    Ok((jar, Html(template.render().unwrap_or_default())))
}

/// Spreadsheet export of all responses, in submission order.
pub async fn download(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let survey = state.store.get(id).await?;

    let table = report::reshape(&survey.questions, &survey.responses);
    let bytes = report::to_spreadsheet(&table)
        .map_err(|e| AppError::Internal(format!("Spreadsheet build failed: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, report::XLSX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"survey_{id}.xlsx\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
