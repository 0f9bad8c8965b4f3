use askama::Template;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::flash::{self, Flash};

/// Builder slots rendered on the creation form; blank rows are skipped on
/// submission.
const QUESTION_SLOTS: usize = 5;

#[derive(Template)]
#[template(path = "create.html")]
#[allow(dead_code)]
struct CreateTemplate {
    flash: Flash,
    slots: Vec<usize>,
}

pub async fn page(jar: CookieJar) -> Result<impl IntoResponse, AppError> {
    let (jar, flash) = flash::take(jar);
    let template = CreateTemplate {
        flash,
        slots: (1..=QUESTION_SLOTS).collect(),
    };
    Ok((jar, Html(template.render().unwrap_or_default())))
}
