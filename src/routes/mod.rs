pub mod surveys;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;
use crate::views;

pub fn app_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(views::home::index))
        .route("/create", get(views::create::page).post(surveys::create))
        .route("/templates", get(views::templates::list_page))
        .route("/template/{id}/use", get(templates::use_template))
        .route("/template/{id}/delete", post(templates::delete))
        .route("/responses", get(views::surveys::list_page))
        .route(
            "/survey/{id}",
            get(views::surveys::fill_page).post(surveys::submit),
        )
        .route(
            "/survey/{id}/responses/view",
            get(views::results::preview_table),
        )
        .route("/survey/{id}/delete", post(surveys::delete))
        .route("/survey/{id}/results", get(views::results::charts_page))
        .route("/survey/{id}/download", get(views::results::download))
}
