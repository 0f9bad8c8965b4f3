use axum::extract::{Path, State};
use axum::response::Response;
use uuid::Uuid;

use crate::error::AppError;
use crate::flash::{self, FlashLevel};
use crate::state::SharedState;

pub async fn use_template(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.store.instantiate_from_template(id).await {
        Ok(new_id) => {
            tracing::info!(template_id = %id, survey_id = %new_id, "Survey created from template");
            Ok(flash::redirect(
                &format!("/survey/{new_id}"),
                FlashLevel::Success,
                "Survey created from template",
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
    match state.store.delete(id, true).await {
        Ok(()) => {
            tracing::info!(template_id = %id, "Template deleted");
            Ok(flash::redirect(
                "/templates",
                FlashLevel::Success,
                "Template deleted",
            ))
        }
        Err(AppError::WrongKind(msg)) => {
            Ok(flash::redirect("/templates", FlashLevel::Warning, &msg))
        }
        Err(e) => Err(e),
    }
}
