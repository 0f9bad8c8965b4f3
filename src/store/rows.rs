use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Question, ResponseRecord, Survey};

#[derive(sqlx::FromRow)]
struct SurveyRow {
    id: Uuid,
    title: String,
    questions: Json<Vec<Question>>,
    responses: Json<Vec<ResponseRecord>>,
    is_template: bool,
    created_at: DateTime<Utc>,
}

impl From<SurveyRow> for Survey {
    fn from(row: SurveyRow) -> Self {
        Survey {
            id: row.id,
            title: row.title,
            questions: row.questions.0,
            responses: row.responses.0,
            is_template: row.is_template,
            created_at: row.created_at,
        }
    }
}

pub(super) async fn load_all(pool: &PgPool) -> Result<Vec<Survey>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SurveyRow>("SELECT * FROM surveys")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Survey::from).collect())
}

/// Full-record overwrite keyed by id; no deltas.
pub(super) async fn upsert(pool: &PgPool, survey: &Survey) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO surveys (id, title, questions, responses, is_template, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (id) DO UPDATE
         SET title = EXCLUDED.title,
             questions = EXCLUDED.questions,
             responses = EXCLUDED.responses,
             is_template = EXCLUDED.is_template",
    )
    .bind(survey.id)
    .bind(&survey.title)
    .bind(Json(&survey.questions))
    .bind(Json(&survey.responses))
    .bind(survey.is_template)
    .bind(survey.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub(super) async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM surveys WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
