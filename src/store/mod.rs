mod rows;

use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Answer, Question, QuestionKind, ResponseRecord, Survey, SurveySummary};

/// Repository owning the survey collection: an in-memory index plus its
/// durable mirror. All mutation is routed through here; every mutating
/// operation overwrites the full survey row before the index is touched, so
/// a failed write leaves the index matching the mirror.
pub struct SurveyStore {
    pool: PgPool,
    index: RwLock<HashMap<Uuid, Survey>>,
}

impl SurveyStore {
    /// Load every persisted survey into the in-memory index.
    pub async fn load(pool: PgPool) -> Result<Self, sqlx::Error> {
        let surveys = rows::load_all(&pool).await?;
        tracing::info!(count = surveys.len(), "Loaded surveys from storage");
        let index = surveys.into_iter().map(|s| (s.id, s)).collect();
        Ok(SurveyStore {
            pool,
            index: RwLock::new(index),
        })
    }

    pub async fn create(
        &self,
        title: &str,
        questions: Vec<Question>,
        is_template: bool,
    ) -> Result<Uuid, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Enter a survey title".to_string()));
        }
        if questions.is_empty() {
            return Err(AppError::Validation(
                "Add at least one question".to_string(),
            ));
        }
        for question in &questions {
            if question.text.trim().is_empty() {
                return Err(AppError::Validation(
                    "Question text must not be empty".to_string(),
                ));
            }
            if !matches!(question.kind, QuestionKind::Text) && question.options().is_empty() {
                return Err(AppError::Validation(format!(
                    "\"{}\" needs at least one option",
                    question.text
                )));
            }
        }

        let survey = Survey {
            id: Uuid::now_v7(),
            title: title.to_string(),
            questions,
            responses: Vec::new(),
            is_template,
            created_at: Utc::now(),
        };

        let mut index = self.index.write().await;
        rows::upsert(&self.pool, &survey).await?;
        let id = survey.id;
        index.insert(id, survey);
        Ok(id)
    }

    pub async fn get(&self, id: Uuid) -> Result<Survey, AppError> {
        self.index
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Survey not found".to_string()))
    }

    /// Summaries of all surveys with the given template flag, newest first.
    pub async fn list(&self, is_template: bool) -> Vec<SurveySummary> {
        let index = self.index.read().await;
        let mut summaries: Vec<SurveySummary> = index
            .values()
            .filter(|survey| survey.is_template == is_template)
            .map(SurveySummary::from)
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }

    /// Append one response, padded and shape-normalized to the survey's
    /// questions.
    pub async fn append_response(&self, id: Uuid, answers: Vec<Answer>) -> Result<(), AppError> {
        let mut index = self.index.write().await;
        let survey = index
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Survey not found".to_string()))?;
        if survey.is_template {
            return Err(AppError::WrongKind(
                "Templates do not accept responses".to_string(),
            ));
        }

        let mut answers = answers;
        answers.truncate(survey.questions.len());
        let mut normalized: Vec<Answer> = answers
            .into_iter()
            .zip(&survey.questions)
            .map(|(answer, question)| question.normalize(answer))
            .collect();
        while normalized.len() < survey.questions.len() {
            normalized.push(survey.questions[normalized.len()].empty_answer());
        }

        survey.responses.push(ResponseRecord {
            submitted_at: Utc::now(),
            answers: normalized,
        });
        if let Err(e) = rows::upsert(&self.pool, survey).await {
            survey.responses.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Delete a survey through the endpoint matching its template flag.
    pub async fn delete(&self, id: Uuid, expected_is_template: bool) -> Result<(), AppError> {
        let mut index = self.index.write().await;
        let survey = index
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Survey not found".to_string()))?;
        if survey.is_template != expected_is_template {
            let msg = if expected_is_template {
                "That survey is not a template"
            } else {
                "That survey is a template; delete it from the templates page"
            };
            return Err(AppError::WrongKind(msg.to_string()));
        }
        rows::delete(&self.pool, id).await?;
        index.remove(&id);
        Ok(())
    }

    /// Start a new survey from a template: questions copied by value, empty
    /// responses, fresh id.
    pub async fn instantiate_from_template(&self, id: Uuid) -> Result<Uuid, AppError> {
        let mut index = self.index.write().await;
        let source = index
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Template not found".to_string()))?;
        if !source.is_template {
            return Err(AppError::WrongKind(
                "Only templates can be used to start a new survey".to_string(),
            ));
        }

        let survey = Survey {
            id: Uuid::now_v7(),
            title: source.title.clone(),
            questions: source.questions.clone(),
            responses: Vec::new(),
            is_template: false,
            created_at: Utc::now(),
        };
        rows::upsert(&self.pool, &survey).await?;
        let new_id = survey.id;
        index.insert(new_id, survey);
        Ok(new_id)
    }
}
