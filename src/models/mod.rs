mod survey;

pub use survey::{Answer, Question, QuestionKind, ResponseRecord, Survey, SurveySummary};
