use anyhow::Context;

use crate::config::Config;

use self::question_bank::QuestionBank;
use self::question_picker::QuestionPicker;
use self::score_store::ScoreStore;

pub struct AppState {
    pub config: Config,
    pub questions: QuestionPicker,
    pub scores: ScoreStore,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let bank = match &config.question_bank_path {
            Some(path) => QuestionBank::from_json_file(path)
                .with_context(|| format!("Failed to load question bank {}", path.display()))?,
            None => QuestionBank::color_quiz(),
        };

        Self::with_picker(config, QuestionPicker::new(bank)).await
    }

    pub async fn with_picker(config: Config, questions: QuestionPicker) -> anyhow::Result<Self> {
        let scores = ScoreStore::open(&config.scores_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to open score store {}",
                    config.scores_path.display()
                )
            })?;

        tracing::info!(
            "Application state ready: {} questions, scores at {}",
            questions.bank().questions().len(),
            scores.path().display()
        );

        Ok(Self {
            config,
            questions,
            scores,
        })
    }
}

pub mod color_quiz_service;
pub mod grader;
pub mod question_bank;
pub mod question_picker;
pub mod score_store;
