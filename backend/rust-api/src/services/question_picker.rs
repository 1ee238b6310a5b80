use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::question_bank::QuestionBank;
use crate::models::QuizQuestion;

/// Picks one question uniformly at random, with replacement.
pub fn pick_question<'a, R: Rng + ?Sized>(bank: &'a QuestionBank, rng: &mut R) -> &'a QuizQuestion {
    let questions = bank.questions();
    &questions[rng.random_range(0..questions.len())]
}

/// A question bank paired with the random source used to draw from it.
pub struct QuestionPicker {
    bank: QuestionBank,
    rng: Mutex<StdRng>,
}

impl QuestionPicker {
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }

    pub fn seeded(bank: QuestionBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(bank: QuestionBank, rng: StdRng) -> Self {
        Self {
            bank,
            rng: Mutex::new(rng),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn pick(&self) -> QuizQuestion {
        // A poisoned rng is still a usable rng.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        pick_question(&self.bank, &mut *rng).clone()
    }
}
