use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use wordjet_algo::{quiz_rng, PlannerConfig, QuizRng, QuizSampler, WeightPlanner};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::store::TallyStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    dictionary: Arc<Dictionary>,
    store: Arc<dyn TallyStore>,
    planner: WeightPlanner,
    sampler: QuizSampler,
    /// One stream shared by every request, so successive rounds differ even when seeded
    rng: Arc<Mutex<QuizRng>>,
}

impl AppState {
    pub fn new(dictionary: Dictionary, store: Arc<dyn TallyStore>) -> Self {
        Self {
            started_at: Instant::now(),
            dictionary: Arc::new(dictionary),
            store,
            planner: WeightPlanner::default(),
            sampler: QuizSampler::default(),
            rng: Arc::new(Mutex::new(quiz_rng(None))),
        }
    }

    pub fn from_config(config: &Config, dictionary: Dictionary, store: Arc<dyn TallyStore>) -> Self {
        Self::new(dictionary, store)
            .with_planner(config.planner_config())
            .with_num_questions(config.num_questions)
            .with_quiz_seed(config.quiz_seed)
    }

    pub fn with_planner(mut self, config: PlannerConfig) -> Self {
        self.planner = WeightPlanner::new(config);
        self
    }

    pub fn with_num_questions(mut self, num_questions: usize) -> Self {
        self.sampler = QuizSampler::new(num_questions);
        self
    }

    pub fn with_quiz_seed(mut self, seed: Option<u64>) -> Self {
        self.rng = Arc::new(Mutex::new(quiz_rng(seed)));
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn store(&self) -> Arc<dyn TallyStore> {
        Arc::clone(&self.store)
    }

    pub fn planner(&self) -> &WeightPlanner {
        &self.planner
    }

    pub fn sampler(&self) -> &QuizSampler {
        &self.sampler
    }

    /// Runs `f` with the shared rng locked; every call advances the stream
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut QuizRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut rng)
    }
}
