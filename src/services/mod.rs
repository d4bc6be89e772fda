pub mod loader;
pub mod scoring;
pub mod shuffle;

pub use loader::{parse_quiz_data, QuizLoader};
pub use scoring::{calculate_results, percentage_of, review_answers, score_message};
pub use shuffle::{OptionShuffler, ShuffledOption};
