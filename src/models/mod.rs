pub mod category;
pub mod question;
pub mod result;
pub mod state;

pub use category::{catalog, find_category, CategoryColor, Difficulty, QuizCategory};
pub use question::{Question, QuizData};
pub use result::{AnswerReview, QuizAnswer, QuizResult, ScoreGrade};
pub use state::{QuizPhase, QuizState};
