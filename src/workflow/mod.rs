pub mod quiz_flow;
pub mod store;

pub use quiz_flow::{QuestionView, QuizFlow};
pub use store::QuizStore;
