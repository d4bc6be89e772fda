//! 判分服务 - 业务能力层
//!
//! 全部是纯函数，成绩每次都从 QuizData + QuizState 重新计算

use crate::models::{AnswerReview, QuizAnswer, QuizData, QuizResult, QuizState};

/// 未作答时展示的文本
pub const NO_ANSWER_TEXT: &str = "No answer selected";

/// 计算成绩
///
/// 未作答的题目计为错误；题目数为 0 时百分比为 0
pub fn calculate_results(data: &QuizData, state: &QuizState) -> QuizResult {
    let answers: Vec<QuizAnswer> = data
        .questions
        .iter()
        .map(|question| {
            let selected_option = state.selected_option(question.id);
            QuizAnswer {
                question_id: question.id,
                selected_option,
                is_correct: selected_option == Some(question.correct_answer),
            }
        })
        .collect();

    let total_questions = data.question_count();
    let correct_answers = answers.iter().filter(|a| a.is_correct).count();

    QuizResult {
        total_questions,
        correct_answers,
        score: correct_answers,
        percentage: percentage_of(correct_answers, total_questions),
        answers,
    }
}

/// `round(part / total × 100)`，0.5 向上取整；`total == 0` 时返回 0
pub fn percentage_of(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (part as u64, total as u64);
    ((part * 200 + total) / (total * 2)) as u32
}

/// 根据百分比给出评语
///
/// # 参数
/// - `percentage`: 得分百分比
/// - `topic`: 测验主题（一般是分类标题）
pub fn score_message(percentage: u32, topic: &str) -> String {
    match percentage {
        p if p >= 90 => format!("Excellent! You have a strong understanding of {}!", topic),
        p if p >= 80 => format!("Great job! You know {} quite well!", topic),
        p if p >= 70 => format!("Good work! You have a solid foundation in {}.", topic),
        p if p >= 60 => format!("Not bad! Consider reviewing some {} concepts.", topic),
        _ => format!(
            "Keep studying! There's room for improvement in your {} knowledge.",
            topic
        ),
    }
}

/// 生成逐题回顾，顺序与题目顺序一致
pub fn review_answers(data: &QuizData, result: &QuizResult) -> Vec<AnswerReview> {
    data.questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let answer = result.answers.iter().find(|a| a.question_id == question.id);
            let selected = answer.and_then(|a| a.selected_option);

            AnswerReview {
                question_number: i + 1,
                question_id: question.id,
                question: question.question.clone(),
                user_answer: selected
                    .and_then(|idx| question.option(idx))
                    .unwrap_or(NO_ANSWER_TEXT)
                    .to_string(),
                correct_answer: question.correct_option().unwrap_or_default().to_string(),
                is_correct: answer.map(|a| a.is_correct).unwrap_or(false),
                is_answered: selected.is_some(),
                explanation: question.explanation.clone(),
            }
        })
        .collect()
}
