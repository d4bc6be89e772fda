use serde::Serialize;

/// 单题作答记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: u32,
    /// 未作答时为 None
    pub selected_option: Option<usize>,
    pub is_correct: bool,
}

/// 成绩汇总（每次按需重新计算，不缓存）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score: usize,
    /// 四舍五入后的百分比
    pub percentage: u32,
    pub answers: Vec<QuizAnswer>,
}

impl QuizResult {
    pub fn unanswered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|a| a.selected_option.is_none())
            .count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.total_questions - self.correct_answers
    }
}

/// 成绩等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreGrade {
    /// >= 80 优秀，>= 60 良好，其余需努力
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 80 => ScoreGrade::Excellent,
            p if p >= 60 => ScoreGrade::Good,
            _ => ScoreGrade::NeedsImprovement,
        }
    }

    /// 样式类名
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "score-excellent",
            ScoreGrade::Good => "score-good",
            ScoreGrade::NeedsImprovement => "score-needs-improvement",
        }
    }
}

/// 成绩页中的单题回顾
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReview {
    pub question_number: usize,
    pub question_id: u32,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub is_answered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(ScoreGrade::from_percentage(100), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_percentage(80), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_percentage(79), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_percentage(60), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_percentage(59), ScoreGrade::NeedsImprovement);
        assert_eq!(ScoreGrade::from_percentage(0).css_class(), "score-needs-improvement");
    }

    #[test]
    fn counts_unanswered_separately_from_incorrect() {
        let result = QuizResult {
            total_questions: 3,
            correct_answers: 1,
            score: 1,
            percentage: 33,
            answers: vec![
                QuizAnswer { question_id: 1, selected_option: Some(0), is_correct: true },
                QuizAnswer { question_id: 2, selected_option: Some(2), is_correct: false },
                QuizAnswer { question_id: 3, selected_option: None, is_correct: false },
            ],
        };
        assert_eq!(result.incorrect_count(), 2);
        assert_eq!(result.unanswered_count(), 1);
    }
}
