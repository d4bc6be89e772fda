use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 单道选择题
///
/// 载入后不可变，`correct_answer` 是 `options` 的下标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// 按下标取选项文本
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// 正确选项的文本
    pub fn correct_option(&self) -> Option<&str> {
        self.option(self.correct_answer)
    }

    /// 校验单道题目的内容
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::BlankPrompt {
                question_id: self.id,
            });
        }
        if self.options.is_empty() {
            return Err(ValidationError::EmptyOptions {
                question_id: self.id,
            });
        }
        if self.correct_answer >= self.options.len() {
            return Err(ValidationError::CorrectAnswerOutOfRange {
                question_id: self.id,
                index: self.correct_answer,
                option_count: self.options.len(),
            });
        }
        Ok(())
    }
}

/// 一套测验的完整数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizData {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl QuizData {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question_by_id(&self, question_id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// 校验整套数据：题目非空、ID 唯一、每道题自身合法
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions.is_empty() {
            return Err(ValidationError::EmptyQuiz);
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(ValidationError::DuplicateQuestionId {
                    question_id: question.id,
                });
            }
            question.validate()?;
        }
        Ok(())
    }
}
