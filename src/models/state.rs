use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 一次答题会话的进度记录
///
/// 只能通过 [`crate::workflow::QuizFlow`] 定义的转换来修改
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    /// 当前题目下标（从 0 开始）
    pub current_question_index: usize,
    /// 题目 ID → 所选选项下标（只包含已作答的题目）
    pub selected_answers: BTreeMap<u32, usize>,
    pub is_completed: bool,
    pub show_results: bool,
}

impl QuizState {
    /// 当前所处阶段
    pub fn phase(&self) -> QuizPhase {
        if self.show_results {
            QuizPhase::ShowingResults
        } else if self.is_completed {
            QuizPhase::Completed
        } else {
            QuizPhase::Active(self.current_question_index)
        }
    }

    pub fn selected_option(&self, question_id: u32) -> Option<usize> {
        self.selected_answers.get(&question_id).copied()
    }
}

/// 答题阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// 正在作答（携带当前题目下标）
    Active(usize),
    /// 已交卷，尚未展示成绩
    Completed,
    /// 正在展示成绩
    ShowingResults,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::Active(index) => write!(f, "作答中(第 {} 题)", index + 1),
            QuizPhase::Completed => write!(f, "已完成"),
            QuizPhase::ShowingResults => write!(f, "展示成绩"),
        }
    }
}
