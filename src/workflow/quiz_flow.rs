//! 答题流程 - 流程层
//!
//! 核心职责：定义"一次答题"的状态机
//!
//! 阶段转换：
//! 1. Active(i) --next--> Active(i + 1) / Completed（最后一题）
//! 2. Active(i) --previous--> Active(i - 1)（i == 0 时不动）
//! 3. Completed --reveal--> ShowingResults
//! 4. 任意阶段 --reset--> Active(0)

use tracing::{debug, info};

use crate::error::{AppError, AppResult, StateError};
use crate::models::{AnswerReview, Question, QuizData, QuizPhase, QuizResult, QuizState};
use crate::services::{calculate_results, percentage_of, review_answers, OptionShuffler, ShuffledOption};
use crate::utils::logging::log_results;

/// 当前题目的展示数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 题号（从 1 开始）
    pub question_number: usize,
    pub total_questions: usize,
    pub question_id: u32,
    pub prompt: String,
    pub options: Vec<ShuffledOption>,
    pub selected_option: Option<usize>,
    pub is_first: bool,
    pub is_last: bool,
    pub next_label: &'static str,
}

/// 答题流程
///
/// - 持有一套题目数据和对应的进度
/// - 当前题目变化时重新打乱选项
/// - 非法转换返回错误且不修改状态
pub struct QuizFlow {
    data: QuizData,
    state: QuizState,
    shuffler: OptionShuffler,
    shuffled: Vec<ShuffledOption>,
}

impl QuizFlow {
    /// 创建新的答题流程，从第一题开始
    pub fn new(data: QuizData, shuffler: OptionShuffler) -> Self {
        let mut flow = Self {
            data,
            state: QuizState::default(),
            shuffler,
            shuffled: Vec::new(),
        };
        flow.reshuffle();
        flow
    }

    pub fn data(&self) -> &QuizData {
        &self.data
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    pub fn question_count(&self) -> usize {
        self.data.question_count()
    }

    /// 当前题目（仅在作答阶段存在）
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase() {
            QuizPhase::Active(index) => self.data.questions.get(index),
            _ => None,
        }
    }

    /// 当前题目打乱后的选项
    pub fn shuffled_options(&self) -> &[ShuffledOption] {
        &self.shuffled
    }

    // ========== 状态转换 ==========

    /// 记录（或覆盖）某题的答案
    pub fn select_answer(&mut self, question_id: u32, option_index: usize) -> AppResult<()> {
        self.ensure_active("select_answer")?;

        let question = self
            .data
            .question_by_id(question_id)
            .ok_or(StateError::UnknownQuestion { question_id })?;

        if option_index >= question.options.len() {
            return Err(StateError::OptionOutOfRange {
                question_id,
                index: option_index,
                option_count: question.options.len(),
            }
            .into());
        }

        debug!("题目 {} 选择选项 {}", question_id, option_index);
        self.state.selected_answers.insert(question_id, option_index);
        Ok(())
    }

    /// 下一题；最后一题时交卷
    pub fn next(&mut self) -> AppResult<()> {
        let index = self.ensure_active("next")?;

        if index + 1 < self.question_count() {
            self.state.current_question_index = index + 1;
            self.reshuffle();
        } else {
            self.state.is_completed = true;
            self.shuffled.clear();
            info!(
                "✓ 答题完成: 已作答 {}/{}",
                self.total_answered(),
                self.question_count()
            );
        }
        Ok(())
    }

    /// 上一题；第一题时不动
    pub fn previous(&mut self) -> AppResult<()> {
        let index = self.ensure_active("previous")?;

        if index > 0 {
            self.state.current_question_index = index - 1;
            self.reshuffle();
        }
        Ok(())
    }

    /// 展示成绩
    pub fn reveal(&mut self) -> AppResult<()> {
        match self.phase() {
            QuizPhase::Completed => {
                self.state.show_results = true;
                log_results(&self.data.title, &self.results());
                Ok(())
            }
            phase => Err(AppError::invalid_transition("reveal", phase)),
        }
    }

    /// 重新开始：回到第一题并清空答案
    pub fn reset(&mut self) {
        self.state = QuizState::default();
        self.reshuffle();
        debug!("答题进度已重置");
    }

    // ========== 查询 ==========

    /// 下标处的题目是否已作答
    pub fn is_question_answered(&self, index: usize) -> bool {
        self.data
            .questions
            .get(index)
            .map(|q| self.state.selected_answers.contains_key(&q.id))
            .unwrap_or(false)
    }

    /// 已作答题目数（重复作答只计一次）
    pub fn total_answered(&self) -> usize {
        self.state.selected_answers.len()
    }

    /// 进度百分比：(当前题号 / 总题数) × 100
    pub fn progress_percentage(&self) -> u32 {
        let position = match self.phase() {
            QuizPhase::Active(index) => index + 1,
            _ => self.question_count(),
        };
        percentage_of(position, self.question_count())
    }

    /// 当前题是否已作答，可用于界面上"下一题"按钮的启用判断
    pub fn can_advance(&self) -> bool {
        match self.phase() {
            QuizPhase::Active(index) => self.is_question_answered(index),
            _ => false,
        }
    }

    pub fn results(&self) -> QuizResult {
        calculate_results(&self.data, &self.state)
    }

    pub fn review(&self) -> Vec<AnswerReview> {
        review_answers(&self.data, &self.results())
    }

    /// 当前题目的展示数据
    pub fn question_view(&self) -> Option<QuestionView> {
        let QuizPhase::Active(index) = self.phase() else {
            return None;
        };
        let question = self.data.questions.get(index)?;
        let total = self.question_count();
        let is_last = index + 1 == total;

        Some(QuestionView {
            question_number: index + 1,
            total_questions: total,
            question_id: question.id,
            prompt: question.question.clone(),
            options: self.shuffled.clone(),
            selected_option: self.state.selected_option(question.id),
            is_first: index == 0,
            is_last,
            next_label: if is_last { "Finish Quiz" } else { "Next Question" },
        })
    }

    // ========== 内部辅助 ==========

    fn ensure_active(&self, action: &'static str) -> AppResult<usize> {
        match self.phase() {
            QuizPhase::Active(index) => Ok(index),
            phase => Err(AppError::invalid_transition(action, phase)),
        }
    }

    fn reshuffle(&mut self) {
        self.shuffled = match self.data.questions.get(self.state.current_question_index) {
            Some(question) => self.shuffler.shuffle_options(question),
            None => Vec::new(),
        };
    }
}
