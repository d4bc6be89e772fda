//! 答题状态持有者
//!
//! 所有修改都经过这里，每次修改后把最新的 QuizState 推送给全部订阅者

use tokio::sync::watch;
use tracing::debug;

use crate::error::{AppResult, StateError};
use crate::models::{QuizData, QuizState};
use crate::services::OptionShuffler;
use crate::workflow::quiz_flow::QuizFlow;

/// 答题状态持有者
///
/// 订阅者通过 [`QuizStore::subscribe`] 拿到 `watch::Receiver`，
/// 新订阅者立即能看到当前状态
pub struct QuizStore {
    flow: Option<QuizFlow>,
    tx: watch::Sender<QuizState>,
    shuffle_seed: Option<u64>,
}

impl QuizStore {
    pub fn new(shuffle_seed: Option<u64>) -> Self {
        let (tx, _rx) = watch::channel(QuizState::default());
        Self {
            flow: None,
            tx,
            shuffle_seed,
        }
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.tx.subscribe()
    }

    /// 当前状态快照
    pub fn current_state(&self) -> QuizState {
        self.tx.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn flow(&self) -> Option<&QuizFlow> {
        self.flow.as_ref()
    }

    pub fn data(&self) -> Option<&QuizData> {
        self.flow.as_ref().map(QuizFlow::data)
    }

    /// 换上一套新题目，进度从头开始
    pub fn load(&mut self, data: QuizData) {
        let shuffler = OptionShuffler::from_seed_option(self.shuffle_seed);
        self.flow = Some(QuizFlow::new(data, shuffler));
        self.publish();
    }

    /// 丢弃题目数据并回到初始状态
    pub fn clear(&mut self) {
        self.flow = None;
        self.publish();
    }

    pub fn select_answer(&mut self, question_id: u32, option_index: usize) -> AppResult<()> {
        self.mutate(|flow| flow.select_answer(question_id, option_index))
    }

    pub fn next(&mut self) -> AppResult<()> {
        self.mutate(QuizFlow::next)
    }

    pub fn previous(&mut self) -> AppResult<()> {
        self.mutate(QuizFlow::previous)
    }

    pub fn reveal(&mut self) -> AppResult<()> {
        self.mutate(QuizFlow::reveal)
    }

    /// 任何时候都可以重置；没有题目数据时只推送初始状态
    pub fn reset(&mut self) {
        if let Some(flow) = self.flow.as_mut() {
            flow.reset();
        }
        self.publish();
    }

    fn mutate(&mut self, op: impl FnOnce(&mut QuizFlow) -> AppResult<()>) -> AppResult<()> {
        let flow = self.flow.as_mut().ok_or(StateError::NoQuizLoaded)?;
        op(flow)?;
        self.publish();
        Ok(())
    }

    fn publish(&self) {
        let state = self
            .flow
            .as_ref()
            .map(|f| f.state().clone())
            .unwrap_or_default();
        debug!("推送状态: {:?}", state.phase());
        self.tx.send_replace(state);
    }
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new(None)
    }
}
