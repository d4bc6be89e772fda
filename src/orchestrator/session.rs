//! 答题会话 - 编排层
//!
//! ## 职责
//!
//! 1. **分类选择**：在目录中查找分类，拒绝不存在或已禁用的分类
//! 2. **两阶段加载**：`begin_load` 发放 ticket，`complete_load` 只接受最新一代的结果
//! 3. **失败恢复**：重试当前分类，或回到选择页
//! 4. **状态持有**：把题目交给 [`QuizStore`]，由它负责推送状态

use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::{AppResult, StateError};
use crate::infrastructure::QuizSource;
use crate::models::{catalog, find_category, QuizCategory, QuizData, QuizState};
use crate::services::QuizLoader;
use crate::workflow::QuizStore;

/// 当前页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// 分类选择页
    Selection,
    /// 答题页
    Quiz,
}

/// 题目加载状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed { message: String, retryable: bool },
}

/// 一次加载请求的凭证
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    category: &'static QuizCategory,
}

impl LoadTicket {
    pub fn category(&self) -> &'static QuizCategory {
        self.category
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// 答题会话
pub struct QuizSession<S> {
    loader: QuizLoader<S>,
    store: QuizStore,
    view: AppView,
    selected: Option<&'static QuizCategory>,
    status: LoadStatus,
    generation: u64,
}

impl<S: QuizSource> QuizSession<S> {
    /// 创建新的会话
    ///
    /// # 参数
    /// - `source`: 题目数据源
    /// - `shuffle_seed`: 选项打乱种子，None 表示使用系统熵
    pub fn new(source: S, shuffle_seed: Option<u64>) -> Self {
        Self::with_loader(QuizLoader::new(source), shuffle_seed)
    }

    pub fn with_loader(loader: QuizLoader<S>, shuffle_seed: Option<u64>) -> Self {
        Self {
            loader,
            store: QuizStore::new(shuffle_seed),
            view: AppView::Selection,
            selected: None,
            status: LoadStatus::Idle,
            generation: 0,
        }
    }

    pub fn categories(&self) -> &'static [QuizCategory] {
        catalog()
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn selected_category(&self) -> Option<&'static QuizCategory> {
        self.selected
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    /// 加载器的克隆，可交给并发任务去取数据
    pub fn loader(&self) -> QuizLoader<S> {
        self.loader.clone()
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut QuizStore {
        &mut self.store
    }

    pub fn data(&self) -> Option<&QuizData> {
        self.store.data()
    }

    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.store.subscribe()
    }

    /// 选择分类并等待加载完成
    ///
    /// 加载失败时状态变为 `Failed`，同时把错误返回给调用方
    pub async fn select_category(&mut self, category_id: &str) -> AppResult<()> {
        let ticket = self.begin_load(category_id)?;
        let result = self.loader.load(ticket.category()).await;
        self.complete_load(ticket, result).map(|_| ())
    }

    /// 第一阶段：切换到答题页并发放加载凭证
    ///
    /// 之前发放的凭证全部作废
    pub fn begin_load(&mut self, category_id: &str) -> AppResult<LoadTicket> {
        let category = find_category(category_id).ok_or_else(|| StateError::UnknownCategory {
            category_id: category_id.to_string(),
        })?;
        ensure_selectable(category)?;

        self.generation += 1;
        self.selected = Some(category);
        self.view = AppView::Quiz;
        self.status = LoadStatus::Loading;
        self.store.clear();

        info!("📦 开始加载《{}》({})", category.title, category.data_file);

        Ok(LoadTicket {
            generation: self.generation,
            category,
        })
    }

    /// 第二阶段：提交加载结果
    ///
    /// # 返回
    /// - `Ok(true)`: 结果已生效
    /// - `Ok(false)`: 凭证已过期，结果被丢弃
    /// - `Err(e)`: 加载失败，状态已记为 `Failed`
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: AppResult<QuizData>,
    ) -> AppResult<bool> {
        if ticket.generation != self.generation {
            warn!(
                "⚠️ 丢弃过期的加载结果: {} (第 {} 代，当前第 {} 代)",
                ticket.category.id, ticket.generation, self.generation
            );
            return Ok(false);
        }

        match result {
            Ok(data) => {
                self.store.load(data);
                self.status = LoadStatus::Ready;
                Ok(true)
            }
            Err(e) => {
                warn!("❌ 加载《{}》失败: {}", ticket.category.title, e);
                self.status = LoadStatus::Failed {
                    message: e.to_string(),
                    retryable: e.is_retryable(),
                };
                Err(e)
            }
        }
    }

    /// 重新加载当前分类
    pub async fn retry(&mut self) -> AppResult<()> {
        let category = self.selected.ok_or(StateError::NoCategorySelected)?;
        info!("🔄 重试加载《{}》", category.title);
        self.select_category(category.id).await
    }

    /// 放弃当前分类，回到选择页
    pub fn choose_different_quiz(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.view = AppView::Selection;
        self.status = LoadStatus::Idle;
        self.store.clear();
    }

    /// 重新开始当前测验
    pub fn restart(&mut self) {
        self.store.reset();
    }
}

/// 已禁用的分类不能开始答题
fn ensure_selectable(category: &QuizCategory) -> AppResult<()> {
    if category.is_enabled() {
        Ok(())
    } else {
        Err(StateError::CategoryDisabled {
            category_id: category.id.to_string(),
        }
        .into())
    }
}
