//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `session` - 答题会话
//! - 分类选择与页面切换
//! - 带代数保护的两阶段加载（过期结果直接丢弃）
//! - 加载失败后的重试 / 重新选择
//!
//! ### `app` - 题库检查
//! - 并发加载全部可用分类
//! - 校验数据并输出统计报告
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (session / app)
//!     ↓
//! workflow (QuizStore → QuizFlow)
//!     ↓
//! services (loader / shuffle / scoring)
//!     ↓
//! infrastructure (QuizSource)
//! ```

pub mod app;
pub mod session;

pub use app::{App, CheckStats};
pub use session::{AppView, LoadStatus, LoadTicket, QuizSession};
