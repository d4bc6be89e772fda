//! # Quiz Session
//!
//! 选择题测验引擎：选分类 → 加载题目 → 逐题作答 → 交卷判分
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有外部资源，只暴露"按文件名取回文档"的能力
//! - `QuizSource` - HTTP / 本地目录 / 内存 三种实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯粹的能力，不持有会话状态
//! - `QuizLoader` - 取回、解析、校验题目数据
//! - `OptionShuffler` - Fisher–Yates 打乱选项
//! - `scoring` - 判分、评语、逐题回顾
//!
//! ### ③ 流程层（Workflow）
//! - `QuizFlow` - 答题状态机（Active → Completed → ShowingResults）
//! - `QuizStore` - 唯一的状态持有者，每次修改后推送给订阅者
//!
//! ### ④ 编排层（Orchestration）
//! - `QuizSession` - 分类选择、带代数保护的加载、失败恢复
//! - `App` - 题库检查
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DataSource, FileSource, HttpSource, MemorySource, QuizSource};
pub use models::{Question, QuizCategory, QuizData, QuizPhase, QuizResult, QuizState};
pub use orchestrator::{App, AppView, LoadStatus, QuizSession};
pub use services::{calculate_results, OptionShuffler, QuizLoader};
pub use workflow::{QuizFlow, QuizStore};
