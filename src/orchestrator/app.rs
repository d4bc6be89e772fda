//! 题库检查 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：报告文件、启动日志、按配置创建数据源
//! 2. **并发加载**：同时加载所有可用分类的题目数据
//! 3. **一致性检查**：校验数据并核对目录中标注的题目数
//! 4. **全局统计**：汇总结果写入报告

use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{DataSource, QuizSource};
use crate::models::{catalog, QuizCategory, QuizData};
use crate::services::QuizLoader;
use crate::utils::logging::{
    append_report_line, init_report_file, log_catalog_loaded, log_startup, print_final_stats,
};

/// 检查统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckStats {
    pub success: usize,
    pub failed: usize,
    /// 实际题目数与目录标注不一致的分类数
    pub mismatched: usize,
    pub total: usize,
}

/// 应用主结构
pub struct App<S = DataSource> {
    config: Config,
    loader: QuizLoader<S>,
}

impl App<DataSource> {
    /// 按配置初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let source = DataSource::from_config(&config).context("无法创建题目数据源")?;
        Self::with_source(config, source)
    }
}

impl<S: QuizSource> App<S> {
    /// 使用指定数据源初始化应用
    pub fn with_source(config: Config, source: S) -> Result<Self> {
        init_report_file(&config.report_file)
            .with_context(|| format!("无法创建报告文件: {}", config.report_file))?;

        log_startup(&config);
        info!("📂 数据源: {}", source.describe());

        Ok(Self {
            config,
            loader: QuizLoader::new(source),
        })
    }

    /// 运行检查
    pub async fn run(&self) -> Result<CheckStats> {
        let categories: Vec<&'static QuizCategory> =
            catalog().iter().filter(|c| c.is_enabled()).collect();
        log_catalog_loaded(catalog().len(), categories.len());

        if categories.is_empty() {
            warn!("⚠️ 没有可用的分类，程序结束");
            return Ok(CheckStats::default());
        }

        let results = join_all(categories.iter().map(|c| self.loader.load(c))).await;

        let mut stats = CheckStats {
            total: categories.len(),
            ..Default::default()
        };

        for (category, result) in categories.iter().zip(results) {
            self.record(category, result, &mut stats)?;
        }

        print_final_stats(stats.success, stats.failed, stats.total, &self.config.report_file);
        Ok(stats)
    }

    fn record(
        &self,
        category: &QuizCategory,
        result: AppResult<QuizData>,
        stats: &mut CheckStats,
    ) -> Result<()> {
        let line = match result {
            Ok(data) => {
                stats.success += 1;
                if data.question_count() == category.question_count {
                    format!("✅ {}: {} 道题", category.id, data.question_count())
                } else {
                    stats.mismatched += 1;
                    format!(
                        "⚠️ {}: 实际 {} 道题，目录标注 {} 道",
                        category.id,
                        data.question_count(),
                        category.question_count
                    )
                }
            }
            Err(e) => {
                stats.failed += 1;
                error!("[{}] ❌ 加载失败: {}", category.id, e);
                format!("❌ {}: {}", category.id, e)
            }
        };

        append_report_line(&self.config.report_file, &line)
    }
}
