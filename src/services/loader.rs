//! 题目加载服务 - 业务能力层
//!
//! 只负责"取回 → 解析 → 校验"，不关心会话状态

use crate::error::{AppError, AppResult};
use crate::infrastructure::QuizSource;
use crate::models::{QuizCategory, QuizData};
use crate::utils::logging::log_quiz_loaded;
use std::sync::Arc;
use tracing::{debug, warn};

/// 解析并校验一份题目文档
///
/// # 参数
/// - `data_file`: 数据文件名（仅用于错误信息）
/// - `content`: 原始 JSON 文本
pub fn parse_quiz_data(data_file: &str, content: &str) -> AppResult<QuizData> {
    let data: QuizData =
        serde_json::from_str(content).map_err(|e| AppError::json_parse_failed(data_file, e))?;
    data.validate()?;
    Ok(data)
}

/// 题目加载服务
///
/// 克隆开销很小，可以把克隆体交给并发任务去加载
pub struct QuizLoader<S> {
    source: Arc<S>,
}

impl<S> Clone for QuizLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: QuizSource> QuizLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 加载分类对应的题目数据
    pub async fn load(&self, category: &QuizCategory) -> AppResult<QuizData> {
        let data = self.load_file(category.data_file).await?;

        if data.question_count() != category.question_count {
            warn!(
                "⚠️ 分类 {} 标注 {} 道题，实际加载 {} 道",
                category.id,
                category.question_count,
                data.question_count()
            );
        }

        Ok(data)
    }

    /// 按文件名加载题目数据
    pub async fn load_file(&self, data_file: &str) -> AppResult<QuizData> {
        debug!("从 {} 加载 {}", self.source.describe(), data_file);

        let content = self.source.fetch(data_file).await?;
        let data = parse_quiz_data(data_file, &content)?;

        log_quiz_loaded(&data.title, data.question_count());
        Ok(data)
    }
}
