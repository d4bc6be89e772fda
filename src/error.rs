use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题目数据加载错误
    #[error("加载错误: {0}")]
    Load(#[from] LoadError),
    /// 题目数据校验错误
    #[error("数据校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 状态机转换错误
    #[error("状态错误: {0}")]
    State(#[from] StateError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他错误
    #[error("错误: {0}")]
    Other(String),
}

/// 题目数据加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    /// 网络请求失败
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务器返回非 2xx 状态码
    #[error("服务器返回错误状态 ({url}): {status}")]
    BadStatus { url: String, status: u16 },
    /// 读取本地文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 数据源中不存在该文件
    #[error("数据文件不存在: {data_file}")]
    NotFound { data_file: String },
    /// 数据文件名不合法
    #[error("非法的数据文件名: {data_file}")]
    InvalidFileName { data_file: String },
    /// JSON 解析失败
    #[error("JSON解析失败 ({data_file}): {source}")]
    JsonParseFailed {
        data_file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 题目数据校验错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 题目列表为空
    #[error("题目列表为空")]
    EmptyQuiz,
    /// 题目选项为空
    #[error("题目 {question_id} 没有任何选项")]
    EmptyOptions { question_id: u32 },
    /// 正确答案索引越界
    #[error("题目 {question_id} 的正确答案索引 {index} 超出范围 [0, {option_count})")]
    CorrectAnswerOutOfRange {
        question_id: u32,
        index: usize,
        option_count: usize,
    },
    /// 题目 ID 重复
    #[error("题目 ID {question_id} 重复")]
    DuplicateQuestionId { question_id: u32 },
    /// 题干为空
    #[error("题目 {question_id} 的题干为空")]
    BlankPrompt { question_id: u32 },
}

/// 状态机转换错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// 当前阶段不允许该操作
    #[error("阶段 {phase} 不允许执行 {action}")]
    InvalidTransition {
        action: &'static str,
        phase: String,
    },
    /// 题目不存在
    #[error("题目不存在: {question_id}")]
    UnknownQuestion { question_id: u32 },
    /// 选项索引越界
    #[error("题目 {question_id} 的选项索引 {index} 超出范围 [0, {option_count})")]
    OptionOutOfRange {
        question_id: u32,
        index: usize,
        option_count: usize,
    },
    /// 分类不存在
    #[error("分类不存在: {category_id}")]
    UnknownCategory { category_id: String },
    /// 分类已禁用
    #[error("分类已禁用: {category_id}")]
    CategoryDisabled { category_id: String },
    /// 尚未选择分类
    #[error("尚未选择任何分类")]
    NoCategorySelected,
    /// 题目数据尚未加载
    #[error("题目数据尚未加载")]
    NoQuizLoaded,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Load(LoadError::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Load(LoadError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 JSON 解析错误
    pub fn json_parse_failed(data_file: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Load(LoadError::JsonParseFailed {
            data_file: data_file.into(),
            source,
        })
    }

    /// 创建非法阶段转换错误
    pub fn invalid_transition(action: &'static str, phase: impl ToString) -> Self {
        AppError::State(StateError::InvalidTransition {
            action,
            phase: phase.to_string(),
        })
    }

    /// 是否为用户可通过重试恢复的加载类错误
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Load(LoadError::RequestFailed { .. })
                | AppError::Load(LoadError::BadStatus { .. })
                | AppError::Load(LoadError::ReadFailed { .. })
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_app_error() {
        let err: AppError = ValidationError::EmptyQuiz.into();
        assert!(matches!(err, AppError::Validation(ValidationError::EmptyQuiz)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn bad_status_is_retryable() {
        let err: AppError = LoadError::BadStatus {
            url: "http://localhost/a.json".to_string(),
            status: 503,
        }
        .into();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn invalid_transition_message_names_action_and_phase() {
        let err = AppError::invalid_transition("next", "已完成");
        let msg = err.to_string();
        assert!(msg.contains("next"));
        assert!(msg.contains("已完成"));
    }
}
