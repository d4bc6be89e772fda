//! 题目数据源 - 基础设施层
//!
//! 只负责"按文件名取回原始文档"，不认识 Question / QuizData

use crate::config::{Config, SourceKind};
use crate::error::{AppError, AppResult, LoadError};
use regex::Regex;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// 题目数据源
///
/// 职责：
/// - 按数据文件名取回原始 JSON 文本
/// - 不解析、不校验内容
pub trait QuizSource {
    /// 取回数据文件的原始内容
    fn fetch(&self, data_file: &str) -> impl Future<Output = AppResult<String>> + Send;

    /// 用于日志的来源描述
    fn describe(&self) -> String;
}

const DATA_FILE_PATTERN: &str = r"^[A-Za-z0-9_-]+\.json$";

/// 检查数据文件名，只允许 `name.json` 形式，拒绝路径穿越
pub fn check_data_file_name(data_file: &str) -> AppResult<()> {
    let re = Regex::new(DATA_FILE_PATTERN).map_err(|e| AppError::Other(e.to_string()))?;

    if re.is_match(data_file) {
        Ok(())
    } else {
        Err(LoadError::InvalidFileName {
            data_file: data_file.to_string(),
        }
        .into())
    }
}

/// 通过 HTTP 拉取静态数据文件
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// 创建新的 HTTP 数据源
    ///
    /// # 参数
    /// - `base_url`: 数据文件所在目录的 URL
    /// - `timeout`: 单次请求超时
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::request_failed(base_url.clone(), e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 拼接数据文件的完整 URL
    pub fn url_for(&self, data_file: &str) -> String {
        format!("{}/{}", self.base_url, data_file)
    }
}

impl QuizSource for HttpSource {
    fn fetch(&self, data_file: &str) -> impl Future<Output = AppResult<String>> + Send {
        let checked = check_data_file_name(data_file);
        let url = self.url_for(data_file);
        let client = self.client.clone();

        async move {
            checked?;
            debug!("GET {}", url);

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| AppError::request_failed(url.clone(), e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::BadStatus {
                    url,
                    status: status.as_u16(),
                }
                .into());
            }

            response
                .text()
                .await
                .map_err(|e| AppError::request_failed(url, e))
        }
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}

/// 从本地目录读取数据文件
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl QuizSource for FileSource {
    fn fetch(&self, data_file: &str) -> impl Future<Output = AppResult<String>> + Send {
        let checked = check_data_file_name(data_file);
        let path = self.dir.join(data_file);
        let data_file = data_file.to_string();

        async move {
            checked?;
            debug!("读取文件 {}", path.display());

            match tokio::fs::read_to_string(&path).await {
                Ok(content) => Ok(content),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Err(LoadError::NotFound { data_file }.into())
                }
                Err(e) => Err(AppError::file_read_failed(path.display().to_string(), e)),
            }
        }
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}

/// 内存数据源，预先注册文档
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一份文档
    pub fn with_document(mut self, data_file: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(data_file, content);
        self
    }

    pub fn insert(&mut self, data_file: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(data_file.into(), content.into());
    }
}

impl QuizSource for MemorySource {
    fn fetch(&self, data_file: &str) -> impl Future<Output = AppResult<String>> + Send {
        let result = check_data_file_name(data_file).and_then(|_| {
            self.documents
                .get(data_file)
                .cloned()
                .ok_or_else(|| {
                    LoadError::NotFound {
                        data_file: data_file.to_string(),
                    }
                    .into()
                })
        });

        async move { result }
    }

    fn describe(&self) -> String {
        format!("memory:{} 个文档", self.documents.len())
    }
}

/// 按配置选择的数据源
#[derive(Debug, Clone)]
pub enum DataSource {
    Http(HttpSource),
    File(FileSource),
}

impl DataSource {
    /// 根据配置创建数据源
    pub fn from_config(config: &Config) -> AppResult<Self> {
        match config.source {
            SourceKind::Http => Ok(DataSource::Http(HttpSource::new(
                config.data_base_url.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )?)),
            SourceKind::File => Ok(DataSource::File(FileSource::new(&config.data_dir))),
        }
    }
}

impl QuizSource for DataSource {
    async fn fetch(&self, data_file: &str) -> AppResult<String> {
        match self {
            DataSource::Http(s) => s.fetch(data_file).await,
            DataSource::File(s) => s.fetch(data_file).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Http(s) => s.describe(),
            DataSource::File(s) => s.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_json_file_names() {
        assert!(check_data_file_name("csharp-advanced.json").is_ok());
        assert!(check_data_file_name("web_development_2.json").is_ok());
    }

    #[test]
    fn rejects_paths_and_other_extensions() {
        for bad in ["../secret.json", "nested/quiz.json", "quiz.toml", ".json", ""] {
            let err = check_data_file_name(bad).unwrap_err();
            assert!(
                matches!(err, AppError::Load(LoadError::InvalidFileName { .. })),
                "{bad} 应被拒绝"
            );
        }
    }

    #[test]
    fn http_source_joins_base_url_without_double_slash() {
        let source = HttpSource::new("http://localhost:4200/assets/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            source.url_for("angular-concepts.json"),
            "http://localhost:4200/assets/angular-concepts.json"
        );
    }

    #[tokio::test]
    async fn memory_source_returns_registered_documents() {
        let source = MemorySource::new().with_document("a.json", "{}");
        assert_eq!(source.fetch("a.json").await.unwrap(), "{}");

        let err = source.fetch("b.json").await.unwrap_err();
        assert!(matches!(err, AppError::Load(LoadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn file_source_maps_missing_file_to_not_found() {
        let source = FileSource::new(std::env::temp_dir().join("quiz_session_missing_dir"));
        let err = source.fetch("nothing-here.json").await.unwrap_err();
        assert!(matches!(err, AppError::Load(LoadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn file_source_reads_documents_from_dir() {
        let dir = std::env::temp_dir().join(format!("quiz_session_src_{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("web-development.json"), "{\"ok\":true}")
            .await
            .unwrap();

        let source = DataSource::File(FileSource::new(&dir));
        assert_eq!(source.fetch("web-development.json").await.unwrap(), "{\"ok\":true}");
        assert!(source.describe().starts_with("file:"));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    /// 在本地端口上启动一个极简 HTTP 服务，只响应 `/assets/<ok_file>`
    async fn serve_once(ok_file: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = vec![0u8; 4096];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => read += n,
                    }
                }
                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let wanted = format!("GET /assets/{} ", ok_file);
                let response = if request.starts_with(&wanted) {
                    format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    )
                } else {
                    "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string()
                };
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        format!("http://{}/assets", addr)
    }

    #[tokio::test]
    async fn http_source_returns_body_on_success() {
        let base_url = serve_once("csharp-advanced.json", "{\"title\":\"C#\"}").await;
        let source = HttpSource::new(base_url, Duration::from_secs(5)).unwrap();

        let body = source.fetch("csharp-advanced.json").await.unwrap();
        assert_eq!(body, "{\"title\":\"C#\"}");
    }

    #[tokio::test]
    async fn http_source_maps_non_success_status_to_bad_status() {
        let base_url = serve_once("csharp-advanced.json", "{}").await;
        let source = DataSource::Http(HttpSource::new(base_url, Duration::from_secs(5)).unwrap());

        let err = source.fetch("web-development.json").await.unwrap_err();
        match err {
            AppError::Load(LoadError::BadStatus { status, url }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/assets/web-development.json"));
            }
            other => panic!("意外的错误: {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_source_maps_connection_error_to_request_failed() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new(format!("http://{}/assets", addr), Duration::from_secs(2)).unwrap();
        let err = source.fetch("csharp-advanced.json").await.unwrap_err();
        assert!(matches!(err, AppError::Load(LoadError::RequestFailed { .. })));
        assert!(err.is_retryable());
    }

    #[test]
    fn from_config_picks_http_or_file() {
        let http = DataSource::from_config(&Config {
            source: SourceKind::Http,
            ..Config::default()
        })
        .unwrap();
        assert!(http.describe().starts_with("http:"));

        let file = DataSource::from_config(&Config::default()).unwrap();
        assert!(file.describe().starts_with("file:"));
    }
}
