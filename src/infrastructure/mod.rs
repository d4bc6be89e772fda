//! 基础设施层
//!
//! 持有外部资源（HTTP 客户端、本地目录），只暴露"按文件名取回文档"的能力

pub mod source;

pub use source::{check_data_file_name, DataSource, FileSource, HttpSource, MemorySource, QuizSource};
