//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;

use crate::config::Config;
use crate::models::QuizResult;

/// 初始化报告文件
///
/// # 参数
/// - `report_file_path`: 报告文件路径
pub fn init_report_file(report_file_path: &str) -> Result<()> {
    let header = format!(
        "{}\n题库检查报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(report_file_path, header)?;
    Ok(())
}

/// 向报告文件追加一行
pub fn append_report_line(report_file_path: &str, line: &str) -> Result<()> {
    use std::io::Write;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库检查模式");
    info!("📂 数据来源: {:?}", config.source);
    match config.shuffle_seed {
        Some(seed) => info!("🎲 打乱种子: {}", seed),
        None => info!("🎲 打乱种子: 系统熵"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录分类目录信息
///
/// # 参数
/// - `total`: 分类总数
/// - `enabled`: 可用分类数
pub fn log_catalog_loaded(total: usize, enabled: usize) {
    info!("✓ 共 {} 个分类，其中 {} 个可用", total, enabled);
}

/// 记录单个测验加载完成
pub fn log_quiz_loaded(title: &str, question_count: usize) {
    info!("✓ 已加载《{}》，共 {} 道题", truncate_text(title, 40), question_count);
}

/// 记录测验成绩
pub fn log_results(title: &str, result: &QuizResult) {
    info!("{}", "─".repeat(60));
    info!("📊 《{}》成绩", truncate_text(title, 40));
    info!(
        "✅ 正确: {}/{} ({}%)",
        result.correct_answers, result.total_questions, result.percentage
    );
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `report_file_path`: 报告文件路径
pub fn print_final_stats(success: usize, failed: usize, total: usize, report_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 检查完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
