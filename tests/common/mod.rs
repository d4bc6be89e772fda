#![allow(dead_code)]

use serde_json::json;

/// 生成一份含 `n` 道题的题目文档，第 i 题的正确答案是 `i % 4`
pub fn quiz_document(title: &str, n: u32) -> String {
    let questions: Vec<_> = (1..=n)
        .map(|id| {
            json!({
                "id": id,
                "question": format!("{} question {}", title, id),
                "options": ["A", "B", "C", "D"],
                "correctAnswer": id % 4,
                "explanation": format!("Option {} is right", id % 4),
            })
        })
        .collect();

    json!({
        "title": title,
        "description": format!("{} practice set", title),
        "questions": questions,
    })
    .to_string()
}

/// 报告文件放到临时目录，避免测试之间互相覆盖
pub fn temp_report_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("quiz_session_{}_{}.txt", name, std::process::id()))
        .to_string_lossy()
        .to_string()
}
