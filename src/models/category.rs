use serde::Serialize;
use std::fmt;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// 获取展示名称
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 卡片主题色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Green,
    Purple,
    Orange,
}

/// 测验分类（静态目录项）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub estimated_time: &'static str,
    pub color: CategoryColor,
    pub data_file: &'static str,
    pub disabled: bool,
}

impl QuizCategory {
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

static CATALOG: [QuizCategory; 4] = [
    QuizCategory {
        id: "csharp-advanced",
        title: "C# Advanced Mastery",
        description: "Master advanced C# concepts including LINQ, generics, delegates, events, async programming, design patterns, and .NET internals.",
        difficulty: Difficulty::Advanced,
        question_count: 40,
        estimated_time: "35-45 min",
        color: CategoryColor::Blue,
        data_file: "csharp-advanced.json",
        disabled: false,
    },
    QuizCategory {
        id: "javascript-fundamentals",
        title: "JavaScript Essentials",
        description: "Explore JavaScript fundamentals, ES6+ features, DOM manipulation, and async programming.",
        difficulty: Difficulty::Beginner,
        question_count: 25,
        estimated_time: "18-25 min",
        color: CategoryColor::Orange,
        data_file: "javascript-fundamentals.json",
        disabled: false,
    },
    QuizCategory {
        id: "angular-concepts",
        title: "Angular Deep Dive",
        description: "Master Angular components, services, routing, forms, and modern Angular patterns.",
        difficulty: Difficulty::Advanced,
        question_count: 30,
        estimated_time: "25-30 min",
        color: CategoryColor::Green,
        data_file: "angular-concepts.json",
        disabled: false,
    },
    QuizCategory {
        id: "web-development",
        title: "Web Development",
        description: "Test your HTML, CSS, responsive design, and modern web development practices.",
        difficulty: Difficulty::Beginner,
        question_count: 22,
        estimated_time: "16-22 min",
        color: CategoryColor::Purple,
        data_file: "web-development.json",
        disabled: false,
    },
];

/// 全部分类
pub fn catalog() -> &'static [QuizCategory] {
    &CATALOG
}

/// 按 ID 查找分类
pub fn find_category(id: &str) -> Option<&'static QuizCategory> {
    CATALOG.iter().find(|c| c.id == id)
}
