use anyhow::Result;
use quiz_session::{logger, App, Config};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：优先使用 quiz.toml，否则读环境变量（解析失败直接退出）
    let config_path = Path::new("quiz.toml");
    let config = if config_path.exists() {
        Config::from_toml_file(config_path)?
    } else {
        Config::from_env()?
    };

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行检查
    let stats = App::initialize(config)?.run().await?;

    if stats.failed > 0 {
        anyhow::bail!("{} 个分类加载失败", stats.failed);
    }

    Ok(())
}
