//! 工具模块：进程环境设置 ([`setup_environment`]) 与
//! tracing 日志配置 ([`logger`])

pub mod logger;

use crate::core::Config;

/// 进程启动前的环境设置
///
/// 1. 加载 `.env`
/// 2. 确保工作目录和日志目录存在
/// 3. 初始化日志 (LOG_LEVEL / LOG_JSON 控制级别和格式)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = std::path::Path::new(&config.work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_json = std::env::var("LOG_JSON").ok().and_then(|v| v.parse().ok());

    logger::init_logger_with_file(log_level.as_deref(), log_json, log_dir.to_str());

    Ok(())
}
