//! Service Desk Server - 车辆保养服务中心收银 / 取号服务
//!
//! # 架构概述
//!
//! - **取号** (`orders`): 原子递增计数器 + 订单落库
//! - **数据库** (`db`): SQLite (WAL) + sqlx 迁移
//! - **报表** (`reports`): 日/周/月营收汇总
//! - **小票** (`receipts`): 邮件发送接口
//! - **HTTP API** (`api`): axum 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 连接池和 repository
//! ├── orders/        # 取号服务
//! ├── reports/       # 报表窗口和汇总
//! ├── receipts/      # 小票邮件
//! └── utils/         # 日志、校验、时间工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod receipts;
pub mod reports;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use orders::{IssueError, TokenIssuer};
pub use receipts::{LogMailer, ReceiptMailer};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 初始化日志 (LOG_LEVEL / LOG_DIR)
pub fn setup_environment() -> anyhow::Result<Config> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(anyhow::anyhow!("Failed to load .env: {e}"));
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

/// 打印启动横幅
pub fn print_banner() {
    tracing::info!("╔══════════════════════════════════════════════╗");
    tracing::info!("║          SERVICE DESK POS SERVER             ║");
    tracing::info!("╚══════════════════════════════════════════════╝");
    tracing::info!("  Version      : {}", env!("CARGO_PKG_VERSION"));
}
