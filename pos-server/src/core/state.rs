use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::orders::TokenIssuer;
use crate::receipts::{LogMailer, ReceiptMailer};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 连接池句柄实现浅拷贝，每个请求 clone 一份成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | mailer | Arc<dyn ReceiptMailer> | 小票邮件发送 |
/// | issuer | TokenIssuer | 取号服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// 小票邮件发送器
    pub mailer: Arc<dyn ReceiptMailer>,
    /// 取号服务 (共享同一个连接池)
    pub issuer: TokenIssuer,
}

impl ServerState {
    /// 手动构造 (测试中替换 mailer 时使用)
    pub fn new(config: Config, db: DbService, mailer: Arc<dyn ReceiptMailer>) -> Self {
        let issuer = TokenIssuer::new(db.pool.clone());
        Self {
            config,
            db,
            mailer,
            issuer,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (确保存在)
    /// 2. 数据库 (打开 + 迁移 + counter 单例)
    /// 3. 默认的日志型邮件发送器
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir()?;
        let db = DbService::new(config).await?;
        Ok(Self::new(config.clone(), db, Arc::new(LogMailer)))
    }

    /// 获取连接池
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
