use thiserror::Error;

/// 服务器启动/运行错误
///
/// 只在启动路径上出现；请求级别的错误统一走 [`shared::error::AppError`]。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] crate::db::repository::RepoError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 启动路径的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
