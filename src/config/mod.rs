//! 配置管理
//!
//! 配置来源依次为 `config.toml`、`config.{APP_ENV}.toml`、`ARGOCHAIN_*` 环境变量，
//! 以及少量约定俗成的独立环境变量（`DATABASE_URL`、`JWT_SECRET` 等）。

mod loader;
mod structs;

pub use structs::*;
