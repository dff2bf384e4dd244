//! argochainhub - B2B 农化产品交易平台后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建：企业（采购商/供应商）、用户、产品上架、
//! 询价与消息、价格走势和行业资讯。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `maintenance`: 运维任务（企业激活、密码重置等）
//! - `middlewares`: 认证、企业访问控制与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod maintenance;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
