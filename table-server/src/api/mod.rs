//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 服务信息和健康检查
//! - [`selection`] - 桌台选择接口
//! - [`tables`] - 桌台查询接口

pub mod health;
pub mod selection;
pub mod tables;
