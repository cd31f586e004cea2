//! 桌台目录模块 - 静态桌台配置
//!
//! The catalog is loaded once at startup (from `TABLES_FILE` or the
//! compiled-in default layout) and is read-only for the process lifetime.
//!
//! # 模块结构
//!
//! - [`Table`] / [`TableType`] - 桌台数据模型
//! - [`TableCatalog`] - 目录加载、过滤、查找

pub mod store;
pub mod table;

pub use store::{ListFilter, TableCatalog, TypeSummary};
pub use table::{Table, TableRef, TableSnapshot, TableType};
