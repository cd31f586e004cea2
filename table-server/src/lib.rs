//! Table Server - 餐厅桌台选择服务
//!
//! # 架构概述
//!
//! 本服务为外部预订流程 (Make.com + Google Calendar) 挑选最合适的桌台：
//!
//! - **桌台目录** (`catalog`): 启动时加载一次的只读配置数据
//! - **选择策略** (`selection`): 纯函数决策逻辑
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! table-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── catalog/       # 桌台数据模型和目录
//! ├── selection/     # 选择策略 (纯逻辑)
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod selection;
pub mod utils;

// Re-export 公共类型
pub use catalog::{Table, TableCatalog, TableType};
pub use core::{ApiError, Config, Result, Server, ServerState, build_app};
pub use selection::{Selection, SelectionMethod, select_table};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境：加载 .env 并初始化日志
///
/// 日志级别来自 `LOG_LEVEL`，可选的日志目录来自 `LOG_DIR`。
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
  ______      ____     __
 /_  __/___ _/ __/__  / /
  / / / __ `/ /_/ _ \/ /
 / / / /_/ / __/  __/ /
/_/  \__,_/_/  \___/_/
    "#
    );
}
