use std::sync::Arc;

use crate::catalog::TableCatalog;
use crate::core::Config;

/// 服务器状态 - 持有所有处理器共享的只读数据
///
/// ServerState 使用 Arc 实现浅拷贝，所有权成本极低。桌台目录在启动时
/// 加载一次，之后只读，处理器之间无需任何锁。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config)?;
/// let tables = state.catalog.tables();
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 桌台目录 (只读)
    pub catalog: Arc<TableCatalog>,
}

impl ServerState {
    /// 创建服务器状态：按配置加载桌台目录
    ///
    /// 目录校验失败时返回错误并中止启动。
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let catalog = TableCatalog::load(config)?;
        Ok(Self {
            config: config.clone(),
            catalog: Arc::new(catalog),
        })
    }

    /// 使用现成目录构造状态 (测试用)
    pub fn with_catalog(config: Config, catalog: TableCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }
}
