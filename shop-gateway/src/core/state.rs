//! 网关共享状态
//!
//! 路由表、会话存储和后端客户端在此组装一次，之后以 `Clone`
//! (全 `Arc` 浅拷贝) 的方式分发给处理器和中间件。守卫和签名器
//! 需要的会话上下文从这里显式传入，不存在全局单例。

use std::path::PathBuf;
use std::sync::Arc;

use shared::SessionRead;
use shop_client::{ClientConfig, ShopClient};

use crate::core::Config;
use crate::nav::RouteTable;
use crate::session::SessionStore;

/// 网关状态 - 所有处理器共享
#[derive(Clone)]
pub struct GatewayState {
    config: Config,
    routes: Arc<RouteTable>,
    session: Arc<SessionStore>,
    backend: ShopClient,
}

impl GatewayState {
    pub fn new(
        config: Config,
        routes: Arc<RouteTable>,
        session: Arc<SessionStore>,
        backend: ShopClient,
    ) -> Self {
        Self {
            config,
            routes,
            session,
            backend,
        }
    }

    /// 初始化网关状态
    ///
    /// 1. 确保工作目录存在
    /// 2. 打开 redb 会话存储 (`<work_dir>/session.redb`)
    /// 3. 装载店面路由表
    /// 4. 构建后端客户端，签名器读取同一个会话存储
    pub async fn initialize(config: &Config) -> Self {
        std::fs::create_dir_all(&config.work_dir).expect("Failed to create work directory");

        let session_path = PathBuf::from(&config.work_dir).join("session.redb");
        let session =
            Arc::new(SessionStore::open(&session_path).expect("Failed to open session store"));

        let routes = Arc::new(RouteTable::storefront());

        let backend = ClientConfig::new(config.api_base_url())
            .with_timeout((config.request_timeout_ms / 1000).max(1))
            .build_client(session.clone());

        Self::new(config.clone(), routes, session, backend)
    }

    /// 获取配置
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 获取路由表
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// 获取会话存储 (登录/登出流程写入)
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// 会话只读视图 (守卫与诊断端点使用)
    pub fn session_reader(&self) -> &dyn SessionRead {
        self.session.as_ref()
    }

    /// 获取后端客户端
    pub fn backend(&self) -> &ShopClient {
        &self.backend
    }
}
