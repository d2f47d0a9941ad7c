//! HTTP 服务器的绑定、启动和退出

use crate::core::{Config, GatewayState};
use crate::routes;

/// 网关 HTTP 服务器
pub struct Server {
    config: Config,
    state: Option<GatewayState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// 复用外部已初始化的状态 (测试和嵌入场景)
    pub fn with_state(config: Config, state: GatewayState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        // 没有外部状态时在这里初始化
        let state = match &self.state {
            Some(s) => s.clone(),
            None => GatewayState::initialize(&self.config).await,
        };

        let app = routes::build_app(&state).with_state(state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🛒 Shop Gateway listening on {}", addr);
        tracing::info!("    proxying /api -> {}", self.config.backend_url);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
