use shop_gateway::{Config, GatewayState, Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 准备环境 (dotenv、工作目录、日志)
    setup_environment()?;

    print_banner();

    tracing::info!("🛒 Shop Gateway starting...");

    // 2. 读取配置
    let config = Config::from_env();

    // 3. 初始化网关状态 (会话存储、路由表、后端客户端)
    let state = GatewayState::initialize(&config).await;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
