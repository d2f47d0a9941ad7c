/// 网关配置 - 边缘网关的所有配置项
///
/// # 环境变量
///
/// 每一项都可以用环境变量覆盖默认值：
///
/// | 变量 | 默认值 | 说明 |
/// |------|--------|------|
/// | WORK_DIR | /var/lib/shop/gateway | 工作目录 (会话存储、日志) |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | BACKEND_URL | http://localhost:8081 | 店面后端源 |
/// | ENVIRONMENT | development | 运行环境标识，健康检查会上报 |
/// | REQUEST_TIMEOUT_MS | 30000 | 后端请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/shop BACKEND_URL=http://backend:8081 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储会话数据库和日志
    pub work_dir: String,
    /// HTTP 服务端口
    pub http_port: u16,
    /// 店面后端源 (代理目标，`/api` 在此之上)
    pub backend_url: String,
    /// 运行环境标识 (development / staging / production)
    pub environment: String,
    /// 后端请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 读取环境变量，缺省项落回默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/shop/gateway".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 在环境配置之上覆盖三个关键项，测试里用
    pub fn with_overrides(
        work_dir: impl Into<String>,
        http_port: u16,
        backend_url: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.backend_url = backend_url.into();
        config
    }

    /// 后端 API 基地址 (`backend_url` + `/api`)
    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/shop-test", 9090, "http://backend:8081");
        assert_eq!(config.work_dir, "/tmp/shop-test");
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.backend_url, "http://backend:8081");
    }

    #[test]
    fn test_api_base_url_strips_trailing_slash() {
        let config = Config::with_overrides("/tmp", 0, "http://backend:8081/");
        assert_eq!(config.api_base_url(), "http://backend:8081/api");
    }
}
