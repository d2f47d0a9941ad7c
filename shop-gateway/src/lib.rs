//! Shop Gateway - 网上商店边缘网关
//!
//! # 职责
//!
//! 店面网关的主入口，核心功能：
//!
//! - **路由表** (`nav`): 有序路由描述符，路径模式 + 访问策略
//! - **导航守卫** (`nav`): 放行或重定向到门户登录页，无其他结论
//! - **会话存储** (`session`): redb 持久化的登录标志和令牌
//! - **门户会话** (`handler/auth`): 登录/注册/登出，写会话标志
//! - **API 代理** (`handler/proxy`): `/api` 整体转发到后端源，按路径签名
//!
//! # 目录
//!
//! ```text
//! shop-gateway/src/
//! ├── core/        # 配置、状态、服务器
//! ├── nav/         # 路由表、守卫、守卫中间件
//! ├── session/     # redb 会话标志存储
//! ├── handler/     # 会话、页面、代理处理器
//! ├── routes/      # 路由组装和中间件栈
//! ├── middleware/  # 请求日志
//! └── utils/       # 日志、环境设置
//! ```

pub mod core;
pub mod handler;
pub mod middleware;
pub mod nav;
pub mod routes;
pub mod session;
pub mod utils;

// 对外暴露的核心类型
pub use crate::core::{Config, GatewayState, Server};
pub use nav::{AccessPolicy, NavigationOutcome, Page, RouteDescriptor, RouteTable};
pub use session::SessionStore;
pub use shared::{Portal, SessionRead};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;
pub use utils::setup_environment;

// 安全事件走独立的 "security" target，便于单独过滤
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_  ____  ____
  \__ \/ __ \/ __ \/ __ \
 ___/ / / / / /_/ / /_/ /
/____/_/ /_/\____/ .___/
                /_/
   ______      __
  / ____/___ _/ /____ _      ______ ___  __
 / / __/ __ `/ __/ _ \ | /| / / __ `/ / / /
/ /_/ / /_/ / /_/  __/ |/ |/ / /_/ / /_/ /
\____/\__,_/\__/\___/|__/|__/\__,_/\__, /
                                  /____/
    "#
    );
}
