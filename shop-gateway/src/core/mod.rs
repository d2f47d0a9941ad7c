//! 核心模块：[`Config`] 配置、[`GatewayState`] 共享状态、
//! [`Server`] HTTP 服务器

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::GatewayState;
