//! 导航模块 - 路由表与导航守卫
//!
//! [`RouteTable`] 是有序路由表，首条匹配生效；[`guard`] 给出守卫
//! 决策 (放行 / 重定向登录页)；[`middleware`] 把守卫装成 axum
//! 中间件。

pub mod guard;
pub mod middleware;
pub mod route;
pub mod table;

pub use guard::{NavigationOutcome, decide, decide_for_match};
pub use route::{AccessPolicy, MatchedRoute, Page, RouteDescriptor, RouteMatch};
pub use table::RouteTable;
