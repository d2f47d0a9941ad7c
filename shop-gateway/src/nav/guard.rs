//! 导航守卫
//!
//! 对每次页面导航给出唯一结论：放行，或重定向到某个门户的登录页。
//! 决策是纯函数，只看路由的访问策略和会话标志；会话上下文由调用
//! 方显式传入，不读全局状态。

use shared::{Portal, SessionRead};

use super::route::{AccessPolicy, RouteMatch};

/// 守卫结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// 放行
    Proceed,
    /// 重定向到指定门户的登录页
    RedirectToLogin(Portal),
}

/// 对访问策略求值
///
/// 公开路由一律放行；受保护路由检查对应门户的登录标志，标志存在
/// 即视为已登录，不做过期或有效性检查。两个门户互不抵扣：卖家
/// 登录态对顾客页面不起作用，反之亦然。
pub fn decide(access: AccessPolicy, session: &dyn SessionRead) -> NavigationOutcome {
    match access.required_portal() {
        None => NavigationOutcome::Proceed,
        Some(portal) => {
            if portal.is_logged_in(session) {
                NavigationOutcome::Proceed
            } else {
                NavigationOutcome::RedirectToLogin(portal)
            }
        }
    }
}

/// 对可选匹配求值
///
/// 没有命中路由表的路径照常放行，由页面层渲染 404 外壳。
pub fn decide_for_match(
    matched: Option<&RouteMatch<'_>>,
    session: &dyn SessionRead,
) -> NavigationOutcome {
    match matched {
        Some(m) => decide(m.descriptor.access, session),
        None => NavigationOutcome::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::RouteTable;
    use shared::MemorySession;
    use shared::session::keys;

    fn seller_access() -> AccessPolicy {
        AccessPolicy::Requires(Portal::Seller)
    }

    fn customer_access() -> AccessPolicy {
        AccessPolicy::Requires(Portal::Customer)
    }

    #[test]
    fn test_public_route_always_proceeds() {
        let session = MemorySession::new();
        assert_eq!(
            decide(AccessPolicy::Public, &session),
            NavigationOutcome::Proceed
        );
    }

    #[test]
    fn test_seller_route_redirects_anonymous_to_seller_login() {
        let session = MemorySession::new();
        assert_eq!(
            decide(seller_access(), &session),
            NavigationOutcome::RedirectToLogin(Portal::Seller)
        );
    }

    #[test]
    fn test_seller_route_proceeds_once_logged_in() {
        let session = MemorySession::new();
        session.insert(keys::SELLER_LOGGED_IN, "true");
        assert_eq!(decide(seller_access(), &session), NavigationOutcome::Proceed);
    }

    #[test]
    fn test_customer_login_does_not_open_seller_routes() {
        let session = MemorySession::new();
        session.insert(keys::CUSTOMER_LOGGED_IN, "true");
        assert_eq!(
            decide(seller_access(), &session),
            NavigationOutcome::RedirectToLogin(Portal::Seller)
        );
    }

    #[test]
    fn test_seller_login_does_not_open_customer_routes() {
        let session = MemorySession::new();
        session.insert(keys::SELLER_LOGGED_IN, "true");
        assert_eq!(
            decide(customer_access(), &session),
            NavigationOutcome::RedirectToLogin(Portal::Customer)
        );
    }

    #[test]
    fn test_customer_route_proceeds_once_logged_in() {
        let session = MemorySession::new();
        session.insert(keys::CUSTOMER_LOGGED_IN, "true");
        assert_eq!(
            decide(customer_access(), &session),
            NavigationOutcome::Proceed
        );
    }

    #[test]
    fn test_flag_presence_is_trusted_at_face_value() {
        // 标志的值无关紧要，存在即已登录。
        let session = MemorySession::new();
        session.insert(keys::SELLER_LOGGED_IN, "");
        assert_eq!(decide(seller_access(), &session), NavigationOutcome::Proceed);
    }

    #[test]
    fn test_no_match_is_treated_as_proceed() {
        // 未命中路由表的路径放行，由页面层渲染 404。
        let table = RouteTable::storefront();
        let session = MemorySession::new();
        let matched = table.match_path("/does-not-exist");
        assert!(matched.is_none());
        assert_eq!(
            decide_for_match(matched.as_ref(), &session),
            NavigationOutcome::Proceed
        );
    }

    #[test]
    fn test_storefront_scenarios() {
        let table = RouteTable::storefront();
        let session = MemorySession::new();

        // 匿名访问卖家面板 -> 卖家登录页
        let dashboard = table.match_path("/seller/dashboard");
        assert_eq!(
            decide_for_match(dashboard.as_ref(), &session),
            NavigationOutcome::RedirectToLogin(Portal::Seller)
        );

        // 匿名访问订单页 -> 顾客登录页
        let orders = table.match_path("/orders");
        assert_eq!(
            decide_for_match(orders.as_ref(), &session),
            NavigationOutcome::RedirectToLogin(Portal::Customer)
        );

        // 卖家登录后面板放行
        session.insert(keys::SELLER_LOGGED_IN, "true");
        let dashboard = table.match_path("/seller/dashboard");
        assert_eq!(
            decide_for_match(dashboard.as_ref(), &session),
            NavigationOutcome::Proceed
        );
    }
}
