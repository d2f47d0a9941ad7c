//! 路由描述符 - 页面、名称与访问策略
//!
//! 店面的每个可导航页面在路由表中占一行：路径模式、唯一名称、
//! 页面标识和访问策略。访问策略是封闭枚举，要么公开，要么绑定
//! 到唯一门户，守卫据此给出唯一结论。

use serde::Serialize;
use shared::Portal;

/// 店面页面标识
///
/// 网关只渲染页面外壳；页面数据由前端经 `/api` 代理获取。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    ProductDetail,
    CustomerLogin,
    CustomerRegister,
    SellerLogin,
    SellerDashboard,
    NewProduct,
    BatchProductForm,
    ProductHistory,
    BuyerList,
    ChangePassword,
    CustomerOrders,
    CustomerList,
    SellerCategories,
    SellerSubCategories,
    StockLogs,
}

impl Page {
    /// 页面标题，渲染外壳 `<title>` 时使用
    pub const fn title(&self) -> &'static str {
        match self {
            Page::Home => "Shop",
            Page::ProductDetail => "Product",
            Page::CustomerLogin => "Customer Login",
            Page::CustomerRegister => "Register",
            Page::SellerLogin => "Seller Login",
            Page::SellerDashboard => "Seller Dashboard",
            Page::NewProduct => "New Product",
            Page::BatchProductForm => "Batch Upload",
            Page::ProductHistory => "My Products",
            Page::BuyerList => "Buyers",
            Page::ChangePassword => "Change Password",
            Page::CustomerOrders => "My Orders",
            Page::CustomerList => "Customers",
            Page::SellerCategories => "Categories",
            Page::SellerSubCategories => "Sub-categories",
            Page::StockLogs => "Stock Logs",
        }
    }
}

/// 路由访问策略
///
/// 封闭枚举：没有"需要登录但不指明门户"的中间态。旧表中那类
/// 条目在建表时归一化 (见 [`RouteDescriptor::legacy_protected`])。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// 公开页面，无需登录
    Public,
    /// 需要指定门户处于登录态
    Requires(Portal),
}

impl AccessPolicy {
    /// 此策略要求的门户，公开路由为 `None`
    pub const fn required_portal(&self) -> Option<Portal> {
        match self {
            AccessPolicy::Public => None,
            AccessPolicy::Requires(portal) => Some(*portal),
        }
    }
}

/// 路由表中的一行
#[derive(Debug, Clone, Copy)]
pub struct RouteDescriptor {
    /// 路径模式，`{name}` 捕获单个非空段
    pub path: &'static str,
    /// 表内唯一名称 (重定向按名称解析登录页)
    pub name: &'static str,
    /// 解析到的页面
    pub page: Page,
    /// 访问策略
    pub access: AccessPolicy,
}

impl RouteDescriptor {
    /// 公开路由
    pub const fn public(path: &'static str, name: &'static str, page: Page) -> Self {
        Self {
            path,
            name,
            page,
            access: AccessPolicy::Public,
        }
    }

    /// 绑定到指定门户的受保护路由
    pub const fn requires(
        path: &'static str,
        name: &'static str,
        page: Page,
        portal: Portal,
    ) -> Self {
        Self {
            path,
            name,
            page,
            access: AccessPolicy::Requires(portal),
        }
    }

    /// 旧表中只标记"需要登录"而不指明门户的条目
    ///
    /// 统一归一化为顾客门户；守卫对这类条目和显式顾客条目不做区分。
    pub const fn legacy_protected(path: &'static str, name: &'static str, page: Page) -> Self {
        Self::requires(path, name, page, Portal::Customer)
    }
}

/// 一次成功匹配，借用表中的描述符
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub descriptor: &'a RouteDescriptor,
    /// 按出现顺序收集的 `{name}` 捕获
    pub params: Vec<(String, String)>,
}

impl RouteMatch<'_> {
    /// 按名称取参数值
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 转为可放进请求扩展的 owned 形式
    pub fn to_matched(&self) -> MatchedRoute {
        MatchedRoute {
            name: self.descriptor.name,
            page: self.descriptor.page,
            access: self.descriptor.access,
            params: self.params.clone(),
        }
    }
}

/// 守卫放行后注入请求扩展的已匹配路由
#[derive(Debug, Clone)]
pub struct MatchedRoute {
    pub name: &'static str,
    pub page: Page,
    pub access: AccessPolicy,
    pub params: Vec<(String, String)>,
}

impl MatchedRoute {
    /// 按名称取参数值
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_route_requires_no_portal() {
        let route = RouteDescriptor::public("/", "home", Page::Home);
        assert_eq!(route.access, AccessPolicy::Public);
        assert_eq!(route.access.required_portal(), None);
    }

    #[test]
    fn test_protected_route_names_its_portal() {
        let route = RouteDescriptor::requires(
            "/seller/dashboard",
            "sellerDashboard",
            Page::SellerDashboard,
            Portal::Seller,
        );
        assert_eq!(route.access.required_portal(), Some(Portal::Seller));
    }

    #[test]
    fn test_legacy_auth_without_portal_maps_to_customer() {
        // 旧路由表对 /orders 只写了"需要登录"，没有写门户；
        // 建表时固定归一化为顾客门户。
        let route = RouteDescriptor::legacy_protected("/orders", "customerOrders", Page::CustomerOrders);
        assert_eq!(route.access, AccessPolicy::Requires(Portal::Customer));
    }
}
