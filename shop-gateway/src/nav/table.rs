//! 店面路由表
//!
//! 有序表，按声明顺序匹配，首条命中生效。模式与路径都按 `/`
//! 切段比较；`{name}` 捕获单个非空段，不跨段。

use shared::Portal;

use super::route::{Page, RouteDescriptor, RouteMatch};

/// 有序路由表
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// 店面的完整路由表
    ///
    /// `/orders` 来自旧表的"只要求登录"条目，归一化为顾客门户；
    /// 其余受保护页面全部属于卖家门户。
    pub fn storefront() -> Self {
        use Page::*;

        Self::new(vec![
            RouteDescriptor::public("/", "home", Home),
            RouteDescriptor::public("/product/{id}", "productDetail", ProductDetail),
            RouteDescriptor::public("/login", "customerLogin", CustomerLogin),
            RouteDescriptor::public("/register", "customerRegister", CustomerRegister),
            RouteDescriptor::public("/seller/login", "sellerLogin", SellerLogin),
            RouteDescriptor::requires(
                "/seller/dashboard",
                "sellerDashboard",
                SellerDashboard,
                Portal::Seller,
            ),
            RouteDescriptor::requires(
                "/seller/product/new",
                "newProduct",
                NewProduct,
                Portal::Seller,
            ),
            RouteDescriptor::requires(
                "/seller/product/batch",
                "batchProductForm",
                BatchProductForm,
                Portal::Seller,
            ),
            RouteDescriptor::requires(
                "/seller/products",
                "productHistory",
                ProductHistory,
                Portal::Seller,
            ),
            RouteDescriptor::requires("/seller/buyers", "buyerList", BuyerList, Portal::Seller),
            RouteDescriptor::requires(
                "/seller/change-password",
                "changePassword",
                ChangePassword,
                Portal::Seller,
            ),
            RouteDescriptor::legacy_protected("/orders", "customerOrders", CustomerOrders),
            RouteDescriptor::requires(
                "/seller/customers",
                "customerList",
                CustomerList,
                Portal::Seller,
            ),
            RouteDescriptor::requires(
                "/seller/categories",
                "sellerCategories",
                SellerCategories,
                Portal::Seller,
            ),
            RouteDescriptor::requires(
                "/seller/sub-categories",
                "sellerSubCategories",
                SellerSubCategories,
                Portal::Seller,
            ),
            RouteDescriptor::requires(
                "/seller/stock-logs",
                "stockLogs",
                StockLogs,
                Portal::Seller,
            ),
        ])
    }

    /// 按声明顺序匹配路径，首条命中生效
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            match_pattern(route.path, path).map(|params| RouteMatch {
                descriptor: route,
                params,
            })
        })
    }

    /// 按唯一名称查找
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// 门户登录页的路径
    ///
    /// 按登录路由名解析；表中缺失时退回到店面默认路径。
    pub fn login_path_for(&self, portal: Portal) -> &'static str {
        self.find_by_name(portal.login_route())
            .map(|route| route.path)
            .unwrap_or(match portal {
                Portal::Seller => "/seller/login",
                Portal::Customer => "/login",
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// 将路径与单个模式比对
///
/// 段数必须一致；`{name}` 捕获一个非空段，其余段逐字相等。
fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
        {
            if path_segment.is_empty() {
                return None;
            }
            params.push((name.to_string(), (*path_segment).to_string()));
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::route::AccessPolicy;

    #[test]
    fn test_storefront_table_has_unique_names() {
        let table = RouteTable::storefront();
        let mut names: Vec<&str> = table.iter().map(|r| r.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn test_match_literal_path() {
        let table = RouteTable::storefront();
        let matched = table.match_path("/seller/dashboard").unwrap();
        assert_eq!(matched.descriptor.name, "sellerDashboard");
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_match_captures_param() {
        let table = RouteTable::storefront();
        let matched = table.match_path("/product/42").unwrap();
        assert_eq!(matched.descriptor.name, "productDetail");
        assert_eq!(matched.param("id"), Some("42"));
    }

    #[test]
    fn test_param_does_not_cross_segments() {
        let table = RouteTable::storefront();
        assert!(table.match_path("/product/42/reviews").is_none());
        assert!(table.match_path("/product/").is_none());
    }

    #[test]
    fn test_no_match_for_unknown_path() {
        let table = RouteTable::storefront();
        assert!(table.match_path("/does-not-exist").is_none());
        assert!(table.match_path("/seller").is_none());
    }

    #[test]
    fn test_trailing_slash_matches() {
        let table = RouteTable::storefront();
        assert_eq!(table.match_path("/orders/").unwrap().descriptor.name, "customerOrders");
    }

    #[test]
    fn test_first_match_wins() {
        // 两个都能命中 /a 的模式：声明在前的生效。
        let table = RouteTable::new(vec![
            RouteDescriptor::public("/{slug}", "first", Page::Home),
            RouteDescriptor::public("/a", "second", Page::Home),
        ]);
        assert_eq!(table.match_path("/a").unwrap().descriptor.name, "first");
    }

    #[test]
    fn test_orders_is_customer_protected() {
        let table = RouteTable::storefront();
        let route = table.find_by_name("customerOrders").unwrap();
        assert_eq!(route.access, AccessPolicy::Requires(Portal::Customer));
    }

    #[test]
    fn test_login_path_resolution() {
        let table = RouteTable::storefront();
        assert_eq!(table.login_path_for(Portal::Seller), "/seller/login");
        assert_eq!(table.login_path_for(Portal::Customer), "/login");
    }

    #[test]
    fn test_root_matches_only_root() {
        let table = RouteTable::storefront();
        assert_eq!(table.match_path("/").unwrap().descriptor.name, "home");
        assert!(table.match_path("/home").is_none());
    }
}
