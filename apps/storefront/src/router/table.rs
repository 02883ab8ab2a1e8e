//! The ordered route table.

use tracing::{debug, error};

use super::{Page, RouteError, RouteParams, RoutePattern};

/// Redirects followed before giving up on a path.
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    Redirect(&'static str),
}

/// A resolved route: the page, its captured params and the final path
/// after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub path: String,
    pub page: Page,
    pub params: RouteParams,
}

/// First match in insertion order wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(RoutePattern, Target)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pattern: &str, target: Target) -> Result<&mut Self, RouteError> {
        self.routes.push((RoutePattern::parse(pattern)?, target));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolves `path` to a page. Paths no route claims resolve to
    /// [`Page::NotFound`]; only a redirect chain longer than
    /// [`MAX_REDIRECTS`] is an error.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
        let mut current = normalize(path);

        for _ in 0..=MAX_REDIRECTS {
            let hit = self
                .routes
                .iter()
                .find_map(|(pattern, target)| pattern.matches(&current).map(|p| (*target, p)));

            match hit {
                Some((Target::Page(page), params)) => {
                    return Ok(RouteMatch {
                        path: current,
                        page,
                        params,
                    })
                }
                Some((Target::Redirect(to), _)) => {
                    debug!(from = %current, to, "route redirect");
                    current = normalize(to);
                }
                None => {
                    return Ok(RouteMatch {
                        path: current,
                        page: Page::NotFound,
                        params: RouteParams::new(),
                    })
                }
            }
        }

        Err(RouteError::TooManyRedirects {
            path: path.to_string(),
            max: MAX_REDIRECTS,
        })
    }

    /// The marketplace client's full route set.
    pub fn marketplace() -> Self {
        let mut table = RouteTable::new();
        for (pattern, target) in MARKETPLACE_ROUTES {
            if let Err(err) = table.add(pattern, *target) {
                error!(%err, "skipping route");
            }
        }
        table
    }
}

/// Strips the query string, fragment and trailing slashes.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

use Page::*;
use Target::{Page as P, Redirect};

// Login pages under /business and /superadmin come before the consoles so
// they stay reachable.
const MARKETPLACE_ROUTES: &[(&str, Target)] = &[
    // Auth
    ("/signin", P(SignIn)),
    ("/sign-in", P(SignIn)),
    ("/signup", P(SignUp)),
    ("/register", P(Register)),
    ("/verification-pending", P(VerificationPending)),
    ("/verify-email/:token", P(VerifyEmail)),
    ("/business/login", P(BusinessLogin)),
    ("/register-business", P(RegisterBusiness)),
    ("/password/reset", P(PasswordReset)),
    ("/superadmin/login", P(SuperAdminLogin)),
    // Merchant console
    ("/business", Redirect("/business/dashboard")),
    ("/business/dashboard", P(BusinessDashboard)),
    ("/business/subscription", P(Subscription)),
    ("/business/products", P(BusinessProducts)),
    ("/business/inventory", P(Inventory)),
    ("/business/verification", P(Verification)),
    ("/business/verification-pending", P(BusinessVerificationStatus)),
    ("/business/orders", P(BusinessOrders)),
    ("/business/customers", P(BusinessCustomers)),
    ("/business/reviews", P(BusinessReviews)),
    ("/business/reports/sales", P(SalesReport)),
    ("/business/reports/customers", P(CustomersReport)),
    ("/business/reports/products", P(ProductsReport)),
    ("/business/settings", P(BusinessSettings)),
    ("/business/support", P(Support)),
    ("/business/catalog/products", P(CatalogProducts)),
    ("/business/catalog/product/new", P(AddProduct)),
    ("/business/catalog/product/:id/view", P(ViewProduct)),
    ("/business/catalog/product/:id/edit", P(EditProduct)),
    ("/business/catalog/wholesale", P(BusinessWholesale)),
    ("/business/catalog/wholesale/new", P(AddWholesaleProduct)),
    ("/business/product-placements", P(ProductPlacements)),
    // Operations console
    ("/superadmin", Redirect("/superadmin/dashboard")),
    ("/superadmin/dashboard", P(AdminDashboard)),
    ("/superadmin/user-activity", P(UserActivity)),
    ("/superadmin/user", P(UserManagement)),
    ("/superadmin/content", P(ContentModeration)),
    ("/superadmin/product", P(ProductMonitoring)),
    ("/superadmin/site-traffic", P(TrafficAnalytics)),
    ("/superadmin/sales", P(AdminSalesReport)),
    ("/superadmin/fraud-detection", P(FraudDetection)),
    ("/superadmin/marketplace", P(MarketplaceHealth)),
    ("/superadmin/merchant", P(MerchantAnalytics)),
    ("/superadmin/platform", P(PlatformPerformance)),
    ("/superadmin/merchant-manage", P(MerchantManagement)),
    ("/superadmin/merchant-management/:id", P(MerchantDetails)),
    ("/superadmin/categories", P(Categories)),
    ("/superadmin/brand-creation", P(BrandCreation)),
    ("/superadmin/attribute", P(Attributes)),
    ("/superadmin/homepage", P(HomepageSettings)),
    // Storefront
    ("/", P(Home)),
    ("/all-products", P(AllProducts)),
    ("/shop/:shopId", P(ShopProducts)),
    ("/products/:categoryId", P(CategoryProducts)),
    ("/product/:productId", P(ProductDetail)),
    ("/new-product", P(NewProduct)),
    ("/cart", P(Cart)),
    ("/payment", P(Payment)),
    ("/payment/orderconfirmation", P(OrderConfirmation)),
    ("/wishlist", P(Wishlist)),
    ("/promotion", P(Promotion)),
    ("/wholesale", P(Wholesale)),
    ("/become-merchant", P(BecomeMerchant)),
    ("/orders", P(Orders)),
    ("/track-order", P(TrackOrder)),
    ("/track/:orderId", P(TrackOrder)),
    ("/refund/:orderId", P(Refund)),
    ("/exchange/:orderId", P(Exchange)),
    ("/review/:orderId", P(Review)),
    ("/categories/:categoryId", P(CategoryProducts)),
    ("/categories/:categoryId/:brandId", P(CategoryProducts)),
    ("/faq", P(Faq)),
    ("/about", P(About)),
    ("/contact", P(Contact)),
    ("/shipping", P(ShippingPolicy)),
    ("/returns", P(Returns)),
    ("/privacy", P(Privacy)),
    ("/cookies", P(Cookies)),
    ("/terms", P(Terms)),
    ("/privacy-policy", P(PrivacyPolicy)),
    ("/cancellation-policy", P(CancellationPolicy)),
    ("/return-refund", P(ReturnRefund)),
    ("/shipping-delivery", P(ShippingDelivery)),
    ("/brands/:brandId", P(Brands)),
    ("/profile", P(Profile)),
    ("/live-shop", P(LiveShop)),
    ("/live-shop/fashion", P(LiveShopFashion)),
    ("/live-shop/aoin-live", P(AoinLive)),
    ("/live-shop/coming-soon", P(ComingSoon)),
    ("/live-shop/fashion-factory", P(FashionFactory)),
    ("/live-shop/sunday-funday", P(SundayFunday)),
    ("/live-shop/product/:productId", P(LiveShopProduct)),
];
