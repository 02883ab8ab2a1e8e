//! Page identities and their rendered views.
//!
//! Page bodies live in the web shell. Here a page is only its title and
//! the console section it belongs to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::RouteParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Public storefront with header and footer.
    Storefront,
    /// Merchant console under `/business`.
    Business,
    /// Operations console under `/superadmin`.
    SuperAdmin,
    /// Sign-in, registration and verification screens.
    Auth,
}

/// What the shell needs to draw a resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub title: String,
    pub section: Section,
    pub params: BTreeMap<String, String>,
}

macro_rules! pages {
    ($( $variant:ident => ($section:ident, $title:literal) ),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Page {
            $( $variant, )+
        }

        impl Page {
            pub const ALL: &'static [Page] = &[$( Page::$variant, )+];

            pub fn title(self) -> &'static str {
                match self {
                    $( Page::$variant => $title, )+
                }
            }

            pub fn section(self) -> Section {
                match self {
                    $( Page::$variant => Section::$section, )+
                }
            }
        }
    };
}

pages! {
    // Storefront
    Home => (Storefront, "Home"),
    AllProducts => (Storefront, "All Products"),
    ShopProducts => (Storefront, "Shop"),
    CategoryProducts => (Storefront, "Products"),
    ProductDetail => (Storefront, "Product Details"),
    NewProduct => (Storefront, "New Arrivals"),
    Cart => (Storefront, "Your Cart"),
    Payment => (Storefront, "Payment"),
    OrderConfirmation => (Storefront, "Order Confirmation"),
    Wishlist => (Storefront, "Wishlist"),
    Promotion => (Storefront, "Promotions"),
    Wholesale => (Storefront, "Wholesale"),
    BecomeMerchant => (Storefront, "Become a Merchant"),
    Orders => (Storefront, "My Orders"),
    TrackOrder => (Storefront, "Track Order"),
    Refund => (Storefront, "Refund"),
    Exchange => (Storefront, "Exchange"),
    Review => (Storefront, "Write a Review"),
    Faq => (Storefront, "FAQ"),
    About => (Storefront, "About Us"),
    Contact => (Storefront, "Contact Us"),
    ShippingPolicy => (Storefront, "Shipping Policy"),
    Returns => (Storefront, "Returns"),
    Privacy => (Storefront, "Privacy"),
    Cookies => (Storefront, "Cookie Policy"),
    Terms => (Storefront, "Terms & Conditions"),
    PrivacyPolicy => (Storefront, "Privacy Policy"),
    CancellationPolicy => (Storefront, "Cancellation Policy"),
    ReturnRefund => (Storefront, "Return & Refund"),
    ShippingDelivery => (Storefront, "Shipping & Delivery"),
    Brands => (Storefront, "Brands"),
    Profile => (Storefront, "My Profile"),
    LiveShop => (Storefront, "Live Shop"),
    LiveShopFashion => (Storefront, "Fashion"),
    AoinLive => (Storefront, "Aoin Live"),
    ComingSoon => (Storefront, "Coming Soon"),
    FashionFactory => (Storefront, "Fashion Factory"),
    SundayFunday => (Storefront, "Sunday Funday"),
    LiveShopProduct => (Storefront, "Live Shop Product"),
    NotFound => (Storefront, "Page Not Found"),

    // Auth
    SignIn => (Auth, "Sign In"),
    SignUp => (Auth, "Sign Up"),
    Register => (Auth, "Register"),
    VerificationPending => (Auth, "Verification Pending"),
    VerifyEmail => (Auth, "Verify Email"),
    BusinessLogin => (Auth, "Business Login"),
    RegisterBusiness => (Auth, "Register Business"),
    PasswordReset => (Auth, "Reset Password"),
    SuperAdminLogin => (Auth, "Super Admin Login"),

    // Merchant console
    BusinessDashboard => (Business, "Dashboard"),
    Subscription => (Business, "Subscription"),
    BusinessProducts => (Business, "Products"),
    Inventory => (Business, "Inventory"),
    Verification => (Business, "Verification"),
    BusinessVerificationStatus => (Business, "Verification Status"),
    BusinessOrders => (Business, "Orders"),
    BusinessCustomers => (Business, "Customers"),
    BusinessReviews => (Business, "Reviews"),
    SalesReport => (Business, "Sales Report"),
    CustomersReport => (Business, "Customers Report"),
    ProductsReport => (Business, "Products Report"),
    BusinessSettings => (Business, "Settings"),
    Support => (Business, "Support"),
    CatalogProducts => (Business, "Catalog"),
    AddProduct => (Business, "Add Product"),
    ViewProduct => (Business, "View Product"),
    EditProduct => (Business, "Edit Product"),
    BusinessWholesale => (Business, "Wholesale Catalog"),
    AddWholesaleProduct => (Business, "Add Wholesale Product"),
    ProductPlacements => (Business, "Product Placements"),

    // Operations console
    AdminDashboard => (SuperAdmin, "Dashboard"),
    UserActivity => (SuperAdmin, "User Activity"),
    UserManagement => (SuperAdmin, "User Management"),
    ContentModeration => (SuperAdmin, "Content Moderation"),
    ProductMonitoring => (SuperAdmin, "Product Monitoring"),
    TrafficAnalytics => (SuperAdmin, "Site Traffic"),
    AdminSalesReport => (SuperAdmin, "Sales Report"),
    FraudDetection => (SuperAdmin, "Fraud Detection"),
    MarketplaceHealth => (SuperAdmin, "Marketplace Health"),
    MerchantAnalytics => (SuperAdmin, "Merchant Analytics"),
    PlatformPerformance => (SuperAdmin, "Platform Performance"),
    MerchantManagement => (SuperAdmin, "Merchant Management"),
    MerchantDetails => (SuperAdmin, "Merchant Details"),
    Categories => (SuperAdmin, "Categories"),
    BrandCreation => (SuperAdmin, "Brand Creation"),
    Attributes => (SuperAdmin, "Attributes"),
    HomepageSettings => (SuperAdmin, "Homepage Settings"),
}

impl Page {
    pub fn render(self, params: &RouteParams) -> PageView {
        PageView {
            title: self.title().to_string(),
            section: self.section(),
            params: params.clone().into_map(),
        }
    }
}
