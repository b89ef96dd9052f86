//! One component per hash route.

mod callback;
mod checkout;
mod dashboard;
mod landing;
mod login;
mod marketplace;
mod profile;
mod repository;

pub use callback::CallbackPage;
pub use checkout::{CancelPage, PaymentErrorPage, SuccessPage};
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use marketplace::MarketplacePage;
pub use profile::ProfilePage;
pub use repository::RepositoryPage;
