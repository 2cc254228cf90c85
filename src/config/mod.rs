//! Configuration module

mod site;

pub use site::AssetPaths;
pub use site::CallToAction;
pub use site::ListingCopy;
pub use site::NavLink;
pub use site::SiteConfig;
