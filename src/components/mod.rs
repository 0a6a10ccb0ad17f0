//! Page chrome: navigation, hero and footer.

mod footer;
mod gradient_orbs;
mod hero;
mod mobile_menu;
mod navbar;
mod social_links;

pub use footer::Footer;
pub use gradient_orbs::GradientOrbs;
pub use hero::Hero;
pub use mobile_menu::MobileMenu;
pub use navbar::Navbar;
pub use social_links::SocialLinks;
