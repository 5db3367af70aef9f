//! TUI widgets

pub mod footer;
pub mod menu;
pub mod nav_bar;
pub mod sections;

pub use footer::Footer;
pub use menu::NavMenu;
pub use nav_bar::NavBar;
