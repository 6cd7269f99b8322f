pub mod api;
pub mod boot;
pub mod interface;
pub mod js;
pub mod sidebar_menu;
pub mod sidebar_user;
pub mod state;
pub mod toast;
pub mod visibility;
