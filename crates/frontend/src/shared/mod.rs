pub mod api_utils;
pub mod components;
pub mod export;
pub mod i18n;
pub mod list_utils;
