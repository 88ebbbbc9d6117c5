pub mod app_config;
pub mod currency_utils;
pub mod label_utils;
pub mod sort_utils;
