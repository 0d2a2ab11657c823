pub mod constants;
pub mod get_env;
pub mod html;
pub mod urls;
