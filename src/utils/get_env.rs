use anyhow::Error;
use dotenv::dotenv;
use std::env;

pub fn get_env_var(key: &str) -> Result<String, Error> {
    dotenv().ok();
    Ok(env::var(key)?)
}

// unset and blank values both fall back to the default
pub fn get_env_var_or(key: &str, default: &str) -> String {
    match get_env_var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod cfg_tests {
    use crate::utils::get_env::{get_env_var, get_env_var_or};
    use serial_test::serial;

    #[test]
    #[serial]
    pub fn test_env_fallbacks() {
        unsafe {
            std::env::remove_var("PAGE_ACTIONS_TEST_VAR");
        }
        assert!(get_env_var("PAGE_ACTIONS_TEST_VAR").is_err());
        assert_eq!(get_env_var_or("PAGE_ACTIONS_TEST_VAR", "fallback"), "fallback");

        unsafe {
            std::env::set_var("PAGE_ACTIONS_TEST_VAR", "   ");
        }
        assert_eq!(get_env_var_or("PAGE_ACTIONS_TEST_VAR", "fallback"), "fallback");

        unsafe {
            std::env::set_var("PAGE_ACTIONS_TEST_VAR", " sessionid ");
        }
        assert_eq!(get_env_var_or("PAGE_ACTIONS_TEST_VAR", "fallback"), "sessionid");

        unsafe {
            std::env::remove_var("PAGE_ACTIONS_TEST_VAR");
        }
    }
}
