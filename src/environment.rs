use std::env;
use std::str::FromStr;
use tracing::warn;

/// Retrieves an environment variable and parses it, falling back to a default.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `default`: Value used when the variable is unset or cannot be parsed.
///
/// # Returns
/// - `T`
pub fn get_env_var_or<T: FromStr>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Ignoring unparsable value '{}' for {}", value, var);
                default
            }
        },
        Err(_) => default,
    }
}

/// Retrieves an environment variable as a string, falling back to a default.
pub fn get_env_var_string(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
