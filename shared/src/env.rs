/// Runtime environment the server was started in. Controls log formatting
/// and the default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Reads the `ENV` environment variable. Debug builds default to
/// `Development`, release builds to `Production`.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var("ENV") {
        Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
        Ok(_) => Environment::Development,
        Err(_) => default_env,
    }
}
