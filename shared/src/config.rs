use anyhow::Result;

pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<AppConfig> {
        let server = ServerConfig {
            port: std::env::var("PORT")
                .ok()
                .map(|port| port.parse())
                .transpose()?
                .unwrap_or(8080),
        };
        Ok(AppConfig { server })
    }
}

pub struct ServerConfig {
    pub port: u16,
}
