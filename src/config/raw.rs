use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("restodb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        let db = cfg.db.unwrap();
        assert_eq!(db.connection_sqlite, "restodb.sqlite");
        assert_eq!(db.connection_pool_size, 10);
        assert!(!cfg.webserver.unwrap().cors);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
[webserver]
cors = true
"#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        assert!(cfg.webserver.unwrap().cors);
    }
}
