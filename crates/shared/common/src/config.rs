//! Shared configuration structures.

/// Default database driver scheme
pub const DEFAULT_DB_DRIVER: &str = "mysql";

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "user_management";

/// Default connection character set
pub const DEFAULT_DB_CHARSET: &str = "utf8";

/// Default database user
pub const DEFAULT_DB_USER: &str = "root";

/// Database connection configuration.
///
/// Either a full `url` is supplied, or one is assembled from the discrete
/// fields.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL, takes precedence over the fields below
    pub url: Option<String>,
    /// URL scheme: `mysql`, `postgres` or `sqlite`
    pub driver: String,
    pub host: String,
    pub database: String,
    /// Character encoding, only sent to MySQL
    pub charset: String,
    pub username: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Configuration pointing at an explicit connection URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Connection URL handed to the driver.
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        if self.driver == "sqlite" {
            return format!("sqlite://{}?mode=rwc", self.database);
        }

        let credentials = if self.password.is_empty() {
            self.username.clone()
        } else {
            format!("{}:{}", self.username, self.password)
        };

        let mut url = format!(
            "{}://{}@{}/{}",
            self.driver, credentials, self.host, self.database
        );
        if self.driver == "mysql" && !self.charset.is_empty() {
            url.push_str("?charset=");
            url.push_str(&self.charset);
        }
        url
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("database", &self.database)
            .field("charset", &self.charset)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            driver: DEFAULT_DB_DRIVER.to_string(),
            host: DEFAULT_DB_HOST.to_string(),
            database: DEFAULT_DB_NAME.to_string(),
            charset: DEFAULT_DB_CHARSET.to_string(),
            username: DEFAULT_DB_USER.to_string(),
            password: String::new(),
        }
    }
}
