use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory scanned for data files at startup
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Glob pattern applied within `data_dir`
    #[serde(default = "default_data_pattern")]
    pub data_pattern: String,

    /// Record field holding the teacher name. Defaults to the column header
    /// used by the production data files.
    #[serde(default = "default_teacher_field")]
    pub teacher_field: String,

    /// Record field holding the course name
    #[serde(default = "default_course_field")]
    pub course_field: String,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            data_dir: default_data_dir(),
            data_pattern: default_data_pattern(),
            teacher_field: default_teacher_field(),
            course_field: default_course_field(),
            enable_cors: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `course-search` config file,
    /// overridden by `COURSE_SEARCH__`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("course-search").required(false))
            .add_source(config::Environment::with_prefix("COURSE_SEARCH").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_data_pattern() -> String {
    "*.json".to_string()
}

fn default_teacher_field() -> String {
    "教师".to_string()
}

fn default_course_field() -> String {
    "课程名称".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
