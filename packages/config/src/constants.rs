// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names and their defaults

// Server Configuration
pub const LAUNDRY_HOST: &str = "LAUNDRY_HOST";
pub const LAUNDRY_PORT: &str = "LAUNDRY_PORT";

// Storage Configuration
pub const LAUNDRY_DATABASE_URL: &str = "LAUNDRY_DATABASE_URL";

// CORS Configuration
pub const LAUNDRY_CORS_ORIGIN: &str = "LAUNDRY_CORS_ORIGIN";

// App config file (YAML)
pub const LAUNDRY_CONFIG_FILE: &str = "LAUNDRY_CONFIG_FILE";

// Provider credentials
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

// Defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://laundry.db";
pub const DEFAULT_CORS_ORIGIN: &str = "*";
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_ML_PROVIDER: &str = "local";
