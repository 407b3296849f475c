/// Constants used throughout the beeutil secrets code
// Key derivation parameters. The salt is shared by every plugin and must
// match the issuing service byte for byte.
pub const KDF_SALT: &[u8] = b"hivemapper-plugin-secrets";
pub const KDF_ITERATIONS: u32 = 100_000;
pub const KEY_LENGTH: usize = 32;
pub const IV_LENGTH: usize = 16;
pub const BLOCK_SIZE: usize = 16;

// Fields every credentials record must carry
pub const FIELD_AWS_KEY: &str = "aws_key";
pub const FIELD_AWS_SECRET: &str = "aws_secret";
pub const FIELD_AWS_BUCKET: &str = "aws_bucket";
pub const FIELD_AWS_REGION: &str = "aws_region";
pub const REQUIRED_FIELDS: [&str; 4] = [
    FIELD_AWS_KEY,
    FIELD_AWS_SECRET,
    FIELD_AWS_BUCKET,
    FIELD_AWS_REGION,
];

// Local development environment variables
pub const ENV_AWS_KEY: &str = "PLUGIN_AWS_KEY";
pub const ENV_AWS_SECRET: &str = "PLUGIN_AWS_SECRET";
pub const ENV_AWS_BUCKET: &str = "PLUGIN_AWS_BUCKET";
pub const ENV_AWS_REGION: &str = "PLUGIN_AWS_REGION";

/// Environment variable name paired with the record field it populates
pub const ENV_FIELD_MAP: [(&str, &str); 4] = [
    (ENV_AWS_KEY, FIELD_AWS_KEY),
    (ENV_AWS_SECRET, FIELD_AWS_SECRET),
    (ENV_AWS_BUCKET, FIELD_AWS_BUCKET),
    (ENV_AWS_REGION, FIELD_AWS_REGION),
];

// Resolver configuration overrides
pub const BEEUTIL_PLUGIN_NAME_VAR: &str = "BEEUTIL_PLUGIN_NAME";
pub const BEEUTIL_API_BASE_VAR: &str = "BEEUTIL_API_BASE";
pub const BEEUTIL_SECRETS_FILE_VAR: &str = "BEEUTIL_SECRETS_FILE";
pub const BEEUTIL_LOG_VAR: &str = "BEEUTIL_LOG";

// Defaults
pub const DEFAULT_CONFIG_FILE: &str = "secrets.json";
pub const DEFAULT_API_BASE: &str = "https://beemaps.com";
pub const PLUGIN_API_TIMEOUT_SECS: u64 = 10;

// Remote response fields
pub const RESPONSE_ID_FIELD: &str = "_id";
pub const RESPONSE_SECRETS_FIELD: &str = "encrypted_secrets";
