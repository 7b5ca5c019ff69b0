#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "BFHL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Requests allowed per client IP within one rate limit window
    #[arg(long, env = "BFHL_RATE_LIMIT_MAX", default_value = "100")]
    pub rate_limit_max: u32,

    /// Rate limit window length in seconds
    #[arg(long, env = "BFHL_RATE_LIMIT_WINDOW", default_value = "900")]
    pub rate_limit_window: u64,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "BFHL_BODY_LIMIT", default_value = "10485760")]
    pub body_limit: usize,

    #[clap(flatten)]
    pub identity: IdentityOptions,
}

/// Static identity fields echoed in every successful response.
#[derive(Debug, Clone, clap::Args)]
pub struct IdentityOptions {
    /// Full name used to build the user_id (name_DDMMYYYY)
    #[arg(long, env = "BFHL_FULL_NAME", default_value = "John Doe")]
    pub full_name: String,

    /// Contact email
    #[arg(long, env = "BFHL_EMAIL", default_value = "john@xyz.com")]
    pub email: String,

    /// College roll number
    #[arg(long, env = "BFHL_ROLL_NUMBER", default_value = "ABCD123")]
    pub roll_number: String,
}
