//! Listener Config

use clap::Args;

/// Where the HTTP listener binds.
#[derive(Debug, Args)]
#[command(next_help_heading = "Server")]
pub struct ServerRuntimeConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listening port; storefront clients expect 4000
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
