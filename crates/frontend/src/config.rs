//! Frontend configuration

use listkeeper_core::ClientConfig;

/// Backend origin baked in at build time, e.g.
/// `LISTKEEPER_SERVER_URL=https://lists.example.com trunk build`
const SERVER_URL: Option<&str> = option_env!("LISTKEEPER_SERVER_URL");

pub fn client_config() -> ClientConfig {
    SERVER_URL.map_or_else(ClientConfig::default, ClientConfig::with_server_url)
}
