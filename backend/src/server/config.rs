//! HTTP server configuration: layered settings and the builder handed to
//! [`super::create_server`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use bloglist::inbound::http::session_config::SessionSettings;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3003;

/// Listener and routing settings loaded via OrthoConfig.
///
/// Values are layered from CLI arguments, `BLOGLIST_*` environment variables
/// and an optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct ServerSettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind; defaults to 3003.
    pub port: Option<u16>,
    /// Mount `POST /api/testing/reset` for end-to-end suites.
    #[ortho_config(default = false)]
    pub testing_routes: bool,
}

impl ServerSettings {
    /// Socket address the server should bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) session_ttl: Duration,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) testing_routes: bool,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
            ttl,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            session_ttl: ttl,
            bind_addr,
            testing_routes: false,
        }
    }

    /// Mount the testing-only reset route.
    #[must_use]
    pub fn with_testing_routes(mut self, enabled: bool) -> Self {
        self.testing_routes = enabled;
        self
    }
}
