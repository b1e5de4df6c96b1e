use std::net::ToSocketAddrs;
use std::process::Command;
use url::Url;

pub const YARN_REGISTRY_HOST: &str = "registry.yarnpkg.com";

/// Decides whether the yarn registry can be reached.
pub struct ConnectivityProbe {
    registry_host: String,
}

impl ConnectivityProbe {
    pub fn new() -> Self {
        Self {
            registry_host: YARN_REGISTRY_HOST.to_string(),
        }
    }

    pub fn with_registry_host(host: impl Into<String>) -> Self {
        Self {
            registry_host: host.into(),
        }
    }

    /// The registry resolves, or (behind a proxy that hides external DNS) the
    /// configured proxy host resolves.
    pub fn is_online(&self) -> bool {
        if resolves(&self.registry_host, 443) {
            return true;
        }

        match https_proxy().as_deref().and_then(proxy_endpoint) {
            Some((host, port)) => {
                tracing::debug!("Registry unreachable, checking proxy {}", host);
                resolves(&host, port)
            }
            None => false,
        }
    }
}

impl Default for ConnectivityProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn resolves(host: &str, port: u16) -> bool {
    (host, port)
        .to_socket_addrs()
        .map(|mut addrs| addrs.next().is_some())
        .unwrap_or(false)
}

/// `https_proxy` from the environment, then npm's `https-proxy` setting.
fn https_proxy() -> Option<String> {
    if let Ok(proxy) = std::env::var("https_proxy") {
        if !proxy.is_empty() {
            return Some(proxy);
        }
    }

    let program = which::which("npm").ok()?;
    let output = Command::new(program)
        .args(["config", "get", "https-proxy"])
        .output()
        .ok()?;
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    normalize_npm_value(&value)
}

fn normalize_npm_value(value: &str) -> Option<String> {
    match value {
        "" | "null" | "undefined" => None,
        other => Some(other.to_string()),
    }
}

/// Host and port of a proxy URL.
pub fn proxy_endpoint(proxy: &str) -> Option<(String, u16)> {
    let url = Url::parse(proxy).ok()?;
    let host = url.host_str()?.to_string();
    let port = url.port_or_known_default().unwrap_or(443);
    Some((host, port))
}
