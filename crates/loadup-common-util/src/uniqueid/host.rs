use std::io;
use std::net::{IpAddr, ToSocketAddrs};

/// Resolves the address identifying this host inside generated IDs.
///
/// Implementations return the textual address (e.g. `10.0.3.17`). The
/// generator calls [`HostResolver::resolve`] exactly once, at construction,
/// and substitutes a time based value on error, blank or loopback results.
pub trait HostResolver {
    fn resolve(&self) -> io::Result<String>;
}

/// Resolves the machine's hostname through the system resolver and picks
/// the first non-loopback address, or the first address if all are
/// loopback.
///
/// The lookup is blocking and has no timeout of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalHost;

impl HostResolver for LocalHost {
    fn resolve(&self) -> io::Result<String> {
        let hostname = gethostname::gethostname().into_string().map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("hostname {raw:?} is not valid UTF-8"),
            )
        })?;

        let addrs: Vec<IpAddr> = (hostname.as_str(), 0)
            .to_socket_addrs()?
            .map(|addr| addr.ip())
            .collect();

        addrs
            .iter()
            .find(|ip| !ip.is_loopback())
            .or_else(|| addrs.first())
            .map(ToString::to_string)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("hostname `{hostname}` resolved to no address"),
                )
            })
    }
}

/// A resolver that always fails, forcing the time based fallback. Useful in
/// sandboxes without name resolution and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledHost;

impl HostResolver for DisabledHost {
    fn resolve(&self) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "host lookup disabled",
        ))
    }
}

/// A fixed, pre-resolved address.
#[derive(Clone, Debug)]
pub struct StaticHost(pub String);

impl HostResolver for StaticHost {
    fn resolve(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// Runs `resolver` and applies the fallback rules: a lookup error, a blank
/// address or a loopback address all yield `fallback_millis` rendered as a
/// decimal string.
pub fn resolve_host_identifier(resolver: &dyn HostResolver, fallback_millis: u64) -> String {
    match resolver.resolve() {
        Ok(addr) if is_usable(&addr) => {
            tracing::debug!(host = %addr, "resolved host address");
            addr.trim().to_owned()
        }
        Ok(addr) => {
            tracing::debug!(
                host = %addr,
                fallback = fallback_millis,
                "host address is blank or loopback, using time based fallback"
            );
            fallback_millis.to_string()
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                fallback = fallback_millis,
                "failed to resolve host address, using time based fallback"
            );
            fallback_millis.to_string()
        }
    }
}

fn is_usable(addr: &str) -> bool {
    let addr = addr.trim();
    !addr.is_empty() && !addr.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_addresses_pass_through() {
        let host = resolve_host_identifier(&StaticHost("10.1.2.3".into()), 7);
        assert_eq!(host, "10.1.2.3");
        let host = resolve_host_identifier(&StaticHost(" fe80::1 ".into()), 7);
        assert_eq!(host, "fe80::1");
    }

    #[test]
    fn loopback_and_blank_fall_back() {
        for addr in ["127.0.0.1", "127.0.1.1", "::1", "", "   "] {
            let host = resolve_host_identifier(&StaticHost(addr.into()), 1_700_000_000_123);
            assert_eq!(host, "1700000000123", "address {addr:?}");
        }
    }

    #[test]
    fn lookup_error_falls_back() {
        assert_eq!(resolve_host_identifier(&DisabledHost, 99), "99");
    }
}
