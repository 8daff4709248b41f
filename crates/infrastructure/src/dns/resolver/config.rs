use dns_check_domain::ResolverOptions;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Parse a resolver endpoint: `IP`, `[IPv6]`, `IP:port` or `[IPv6]:port`.
///
/// The address is taken as written; surrounding whitespace makes it invalid.
pub fn parse_server(server: &str) -> Result<SocketAddr, String> {
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }

    if let Some(inner) = server.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Ok(ip) = inner.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
        }
    }

    server
        .parse::<SocketAddr>()
        .map_err(|_| format!("Invalid resolver server address: {:?}", server))
}

/// Name servers in the order given; fails on the first malformed entry.
pub fn name_servers(servers: &[String]) -> Result<NameServerConfigGroup, String> {
    let mut group = NameServerConfigGroup::new();
    for server in servers {
        let addr = parse_server(server)?;
        group.merge(NameServerConfigGroup::from_ips_clear(
            &[addr.ip()],
            addr.port(),
            true,
        ));
    }
    Ok(group)
}

/// Overlay the caller's timeout and tries on hickory's options.
pub fn apply_options(opts: &mut ResolverOpts, options: &ResolverOptions) {
    if let Some(timeout) = options.timeout_duration() {
        opts.timeout = timeout;
    }
    if let Some(tries) = options.tries {
        opts.attempts = tries as usize;
    }
}

/// Build a resolver for one lookup.
///
/// Without explicit servers the system configuration is used, falling back to
/// hickory's defaults when it cannot be read. A malformed server address is
/// returned as `Err` with a message describing it.
pub fn build_resolver(options: &ResolverOptions) -> Result<TokioResolver, String> {
    let mut builder = if options.servers.is_empty() {
        TokioResolver::builder_tokio().unwrap_or_else(|e| {
            debug!(error = %e, "Failed to read system DNS config, using defaults");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        })
    } else {
        let config = ResolverConfig::from_parts(None, vec![], name_servers(&options.servers)?);
        TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
    };

    apply_options(builder.options_mut(), options);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_server_ip_only_uses_default_port() {
        let addr = parse_server("8.8.8.8").unwrap();
        assert_eq!(addr, "8.8.8.8:53".parse().unwrap());

        let addr = parse_server("2001:4860:4860::8888").unwrap();
        assert_eq!(addr.port(), DEFAULT_DNS_PORT);
        assert!(addr.is_ipv6());
    }

    #[test]
    fn test_parse_server_with_port() {
        assert_eq!(
            parse_server("1.1.1.1:5353").unwrap(),
            "1.1.1.1:5353".parse().unwrap()
        );
        assert_eq!(
            parse_server("[::1]:5353").unwrap(),
            "[::1]:5353".parse().unwrap()
        );
    }

    #[test]
    fn test_parse_server_bracketed_ipv6_without_port() {
        assert_eq!(parse_server("[::1]").unwrap(), "[::1]:53".parse().unwrap());
    }

    #[test]
    fn test_parse_server_rejects_malformed() {
        assert!(parse_server("invalid-server").is_err());
        assert!(parse_server("").is_err());
        assert!(parse_server(" 8.8.8.8").is_err());
        assert!(parse_server("8.8.8.8:99999").is_err());
        assert!(parse_server("dns.google").is_err());
    }

    #[test]
    fn test_name_servers_keep_order() {
        let servers = vec!["192.0.2.1".to_string(), "198.51.100.7:5353".to_string()];
        let group = name_servers(&servers).unwrap();

        let addrs: Vec<SocketAddr> = group.iter().map(|ns| ns.socket_addr).collect();
        assert!(!addrs.is_empty());
        assert_eq!(addrs[0], "192.0.2.1:53".parse().unwrap());
        assert_eq!(
            addrs.last().copied().unwrap(),
            "198.51.100.7:5353".parse().unwrap()
        );
    }

    #[test]
    fn test_name_servers_fail_on_any_malformed_entry() {
        let servers = vec!["8.8.8.8".to_string(), "invalid-server".to_string()];
        let err = name_servers(&servers).unwrap_err();
        assert!(err.contains("invalid-server"));
    }

    #[test]
    fn test_apply_options_overrides_only_given_values() {
        let mut opts = ResolverOpts::default();
        let defaults = ResolverOpts::default();

        apply_options(&mut opts, &ResolverOptions::default());
        assert_eq!(opts.timeout, defaults.timeout);
        assert_eq!(opts.attempts, defaults.attempts);

        apply_options(
            &mut opts,
            &ResolverOptions::default().with_timeout(100).with_tries(3),
        );
        assert_eq!(opts.timeout, Duration::from_millis(100));
        assert_eq!(opts.attempts, 3);
    }

    #[tokio::test]
    async fn test_build_resolver_rejects_malformed_server() {
        let options = ResolverOptions::default().with_servers(["invalid-server"]);
        assert!(build_resolver(&options).is_err());
    }

    #[tokio::test]
    async fn test_build_resolver_with_explicit_servers() {
        let options = ResolverOptions::default()
            .with_timeout(100)
            .with_servers(["192.0.2.1"]);
        assert!(build_resolver(&options).is_ok());
    }

    #[tokio::test]
    async fn test_build_resolver_with_defaults() {
        assert!(build_resolver(&ResolverOptions::default()).is_ok());
    }
}
