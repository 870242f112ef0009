//! Protocol defaults and the fixed parameter set

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Default port per protocol, used when `PORT` is not given
///
/// Protocols missing from this table cannot be resolved without an
/// explicit port.
static DEFAULT_PORTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("rdp", "3389");
    m.insert("vnc", "5901");
    m
});

/// Parameters set on every resolved configuration, in insertion order
pub const FIXED_PARAMETERS: &[(&str, &str)] = &[
    ("ignore-cert", "true"),
    ("security", "any"),
    ("resize-method", "display-update"),
    ("server-layout", "en-gb-qwerty"),
];

/// Look up the default port for a protocol
///
/// Matching is exact: `RDP` has no default.
pub fn default_port(protocol: &str) -> Option<&'static str> {
    DEFAULT_PORTS.get(protocol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(default_port("rdp"), Some("3389"));
        assert_eq!(default_port("vnc"), Some("5901"));
        assert_eq!(default_port("telnet"), None);
        assert_eq!(default_port("ssh"), None);
        assert_eq!(default_port("RDP"), None);
    }
}
