use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the server from starting or keep it from running.
/// Request-level failures never reach this type; the router's defaults handle them.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:8000".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:8000"), "Message was {msg}");
        assert!(msg.contains("address in use"), "Message was {msg}");
    }

    #[test]
    fn test_bind_error_keeps_io_source() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:80".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = err.source().and_then(|s| s.downcast_ref::<io::Error>());
        assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::PermissionDenied));
    }
}
