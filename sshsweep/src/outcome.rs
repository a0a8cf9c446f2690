/// The fixed set of per-host results. Display strings are the tool's output
/// contract; `"{outcome}: {host}"` is what gets printed for every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    AuthFailed,
    TimedOut,
    Protocol(String),
    Other(String),
}

impl Outcome {
    pub fn from_error(err: &remotessh::Error) -> Self {
        match err {
            remotessh::Error::AuthenticationError(_) => Outcome::AuthFailed,
            remotessh::Error::TimeoutError => Outcome::TimedOut,
            remotessh::Error::ProtocolError(msg) => Outcome::Protocol(msg.clone()),
            err => Outcome::Other(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::AuthFailed => {
                write!(f, "Failed: Authentication Error (Wrong username/password)")
            }
            Outcome::TimedOut => write!(f, "Failed: Connection Timeout to host"),
            Outcome::Protocol(msg) => write!(f, "Failed: SSH Error ({})", msg),
            Outcome::Other(msg) => write!(f, "Failed: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_are_never_classified_as_generic() {
        let outcome = Outcome::from_error(&remotessh::Error::TimeoutError);
        assert_eq!(outcome, Outcome::TimedOut);
    }

    #[test]
    fn rejected_credentials_classify_as_auth_failure() {
        let err = remotessh::Error::AuthenticationError("password rejected by server".into());
        assert_eq!(Outcome::from_error(&err), Outcome::AuthFailed);
    }

    #[test]
    fn protocol_errors_carry_the_message() {
        let err = remotessh::Error::ProtocolError("no common kex".into());
        let outcome = Outcome::from_error(&err);
        assert_eq!(outcome, Outcome::Protocol("no common kex".into()));
        assert_eq!(outcome.to_string(), "Failed: SSH Error (no common kex)");
    }

    #[test]
    fn socket_errors_classify_as_generic() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = remotessh::Error::SocketError(io);
        assert!(matches!(Outcome::from_error(&err), Outcome::Other(_)));
    }

    #[test]
    fn display_matches_the_output_contract() {
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert_eq!(
            Outcome::AuthFailed.to_string(),
            "Failed: Authentication Error (Wrong username/password)"
        );
        assert_eq!(
            Outcome::TimedOut.to_string(),
            "Failed: Connection Timeout to host"
        );
    }
}
