use crate::client::{Config, Session};

use async_trait::async_trait;
use log::debug;
use russh::client;
use russh_keys::ssh_key::public::PublicKey;
use std::{net::SocketAddr, sync::Arc};
use tokio::{
    net::{lookup_host, ToSocketAddrs},
    time::Duration,
};

/// Configuration for a password-authenticated SSH session.
///
/// The timeout bounds the connect/handshake as a whole and doubles as the
/// session inactivity timeout.
#[derive(Debug, Clone)]
pub struct SSHConfig {
    username: String,
    socket: SocketAddr,
    password: String,
    timeout: Duration,
}

impl SSHConfig {
    pub async fn password<U: Into<String>, S: ToSocketAddrs, P: Into<String>>(
        username: U,
        socket: S,
        password: P,
        timeout: Duration,
    ) -> crate::Result<Self> {
        let socket = lookup_host(&socket)
            .await?
            .next()
            .ok_or_else(|| crate::Error::ConnectionError("Error Parsing Socket".to_string()))?;

        Ok(SSHConfig {
            username: username.into(),
            socket,
            password: password.into(),
            timeout,
        })
    }

    pub fn socket(&self) -> SocketAddr {
        self.socket
    }
}

pub struct SSHSession {
    session: client::Handle<Handler>,
}

impl Session for SSHSession {
    async fn disconnect(&mut self) -> crate::Result<()> {
        self.session
            .disconnect(russh::Disconnect::ByApplication, "", "English")
            .await?;
        Ok(())
    }
}

impl Config for SSHConfig {
    type SessionType = SSHSession;

    /// Create a new SSH session and authenticate with the password.
    async fn create_session(&self) -> crate::Result<Self::SessionType> {
        let mut session = get_handle(self.socket, self.timeout).await?;

        let auth_res = session
            .authenticate_password(&self.username, &self.password)
            .await?;

        if !auth_res {
            return Err(crate::Error::AuthenticationError(
                "password rejected by server".to_string(),
            ));
        }

        debug!("authenticated to {} as {}", self.socket, self.username);
        Ok(SSHSession { session })
    }
}

/// Get a handle to the SSH session, bounding the whole connect within the
/// configured timeout.
async fn get_handle(socket: SocketAddr, timeout: Duration) -> crate::Result<client::Handle<Handler>> {
    let config = client::Config {
        inactivity_timeout: Some(timeout),
        ..Default::default()
    };

    let config = Arc::new(config);

    let sh = Handler {};

    let handle = tokio::time::timeout(timeout, client::connect(config, socket, sh)).await??;

    Ok(handle)
}

struct Handler {}

#[async_trait]
impl client::Handler for Handler {
    type Error = russh::Error;

    // Accept whatever key the server presents; a login sweep has no known
    // hosts to check against.
    async fn check_server_key(&mut self, _key: &PublicKey) -> Result<bool, Self::Error> {
        Ok(true)
    }
}
