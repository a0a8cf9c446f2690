/// A config knows how to build its own session type; `Client` wraps the
/// live session so callers never touch the transport directly.
#[trait_variant::make(Send)]
pub trait Config {
    type SessionType: Session;

    async fn create_session(&self) -> crate::Result<Self::SessionType>;
}

#[trait_variant::make(Send)]
pub trait Session {
    async fn disconnect(&mut self) -> crate::Result<()>;
}

pub struct Client<C: Config> {
    session: C::SessionType,
}

impl<C: Config> Client<C> {
    /// Establish a session from the given config.
    pub async fn connect(config: C) -> crate::Result<Self> {
        let session = config.create_session().await?;
        Ok(Self { session })
    }

    pub async fn disconnect(&mut self) -> crate::Result<()> {
        self.session.disconnect().await
    }
}
