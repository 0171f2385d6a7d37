//! Runtime information about the running server.

pub struct InfoService {
    server_port: u16,
}

impl InfoService {
    pub fn new(server_port: u16) -> Self {
        Self { server_port }
    }

    /// Gets the port the server was configured to listen on
    pub fn get_port(&self) -> u16 {
        tracing::info!("Reading server port");

        self.server_port
    }
}
