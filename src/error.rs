use thiserror::Error;

/// Boxed error returned by [`crate::Transport`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection, timeout, io).
    #[error("{operation}: transport failure: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// Non-2xx response that carried no error list.
    #[error("{operation}: server answered with status {status}")]
    Status { operation: &'static str, status: u16 },

    #[error("{operation}: unable to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// First message of the server's `errors` list.
    #[error("{operation}: {message:?}")]
    Api {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: response has no {field} payload")]
    MissingPayload {
        operation: &'static str,
        field: &'static str,
    },

    #[error("tournament state is {state:?}, not \"complete\"")]
    NotCompleted { state: String },

    #[error("tournament has state {state:?}, probably not started")]
    NotStarted { state: String },

    #[error("participant with name {0:?} not found in tournament")]
    ParticipantNotFound(String),

    #[error("unknown tournament type {0:?}, expected \"single\" or \"double\"")]
    UnknownTournamentType(String),

    #[error("missing configuration value {0}")]
    MissingCredentials(&'static str),

    #[error("unable to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
