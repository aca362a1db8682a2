//! Client for the Challonge tournament bracket API.
//!
//! ```no_run
//! use challonge::Client;
//!
//! let client = Client::new("user", "api-key")?;
//! let tournament = client
//!     .tournament("spring-cup")
//!     .with_participants()
//!     .with_matches()
//!     .get()?;
//! for p in &tournament.participants {
//!     let p = p.borrow();
//!     println!("{} {}W {}L", p.name, p.wins, p.losses);
//! }
//! # Ok::<(), challonge::Error>(())
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod transport;
pub mod wire;

pub use client::{Client, ClientBuilder, TournamentRequest};
pub use error::{Error, Result};
pub use model::{diff_matches, Match, Participant, ParticipantRc, Tournament, TournamentType};
pub use transport::{ApiRequest, Credentials, HttpResponse, HttpTransport, Method, Transport};
