use std::{cell::RefCell, env, rc::Rc, time::Duration};

use crate::{
    error::{Error, Result},
    model::{
        Match, ParticipantRc, Tournament, TournamentType, TOURNAMENT_COMPLETE, TOURNAMENT_UNDERWAY,
    },
    transport::{ApiRequest, Credentials, HttpTransport, Method, Transport},
    wire::ApiResponse,
};

pub const API_VERSION: &str = "v1";
pub const DEFAULT_HOST: &str = "https://api.challonge.com";

pub const ENV_USER: &str = "CHALLONGE_USER";
pub const ENV_API_KEY: &str = "CHALLONGE_API_KEY";
pub const ENV_HOST: &str = "CHALLONGE_HOST";

fn params<const N: usize>(pairs: [(&str, &str); N]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub struct ClientBuilder {
    credentials: Credentials,
    host: String,
    version: String,
    timeout: Duration,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new(user: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                user: user.into(),
                key: key.into(),
            },
            host: String::from(DEFAULT_HOST),
            version: String::from(API_VERSION),
            timeout: HttpTransport::DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Reads `CHALLONGE_USER`, `CHALLONGE_API_KEY` and, if set, `CHALLONGE_HOST`.
    pub fn from_env() -> Result<Self> {
        let user = env::var(ENV_USER).map_err(|_| Error::MissingCredentials(ENV_USER))?;
        let key = env::var(ENV_API_KEY).map_err(|_| Error::MissingCredentials(ENV_API_KEY))?;

        let mut builder = Self::new(user, key);
        if let Ok(host) = env::var(ENV_HOST) {
            builder = builder.host(host);
        }
        Ok(builder)
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Request timeout of the default HTTP transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn build(self) -> Result<Client> {
        let transport: Box<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(self.timeout)?),
        };

        Ok(Client {
            credentials: self.credentials,
            host: self.host.trim_end_matches('/').to_string(),
            version: self.version,
            transport,
        })
    }
}

/// Handle on one account of the bracket service. Every operation goes through
/// an explicit `Client`, there is no global instance.
pub struct Client {
    credentials: Credentials,
    host: String,
    version: String,
    transport: Box<dyn Transport>,
}

impl Client {
    pub fn new(user: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(user, key).build()
    }

    pub fn builder(user: impl Into<String>, key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(user, key)
    }

    fn build_url(&self, route: &str) -> String {
        format!("{}/{}/{}.json", self.host, self.version, route)
    }

    fn call(
        &self,
        operation: &'static str,
        method: Method,
        route: &str,
        params: Vec<(String, String)>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest {
            method,
            url: self.build_url(route),
            params,
            credentials: self.credentials.clone(),
        };
        log::debug!("{}: {:?} {}", operation, method, request.url);

        let response = self
            .transport
            .execute(&request)
            .map_err(|source| Error::Transport { operation, source })?;

        if response.is_success() && response.body.trim().is_empty() {
            return Ok(ApiResponse::default());
        }

        let decoded: ApiResponse = match serde_json::from_str(&response.body) {
            Ok(decoded) => decoded,
            Err(_) if !response.is_success() => {
                return Err(Error::Status {
                    operation,
                    status: response.status,
                })
            }
            Err(source) => return Err(Error::Decode { operation, source }),
        };

        if let Some(message) = decoded.first_error() {
            log::warn!("{}: response had errors: {:?}", operation, decoded.errors);
            return Err(Error::Api {
                operation,
                message: message.to_string(),
            });
        }
        if !response.is_success() {
            return Err(Error::Status {
                operation,
                status: response.status,
            });
        }

        Ok(decoded)
    }

    /// Starts a fetch of the tournament with the given id or slug.
    pub fn tournament(&self, id: impl Into<String>) -> TournamentRequest<'_> {
        TournamentRequest {
            client: self,
            id: id.into(),
            params: Vec::new(),
        }
    }

    /// Fetch request for a tournament already loaded.
    pub fn refresh(&self, tournament: &Tournament) -> TournamentRequest<'_> {
        let id = tournament.sub_url.clone().unwrap_or_else(|| tournament.slug());
        self.tournament(id)
    }

    pub fn create_tournament(
        &self,
        name: &str,
        url: &str,
        subdomain: &str,
        tournament_type: TournamentType,
    ) -> Result<Tournament> {
        const OP: &str = "create tournament";

        let params = params([
            ("tournament[name]", name),
            ("tournament[url]", url),
            ("tournament[open_signup]", "false"),
            ("tournament[subdomain]", subdomain),
            ("tournament[tournament_type]", tournament_type.as_param()),
        ]);
        let response = self.call(OP, Method::Post, "tournaments", params)?;
        let record = response.tournament.ok_or(Error::MissingPayload {
            operation: OP,
            field: "tournament",
        })?;

        log::info!("created tournament {:?} ({})", record.info.name, record.info.id);
        Ok(Tournament::from(record))
    }

    /// Starts the tournament and replaces `tournament` with the started state
    /// the service returns.
    pub fn start(&self, tournament: &mut Tournament) -> Result<()> {
        const OP: &str = "start tournament";

        let route = format!("tournaments/{}/start", tournament.slug());
        let params = params([("include_participants", "1"), ("include_matches", "1")]);
        let response = self.call(OP, Method::Post, &route, params)?;
        let record = response.tournament.ok_or(Error::MissingPayload {
            operation: OP,
            field: "tournament",
        })?;

        if record.info.state != TOURNAMENT_UNDERWAY {
            return Err(Error::NotStarted {
                state: record.info.state,
            });
        }
        log::info!("tournament {:?} started", record.info.name);

        let sub_url = tournament.sub_url.take();
        *tournament = Tournament::from(record);
        tournament.sub_url = sub_url;
        Ok(())
    }

    /// Registers a participant and appends it to `tournament`.
    pub fn add_participant(
        &self,
        tournament: &mut Tournament,
        name: &str,
        misc: &str,
    ) -> Result<ParticipantRc> {
        const OP: &str = "add participant";

        let route = format!("tournaments/{}/participants", tournament.slug());
        let params = params([("participant[name]", name), ("participant[misc]", misc)]);
        let response = self.call(OP, Method::Post, &route, params)?;
        let participant = response.participant.ok_or(Error::MissingPayload {
            operation: OP,
            field: "participant",
        })?;

        log::info!(
            "participant {:?} ({}) added to {}",
            participant.name,
            participant.id,
            tournament.slug()
        );
        let participant: ParticipantRc = Rc::new(RefCell::new(participant));
        tournament.participants.push(participant.clone());
        tournament.info.participants_count += 1;
        Ok(participant)
    }

    pub fn remove_participant(&self, tournament: &mut Tournament, name: &str) -> Result<()> {
        let id = tournament
            .participant_by_name(name)
            .map(|p| p.borrow().id)
            .filter(|id| *id != 0)
            .ok_or_else(|| Error::ParticipantNotFound(name.to_string()))?;
        self.remove_participant_by_id(tournament, id)
    }

    pub fn remove_participant_by_id(&self, tournament: &mut Tournament, id: u64) -> Result<()> {
        const OP: &str = "remove participant";

        let route = format!("tournaments/{}/participants/{}", tournament.slug(), id);
        self.call(OP, Method::Delete, &route, Vec::new())?;

        log::info!("participant {} removed from {}", id, tournament.slug());
        tournament.remove_local_participant(id);
        Ok(())
    }

    /// Reports `m`'s scores and winner. The returned match is exactly what the
    /// service answered, unresolved; fold it back with
    /// [`Tournament::merge_match`].
    pub fn submit_match(&self, tournament: &Tournament, m: &Match) -> Result<Match> {
        const OP: &str = "submit match";

        let route = format!("tournaments/{}/matches/{}", tournament.slug(), m.id);
        let scores = format!("{}-{}", m.player_one_score, m.player_two_score);
        let mut params = params([("match[scores_csv]", scores.as_str())]);
        if let Some(winner) = m.winner_id {
            params.push((String::from("match[winner_id]"), winner.to_string()));
        }

        let response = self.call(OP, Method::Put, &route, params)?;
        response.match_.ok_or(Error::MissingPayload {
            operation: OP,
            field: "match",
        })
    }
}

/// GET of a single tournament, optionally with participants and matches.
pub struct TournamentRequest<'a> {
    client: &'a Client,
    id: String,
    params: Vec<(String, String)>,
}

impl TournamentRequest<'_> {
    pub fn with_participants(mut self) -> Self {
        self.params
            .push((String::from("include_participants"), String::from("1")));
        self
    }

    pub fn with_matches(mut self) -> Self {
        self.params
            .push((String::from("include_matches"), String::from("1")));
        self
    }

    /// Fetches the tournament in whatever state it is.
    pub fn fetch(self) -> Result<Tournament> {
        self.load(false)
    }

    /// Fetches a finished tournament; any other state is an error.
    pub fn get(self) -> Result<Tournament> {
        self.load(true)
    }

    fn load(self, require_complete: bool) -> Result<Tournament> {
        const OP: &str = "retrieve tournament";

        let route = format!("tournaments/{}", self.id);
        let response = self.client.call(OP, Method::Get, &route, self.params)?;
        let record = response.tournament.ok_or(Error::MissingPayload {
            operation: OP,
            field: "tournament",
        })?;

        if require_complete && record.info.state != TOURNAMENT_COMPLETE {
            return Err(Error::NotCompleted {
                state: record.info.state,
            });
        }

        let mut tournament = Tournament::from(record);
        tournament.sub_url = Some(self.id);
        Ok(tournament)
    }
}
