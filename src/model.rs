use std::{cell::RefCell, fmt, rc::Rc, str::FromStr};

use chrono::{DateTime, FixedOffset};
use serde_derive::Deserialize;

use crate::{
    error::Error,
    wire::{self, TournamentInfo, TournamentRecord},
};

pub const TOURNAMENT_UNDERWAY: &str = "underway";
pub const TOURNAMENT_AWAITING_REVIEW: &str = "awaiting_review";
pub const TOURNAMENT_COMPLETE: &str = "complete";

pub const MATCH_PENDING: &str = "pending";
pub const MATCH_OPEN: &str = "open";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentType {
    SingleElimination,
    DoubleElimination,
}

impl TournamentType {
    pub fn as_param(self) -> &'static str {
        match self {
            TournamentType::SingleElimination => "single elimination",
            TournamentType::DoubleElimination => "double elimination",
        }
    }
}

impl FromStr for TournamentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "single" => Ok(TournamentType::SingleElimination),
            "double" => Ok(TournamentType::DoubleElimination),
            other => Err(Error::UnknownTournamentType(other.to_string())),
        }
    }
}

/// A competitor. `wins`, `losses` and `total_score` are derived locally while
/// matches are resolved and are never exchanged with the service.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub id: u64,
    #[serde(rename = "display_name", default, deserialize_with = "wire::nullable")]
    pub name: String,
    /// Free text, used by callers as an external correlation key.
    #[serde(default, deserialize_with = "wire::nullable")]
    pub misc: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub seed: u32,
    #[serde(default)]
    pub final_rank: Option<u32>,
    /// Ids the participant had in a group stage before being merged.
    #[serde(default, deserialize_with = "wire::nullable")]
    pub group_player_ids: Vec<u64>,

    #[serde(skip)]
    pub wins: u32,
    #[serde(skip)]
    pub losses: u32,
    #[serde(skip)]
    pub total_score: u64,
}

impl Participant {
    pub fn win(&mut self) {
        self.wins += 1;
    }

    pub fn lose(&mut self) {
        self.losses += 1;
    }
}

pub type ParticipantRc = Rc<RefCell<Participant>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    One,
    Two,
}

/// What a resolved match added to its participants, kept so that resolving
/// the match again can take it back first.
#[derive(Debug)]
struct Tally {
    player_one: Option<ParticipantRc>,
    player_two: Option<ParticipantRc>,
    scores: (u64, u64),
    winner: Option<Side>,
}

impl Tally {
    fn apply(&self) {
        if let Some(p) = &self.player_one {
            let mut p = p.borrow_mut();
            p.total_score = p.total_score.saturating_add(self.scores.0);
        }
        if let Some(p) = &self.player_two {
            let mut p = p.borrow_mut();
            p.total_score = p.total_score.saturating_add(self.scores.1);
        }

        let (winner, loser) = match self.winner {
            Some(Side::One) => (&self.player_one, &self.player_two),
            Some(Side::Two) => (&self.player_two, &self.player_one),
            None => return,
        };
        if let Some(p) = winner {
            p.borrow_mut().win();
        }
        if let Some(p) = loser {
            p.borrow_mut().lose();
        }
    }

    fn retract(&self) {
        if let Some(p) = &self.player_one {
            let mut p = p.borrow_mut();
            p.total_score = p.total_score.saturating_sub(self.scores.0);
        }
        if let Some(p) = &self.player_two {
            let mut p = p.borrow_mut();
            p.total_score = p.total_score.saturating_sub(self.scores.1);
        }

        let (winner, loser) = match self.winner {
            Some(Side::One) => (&self.player_one, &self.player_two),
            Some(Side::Two) => (&self.player_two, &self.player_one),
            None => return,
        };
        if let Some(p) = winner {
            let mut p = p.borrow_mut();
            p.wins = p.wins.saturating_sub(1);
        }
        if let Some(p) = loser {
            let mut p = p.borrow_mut();
            p.losses = p.losses.saturating_sub(1);
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct Match {
    pub id: u64,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub identifier: String,
    #[serde(default, deserialize_with = "wire::nullable")]
    pub state: String,
    #[serde(default, rename = "player1_id")]
    pub player_one_id: Option<u64>,
    #[serde(default, rename = "player2_id")]
    pub player_two_id: Option<u64>,
    #[serde(default)]
    pub winner_id: Option<u64>,
    #[serde(default)]
    pub loser_id: Option<u64>,
    /// Raw result, `"a-b"` from player one's point of view.
    #[serde(default, deserialize_with = "wire::nullable")]
    pub scores_csv: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(skip)]
    pub player_one: Option<ParticipantRc>,
    #[serde(skip)]
    pub player_two: Option<ParticipantRc>,
    #[serde(skip)]
    pub winner: Option<ParticipantRc>,
    #[serde(skip)]
    pub loser: Option<ParticipantRc>,
    #[serde(skip)]
    pub player_one_score: u64,
    #[serde(skip)]
    pub player_two_score: u64,
    #[serde(skip)]
    pub winner_score: u64,
    #[serde(skip)]
    pub loser_score: u64,

    #[serde(skip)]
    applied: Option<Tally>,
}

impl Match {
    pub fn is_open(&self) -> bool {
        self.state == MATCH_OPEN
    }

    pub fn involves(&self, participant_id: u64) -> bool {
        self.player_one_id == Some(participant_id) || self.player_two_id == Some(participant_id)
    }

    fn winner_side(&self) -> Option<Side> {
        let winner = self.winner_id?;
        if self.player_one_id == Some(winner) {
            Some(Side::One)
        } else if self.player_two_id == Some(winner) {
            Some(Side::Two)
        } else {
            None
        }
    }

    /// Links the match to `participants` and folds its result into their
    /// wins, losses and total scores.
    ///
    /// Resolving the same match again retracts what the previous resolution
    /// added before applying the current result, so totals only ever count a
    /// match once. A side whose participant can't be found stays `None` and
    /// gets no score or win/loss update.
    pub fn resolve_participants(&mut self, participants: &[ParticipantRc]) {
        self.retract();

        self.player_one = self.player_one_id.and_then(|id| lookup(participants, id));
        self.player_two = self.player_two_id.and_then(|id| lookup(participants, id));

        let (one, two) = parse_scores(&self.scores_csv).unwrap_or_else(|| {
            if !self.scores_csv.is_empty() {
                log::debug!(
                    "match {}: malformed scores {:?}, counting 0-0",
                    self.id,
                    self.scores_csv
                );
            }
            (0, 0)
        });
        self.player_one_score = one;
        self.player_two_score = two;

        let winner = self.winner_side();
        let (winner_ref, loser_ref, winner_score, loser_score) = match winner {
            Some(Side::One) => (self.player_one.clone(), self.player_two.clone(), one, two),
            Some(Side::Two) => (self.player_two.clone(), self.player_one.clone(), two, one),
            None => (None, None, 0, 0),
        };
        self.winner = winner_ref;
        self.loser = loser_ref;
        self.winner_score = winner_score;
        self.loser_score = loser_score;

        let tally = Tally {
            player_one: self.player_one.clone(),
            player_two: self.player_two.clone(),
            scores: (one, two),
            winner,
        };
        tally.apply();
        self.applied = Some(tally);
    }

    fn retract(&mut self) {
        if let Some(tally) = self.applied.take() {
            tally.retract();
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |p: &Option<ParticipantRc>| {
            p.as_ref()
                .map_or_else(|| String::from("?"), |p| p.borrow().name.clone())
        };
        write!(
            f,
            "{} {} {}-{} {}",
            self.identifier,
            name(&self.player_one),
            self.player_one_score,
            self.player_two_score,
            name(&self.player_two)
        )
    }
}

/// Splits `"a-b"` into its two scores. Anything else, including multi-set
/// results like `"3-1,2-3"`, yields `None`.
pub fn parse_scores(scores: &str) -> Option<(u64, u64)> {
    let (one, two) = scores.split_once('-')?;
    if two.contains('-') {
        return None;
    }
    Some((one.parse().ok()?, two.parse().ok()?))
}

fn find_by<'a>(
    participants: &'a [ParticipantRc],
    cmp: impl Fn(&Participant) -> bool,
) -> Option<&'a ParticipantRc> {
    participants.iter().find(|p| cmp(&*p.borrow()))
}

fn participant_by_group_player_id(
    participants: &[ParticipantRc],
    id: u64,
) -> Option<&ParticipantRc> {
    find_by(participants, |p| p.group_player_ids.first() == Some(&id))
}

/// Primary id first, then the first group player id of merged participants.
fn lookup(participants: &[ParticipantRc], id: u64) -> Option<ParticipantRc> {
    find_by(participants, |p| p.id == id)
        .or_else(|| participant_by_group_player_id(participants, id))
        .cloned()
}

/// A tournament with its participants and matches cross-linked.
///
/// Participants are shared with the matches that reference them, so a
/// `Tournament` is not `Send` and must stay on the thread that loaded it.
#[derive(Debug, Default)]
pub struct Tournament {
    pub info: TournamentInfo,
    pub participants: Vec<ParticipantRc>,
    pub matches: Vec<Match>,
    /// Identifier the tournament was fetched with.
    pub sub_url: Option<String>,
}

impl From<TournamentRecord> for Tournament {
    fn from(record: TournamentRecord) -> Self {
        let participants: Vec<ParticipantRc> = record
            .participants
            .into_iter()
            .map(|item| Rc::new(RefCell::new(item.participant)))
            .collect();

        let mut matches = Vec::new();
        for item in record.matches {
            let mut m = item.match_;
            if m.state == MATCH_PENDING {
                continue;
            }
            m.resolve_participants(&participants);
            matches.push(m);
        }

        Self {
            info: record.info,
            participants,
            matches,
            sub_url: None,
        }
    }
}

impl Tournament {
    /// `subdomain-url`, or just `url` when there is no subdomain.
    pub fn slug(&self) -> String {
        if self.info.subdomain.is_empty() {
            self.info.url.clone()
        } else {
            format!("{}-{}", self.info.subdomain, self.info.url)
        }
    }

    pub fn is_completed(&self) -> bool {
        self.info.state == TOURNAMENT_COMPLETE || self.info.state == TOURNAMENT_AWAITING_REVIEW
    }

    pub fn participant(&self, id: u64) -> Option<&ParticipantRc> {
        find_by(&self.participants, |p| p.id == id)
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&ParticipantRc> {
        find_by(&self.participants, |p| p.name == name)
    }

    pub fn participant_by_misc(&self, misc: &str) -> Option<&ParticipantRc> {
        find_by(&self.participants, |p| p.misc == misc)
    }

    pub(crate) fn remove_local_participant(&mut self, id: u64) -> Option<ParticipantRc> {
        let index = self.participants.iter().position(|p| p.borrow().id == id)?;
        self.info.participants_count = self.info.participants_count.saturating_sub(1);
        Some(self.participants.remove(index))
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn open_matches(&self) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.is_open()).collect()
    }

    /// Finds a match and resolves it again against the current participants.
    pub fn match_by_id(&mut self, id: u64) -> Option<&Match> {
        let participants = &self.participants;
        let m = self.matches.iter_mut().find(|m| m.id == id)?;
        m.resolve_participants(participants);
        Some(&*m)
    }

    pub fn open_match_for_participant(&self, participant: &Participant) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| m.is_open() && m.involves(participant.id))
    }

    /// Folds a match returned by the service into the tournament, replacing
    /// the stored match with the same id. Pending matches are dropped, the
    /// same as when a tournament is loaded.
    pub fn merge_match(&mut self, mut incoming: Match) -> Option<&Match> {
        let participants = &self.participants;
        let index = self.matches.iter().position(|m| m.id == incoming.id);

        if let Some(index) = index {
            self.matches[index].retract();
            if incoming.state == MATCH_PENDING {
                self.matches.remove(index);
                return None;
            }
            incoming.resolve_participants(participants);
            self.matches[index] = incoming;
            return self.matches.get(index);
        }

        if incoming.state == MATCH_PENDING {
            return None;
        }
        incoming.resolve_participants(participants);
        self.matches.push(incoming);
        self.matches.last()
    }
}

/// Matches of `after` whose state differs from the match at the same
/// position in `before`.
pub fn diff_matches<'a>(before: &[Match], after: &'a [Match]) -> Vec<&'a Match> {
    before
        .iter()
        .zip(after)
        .filter(|(old, new)| old.state != new.state)
        .map(|(_, new)| new)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn participant(id: u64, name: &str) -> Value {
        json!({"participant": {
            "id": id,
            "display_name": name,
            "misc": format!("ext-{id}"),
            "seed": id,
        }})
    }

    fn match_item(
        id: u64,
        state: &str,
        p1: u64,
        p2: u64,
        winner: Option<u64>,
        scores: &str,
    ) -> Value {
        json!({"match": {
            "id": id,
            "identifier": format!("M{id}"),
            "state": state,
            "player1_id": p1,
            "player2_id": p2,
            "winner_id": winner,
            "scores_csv": scores,
        }})
    }

    fn tournament(participants: Vec<Value>, matches: Vec<Value>) -> Tournament {
        let record: TournamentRecord = serde_json::from_value(json!({
            "id": 100,
            "name": "Cup",
            "url": "cup",
            "state": "underway",
            "participants": participants,
            "matches": matches,
        }))
        .unwrap();
        Tournament::from(record)
    }

    fn stats(t: &Tournament, id: u64) -> (u32, u32, u64) {
        let p = t.participant(id).unwrap().borrow();
        (p.wins, p.losses, p.total_score)
    }

    #[test]
    fn resolves_single_match() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![match_item(10, "complete", 1, 2, Some(1), "3-1")],
        );

        assert_eq!(stats(&t, 1), (1, 0, 3));
        assert_eq!(stats(&t, 2), (0, 1, 1));

        let m = &t.matches[0];
        assert_eq!(m.winner.as_ref().unwrap().borrow().id, 1);
        assert_eq!(m.loser.as_ref().unwrap().borrow().id, 2);
        assert_eq!(m.winner_score, 3);
        assert_eq!(m.loser_score, 1);
        assert_eq!(m.to_string(), "M10 Ada 3-1 Bob");
    }

    #[test]
    fn player_two_win_swaps_winner_scores() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![match_item(10, "complete", 1, 2, Some(2), "0-2")],
        );

        let m = &t.matches[0];
        assert_eq!(m.winner.as_ref().unwrap().borrow().id, 2);
        assert_eq!(m.winner_score, 2);
        assert_eq!(m.loser_score, 0);
        assert_eq!(stats(&t, 2), (1, 0, 2));
        assert_eq!(stats(&t, 1), (0, 1, 0));
    }

    #[test]
    fn drops_pending_matches_and_keeps_counts() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob"), participant(3, "Cy")],
            vec![
                match_item(10, "complete", 1, 2, Some(1), "2-0"),
                match_item(11, "pending", 1, 3, None, ""),
                match_item(12, "open", 2, 3, None, ""),
            ],
        );

        assert_eq!(t.participants.len(), 3);
        assert_eq!(t.matches.len(), 2);
        assert!(t.matches.iter().all(|m| m.state != MATCH_PENDING));
        assert_eq!(t.open_matches().len(), 1);
    }

    #[test]
    fn empty_lists_resolve_to_empty_collections() {
        let t = Tournament::from(TournamentRecord::default());
        assert!(t.participants.is_empty());
        assert!(t.matches.is_empty());
    }

    #[test]
    fn malformed_scores_count_as_zero() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![match_item(10, "complete", 1, 2, Some(2), "abc")],
        );

        let m = &t.matches[0];
        assert_eq!(m.player_one_score, 0);
        assert_eq!(m.player_two_score, 0);
        // win/loss tallying still happens
        assert_eq!(stats(&t, 2), (1, 0, 0));
        assert_eq!(stats(&t, 1), (0, 1, 0));
    }

    #[test]
    fn parse_scores_formats() {
        assert_eq!(parse_scores("3-1"), Some((3, 1)));
        assert_eq!(parse_scores("0-0"), Some((0, 0)));
        assert_eq!(parse_scores("3-1,2-3"), None);
        assert_eq!(parse_scores("3-1-2"), None);
        assert_eq!(parse_scores("3"), None);
        assert_eq!(parse_scores("a-1"), None);
        assert_eq!(parse_scores(""), None);
    }

    #[test]
    fn large_scores_accumulate_without_overflow() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![
                match_item(10, "complete", 1, 2, Some(1), "4000000000-0"),
                match_item(11, "complete", 1, 2, Some(1), "4000000000-0"),
                match_item(12, "complete", 1, 2, Some(2), "5000000000-1"),
            ],
        );

        let last = &t.matches[2];
        assert_eq!(last.player_one_score, 5_000_000_000);
        assert_eq!(last.player_two_score, 1);
        assert_eq!(stats(&t, 1), (2, 1, 13_000_000_000));
        assert_eq!(stats(&t, 2), (1, 2, 1));
        assert_eq!(parse_scores("18446744073709551615-0"), Some((u64::MAX, 0)));
    }

    #[test]
    fn total_score_saturates() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![
                match_item(10, "complete", 1, 2, Some(1), "18446744073709551615-0"),
                match_item(11, "complete", 1, 2, Some(1), "5-0"),
            ],
        );

        assert_eq!(stats(&t, 1), (2, 0, u64::MAX));
    }

    #[test]
    fn score_sums_match_raw_string() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![
                match_item(10, "complete", 1, 2, Some(1), "5-4"),
                match_item(11, "complete", 2, 1, Some(2), "x-y"),
            ],
        );

        let sums: Vec<u64> = t
            .matches
            .iter()
            .map(|m| m.player_one_score + m.player_two_score)
            .collect();
        assert_eq!(sums, vec![9, 0]);
    }

    #[test]
    fn undecided_match_changes_no_counters() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![match_item(10, "open", 1, 2, None, "1-1")],
        );

        let m = &t.matches[0];
        assert!(m.winner.is_none());
        assert!(m.loser.is_none());
        assert_eq!(stats(&t, 1), (0, 0, 1));
        assert_eq!(stats(&t, 2), (0, 0, 1));
    }

    #[test]
    fn falls_back_to_group_player_id() {
        let merged = json!({"participant": {
            "id": 5, "display_name": "Dee", "group_player_ids": [501, 502]
        }});
        let t = tournament(
            vec![participant(1, "Ada"), merged],
            vec![match_item(10, "complete", 501, 1, Some(501), "2-1")],
        );

        let m = &t.matches[0];
        assert_eq!(m.player_one.as_ref().unwrap().borrow().id, 5);
        assert_eq!(m.winner.as_ref().unwrap().borrow().id, 5);
        assert_eq!(stats(&t, 5), (1, 0, 2));
        assert_eq!(participant_by_group_player_id(&t.participants, 501).unwrap().borrow().id, 5);
        assert!(participant_by_group_player_id(&t.participants, 502).is_none());
    }

    #[test]
    fn unknown_participant_is_left_unset() {
        let t = tournament(
            vec![participant(1, "Ada")],
            vec![match_item(10, "complete", 1, 99, Some(99), "0-3")],
        );

        let m = &t.matches[0];
        assert!(m.player_two.is_none());
        assert!(m.winner.is_none());
        assert_eq!(m.loser.as_ref().unwrap().borrow().id, 1);
        assert_eq!(m.winner_score, 3);
        assert_eq!(stats(&t, 1), (0, 1, 0));
    }

    #[test]
    fn re_resolving_does_not_double_count() {
        let mut t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![match_item(10, "complete", 1, 2, Some(1), "3-1")],
        );

        t.match_by_id(10).unwrap();
        let m = t.match_by_id(10).unwrap();
        assert_eq!(m.winner_score, 3);

        assert_eq!(stats(&t, 1), (1, 0, 3));
        assert_eq!(stats(&t, 2), (0, 1, 1));
        assert!(t.match_by_id(11).is_none());
    }

    #[test]
    fn merge_match_replaces_previous_result() {
        let mut t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![match_item(10, "open", 1, 2, None, "")],
        );

        let submitted: Match = serde_json::from_value(json!({
            "id": 10, "state": "complete", "player1_id": 1, "player2_id": 2,
            "winner_id": 2, "loser_id": 1, "scores_csv": "1-4"
        }))
        .unwrap();
        let merged = t.merge_match(submitted).unwrap();
        assert_eq!(merged.winner_score, 4);
        assert_eq!(t.matches.len(), 1);
        assert_eq!(stats(&t, 2), (1, 0, 4));
        assert_eq!(stats(&t, 1), (0, 1, 1));

        let corrected: Match = serde_json::from_value(json!({
            "id": 10, "state": "complete", "player1_id": 1, "player2_id": 2,
            "winner_id": 1, "scores_csv": "5-4"
        }))
        .unwrap();
        t.merge_match(corrected);
        assert_eq!(stats(&t, 1), (1, 0, 5));
        assert_eq!(stats(&t, 2), (0, 1, 4));
    }

    #[test]
    fn lookups() {
        let t = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob"), participant(3, "Cy")],
            vec![
                match_item(10, "complete", 1, 2, Some(1), "1-0"),
                match_item(11, "open", 1, 3, None, ""),
            ],
        );

        assert_eq!(t.participant_by_name("Bob").unwrap().borrow().id, 2);
        assert_eq!(t.participant_by_misc("ext-3").unwrap().borrow().name, "Cy");
        assert!(t.participant_by_name("Nobody").is_none());
        assert!(t.participant(4).is_none());

        let ada = t.participant(1).unwrap().borrow().clone();
        assert_eq!(t.open_match_for_participant(&ada).unwrap().id, 11);
        let bob = t.participant(2).unwrap().borrow().clone();
        assert!(t.open_match_for_participant(&bob).is_none());
    }

    #[test]
    fn slug_and_completion() {
        let mut t = Tournament::default();
        t.info.url = String::from("cup");
        assert_eq!(t.slug(), "cup");
        t.info.subdomain = String::from("club");
        assert_eq!(t.slug(), "club-cup");

        t.info.state = String::from(TOURNAMENT_UNDERWAY);
        assert!(!t.is_completed());
        t.info.state = String::from(TOURNAMENT_AWAITING_REVIEW);
        assert!(t.is_completed());
    }

    #[test]
    fn diff_reports_changed_states() {
        let before = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![
                match_item(10, "open", 1, 2, None, ""),
                match_item(11, "open", 1, 2, None, ""),
            ],
        );
        let after = tournament(
            vec![participant(1, "Ada"), participant(2, "Bob")],
            vec![
                match_item(10, "open", 1, 2, None, ""),
                match_item(11, "complete", 1, 2, Some(1), "2-0"),
                match_item(12, "open", 1, 2, None, ""),
            ],
        );

        let diff = diff_matches(&before.matches, &after.matches);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].id, 11);
    }

    #[test]
    fn tournament_type_from_short_names() {
        assert_eq!("".parse::<TournamentType>().unwrap(), TournamentType::SingleElimination);
        assert_eq!("double".parse::<TournamentType>().unwrap().as_param(), "double elimination");
        assert!("swiss".parse::<TournamentType>().is_err());
    }
}
