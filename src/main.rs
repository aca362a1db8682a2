use std::{cmp::Reverse, env, process::ExitCode};

use challonge::{ClientBuilder, Participant};

fn standings(participants: &mut [Participant]) {
    participants.sort_by_key(|p| {
        (
            p.final_rank.unwrap_or(u32::MAX),
            Reverse(p.wins),
            Reverse(p.total_score),
        )
    });
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Tournament id missing");
        let program = args.first().map_or("challonge-standings", String::as_str);
        println!("Usage: {program} <tournament-id>");
        println!("Credentials are read from CHALLONGE_USER and CHALLONGE_API_KEY");
        return ExitCode::from(1);
    }

    let client = match ClientBuilder::from_env().and_then(ClientBuilder::build) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    let tournament = match client
        .tournament(args[1].as_str())
        .with_participants()
        .with_matches()
        .get()
    {
        Ok(tournament) => tournament,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut participants: Vec<Participant> = tournament
        .participants
        .iter()
        .map(|p| p.borrow().clone())
        .collect();
    standings(&mut participants);

    println!("{} ({})", tournament.info.name, tournament.slug());
    for p in &participants {
        let rank = p.final_rank.map_or_else(|| String::from("-"), |r| r.to_string());
        println!(
            "{:>3}  {:<30} {:>3}W {:>3}L {:>5}",
            rank, p.name, p.wins, p.losses, p.total_score
        );
    }

    ExitCode::SUCCESS
}
