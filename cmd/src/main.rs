use std::collections::BTreeMap;
use std::error::Error;
use rand::{Rng, RngCore, SeedableRng, thread_rng};
use realestate::{Game, Options, Outcome};
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|_| format!("{key} must be a valid number, got {value:?}")),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let games: u64 = env_or("GAMES", 1000)?;
    let max_turns: usize = env_or("MAX_TURNS", 1000)?;
    let seed: u64 = env_or("SEED", thread_rng().next_u64())?;

    tracing::info!(games, max_turns, seed, "starting simulation");

    let options = Options::default();
    let names: Vec<String> = (1..=options.num_players).map(|n| format!("Player {n}")).collect();
    let mut tally: BTreeMap<String, u64> = BTreeMap::new();

    for n in 0..games {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed.wrapping_add(n));
        let mut game = Game::with_options(&options);

        for turn in 0..max_turns {
            if game.check_game_over().is_over() {
                break;
            }

            let name = &names[turn % names.len()];
            let roll = rng.gen_range(1..=6);

            if game.move_player(name, roll)? && rng.gen_bool(0.75) {
                game.buy_space(name)?;
            }
        }

        let key = match game.check_game_over() {
            Outcome::Winner(name) => name,
            Outcome::Pending => "unfinished".to_string(),
            Outcome::NoSurvivors => "no survivors".to_string(),
        };
        *tally.entry(key).or_default() += 1;

        tracing::debug!(game = n, "\n{}", game);
    }

    for (result, count) in &tally {
        println!("{result: <14} {count}");
    }

    Ok(())
}
