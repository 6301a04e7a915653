use std::collections::HashMap;
use std::error::Error;
use std::process;

use clap::Parser;

use skeep::{
    Bot, GameBuilder, Seat, Tick, create_bot_from_spec, label_for_spec, play_turn,
    render_state,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

/// Actions allowed in a single turn before the game is aborted.
const MAX_TICKS_PER_TURN: usize = 500;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run games between two bots and report win counts."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 100)]
    games: usize,

    /// Base RNG seed (deck and bot RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Deal 10 stock cards per player instead of 30
    #[arg(long = "short")]
    short: bool,

    /// Optional override for per-player stock size
    #[arg(long = "stock-size")]
    stock_size: Option<usize>,

    /// Safety cap on turns per game; games exceeding this are aborted
    #[arg(long = "max-turns", default_value_t = 2000)]
    max_turns: usize,

    /// Print the table after every turn
    #[arg(long = "visualize")]
    visualize: bool,

    /// Bot specs for the human seat and the CPU seat, e.g. `random cpu`
    #[arg(num_args = 0..=2)]
    bots: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut specs = args.bots.clone();
    while specs.len() < 2 {
        specs.push(String::from("cpu"));
    }
    if specs
        .iter()
        .any(|spec| label_for_spec(spec) == "human")
        && args.games > 1
    {
        return Err("human players are only supported for a single game".into());
    }

    let mut wins: HashMap<Seat, usize> = HashMap::new();
    let mut aborted = 0usize;
    let mut total_turns = 0usize;

    for game_index in 0..args.games {
        let game_seed = args
            .seed
            .wrapping_add((game_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut builder = GameBuilder::new()
            .short_game(args.short)
            .with_seed(game_seed);
        if let Some(stock) = args.stock_size {
            builder = builder.with_stock_size(stock);
        }
        let mut game = builder.build()?;
        let mut human: Box<dyn Bot> = create_bot_from_spec(&specs[0], 0, game_seed)?;
        let mut cpu: Box<dyn Bot> = create_bot_from_spec(&specs[1], 1, game_seed)?;
        let expected_cards = game.card_count();

        game.start()?;
        let mut turns = 0usize;
        while let Some(seat) = game.current_seat() {
            if turns >= args.max_turns {
                aborted += 1;
                break;
            }
            let bot = match seat {
                Seat::Human => human.as_mut(),
                Seat::Cpu => cpu.as_mut(),
            };
            let outcome = play_turn(&mut game, bot, MAX_TICKS_PER_TURN)?;
            if game.card_count() != expected_cards {
                return Err(format!("card count changed during game {game_index}").into());
            }
            if args.visualize {
                println!("{}", render_state(&game.state_view(seat)));
            }
            turns += 1;
            if matches!(outcome, Tick::Stuck | Tick::Continue) {
                aborted += 1;
                break;
            }
        }
        total_turns += turns;
        if let Some(winner) = game.winner() {
            *wins.entry(winner).or_default() += 1;
        }
        log::debug!("game {game_index} finished after {turns} turns");
    }

    println!("Results over {} games:", args.games);
    for (seat, spec) in [(Seat::Human, &specs[0]), (Seat::Cpu, &specs[1])] {
        let won = wins.get(&seat).copied().unwrap_or_default();
        let rate = if args.games == 0 {
            0.0
        } else {
            won as f64 / args.games as f64 * 100.0
        };
        println!("  {seat:<6} {:<10} {won:>5} wins ({rate:.1}%)", label_for_spec(spec));
    }
    if aborted > 0 {
        println!("\nNote: {aborted} game(s) ended without a winner (stalled or over the turn cap).");
    }
    if args.games > 0 {
        println!(
            "Average turns per game: {:.1}",
            total_turns as f64 / args.games as f64
        );
    }
    Ok(())
}
