use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use skeep::{
    Action, Card, CpuBot, GameBuilder, GameObserver, HumanBot, Seat, Tick, Turn, render_state,
    tick,
};

/// Play a game at the terminal against the CPU.
#[derive(Parser, Debug)]
#[command(name = "play", about = "Play against the CPU in the terminal.")]
struct Args {
    /// Deal 10 stock cards per player instead of 30
    #[arg(long = "short")]
    short: bool,

    /// Seed for shuffling and the CPU's random discards
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Pause before each CPU action, in milliseconds
    #[arg(long = "cpu-delay-ms", default_value_t = 600)]
    cpu_delay_ms: u64,

    /// Name shown for the human player
    #[arg(long = "name", default_value = "You")]
    name: String,
}

/// Narrates engine events and hands out the CPU pacing hint.
struct Narrator {
    cpu_delay: Duration,
    pending_delay: Option<Duration>,
}

impl GameObserver for Narrator {
    fn game_started(&mut self) {
        println!("Game started. Empty your stock pile before the CPU does.");
    }

    fn turn_started(&mut self, turn: &Turn) -> Option<Duration> {
        if turn.seat() == Seat::Cpu {
            println!("\n--- CPU's turn ---");
            self.pending_delay = Some(self.cpu_delay);
        } else {
            self.pending_delay = None;
        }
        self.pending_delay
    }

    fn cards_dealt(&mut self, seat: Seat, cards: &[Card], _slots: &[usize]) {
        if seat == Seat::Human && !cards.is_empty() {
            let drawn = cards.iter().map(Card::to_string).collect::<Vec<_>>();
            println!("You drew {}.", drawn.join(", "));
        }
    }

    fn stock_card_played(&mut self, seat: Seat, action: &Action) {
        if seat == Seat::Cpu {
            println!("CPU plays its stock card ({action:?}).");
        }
    }

    fn hand_card_played(&mut self, seat: Seat, action: &Action) {
        if seat == Seat::Cpu {
            println!("CPU plays a hand card ({action:?}).");
        }
    }

    fn discard_card_played(&mut self, seat: Seat, action: &Action) {
        if seat == Seat::Cpu {
            println!("CPU plays from a discard pile ({action:?}).");
        }
    }

    fn hand_card_discarded(&mut self, seat: Seat, action: &Action) {
        if seat == Seat::Cpu {
            println!("CPU discards ({action:?}).");
        }
    }

    fn build_pile_cleared(&mut self, build_pile: usize) {
        println!("Build pile {build_pile} reached 12 and was cleared.");
    }

    fn draw_pile_recreated(&mut self) {
        println!("The draw pile was rebuilt from completed build piles.");
    }

    fn game_ended(&mut self, winner: Seat) {
        match winner {
            Seat::Human => println!("\nYou emptied your stock pile. You win!"),
            Seat::Cpu => println!("\nThe CPU emptied its stock pile. You lose."),
        }
    }
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
    let narrator = Narrator {
        cpu_delay: Duration::from_millis(args.cpu_delay_ms),
        pending_delay: None,
    };
    let mut builder = GameBuilder::new().short_game(args.short);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    let mut game = builder.build_with_observer(narrator)?;
    let mut human = HumanBot::new(args.name);
    let mut cpu = match args.seed {
        Some(seed) => CpuBot::new(StdRng::seed_from_u64(seed.rotate_left(17))),
        None => CpuBot::new(StdRng::from_entropy()),
    };

    game.start()?;
    while let Some(seat) = game.current_seat() {
        let outcome = match seat {
            Seat::Human => tick(&mut game, &mut human)?,
            Seat::Cpu => {
                if let Some(delay) = game.observer().pending_delay {
                    thread::sleep(delay);
                }
                tick(&mut game, &mut cpu)?
            }
        };
        if outcome == Tick::Stuck {
            println!("\n{seat} cannot continue. Final table:");
            println!("{}", render_state(&game.state_view(Seat::Human)));
            break;
        }
    }
    Ok(())
}
