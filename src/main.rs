use phrase_wheel::cli::{CliInterface, parse_cli};
use phrase_wheel::logging;
use phrase_wheel::tui::TuiInterface;
use phrase_wheel::{PhraseGenerator, RoundEngine, game_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init();

    let generator = match cli.seed {
        Some(seed) => PhraseGenerator::seeded(seed),
        None => PhraseGenerator::from_entropy(),
    };
    let mut engine = RoundEngine::new(generator);

    let state = if cli.tui {
        match TuiInterface::new(cli.spin_delay()) {
            Ok(mut ui) => game_loop(&mut engine, &mut ui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let stdin = io::stdin();
        let ui = CliInterface::new(stdin.lock(), io::stdout(), cli.spin_delay());
        game_loop(&mut engine, ui)
    };

    log::info!("game finished in state {state:?}");
    ExitCode::SUCCESS
}
