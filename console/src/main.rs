mod batch_runner;
mod broadcaster;
mod menu;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use broadcaster::ConsoleBroadcaster;
use menu::MenuChoice;
use tictactoe_common::config::get_config_manager;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{SessionError, TicTacToeSession};
use tictactoe_common::{log, log_error, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = match (&config.log_prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some("TicTacToe".to_string()),
        (None, false) => None,
    };
    logger::init_logger(prefix);

    let mut rng = SessionRng::from_optional_seed(config.random_seed);
    log!("Session seed: {}", rng.seed());

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        menu::print_menu();

        let Some(line) = input.next_line().await? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            println!("Unknown option '{}'", line.trim());
            continue;
        };

        match choice {
            MenuChoice::Quit => break,
            MenuChoice::Play(players) => {
                match TicTacToeSession::run(players, &mut input, &mut rng, &ConsoleBroadcaster).await {
                    Ok(result) => log!(
                        "Game finished: winner {:?}, {} moves",
                        result.winner,
                        result.move_count
                    ),
                    Err(SessionError::InputClosed) => break,
                    Err(e) => log_error!("Game aborted: {}", e),
                }
            }
            MenuChoice::Batch(mode) => {
                let batch_config = config.clone();
                let (returned_rng, outcome) = tokio::task::spawn_blocking(move || {
                    let outcome = batch_runner::run(mode, &batch_config, &mut rng);
                    (rng, outcome)
                })
                .await?;
                rng = returned_rng;

                if let Err(e) = outcome {
                    log_error!("Batch run failed: {}", e);
                }
            }
        }
    }

    log!("Bye");
    Ok(())
}
