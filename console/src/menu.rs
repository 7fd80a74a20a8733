use tictactoe_common::games::tictactoe::{BotType, PlayerKind, Players};
use tictactoe_common::simulation::{BATCH_GAME_COUNT, BatchMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Players),
    Batch(BatchMode),
    Quit,
}

impl MenuChoice {
    pub fn parse(text: &str) -> Option<Self> {
        let choice = match text.trim() {
            "1" => MenuChoice::Play(Players::new(PlayerKind::Human, PlayerKind::Human)),
            "2" => MenuChoice::Play(Players::new(
                PlayerKind::Human,
                PlayerKind::Bot(BotType::Random),
            )),
            "3" => MenuChoice::Play(Players::new(
                PlayerKind::Human,
                PlayerKind::Bot(BotType::Minimax),
            )),
            "4" => MenuChoice::Batch(BatchMode::RandomVsRandom),
            "5" => MenuChoice::Batch(BatchMode::MinimaxVsMinimax),
            "q" | "Q" | "quit" => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

pub fn print_menu() {
    println!();
    println!("Tic-tac-toe");
    println!("  1) Human vs human");
    println!("  2) Human vs random bot");
    println!("  3) Human vs minimax bot");
    println!("  4) Random bot vs random bot ({} games)", BATCH_GAME_COUNT);
    println!("  5) Minimax bot vs minimax bot ({} games)", BATCH_GAME_COUNT);
    println!("  q) Quit");
    println!("Choose an option:");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_modes() {
        assert_eq!(
            MenuChoice::parse("3\n"),
            Some(MenuChoice::Play(Players::new(
                PlayerKind::Human,
                PlayerKind::Bot(BotType::Minimax)
            )))
        );
        assert_eq!(
            MenuChoice::parse(" 1 "),
            Some(MenuChoice::Play(Players::new(PlayerKind::Human, PlayerKind::Human)))
        );
    }

    #[test]
    fn test_parse_batch_and_quit() {
        assert_eq!(
            MenuChoice::parse("4"),
            Some(MenuChoice::Batch(BatchMode::RandomVsRandom))
        );
        assert_eq!(
            MenuChoice::parse("5"),
            Some(MenuChoice::Batch(BatchMode::MinimaxVsMinimax))
        );
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
