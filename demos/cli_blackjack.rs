//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Game, GameStatus, HandView, RoundOutcome, Suit};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        let balance = game.balance();
        if balance == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        let Some(bet) = prompt_u32(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.start_round(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while game.status() == GameStatus::Playing && !game.auto_stand_pending() {
            print_table(&game);

            println!("{}", format_actions(&game));
            let action = prompt_line("Action: ");

            let result = match action.as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if game.auto_stand_pending() {
            print_table(&game);
            println!("Doubled down; dealer plays in a moment...");
            thread::sleep(Game::AUTO_STAND_DELAY);
            if let Err(err) = game.resolve_auto_stand() {
                println!("Auto-stand error: {err}");
            }
        }

        if game.status() == GameStatus::RoundOver {
            print_table(&game);
            if let Some(outcome) = game.outcome() {
                println!("{}", describe_outcome(outcome));
            }
            println!("Balance: {}", game.balance());
        }

        game.reset();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u32(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let dealer = game.dealer_hand();
    println!("\nDealer: {} (value {})", format_hand(&dealer), dealer.value);

    let player = game.player_hand();
    println!("You:    {} (value {})", format_hand(&player), player.value);
    println!("Bet: {} | Balance: {}\n", game.bet(), game.balance());
}

fn format_actions(game: &Game) -> String {
    let mut parts = Vec::new();
    parts.push(format_action("hit", "h", true));
    parts.push(format_action("stand", "s", true));
    parts.push(format_action("double", "d", game.can_double()));
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn describe_outcome(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerBlackjack => "Blackjack! Pays 3:2.",
        RoundOutcome::DealerBlackjack => "Dealer has blackjack.",
        RoundOutcome::PlayerWin => "You win.",
        RoundOutcome::DealerWin => "Dealer wins.",
        RoundOutcome::Push => "Push. Stake returned.",
        RoundOutcome::PlayerBust => "Bust.",
    }
}

fn format_hand(hand: &HandView) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    hand.cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if card.hidden {
        return "??".to_string();
    }

    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
