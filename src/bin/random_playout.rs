use std::env;

use rand::prelude::*;

use chess_judge::board::PieceKind;
use chess_judge::{GameMediator, GameState, SelectedPromotion};

const DEFAULT_MAX_PLIES: usize = 200;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("usage: random_playout [seed] [max_plies]");
            return;
        }
        None => rand::thread_rng().gen(),
    };
    let max_plies = args
        .get(2)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameMediator::default();
    let mut plies = 0;

    while plies < max_plies {
        let moves = game.legal_moves();
        let Some(&(origin, destination)) = moves.choose(&mut rng) else {
            break;
        };
        if !game.move_piece(origin, destination) {
            eprintln!("move {origin} -> {destination} was rejected");
            return;
        }
        if let GameState::PendingPromotion(square) = game.state() {
            let kind = PieceKind::PROMOTION_CHOICES
                .choose(&mut rng)
                .copied()
                .unwrap_or(PieceKind::Queen);
            println!("promotion on {square}: {kind}");
            if !game.promote(SelectedPromotion::new(kind)) {
                eprintln!("promotion on {square} to {kind} was rejected");
                return;
            }
        }
        plies += 1;
    }

    println!("{}", game.board());
    println!("seed: {seed}");
    println!("plies: {plies}");
    println!("side_to_move: {}", game.current_turn());
    println!("in_check: {}", game.is_in_check());
    match game.outcome() {
        Some(outcome) => println!("outcome: {outcome}"),
        None => println!("outcome: none after {max_plies} plies"),
    }
}
