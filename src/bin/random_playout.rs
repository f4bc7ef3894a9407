use std::env;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use chess_planes::codec::constants::NUM_REPRESENTATION_PLANES;
use chess_planes::codec::{calc_action_mask, decode_actions, PositionHistory};
use chess_planes::game::Termination;
use chess_planes::utils::Color;
use chess_planes::Result;

const DEFAULT_NUM_GAMES: usize = 10;
const DEFAULT_MAX_PLIES: usize = 400;
const DEFAULT_SEED: u64 = 0;
const NUM_UNDO_PLIES: usize = 12;
const EXPECTED_REPRESENTATION_SHAPE: [i64; 3] = [NUM_REPRESENTATION_PLANES as i64, 8, 8];

#[derive(Default)]
struct PlayoutStats {
    plies: usize,
    checkmates: usize,
    draws: usize,
    unfinished: usize,
    representation_mismatches: usize,
    codec_mismatches: usize,
    encode_time: Duration,
}

fn parse_arg<T: FromStr>(args: &[String], position: usize, default: T) -> T {
    args.get(position)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}

/// Plays one game by picking uniformly among the decoded legal-move mask, then takes
/// back the last plies and checks the history against one rebuilt from scratch.
fn play_random_game(rng: &mut StdRng, max_plies: usize, stats: &mut PlayoutStats) -> Result<()> {
    let mut history = PositionHistory::new();

    for _ in 0..max_plies {
        if history.game().is_game_over() {
            break;
        }
        let color = history.side_to_move();
        let legal_moves = history.legal_moves();

        let start = Instant::now();
        let mask = calc_action_mask(&legal_moves, color)?;
        let candidates = decode_actions(&mask, color)?;
        let representation = history.get_representation();
        stats.encode_time += start.elapsed();

        if representation.size() != EXPECTED_REPRESENTATION_SHAPE || candidates.len() != legal_moves.len() {
            stats.codec_mismatches += 1;
        }

        let mv = match candidates.choose(rng) {
            Some(mv) => history.game().complete_promotion(*mv),
            None => break
        };
        history.push(mv)?;
        stats.plies += 1;
    }

    let (value, terminated) = history.game().value_and_terminated(Color::White);
    match history.game().termination() {
        Some(Termination::Checkmate) => stats.checkmates += 1,
        Some(_) => stats.draws += 1,
        None => stats.unfinished += 1
    }
    println!(
        "{} plies, termination: {:?}, value for white: {} (terminated: {})",
        history.game().ply_count(),
        history.game().termination(),
        value,
        terminated
    );

    for _ in 0..NUM_UNDO_PLIES.min(history.game().ply_count()) {
        history.undo()?;
    }
    let rebuilt = PositionHistory::from_game(history.game().clone());
    if !history.representation().equal(rebuilt.representation()) {
        stats.representation_mismatches += 1;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let num_games = parse_arg(&args, 1, DEFAULT_NUM_GAMES);
    let max_plies = parse_arg(&args, 2, DEFAULT_MAX_PLIES);
    let seed = parse_arg(&args, 3, DEFAULT_SEED);

    println!("Playing {} random games of at most {} plies (seed {})", num_games, max_plies, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = PlayoutStats::default();
    let start = Instant::now();

    for game_index in 0..num_games {
        print!("Game {}: ", game_index + 1);
        play_random_game(&mut rng, max_plies, &mut stats)?;
    }

    println!();
    println!("Total plies: {}", stats.plies);
    println!("Checkmates: {}, draws: {}, unfinished: {}", stats.checkmates, stats.draws, stats.unfinished);
    println!("Plies with a malformed representation or mask: {}", stats.codec_mismatches);
    println!("Representation mismatches after undo: {}", stats.representation_mismatches);
    println!("Time spent encoding: {:?} of {:?}", stats.encode_time, start.elapsed());
    if stats.plies > 0 {
        println!("Average encode time per ply: {:?}", stats.encode_time / stats.plies as u32);
    }
    Ok(())
}
