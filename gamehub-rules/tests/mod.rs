use gamehub_rules::cards::{Rank, Suit, hand_total};
use gamehub_rules::connect_four::{ConnectFour, Disc, ROWS};
use gamehub_rules::memory::{Flip, MemoryBoard, Resolution, SYMBOLS};
use gamehub_rules::rps::{Hand, RoundResult, Tally, judge};
use gamehub_rules::snake::{Point, Snake, Step};
use gamehub_rules::tictactoe::{LINES, PREFERENCE};
use gamehub_rules::whack::{Tick, WhackAMole};
use gamehub_rules::{
    Blackjack, BoardState, Card, Deck, Direction, GuessError, GuessOutcome, HandOutcome, Mark,
    NumberGuess, Placement, TicTacToe, TileGrid,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn card(n: u8) -> Card {
    Card::new(Suit::Clubs, Rank::new(n).unwrap())
}

fn tile_count(grid: &TileGrid) -> usize {
    grid.rows().iter().flatten().filter(|&&v| v != 0).count()
}

// ============================================================================
// Direction Tests
// ============================================================================

#[test]
fn test_direction_from_arrow_keys() {
    assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
    assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
    assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
}

#[test]
fn test_direction_from_wasd_any_case() {
    assert_eq!(Direction::from_key("w"), Some(Direction::Up));
    assert_eq!(Direction::from_key("A"), Some(Direction::Left));
    assert_eq!(Direction::from_key("s"), Some(Direction::Down));
    assert_eq!(Direction::from_key("D"), Some(Direction::Right));
}

#[test]
fn test_direction_unknown_key() {
    assert_eq!(Direction::from_key("Enter"), None);
    assert_eq!(Direction::from_key(""), None);
}

// ============================================================================
// TileGrid Tests
// ============================================================================

#[test]
fn test_new_grid_has_two_small_tiles() {
    let grid = TileGrid::new(&mut rng());
    assert_eq!(tile_count(&grid), 2);
    assert!(grid
        .rows()
        .iter()
        .flatten()
        .all(|&v| v == 0 || v == 2 || v == 4));
    assert_eq!(grid.score(), 0);
}

#[test]
fn test_pair_merges_left_and_scores() {
    let mut grid = TileGrid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let report = grid.slide(Direction::Left);
    assert!(report.changed);
    assert_eq!(report.gained, 4);
    assert_eq!(grid.rows()[0], [4, 0, 0, 0]);
    assert_eq!(grid.score(), 4);
}

#[test]
fn test_pair_merge_left_with_spawn() {
    let mut grid = TileGrid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let report = grid.apply_move(Direction::Left, &mut rng());
    assert!(report.changed);
    assert_eq!(grid.rows()[0][0], 4);
    assert_eq!(grid.score(), 4);
    // merged tile + exactly one spawned tile
    assert_eq!(tile_count(&grid), 2);
}

#[test]
fn test_four_equal_tiles_merge_once_each() {
    let mut grid = TileGrid::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let report = grid.slide(Direction::Left);
    assert_eq!(grid.rows()[0], [4, 4, 0, 0]);
    assert_eq!(report.gained, 8);

    grid.slide(Direction::Left);
    assert_eq!(grid.rows()[0], [8, 0, 0, 0]);
    assert_eq!(grid.score(), 16);
}

#[test]
fn test_oversized_tiles_are_cleared() {
    let mut grid = TileGrid::from_rows([[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(grid.rows()[0], [0, 0, 0, 0]);

    let report = grid.slide(Direction::Left);
    assert!(!report.changed);
    assert_eq!(grid.score(), 0);
}

#[test]
fn test_largest_tiles_still_merge() {
    let max = gamehub_rules::tiles::MAX_TILE;
    let mut grid = TileGrid::from_rows([[max, max, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let report = grid.slide(Direction::Left);
    assert_eq!(grid.rows()[0], [max * 2, 0, 0, 0]);
    assert_eq!(report.gained, u64::from(max) * 2);
    assert!(grid.rows().iter().flatten().all(|&v| v == 0 || v.is_power_of_two()));
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let mut grid = TileGrid::from_rows([[4, 4, 8, 0], [0; 4], [0; 4], [0; 4]]);
    grid.slide(Direction::Left);
    assert_eq!(grid.rows()[0], [8, 8, 0, 0]);
}

#[test]
fn test_right_merges_pair_nearest_right_edge() {
    let mut grid = TileGrid::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
    grid.slide(Direction::Right);
    assert_eq!(grid.rows()[0], [0, 0, 2, 4]);
}

#[test]
fn test_up_and_down_work_on_columns() {
    let rows = [[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]];

    let mut up = TileGrid::from_rows(rows);
    up.slide(Direction::Up);
    let col: Vec<u32> = up.rows().iter().map(|r| r[0]).collect();
    assert_eq!(col, vec![4, 8, 0, 0]);

    let mut down = TileGrid::from_rows(rows);
    down.slide(Direction::Down);
    let col: Vec<u32> = down.rows().iter().map(|r| r[0]).collect();
    assert_eq!(col, vec![0, 0, 4, 8]);
}

#[test]
fn test_unchanged_move_spawns_nothing_and_keeps_score() {
    let rows = [[2, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]];
    let mut rng = rng();
    for dir in [Direction::Left, Direction::Up] {
        let mut grid = TileGrid::from_rows(rows);
        let before = grid.clone();
        let report = grid.apply_move(dir, &mut rng);
        assert!(!report.changed);
        assert_eq!(report.gained, 0);
        assert_eq!(grid, before);
        assert_eq!(grid.score(), 0);
    }
}

#[test]
fn test_changed_move_spawns_exactly_one_tile() {
    let mut rng = rng();
    let mut grid = TileGrid::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let report = grid.apply_move(Direction::Left, &mut rng);
    assert!(report.changed);
    assert_eq!(tile_count(&grid), 2);
}

#[test]
fn test_goal_fires_once() {
    let mut rng = rng();
    let mut grid = TileGrid::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let first = grid.apply_move(Direction::Left, &mut rng);
    assert!(first.reached_goal);
    assert!(grid.has_won());
    assert_eq!(grid.highest_tile(), 2048);

    let second = grid.apply_move(Direction::Right, &mut rng);
    assert!(second.changed);
    assert!(!second.reached_goal);
    assert!(grid.has_won());
}

#[test]
fn test_stuck_grid() {
    let stuck = TileGrid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(stuck.is_stuck());

    let open = TileGrid::from_rows([[2, 2, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!open.is_stuck());

    let sparse = TileGrid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert!(!sparse.is_stuck());
}

#[test]
fn test_spawn_odds_favour_twos() {
    let mut rng = rng();
    let mut fours = 0;
    for _ in 0..1000 {
        let mut grid = TileGrid::empty();
        if let Some((r, c)) = grid.spawn_tile(&mut rng) {
            if grid.rows()[r][c] == 4 {
                fours += 1;
            }
        }
    }
    assert!((40..=160).contains(&fours), "fours = {}", fours);
}

#[test]
fn test_from_rows_drops_invalid_values() {
    let grid = TileGrid::from_rows([[3, 1, 8, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(grid.rows()[0], [0, 0, 8, 0]);
}

#[test]
fn test_values_stay_powers_of_two_over_a_game() {
    let mut rng = rng();
    let mut grid = TileGrid::new(&mut rng);
    for i in 0..200 {
        grid.apply_move(Direction::ALL[i % 4], &mut rng);
        assert!(grid
            .rows()
            .iter()
            .flatten()
            .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));
    }
}

// ============================================================================
// TicTacToe Tests
// ============================================================================

#[test]
fn test_x_wins_top_row() {
    let mut game = TicTacToe::new();
    assert_eq!(game.place(0), Placement::Continue { next: Mark::O });
    assert_eq!(game.place(3), Placement::Continue { next: Mark::X });
    game.place(1);
    game.place(4);
    assert_eq!(game.place(2), Placement::Won(Mark::X));
    assert_eq!(game.state(), BoardState::Won(Mark::X));
    assert_eq!(game.winner(), Some(Mark::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = TicTacToe::new();
    let mut last = Placement::Ignored;
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        last = game.place(cell);
    }
    assert_eq!(last, Placement::Draw);
    assert_eq!(game.state(), BoardState::Draw);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_check_win_only_for_line_owner() {
    for line in LINES {
        let mut cells = [None; 9];
        for &i in &line {
            cells[i] = Some(Mark::X);
        }
        for i in (0..9).filter(|i| !line.contains(i)).take(2) {
            cells[i] = Some(Mark::O);
        }
        let board = TicTacToe::from_cells(cells, Mark::O);
        assert!(board.check_win(Mark::X), "line {:?}", line);
        assert!(!board.check_win(Mark::O), "line {:?}", line);
        assert_eq!(board.state(), BoardState::Won(Mark::X));
    }
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut game = TicTacToe::new();
    game.place(4);
    let before = game.clone();
    assert_eq!(game.place(4), Placement::Ignored);
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_cell_is_ignored() {
    let mut game = TicTacToe::new();
    assert_eq!(game.place(9), Placement::Ignored);
    assert_eq!(game.current(), Mark::X);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = TicTacToe::new();
    for cell in [0, 3, 1, 4, 2] {
        game.place(cell);
    }
    let before = game.clone();
    assert_eq!(game.place(8), Placement::Ignored);
    assert_eq!(game, before);
    assert_eq!(game.suggest_move(Mark::O), None);
}

#[test]
fn test_opponent_blocks_every_single_threat() {
    for line in LINES {
        for &gap in &line {
            let mut cells = [None; 9];
            for &i in line.iter().filter(|&&i| i != gap) {
                cells[i] = Some(Mark::X);
            }
            let o_cell = PREFERENCE
                .iter()
                .copied()
                .find(|i| !line.contains(i))
                .unwrap();
            cells[o_cell] = Some(Mark::O);

            let board = TicTacToe::from_cells(cells, Mark::O);
            assert_eq!(
                board.suggest_move(Mark::O),
                Some(gap),
                "line {:?} gap {}",
                line,
                gap
            );
        }
    }
}

#[test]
fn test_opponent_prefers_winning_over_blocking() {
    let mut cells = [None; 9];
    cells[0] = Some(Mark::X);
    cells[1] = Some(Mark::X);
    cells[3] = Some(Mark::O);
    cells[4] = Some(Mark::O);
    let board = TicTacToe::from_cells(cells, Mark::O);
    assert_eq!(board.suggest_move(Mark::O), Some(5));
}

#[test]
fn test_opponent_preference_order() {
    let mut game = TicTacToe::new();
    assert_eq!(game.suggest_move(Mark::O), Some(4));
    game.place(4);
    assert_eq!(game.suggest_move(Mark::O), Some(0));
}

#[test]
fn test_reset_clears_board() {
    let mut game = TicTacToe::new();
    game.place(0);
    game.reset();
    assert!(game.cells().iter().all(Option::is_none));
    assert_eq!(game.current(), Mark::X);
    assert_eq!(game.state(), BoardState::InProgress);
}

// ============================================================================
// Blackjack Tests
// ============================================================================

#[test]
fn test_hand_totals_soften_aces() {
    assert_eq!(hand_total(&[card(1), card(13)]), 21);
    assert_eq!(hand_total(&[card(1), card(1), card(9)]), 21);
    assert_eq!(hand_total(&[card(1), card(1)]), 12);
    assert_eq!(hand_total(&[card(13), card(12), card(1)]), 21);
    assert_eq!(hand_total(&[card(13), card(12), card(2)]), 22);
}

#[test]
fn test_dealer_draws_on_sixteen() {
    let deck = Deck::from_cards(vec![card(2), card(5)]);
    let mut game = Blackjack::with_hands(deck, vec![card(10), card(9)], vec![card(10), card(6)]);
    let outcome = game.stand(&mut rng());
    assert!(game.dealer_hand().len() >= 3);
    assert_eq!(game.dealer_total(), 21);
    assert_eq!(outcome, Some(HandOutcome::DealerWins));
}

#[test]
fn test_dealer_stops_on_seventeen() {
    let deck = Deck::from_cards(vec![card(2)]);
    let mut game = Blackjack::with_hands(deck, vec![card(10), card(8)], vec![card(10), card(7)]);
    let outcome = game.stand(&mut rng());
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(outcome, Some(HandOutcome::PlayerWins));
    assert_eq!(HandOutcome::PlayerWins.award(), 25);
}

#[test]
fn test_dealer_bust_pays_fifty() {
    let deck = Deck::from_cards(vec![card(13)]);
    let mut game = Blackjack::with_hands(deck, vec![card(10), card(2)], vec![card(10), card(6)]);
    let outcome = game.stand(&mut rng()).unwrap();
    assert_eq!(outcome, HandOutcome::DealerBust);
    assert_eq!(outcome.award(), 50);
}

#[test]
fn test_push_pays_ten() {
    let deck = Deck::from_cards(vec![]);
    let mut game = Blackjack::with_hands(deck, vec![card(10), card(8)], vec![card(10), card(8)]);
    let outcome = game.stand(&mut rng()).unwrap();
    assert_eq!(outcome, HandOutcome::Push);
    assert_eq!(outcome.award(), 10);
}

#[test]
fn test_player_bust_ends_hand() {
    let deck = Deck::from_cards(vec![card(5)]);
    let mut game = Blackjack::with_hands(deck, vec![card(13), card(12)], vec![card(10), card(7)]);
    assert_eq!(game.hit(&mut rng()), Some(HandOutcome::PlayerBust));
    assert!(game.is_over());
    assert_eq!(game.stand(&mut rng()), None);
    assert_eq!(game.hit(&mut rng()), None);
    assert_eq!(game.player_hand().len(), 3);
}

#[test]
fn test_new_hand_deals_two_each() {
    let game = Blackjack::new(&mut rng());
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.is_over());
}

#[test]
fn test_empty_deck_reshuffles() {
    let mut deck = Deck::from_cards(vec![]);
    let _ = deck.draw(&mut rng());
    assert_eq!(deck.len(), 51);
}

#[test]
fn test_card_display() {
    assert_eq!(Card::new(Suit::Hearts, Rank::ACE).to_string(), "A♥");
    assert_eq!(Card::new(Suit::Spades, Rank::KING).to_string(), "K♠");
    assert_eq!(card(10).to_string(), "10♣");
}

// ============================================================================
// Snake Tests
// ============================================================================

#[test]
fn test_snake_idle_without_heading() {
    let mut snake = Snake::from_parts(vec![Point::new(10, 10)], Point::new(0, 0));
    assert_eq!(snake.step(&mut rng()), Step::Idle);
    assert_eq!(snake.head(), Some(Point::new(10, 10)));
}

#[test]
fn test_snake_moves_along_heading() {
    let mut snake = Snake::from_parts(vec![Point::new(10, 10)], Point::new(0, 0));
    assert!(snake.turn(Direction::Right));
    assert_eq!(snake.step(&mut rng()), Step::Moved);
    assert_eq!(snake.head(), Some(Point::new(11, 10)));
    assert_eq!(snake.len(), 1);
}

#[test]
fn test_snake_grows_on_food() {
    let mut snake = Snake::from_parts(vec![Point::new(10, 10)], Point::new(11, 10));
    snake.turn(Direction::Right);
    assert_eq!(snake.step(&mut rng()), Step::Ate);
    assert_eq!(snake.len(), 2);
    assert!(snake.body().all(|p| *p != snake.food()));
}

#[test]
fn test_snake_crashes_into_wall() {
    let mut snake = Snake::from_parts(vec![Point::new(19, 5)], Point::new(0, 0));
    snake.turn(Direction::Right);
    assert_eq!(snake.step(&mut rng()), Step::Crashed);
    assert!(!snake.is_alive());
    assert_eq!(snake.step(&mut rng()), Step::Idle);
    assert!(!snake.turn(Direction::Up));
}

#[test]
fn test_snake_crashes_into_itself() {
    let body = vec![
        Point::new(5, 5),
        Point::new(6, 5),
        Point::new(6, 6),
        Point::new(5, 6),
        Point::new(4, 6),
    ];
    let mut snake = Snake::from_parts(body, Point::new(0, 0));
    snake.turn(Direction::Down);
    assert_eq!(snake.step(&mut rng()), Step::Crashed);
}

#[test]
fn test_snake_ignores_turns_on_same_axis() {
    let mut snake = Snake::from_parts(vec![Point::new(10, 10)], Point::new(0, 0));
    snake.turn(Direction::Right);
    assert!(!snake.turn(Direction::Left));
    assert_eq!(snake.heading(), Some(Direction::Right));
    assert!(snake.turn(Direction::Up));
    assert_eq!(snake.heading(), Some(Direction::Up));
}

// ============================================================================
// Memory Tests
// ============================================================================

#[test]
fn test_memory_match_flow() {
    let mut board = MemoryBoard::from_cards(vec![0, 0, 1, 1]);
    assert_eq!(board.flip(0), Flip::First);
    assert_eq!(board.flip(0), Flip::Ignored);
    assert_eq!(board.flip(1), Flip::Second);
    assert_eq!(board.flip(2), Flip::Ignored);
    assert_eq!(board.resolve(), Resolution::Matched { complete: false });
    assert_eq!(board.pairs_found(), 1);
    assert_eq!(board.moves(), 1);

    board.flip(2);
    board.flip(3);
    assert_eq!(board.resolve(), Resolution::Matched { complete: true });
    assert!(board.is_complete());
    assert_eq!(board.completion_bonus(), 480);
}

#[test]
fn test_memory_miss_hides_cards() {
    let mut board = MemoryBoard::from_cards(vec![0, 1, 0, 1]);
    board.flip(0);
    board.flip(1);
    assert!(board.is_visible(0) && board.is_visible(1));
    assert_eq!(board.resolve(), Resolution::Missed);
    assert!(!board.is_visible(0));
    assert!(!board.is_visible(1));
    assert_eq!(board.resolve(), Resolution::Nothing);
}

#[test]
fn test_memory_matched_card_cannot_flip() {
    let mut board = MemoryBoard::from_cards(vec![0, 0, 1, 1]);
    board.flip(0);
    board.flip(1);
    board.resolve();
    assert_eq!(board.flip(0), Flip::Ignored);
    assert_eq!(board.flip(10), Flip::Ignored);
}

#[test]
fn test_memory_new_board_has_every_pair() {
    let board = MemoryBoard::new(&mut rng());
    assert_eq!(board.len(), 16);
    for symbol in SYMBOLS {
        let count = (0..board.len())
            .filter(|&i| board.symbol(i) == Some(symbol))
            .count();
        assert_eq!(count, 2, "symbol {}", symbol);
    }
}

#[test]
fn test_memory_bonus_floors_at_zero() {
    let mut board = MemoryBoard::from_cards(vec![0, 1, 0, 1]);
    for _ in 0..60 {
        board.flip(0);
        board.flip(1);
        board.resolve();
    }
    assert_eq!(board.completion_bonus(), 0);
}

// ============================================================================
// Number Guess Tests
// ============================================================================

#[test]
fn test_guess_rejects_malformed_input() {
    let mut game = NumberGuess::with_target(42);
    assert!(matches!(game.guess("abc"), Err(GuessError::NotANumber(_))));
    assert!(matches!(game.guess(""), Err(GuessError::NotANumber(_))));
    assert_eq!(game.guess("0"), Err(GuessError::OutOfRange(0)));
    assert_eq!(game.guess("101"), Err(GuessError::OutOfRange(101)));
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_guess_error_message_is_user_facing() {
    let err = NumberGuess::parse("seven").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a number between 1 and 100");
}

#[test]
fn test_guess_hints_then_correct() {
    let mut game = NumberGuess::with_target(42);
    assert_eq!(game.guess("10"), Ok(GuessOutcome::TooLow));
    assert_eq!(game.guess(" 90 "), Ok(GuessOutcome::TooHigh));
    assert_eq!(
        game.guess("42"),
        Ok(GuessOutcome::Correct {
            attempts: 3,
            award: 70
        })
    );
    assert!(game.is_finished());
    assert_eq!(game.guess("42"), Ok(GuessOutcome::Ignored));
}

#[test]
fn test_guess_runs_out_of_attempts() {
    let mut game = NumberGuess::with_target(42);
    for _ in 0..9 {
        assert_eq!(game.guess("1"), Ok(GuessOutcome::TooLow));
    }
    assert_eq!(
        game.guess("1"),
        Ok(GuessOutcome::OutOfAttempts { target: 42 })
    );
    assert!(game.is_finished());
}

#[test]
fn test_guess_award_floor() {
    let mut game = NumberGuess::with_target(42);
    for _ in 0..9 {
        game.guess("99").unwrap();
    }
    assert_eq!(
        game.guess("42"),
        Ok(GuessOutcome::Correct {
            attempts: 10,
            award: 10
        })
    );
}

// ============================================================================
// Rock Paper Scissors Tests
// ============================================================================

#[test]
fn test_rps_judge() {
    assert_eq!(judge(Hand::Rock, Hand::Scissors), RoundResult::Win);
    assert_eq!(judge(Hand::Paper, Hand::Rock), RoundResult::Win);
    assert_eq!(judge(Hand::Scissors, Hand::Paper), RoundResult::Win);
    assert_eq!(judge(Hand::Rock, Hand::Paper), RoundResult::Lose);
    for hand in Hand::ALL {
        assert_eq!(judge(hand, hand), RoundResult::Tie);
    }
}

#[test]
fn test_rps_tally() {
    let mut tally = Tally::default();
    tally.play(Hand::Rock, Hand::Scissors);
    tally.play(Hand::Rock, Hand::Paper);
    tally.play(Hand::Rock, Hand::Rock);
    assert_eq!(tally.player, 1);
    assert_eq!(tally.computer, 1);
    assert_eq!(
        tally.last,
        Some((Hand::Rock, Hand::Rock, RoundResult::Tie))
    );
}

#[test]
fn test_rps_parse() {
    assert_eq!(Hand::parse("Rock"), Some(Hand::Rock));
    assert_eq!(Hand::parse(" scissors "), Some(Hand::Scissors));
    assert_eq!(Hand::parse("lizard"), None);
}

// ============================================================================
// Connect Four Tests
// ============================================================================

#[test]
fn test_discs_stack_and_alternate() {
    let mut board = ConnectFour::new();
    assert_eq!(board.drop_disc(3), Some(ROWS - 1));
    assert_eq!(board.drop_disc(3), Some(ROWS - 2));
    assert_eq!(board.cells()[(ROWS - 1) * 7 + 3], Some(Disc::Red));
    assert_eq!(board.cells()[(ROWS - 2) * 7 + 3], Some(Disc::Yellow));
    assert_eq!(board.current(), Disc::Red);
}

#[test]
fn test_full_column_is_ignored() {
    let mut board = ConnectFour::new();
    for _ in 0..ROWS {
        assert!(board.drop_disc(0).is_some());
    }
    let current = board.current();
    assert_eq!(board.drop_disc(0), None);
    assert_eq!(board.current(), current);
    assert_eq!(board.drop_disc(7), None);
}

#[test]
fn test_column_of_clicked_cell() {
    assert_eq!(ConnectFour::column_of(0), 0);
    assert_eq!(ConnectFour::column_of(10), 3);
    assert_eq!(ConnectFour::column_of(41), 6);
}

// ============================================================================
// Whack-a-Mole Tests
// ============================================================================

#[test]
fn test_whack_idle_before_start() {
    let mut game = WhackAMole::default();
    assert_eq!(game.tick(&mut rng()), Tick::Idle);
    assert!(!game.whack(0));
}

#[test]
fn test_whack_hit_and_miss() {
    let mut rng = rng();
    let mut game = WhackAMole::default();
    game.start(30, &mut rng);
    let hole = game.active().unwrap();
    assert!(!game.whack((hole + 1) % 9));
    assert!(game.whack(hole));
    assert_eq!(game.hits(), 1);
    assert!(!game.whack(hole));
}

#[test]
fn test_whack_clock_runs_out() {
    let mut rng = rng();
    let mut game = WhackAMole::default();
    game.start(3, &mut rng);
    assert_eq!(game.tick(&mut rng), Tick::Running { time_left: 2 });
    assert_eq!(game.tick(&mut rng), Tick::Running { time_left: 1 });
    assert_eq!(game.tick(&mut rng), Tick::Finished { hits: 0 });
    assert!(!game.is_running());
    assert_eq!(game.tick(&mut rng), Tick::Idle);
}
