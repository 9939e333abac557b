// Integration tests for solving complete boards
use pet_detective::algorithms::bfs::BreadthFirstFinder;
use pet_detective::models::{MoveAction, ObjectInfo, Roads};
use pet_detective::utils::distance::DistanceMatrix;
use pet_detective::utils::init_board::{init_board, load_board, load_raw_board};
use pet_detective::{
    finder_for, solve_batch, solve_board, Board, CarMove, DijkstraFinder, RawBoard,
    SolutionFinder, SolverConfig, SolverError, Strategy,
};
use rstest::{fixture, rstest};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

// (name, down, up, left, right), the order boards are recognised in
fn object(name: &str, down: u8, up: u8, left: u8, right: u8) -> ObjectInfo {
    ObjectInfo::new(name, Roads::new(up == 1, down == 1, left == 1, right == 1))
}

#[fixture]
fn board_2x2() -> RawBoard {
    RawBoard::new(
        2,
        2,
        vec![
            vec![object("pHusky", 1, 0, 0, 1), object("cRight", 0, 1, 0, 1)],
            vec![object("dot", 1, 0, 1, 0), object("hHusky", 0, 1, 1, 0)],
        ],
    )
}

#[fixture]
fn board_4x6() -> RawBoard {
    RawBoard::new(
        4,
        6,
        vec![
            vec![
                object("hHusky", 1, 0, 0, 1),
                object("pCockatiel", 1, 1, 0, 1),
                object("pHedgehog", 1, 1, 0, 0),
                object("pTabby", 1, 1, 0, 0),
                object("hFerret", 1, 1, 0, 1),
                object("dot", 0, 1, 0, 1),
            ],
            vec![
                object("hSiamese", 0, 0, 1, 1),
                object("hChameleon", 1, 0, 1, 1),
                object("dot", 0, 1, 0, 1),
                object("pSiamese", 1, 0, 0, 1),
                object("dot", 1, 1, 1, 0),
                object("pChameleon", 0, 1, 1, 1),
            ],
            vec![
                object("hCockatiel", 1, 0, 1, 1),
                object("hHedgehog", 0, 1, 1, 1),
                object("cRight", 1, 0, 1, 1),
                object("pFerret", 1, 1, 1, 0),
                object("pHusky", 1, 1, 0, 1),
                object("hTurtle", 0, 1, 1, 1),
            ],
            vec![
                object("hDachsund", 1, 0, 1, 0),
                object("dot", 1, 1, 1, 0),
                object("pTurtle", 1, 1, 1, 0),
                object("pDachsund", 1, 1, 0, 0),
                object("hTabby", 1, 1, 1, 0),
                object("dot", 0, 1, 1, 0),
            ],
        ],
    )
}

fn solve_with(board: &Board, config: &SolverConfig) -> (Option<u32>, Vec<CarMove>) {
    let mut finder = DijkstraFinder::new(board, config);
    let total = finder.solve();
    (total, finder.solution().moves)
}

#[rstest]
fn test_two_by_two_board(board_2x2: RawBoard) {
    let board = init_board(&board_2x2).unwrap();
    assert_eq!(board.car(), 1);

    let (total, moves) = solve_with(&board, &SolverConfig::default());
    assert_eq!(total, Some(3));
    assert_eq!(
        moves,
        vec![
            CarMove::new(1, MoveAction::Init, 0),
            CarMove::new(0, MoveAction::Pickup, 1),
            CarMove::new(3, MoveAction::Deliver, 3),
        ]
    );
}

#[rstest]
fn test_four_by_six_board_parsing(board_4x6: RawBoard) {
    let board = init_board(&board_4x6).unwrap();
    assert_eq!(board.car(), 14);
    assert_eq!(board.pet_count(), 9);

    let names: Vec<&str> = board.pets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Husky",
            "Cockatiel",
            "Hedgehog",
            "Tabby",
            "Ferret",
            "Siamese",
            "Chameleon",
            "Turtle",
            "Dachsund"
        ]
    );

    let husky = board.pet(0).unwrap();
    assert_eq!((husky.pickup, husky.dropoff), (16, 0));
    let tabby = board.pet(3).unwrap();
    assert_eq!((tabby.pickup, tabby.dropoff), (3, 22));
}

#[rstest]
fn test_four_by_six_distances(board_4x6: RawBoard) {
    let board = init_board(&board_4x6).unwrap();
    let matrix = DistanceMatrix::from_board(&board);
    assert_eq!(matrix.size(), 24);
    assert_eq!(matrix.get(16, 0), Some(6));
    assert_eq!(matrix.get(0, 16), Some(6));
    assert_eq!(matrix.get(3, 22), Some(6));
    assert_eq!(matrix.get(14, 16), Some(2));
}

#[rstest]
fn test_four_by_six_optimal_route(board_4x6: RawBoard) {
    let board = init_board(&board_4x6).unwrap();
    let (total, moves) = solve_with(&board, &SolverConfig::default());
    assert_eq!(total, Some(26));

    let cells: Vec<usize> = moves.iter().map(|m| m.cell).collect();
    assert_eq!(
        cells,
        vec![14, 20, 15, 9, 4, 3, 11, 17, 16, 22, 21, 18, 6, 0, 1, 2, 7, 13, 12]
    );
    assert_eq!(moves.len(), 2 * board.pet_count() + 1);
    assert_eq!(moves.last().map(|m| m.cumulative_distance), Some(26));

    // Husky is picked up at 16 strictly before it is delivered at 0
    let pickup = moves.iter().position(|m| m.cell == 16).unwrap();
    let delivery = moves.iter().position(|m| m.cell == 0).unwrap();
    assert!(pickup < delivery);
    assert_eq!(moves[pickup].action, MoveAction::Pickup);
    assert_eq!(moves[delivery].action, MoveAction::Deliver);
}

#[rstest]
#[case(4, 26)]
#[case(2, 38)]
#[case(1, 58)]
fn test_four_by_six_capacity(board_4x6: RawBoard, #[case] capacity: u8, #[case] expected: u32) {
    let board = init_board(&board_4x6).unwrap();
    let (total, moves) = solve_with(&board, &SolverConfig::with_capacity(capacity));
    assert_eq!(total, Some(expected));

    // Replaying the moves never overfills the car
    let mut carried = 0usize;
    for m in &moves {
        match m.action {
            MoveAction::Pickup => carried += 1,
            MoveAction::Deliver => carried -= 1,
            MoveAction::Init => {}
        }
        assert!(carried <= capacity as usize);
    }
    assert_eq!(carried, 0);
}

#[rstest]
fn test_solve_is_deterministic(board_4x6: RawBoard) {
    let config = SolverConfig::default();
    let first = solve_board(&board_4x6, &config).unwrap();
    for _ in 0..3 {
        assert_eq!(solve_board(&board_4x6, &config).unwrap(), first);
    }
}

#[rstest]
fn test_finder_can_be_reused(board_2x2: RawBoard) {
    let board = init_board(&board_2x2).unwrap();
    let mut finder = DijkstraFinder::new(&board, &SolverConfig::default());
    assert_eq!(finder.solve(), Some(3));
    let first = finder.solution();
    assert_eq!(finder.solve(), Some(3));
    assert_eq!(finder.solution(), first);
}

#[test]
fn test_disconnected_board_has_no_solution() {
    // The house sits on a cell without roads
    let raw = RawBoard::new(
        1,
        3,
        vec![vec![
            object("cDown", 1, 0, 0, 0),
            object("pHusky", 0, 1, 0, 0),
            object("hHusky", 0, 0, 0, 0),
        ]],
    );
    let board = init_board(&raw).unwrap();
    let matrix = DistanceMatrix::from_board(&board);
    assert_eq!(matrix.get(1, 2), None);

    let solution = solve_board(&raw, &SolverConfig::default()).unwrap();
    assert_eq!(solution.total_distance, None);
    assert!(solution.moves.is_empty());
    assert!(!solution.is_solved());
}

#[test]
fn test_board_without_pets() {
    let raw = RawBoard::new(
        1,
        2,
        vec![vec![object("cDown", 1, 0, 0, 0), object("dot", 0, 1, 0, 0)]],
    );
    let solution = solve_board(&raw, &SolverConfig::default()).unwrap();
    assert_eq!(solution.total_distance, Some(0));
    assert_eq!(solution.moves, vec![CarMove::new(0, MoveAction::Init, 0)]);
}

#[test]
fn test_too_many_pets_is_an_error() {
    let mut column = vec![object("cDown", 1, 0, 0, 0)];
    for i in 0..13 {
        column.push(object(&format!("pPet{}", i), 1, 1, 0, 0));
        column.push(object(&format!("hPet{}", i), 1, 1, 0, 0));
    }
    let rows = column.len();
    let raw = RawBoard::new(1, rows, vec![column]);

    let err = solve_board(&raw, &SolverConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SolverError::PetCapacityExceeded { found: 13, max: 12 }
    ));
}

#[test]
fn test_malformed_board_is_an_error() {
    let raw = RawBoard::new(
        1,
        2,
        vec![vec![object("pHusky", 1, 0, 0, 0), object("hHusky", 0, 1, 0, 0)]],
    );
    assert!(matches!(
        solve_board(&raw, &SolverConfig::default()),
        Err(SolverError::MalformedBoard { .. })
    ));
}

#[rstest]
fn test_cancellation_returns_no_solution(board_4x6: RawBoard) {
    let board = init_board(&board_4x6).unwrap();
    let flag = Arc::new(AtomicBool::new(false));
    let mut finder =
        DijkstraFinder::new(&board, &SolverConfig::default()).with_cancellation(flag.clone());

    flag.store(true, Ordering::Relaxed);
    assert_eq!(finder.solve(), None);
    assert!(finder.stats().cancelled);
    assert_eq!(finder.solution().total_distance, None);

    // Clearing the flag lets the next solve finish
    flag.store(false, Ordering::Relaxed);
    assert_eq!(finder.solve(), Some(26));
    assert!(!finder.stats().cancelled);
}

#[rstest]
fn test_breadth_first_slot_reports_no_solution(board_2x2: RawBoard) {
    let board = init_board(&board_2x2).unwrap();
    let config = SolverConfig::default().with_strategy(Strategy::BreadthFirst);

    let mut finder = BreadthFirstFinder::new(&board, &config);
    assert_eq!(finder.solve(), None);
    assert_eq!(finder.solution_moves_count(), None);
    assert!(finder.solution().moves.is_empty());

    let mut boxed = finder_for(&board, &config);
    assert_eq!(boxed.solve(), None);
}

#[rstest]
fn test_finder_for_dijkstra(board_2x2: RawBoard) {
    let board = init_board(&board_2x2).unwrap();
    let mut finder = finder_for(&board, &SolverConfig::default());
    assert_eq!(finder.solve(), Some(3));
    assert_eq!(finder.solution_moves_count(), Some(3));
}

#[rstest]
fn test_solve_batch_keeps_order(board_2x2: RawBoard, board_4x6: RawBoard) {
    let broken = RawBoard::new(1, 1, vec![vec![object("dot", 0, 0, 0, 0)]]);
    let results = solve_batch(&[board_4x6, broken, board_2x2], &SolverConfig::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().total_distance, Some(26));
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().total_distance, Some(3));
}

#[rstest]
fn test_detailed_moves_name_pets(board_4x6: RawBoard) {
    let board = init_board(&board_4x6).unwrap();
    let solution = solve_board(&board_4x6, &SolverConfig::default()).unwrap();
    let detailed = solution.detailed(&board);

    assert_eq!(detailed[0].pet_name, None);
    assert_eq!((detailed[0].column, detailed[0].row), (2, 2));
    // Cell 20 holds the turtle
    assert_eq!(detailed[1].pet_name.as_deref(), Some("Turtle"));
    assert!(detailed[1..].iter().all(|step| step.pet.is_some()));
}

#[test]
fn test_load_board_files() {
    let board = load_board(data_path("board_4x6.json")).unwrap();
    assert_eq!(board.pet_count(), 9);

    let raw = load_raw_board(data_path("board_2x2.json")).unwrap();
    let config = SolverConfig::from_json_file(data_path("capacity_2.json")).unwrap();
    assert_eq!(config.capacity, 2);
    assert_eq!(config.strategy, Strategy::Dijkstra);

    let solution = solve_board(&raw, &config).unwrap();
    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["total_distance"], 3);
    assert_eq!(json["moves"][1]["action"], "pickup");
}
