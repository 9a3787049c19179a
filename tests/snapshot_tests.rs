use skirmish::{
    Board, CellView, Game, GameConfig, GameStatus, Orientation, Snapshot, GRID_SIZE,
};

#[test]
fn snapshot_tracks_cell_views() {
    let mut board = Board::new();
    board.place(2, 4, 4, Orientation::Vertical).unwrap();
    let mut game = Game::from_board(board, GameConfig::default());

    let fresh = game.snapshot();
    assert!(fresh
        .cells
        .iter()
        .flatten()
        .all(|v| *v == CellView::Untouched));
    assert_eq!(fresh.status, GameStatus::Playing);

    game.attack(0, 0).unwrap();
    game.attack(4, 4).unwrap();
    let mid = game.snapshot();
    assert_eq!(mid.cells[0][0], CellView::Miss);
    assert_eq!(mid.cells[4][4], CellView::Hit);
    // unhit ship cells stay hidden
    assert_eq!(mid.cells[5][4], CellView::Untouched);
    assert_eq!(mid.shots, 2);

    game.attack(5, 4).unwrap();
    let sunk = game.snapshot();
    assert_eq!(sunk.cells[4][4], CellView::Destroyed);
    assert_eq!(sunk.cells[5][4], CellView::Destroyed);
    assert_eq!(sunk.destroyed_ships, 1);
}

#[test]
fn snapshot_json_shape() {
    let mut board = Board::new();
    board.place(2, 0, 0, Orientation::Horizontal).unwrap();
    let mut game = Game::from_board(board, GameConfig::default());
    game.attack(0, 0).unwrap();

    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["status"], "playing");
    assert_eq!(value["cells"][0][0], "hit");
    assert_eq!(value["cells"][0][1], "untouched");
    assert_eq!(value["cells"].as_array().unwrap().len(), GRID_SIZE);

    let back: Snapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, game.snapshot());
}
