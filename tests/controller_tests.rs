use broadside::{
    draw_fleet, win_message, Controller, Coordinate, Fleet, GameConfig, GameError, GameState, GameStatus,
    GuessError, Renderer, ShotOutcome, Ship, TerminalRenderer, MSG_ALREADY_HIT, MSG_ALREADY_MISS,
    MSG_HIT, MSG_MISS, MSG_SUNK,
};
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Message(String),
    Hit(String),
    Miss(String),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Renderer for Recorder {
    fn show_message(&mut self, msg: &str) {
        self.calls.push(Call::Message(msg.to_owned()));
    }

    fn mark_hit(&mut self, at: Coordinate) {
        self.calls.push(Call::Hit(at.key()));
    }

    fn mark_miss(&mut self, at: Coordinate) {
        self.calls.push(Call::Miss(at.key()));
    }
}

fn msg(s: &str) -> Call {
    Call::Message(s.to_owned())
}

fn fixed_controller() -> Controller {
    let ships = [["30", "31", "32"], ["00", "10", "20"], ["46", "56", "66"]]
        .iter()
        .map(|keys| Ship::from_keys(keys, 7).unwrap())
        .collect();
    let config = GameConfig::default();
    let fleet = Fleet::from_ships(ships, &config).unwrap();
    Controller::from_state(GameState::with_fleet(config, fleet).unwrap())
}

#[test]
fn test_invalid_guess_does_not_count() {
    let mut controller = fixed_controller();
    let mut view = Recorder::default();

    let err = controller.submit("A", &mut view).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidGuessFormat(GuessError::WrongLength { len: 1 })
    );
    let err = controller.submit("H1", &mut view).unwrap_err();
    assert!(matches!(err, GameError::InvalidGuessFormat(_)));

    assert_eq!(controller.state().guesses(), 0);
    assert_eq!(
        view.calls,
        vec![
            msg("Please enter a letter + number like A3"),
            msg("That's off the board!"),
        ]
    );
}

#[test]
fn test_hit_miss_and_repeats_render() {
    let mut controller = fixed_controller();
    let mut view = Recorder::default();

    let turn = controller.submit("D0", &mut view).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Hit);
    controller.submit("d0", &mut view).unwrap();
    controller.submit("F5", &mut view).unwrap();
    controller.submit("F5", &mut view).unwrap();

    assert_eq!(
        view.calls,
        vec![
            Call::Hit("30".into()),
            msg(MSG_HIT),
            msg(MSG_ALREADY_HIT),
            Call::Miss("55".into()),
            msg(MSG_MISS),
            msg(MSG_ALREADY_MISS),
        ]
    );
    assert_eq!(controller.state().guesses(), 4);
}

#[test]
fn test_full_game_reports_win() {
    let mut controller = fixed_controller();
    let mut view = Recorder::default();

    for guess in ["D0", "D1", "A0", "B0", "C0", "E6", "F6"] {
        let turn = controller.submit(guess, &mut view).unwrap();
        assert_eq!(turn.status, GameStatus::InProgress);
    }
    view.calls.clear();

    let turn = controller.submit("D2", &mut view).unwrap();
    assert_eq!(turn.status, GameStatus::InProgress);
    assert_eq!(
        view.calls,
        vec![Call::Hit("32".into()), msg(MSG_HIT), msg(MSG_SUNK)]
    );
    view.calls.clear();

    let turn = controller.submit("G6", &mut view).unwrap();
    assert_eq!(turn.status, GameStatus::Won { guesses: 9 });
    assert_eq!(
        view.calls,
        vec![
            Call::Hit("66".into()),
            msg(MSG_HIT),
            msg(MSG_SUNK),
            msg("You sank all ships in 9 guesses!"),
        ]
    );
    assert_eq!(win_message(9), "You sank all ships in 9 guesses!");

    view.calls.clear();
    assert_eq!(
        controller.submit("A1", &mut view).unwrap_err(),
        GameError::GameOver
    );
    assert_eq!(controller.state().guesses(), 9);
    assert_eq!(view.calls.len(), 1);
}

#[test]
fn test_random_game_setup() {
    let mut rng = SmallRng::seed_from_u64(99);
    let controller = Controller::new(&mut rng, GameConfig::default()).unwrap();
    assert_eq!(controller.state().fleet().len(), 3);
    assert_eq!(controller.state().status(), GameStatus::InProgress);

    let bad = GameConfig {
        board_size: 11,
        ..GameConfig::default()
    };
    assert!(matches!(
        Controller::new(&mut rng, bad),
        Err(GameError::Config(_))
    ));

    let crowded = GameConfig {
        board_size: 3,
        num_ships: 4,
        ..GameConfig::default()
    };
    assert!(matches!(
        Controller::new(&mut rng, crowded),
        Err(GameError::Placement(_))
    ));
}

#[test]
fn test_terminal_renderer_draws_marks() {
    let mut controller = fixed_controller();
    let mut view = TerminalRenderer::new(7);

    controller.submit("D0", &mut view).unwrap();
    controller.submit("A1", &mut view).unwrap();
    assert_eq!(view.pending_messages(), &[MSG_HIT.to_owned(), MSG_MISS.to_owned()]);

    let mut out = Vec::new();
    view.draw(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "HIT!");
    assert_eq!(lines[1], "MISS!");
    assert_eq!(lines[2], "   0 1 2 3 4 5 6");
    assert_eq!(lines[3], "A  . o . . . . .");
    assert_eq!(lines[6], "D  X . . . . . .");
    assert!(view.pending_messages().is_empty());
}

#[test]
fn test_draw_fleet_shows_ships_hits_and_misses() {
    let mut controller = fixed_controller();
    let mut view = Recorder::default();
    controller.submit("D0", &mut view).unwrap();
    controller.submit("A1", &mut view).unwrap();

    let mut out = Vec::new();
    draw_fleet(&mut out, controller.state().board()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "   0 1 2 3 4 5 6");
    assert_eq!(lines[1], "A  S o . . . . .");
    assert_eq!(lines[4], "D  X S S . . . .");
    assert_eq!(lines[7], "G  . . . . . . S");
}
