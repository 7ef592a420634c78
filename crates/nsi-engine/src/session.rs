//! The game session state machine.

use std::mem;

use nsi_core::{Direction, PuzzleBank, PuzzleKind, RoomGraph, Shortfall};
use nsi_placement::ItemStore;
use tracing::{debug, info};

use crate::assessment::{Assessment, Gate, check_entry, check_exam};
use crate::config::GameConfig;
use crate::error::EngineResult;
use crate::event::{GameEvent, Prompt, QuestionView, RoomView};
use crate::parser::{Command, EXIT_VERB, MenuCommand, parse_command, parse_menu};
use crate::player::PlayerState;

const CONFIRM_WORD: &str = "yes";

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    MainMenu,
    Naming,
    Exploring,
    ExamConfirm,
    Answering(Assessment),
    Exited,
}

/// One playthrough of the campus.
///
/// Feed it input lines with [`handle`](Self::handle) and render the events it
/// returns. The session never blocks and never prints.
#[derive(Debug)]
pub struct GameSession {
    graph: RoomGraph,
    items: ItemStore,
    puzzles: PuzzleBank,
    player: PlayerState,
    config: GameConfig,
    phase: Phase,
}

impl GameSession {
    /// Create a session at the main menu, with the player in the starting
    /// room.
    pub fn new(graph: RoomGraph, items: ItemStore, puzzles: PuzzleBank, config: GameConfig) -> Self {
        let start = graph.starting_room().id;
        let player = PlayerState::new(config.default_name.clone(), start, config.baseline_gpa);
        Self {
            graph,
            items,
            puzzles,
            player,
            config,
            phase: Phase::MainMenu,
        }
    }

    /// Events to show before the first line is read.
    pub fn intro(&self) -> Vec<GameEvent> {
        vec![GameEvent::Intro]
    }

    /// What the session is waiting for, or `None` once it has exited.
    pub fn prompt(&self) -> Option<Prompt> {
        match self.phase {
            Phase::MainMenu => Some(Prompt::Menu),
            Phase::Naming => Some(Prompt::Name),
            Phase::Exploring => Some(Prompt::Command),
            Phase::ExamConfirm => Some(Prompt::ExamConfirmation),
            Phase::Answering(_) => Some(Prompt::Answer),
            Phase::Exited => None,
        }
    }

    /// Whether the player has left the game.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Exited)
    }

    /// The room graph, with visited flags.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// The puzzle bank, with solved flags.
    pub fn puzzles(&self) -> &PuzzleBank {
        &self.puzzles
    }

    /// The player.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The shared item collection.
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// Handle one line of input.
    pub fn handle(&mut self, line: &str) -> EngineResult<Vec<GameEvent>> {
        match mem::replace(&mut self.phase, Phase::Exited) {
            Phase::MainMenu => Ok(self.handle_menu(line)),
            Phase::Naming => Ok(self.handle_name(line)),
            Phase::Exploring => {
                self.phase = Phase::Exploring;
                self.run_command(parse_command(line))
            }
            Phase::ExamConfirm => Ok(self.handle_confirmation(line)),
            Phase::Answering(sitting) => Ok(self.handle_answer(sitting, line)),
            Phase::Exited => Ok(Vec::new()),
        }
    }

    /// Execute a parsed exploring command.
    ///
    /// Only runs while the session waits for a [`Prompt::Command`]. In any
    /// other phase nothing happens and no events are returned.
    pub fn execute(&mut self, command: Command) -> EngineResult<Vec<GameEvent>> {
        if !matches!(self.phase, Phase::Exploring) {
            return Ok(Vec::new());
        }
        self.run_command(command)
    }

    fn run_command(&mut self, command: Command) -> EngineResult<Vec<GameEvent>> {
        match command {
            Command::Move { direction } => Ok(self.do_move(direction)),
            Command::Help => Ok(vec![GameEvent::Help {
                room: self.current_room_name(),
            }]),
            Command::Backpack => Ok(vec![self.backpack()]),
            Command::Explore => {
                let count = self.items.count_in_room(self.player.location)?;
                Ok(vec![GameEvent::Explored { count }])
            }
            Command::Inspect { item } => self.do_inspect(item),
            Command::Pickup { item } => self.do_pickup(item),
            Command::Exit => Ok(self.exit()),
            Command::Unknown { input } => Ok(vec![GameEvent::InvalidCommand { input }]),
        }
    }

    fn handle_menu(&mut self, line: &str) -> Vec<GameEvent> {
        match parse_menu(line) {
            Some(MenuCommand::Start) => {
                self.phase = Phase::Naming;
                vec![GameEvent::NamePrompt]
            }
            Some(MenuCommand::Exit) => self.exit(),
            None => {
                self.phase = Phase::MainMenu;
                vec![GameEvent::InvalidMenuCommand]
            }
        }
    }

    fn handle_name(&mut self, line: &str) -> Vec<GameEvent> {
        let name = line.trim();
        if name.eq_ignore_ascii_case(EXIT_VERB) {
            return self.exit();
        }
        if !name.is_empty() {
            self.player.name = name.to_string();
        }
        self.graph.mark_visited(self.player.location);
        self.phase = Phase::Exploring;
        info!(player = %self.player.name, "game started");

        let start = RoomView::from(self.graph.starting_room());
        vec![
            GameEvent::Welcome {
                name: self.player.name.clone(),
            },
            GameEvent::Arrived {
                room: start,
                first_visit: true,
            },
        ]
    }

    fn handle_confirmation(&mut self, line: &str) -> Vec<GameEvent> {
        self.phase = Phase::Exploring;
        if !line.trim().eq_ignore_ascii_case(CONFIRM_WORD) {
            debug!(room = %self.player.location, "exam deferred");
            return vec![GameEvent::ExamDeferred];
        }
        match check_exam(&self.puzzles, self.player.location, self.scantrons()) {
            Ok(queue) => self.begin(PuzzleKind::Exam, queue),
            Err(shortfall) => vec![shortfall_event(shortfall)],
        }
    }

    fn handle_answer(&mut self, mut sitting: Assessment, line: &str) -> Vec<GameEvent> {
        if line.trim().is_empty() {
            self.phase = Phase::Answering(sitting);
            return Vec::new();
        }
        let Some(idx) = sitting.current() else {
            return self.finish(sitting);
        };

        let (correct, correct_answer) = match self.puzzles.get(idx) {
            Some(puzzle) => (puzzle.is_correct(line), puzzle.answer.clone()),
            None => (false, String::new()),
        };
        self.puzzles.mark_solved(idx);
        sitting.record(correct);

        let mut events = vec![GameEvent::Answered {
            correct,
            correct_answer,
        }];
        if sitting.is_complete() {
            events.extend(self.finish(sitting));
        } else {
            events.extend(self.question(&sitting));
            self.phase = Phase::Answering(sitting);
        }
        events
    }

    fn do_move(&mut self, direction: Direction) -> Vec<GameEvent> {
        let here = self.player.location;
        let target = self.graph.exit_id(here, direction);
        let (Some(left), Some(next)) = (
            self.graph.find_by_id(here).cloned(),
            self.graph.find_by_id(target).map(RoomView::from),
        ) else {
            return vec![GameEvent::NoExit { direction }];
        };

        self.player.move_to(&left, target);
        self.graph.mark_visited(left.id);
        let first_visit = !self.player.has_seen(&next.name);
        debug!(from = %left.id, to = %target, first_visit, "moved");

        let mut events = vec![GameEvent::Arrived {
            room: next,
            first_visit,
        }];
        events.extend(self.run_gate());
        events
    }

    fn run_gate(&mut self) -> Vec<GameEvent> {
        match check_entry(&self.puzzles, self.player.location, self.scantrons()) {
            Gate::Clear => Vec::new(),
            Gate::Quiz(queue) => self.begin(PuzzleKind::Quiz, queue),
            Gate::ExamPending => {
                self.phase = Phase::ExamConfirm;
                vec![GameEvent::ExamConfirmation]
            }
            Gate::Blocked(shortfall) => {
                debug!(room = %self.player.location, held = shortfall.held, "quiz blocked");
                vec![shortfall_event(shortfall)]
            }
        }
    }

    fn begin(&mut self, kind: PuzzleKind, queue: Vec<usize>) -> Vec<GameEvent> {
        if queue.is_empty() {
            return Vec::new();
        }
        for _ in 0..kind.scantron_requirement() {
            self.player.remove_item(&self.config.currency);
        }
        let total = queue.len();
        let sitting = Assessment::new(self.current_room_name(), kind.clone(), queue);
        info!(class = sitting.class(), %kind, total, "sitting started");

        let mut events = vec![match kind {
            PuzzleKind::Exam => GameEvent::ExamStarted { total },
            _ => GameEvent::QuizStarted { total },
        }];
        events.extend(self.question(&sitting));
        self.phase = Phase::Answering(sitting);
        events
    }

    fn question(&self, sitting: &Assessment) -> Option<GameEvent> {
        let puzzle = self.puzzles.get(sitting.current()?)?;
        Some(GameEvent::Question(QuestionView {
            number: sitting.number(),
            total: sitting.total(),
            question: puzzle.question.clone(),
            options: puzzle.options.clone(),
        }))
    }

    fn finish(&mut self, sitting: Assessment) -> Vec<GameEvent> {
        self.phase = Phase::Exploring;
        let grade = sitting.grade();
        let recorded = self.player.record_grade(sitting.class(), grade);
        let gpa = self.player.recalculate_gpa(self.config.class_count);
        info!(
            class = sitting.class(),
            correct = sitting.correct(),
            total = sitting.total(),
            %grade,
            gpa,
            "sitting finished"
        );
        vec![GameEvent::AssessmentFinished {
            class: sitting.class().to_string(),
            correct: sitting.correct(),
            total: sitting.total(),
            grade,
            recorded,
            gpa,
        }]
    }

    fn do_inspect(&self, name: String) -> EngineResult<Vec<GameEvent>> {
        Ok(vec![
            match self.items.describe(self.player.location, &name)? {
                Some(description) => GameEvent::Inspected { name, description },
                None => GameEvent::NothingToInspect { name },
            },
        ])
    }

    fn do_pickup(&mut self, name: String) -> EngineResult<Vec<GameEvent>> {
        Ok(vec![
            match self.items.take_one(self.player.location, &name)? {
                Some(item) => {
                    let event = GameEvent::PickedUp {
                        name: item.name.clone(),
                    };
                    self.player.add_item(item);
                    event
                }
                None => GameEvent::NothingToPickUp { name },
            },
        ])
    }

    fn backpack(&self) -> GameEvent {
        GameEvent::Backpack {
            items: self.player.inventory.clone(),
            grades: self
                .player
                .grades
                .iter()
                .map(|(class, grade)| (class.clone(), *grade))
                .collect(),
            gpa: self.player.gpa,
        }
    }

    fn exit(&mut self) -> Vec<GameEvent> {
        self.phase = Phase::Exited;
        info!("game exited");
        vec![GameEvent::Goodbye]
    }

    fn scantrons(&self) -> u32 {
        self.player.count_items(&self.config.currency)
    }

    fn current_room_name(&self) -> String {
        self.graph
            .find_by_id(self.player.location)
            .map(|r| r.name.clone())
            .unwrap_or_default()
    }
}

fn shortfall_event(shortfall: Shortfall) -> GameEvent {
    GameEvent::Shortfall {
        kind: shortfall.kind,
        required: shortfall.required,
        held: shortfall.held,
    }
}

#[cfg(test)]
mod tests {
    use nsi_core::{Grade, Item, Puzzle, Room, RoomId};

    use super::*;

    const OPTIONS: [&str; 4] = ["a) one", "b) two", "c) three", "d) four"];

    fn campus(lobby_scantrons: u32) -> GameSession {
        let graph = RoomGraph::new(vec![
            Room::new(1, "Lobby", "A quiet lobby.").with_exit(Direction::North, 2),
            Room::new(2, "Classroom", "Rows of desks.")
                .with_exit(Direction::South, 1)
                .with_exit(Direction::East, 3),
            Room::new(3, "Exam Hall", "Silent and cold.").with_exit(Direction::West, 2),
        ])
        .unwrap();
        let items = ItemStore::new(vec![
            Item::new(1, "scantron", "A bubble sheet.").with_count(lobby_scantrons),
            Item::new(2, "scantron", "A bubble sheet."),
            Item::new(3, "scantron", "A bubble sheet."),
        ]);
        let puzzles = PuzzleBank::new(vec![
            Puzzle::new(2, PuzzleKind::Quiz, "Q1", OPTIONS, "a"),
            Puzzle::new(2, PuzzleKind::Quiz, "Q2", OPTIONS, "b"),
            Puzzle::new(2, PuzzleKind::Quiz, "Q3", OPTIONS, "c"),
            Puzzle::new(3, PuzzleKind::Exam, "E1", OPTIONS, "a"),
            Puzzle::new(3, PuzzleKind::Exam, "E2", OPTIONS, "d"),
        ]);
        GameSession::new(graph, items, puzzles, GameConfig::default())
    }

    fn play(session: &mut GameSession, lines: &[&str]) -> Vec<GameEvent> {
        lines
            .iter()
            .flat_map(|line| session.handle(line).unwrap())
            .collect()
    }

    fn started(lobby_scantrons: u32) -> GameSession {
        let mut session = campus(lobby_scantrons);
        play(&mut session, &["start", ""]);
        session
    }

    #[test]
    fn menu_accepts_only_start_and_exit() {
        let mut session = campus(0);
        assert_eq!(session.intro(), vec![GameEvent::Intro]);
        assert_eq!(session.prompt(), Some(Prompt::Menu));
        assert_eq!(
            session.handle("play").unwrap(),
            vec![GameEvent::InvalidMenuCommand]
        );
        assert_eq!(session.prompt(), Some(Prompt::Menu));
        assert_eq!(session.handle("START").unwrap(), vec![GameEvent::NamePrompt]);
        assert_eq!(session.prompt(), Some(Prompt::Name));
    }

    #[test]
    fn exit_from_menu_and_naming() {
        let mut session = campus(0);
        assert_eq!(session.handle("exit").unwrap(), vec![GameEvent::Goodbye]);
        assert!(session.is_finished());
        assert_eq!(session.prompt(), None);
        assert!(session.handle("start").unwrap().is_empty());

        let mut session = campus(0);
        play(&mut session, &["start"]);
        assert_eq!(session.handle(" Exit ").unwrap(), vec![GameEvent::Goodbye]);
        assert!(session.is_finished());
    }

    #[test]
    fn blank_name_then_move_and_no_exit() {
        let mut session = campus(0);
        let events = play(&mut session, &["start", "   "]);
        assert!(events.contains(&GameEvent::Welcome {
            name: "student".to_string()
        }));
        assert_eq!(session.player().name, "student");
        assert!(session.graph().starting_room().visited);

        let events = session.handle("n").unwrap();
        assert!(matches!(
            &events[0],
            GameEvent::Arrived { room, first_visit: true } if room.name == "Classroom"
        ));
        assert_eq!(session.player().location, RoomId(2));
        assert_eq!(session.player().history.len(), 1);
        assert_eq!(session.player().history[0].name, "Lobby");

        let events = session.handle("n").unwrap();
        assert_eq!(
            events,
            vec![GameEvent::NoExit {
                direction: Direction::North
            }]
        );
        assert_eq!(session.player().location, RoomId(2));
        assert_eq!(session.player().history.len(), 1);
    }

    #[test]
    fn named_player_keeps_their_name() {
        let mut session = campus(0);
        play(&mut session, &["start", "  Ada Lovelace "]);
        assert_eq!(session.player().name, "Ada Lovelace");
    }

    #[test]
    fn returning_shows_location_banner() {
        let mut session = started(0);
        play(&mut session, &["n"]);
        let events = session.handle("s").unwrap();
        assert!(matches!(
            &events[0],
            GameEvent::Arrived { room, first_visit: false } if room.name == "Lobby"
        ));
        assert_eq!(session.player().history.len(), 2);
    }

    #[test]
    fn quiz_shortfall_blocks_and_solves_nothing() {
        let mut session = started(0);
        let events = session.handle("n").unwrap();
        assert_eq!(
            events[1],
            GameEvent::Shortfall {
                kind: PuzzleKind::Quiz,
                required: 1,
                held: 0,
            }
        );
        assert_eq!(session.prompt(), Some(Prompt::Command));
        assert!(session.puzzles().puzzles().iter().all(|p| !p.solved));
    }

    #[test]
    fn pickup_decrements_and_appends() {
        let mut session = started(2);
        let events = session.handle("pk Scantron").unwrap();
        assert_eq!(
            events,
            vec![GameEvent::PickedUp {
                name: "scantron".to_string()
            }]
        );
        assert_eq!(session.items().count_in_room(RoomId(1)).unwrap(), 1);
        assert_eq!(session.player().inventory.len(), 1);

        play(&mut session, &["pickup scantron"]);
        let events = session.handle("pk scantron").unwrap();
        assert_eq!(
            events,
            vec![GameEvent::NothingToPickUp {
                name: "scantron".to_string()
            }]
        );
        assert_eq!(session.items().count_in_room(RoomId(1)).unwrap(), 0);
        assert_eq!(session.player().inventory.len(), 2);
    }

    #[test]
    fn explore_and_inspect() {
        let mut session = started(2);
        assert_eq!(
            session.handle("ex").unwrap(),
            vec![GameEvent::Explored { count: 2 }]
        );
        assert_eq!(
            session.handle("in scantron").unwrap(),
            vec![GameEvent::Inspected {
                name: "scantron".to_string(),
                description: "A bubble sheet.".to_string()
            }]
        );
        assert_eq!(
            session.handle("inspect textbook").unwrap(),
            vec![GameEvent::NothingToInspect {
                name: "textbook".to_string()
            }]
        );
        assert_eq!(
            session.handle("dance").unwrap(),
            vec![GameEvent::InvalidCommand {
                input: "dance".to_string()
            }]
        );
        assert_eq!(
            session.handle("help").unwrap(),
            vec![GameEvent::Help {
                room: "Lobby".to_string()
            }]
        );
    }

    #[test]
    fn quiz_two_of_three_records_d() {
        let mut session = started(1);
        play(&mut session, &["pk scantron"]);
        let events = session.handle("n").unwrap();
        assert!(events.contains(&GameEvent::QuizStarted { total: 3 }));
        assert!(matches!(
            events.last(),
            Some(GameEvent::Question(q)) if q.number == 1 && q.question == "Q1"
        ));
        assert_eq!(session.player().count_items("scantron"), 0);
        assert_eq!(session.prompt(), Some(Prompt::Answer));

        // Blank lines wait for a real answer.
        assert!(session.handle("   ").unwrap().is_empty());
        assert_eq!(session.prompt(), Some(Prompt::Answer));

        let events = session.handle("A is my answer").unwrap();
        assert_eq!(
            events[0],
            GameEvent::Answered {
                correct: true,
                correct_answer: "a".to_string()
            }
        );
        play(&mut session, &["b"]);
        let events = session.handle("d").unwrap();
        assert_eq!(
            events.last(),
            Some(&GameEvent::AssessmentFinished {
                class: "Classroom".to_string(),
                correct: 2,
                total: 3,
                grade: Grade::D,
                recorded: Grade::D,
                gpa: 2.0 / 3.0,
            })
        );
        assert_eq!(session.prompt(), Some(Prompt::Command));
        assert!(
            session.puzzles().puzzles()[..3].iter().all(|p| p.solved),
            "wrong answers still mark the puzzle solved"
        );

        // Nothing left to gate on the way back in.
        play(&mut session, &["s"]);
        let events = session.handle("n").unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn exam_needs_confirmation_and_two_scantrons() {
        let mut session = started(3);
        play(&mut session, &["pk scantron", "n", "a", "b", "c"]);
        assert_eq!(session.player().count_items("scantron"), 0);

        let events = session.handle("e").unwrap();
        assert_eq!(events.last(), Some(&GameEvent::ExamConfirmation));
        assert_eq!(session.prompt(), Some(Prompt::ExamConfirmation));

        assert_eq!(session.handle("no").unwrap(), vec![GameEvent::ExamDeferred]);
        assert_eq!(session.prompt(), Some(Prompt::Command));

        play(&mut session, &["w", "e"]);
        assert_eq!(
            session.handle("yes").unwrap(),
            vec![GameEvent::Shortfall {
                kind: PuzzleKind::Exam,
                required: 2,
                held: 0,
            }]
        );
        assert!(session.puzzles().puzzles()[3..].iter().all(|p| !p.solved));
    }

    #[test]
    fn exam_sitting_consumes_two() {
        let mut session = campus(3);
        play(
            &mut session,
            &["start", "", "pk scantron", "pk scantron", "pk scantron"],
        );
        play(&mut session, &["n", "a", "b", "c"]);
        assert_eq!(session.player().count_items("scantron"), 2);

        play(&mut session, &["e"]);
        let events = session.handle("YES").unwrap();
        assert_eq!(events[0], GameEvent::ExamStarted { total: 2 });
        assert_eq!(session.player().count_items("scantron"), 0);

        play(&mut session, &["a"]);
        let events = session.handle("d").unwrap();
        assert!(matches!(
            events.last(),
            Some(GameEvent::AssessmentFinished { grade: Grade::A, class, .. }) if class == "Exam Hall"
        ));

        let events = session.handle("backpack").unwrap();
        let GameEvent::Backpack { items, grades, .. } = &events[0] else {
            panic!("expected backpack, got {events:?}");
        };
        assert!(items.is_empty());
        assert_eq!(
            grades,
            &vec![
                ("Classroom".to_string(), Grade::A),
                ("Exam Hall".to_string(), Grade::A)
            ]
        );
    }

    #[test]
    fn execute_is_ignored_outside_exploring() {
        let mut session = campus(2);
        let pickup = Command::Pickup {
            item: "scantron".to_string(),
        };
        assert!(session.execute(pickup.clone()).unwrap().is_empty());
        assert!(session.player().inventory.is_empty());
        assert_eq!(session.items().count_in_room(RoomId(1)).unwrap(), 2);
        assert_eq!(session.prompt(), Some(Prompt::Menu));

        play(&mut session, &["start", "", "pk scantron", "n"]);
        assert_eq!(session.prompt(), Some(Prompt::Answer));
        let leave = Command::Move {
            direction: Direction::South,
        };
        assert!(session.execute(leave).unwrap().is_empty());
        assert_eq!(session.player().location, RoomId(2));
        assert_eq!(session.prompt(), Some(Prompt::Answer));

        play(&mut session, &["a", "b", "c"]);
        assert_eq!(
            session.execute(pickup).unwrap(),
            vec![GameEvent::NothingToPickUp {
                name: "scantron".to_string()
            }]
        );
    }

    #[test]
    fn quiz_then_exam_averages_class_grade() {
        let graph = RoomGraph::new(vec![
            Room::new(1, "Lobby", "A quiet lobby.").with_exit(Direction::North, 2),
            Room::new(2, "Art Class", "Easels everywhere.").with_exit(Direction::South, 1),
        ])
        .unwrap();
        let items = ItemStore::new(vec![
            Item::new(1, "scantron", "A bubble sheet.").with_count(3),
        ]);
        let puzzles = PuzzleBank::new(vec![
            Puzzle::new(2, PuzzleKind::Quiz, "Q1", OPTIONS, "a"),
            Puzzle::new(2, PuzzleKind::Exam, "E1", OPTIONS, "b"),
        ]);
        let mut session = GameSession::new(graph, items, puzzles, GameConfig::default());
        play(
            &mut session,
            &["start", "", "pk scantron", "pk scantron", "pk scantron"],
        );

        // The quiz takes the whole visit; the exam waits for the next one.
        let events = session.handle("n").unwrap();
        assert!(!events.contains(&GameEvent::ExamConfirmation));
        play(&mut session, &["a"]);
        assert_eq!(session.player().grades["Art Class"], Grade::A);
        let after_quiz = session.player().gpa;
        assert!((after_quiz - 5.0 / 3.0).abs() < 1e-9);

        play(&mut session, &["s"]);
        let events = session.handle("n").unwrap();
        assert_eq!(events.last(), Some(&GameEvent::ExamConfirmation));
        let events = session.handle("yes").unwrap();
        assert_eq!(events[0], GameEvent::ExamStarted { total: 1 });

        // A averaged with F is 2.0 points, a C.
        let events = session.handle("c").unwrap();
        let Some(GameEvent::AssessmentFinished {
            class,
            grade,
            recorded,
            gpa,
            ..
        }) = events.last()
        else {
            panic!("expected a finished sitting, got {events:?}");
        };
        assert_eq!(class, "Art Class");
        assert_eq!(*grade, Grade::F);
        assert_eq!(*recorded, Grade::C);
        assert_eq!(session.player().grades.len(), 1);
        assert_eq!(session.player().grades["Art Class"], Grade::C);
        assert!((gpa - (after_quiz + 2.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn exit_while_exploring() {
        let mut session = started(0);
        assert_eq!(session.handle("exit").unwrap(), vec![GameEvent::Goodbye]);
        assert!(session.is_finished());
    }
}
