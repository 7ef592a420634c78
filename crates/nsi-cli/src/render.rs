//! Turns engine events into terminal output.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use nsi_core::{Direction, Grade, ItemRef, RoomGraph, RoomId};
use nsi_engine::{GameEvent, GameSession, Prompt, QuestionView, RoomView};

const RULE: &str =
    "==========================================================================";

const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

pub fn events(events: &[GameEvent], session: &GameSession) {
    for event in events {
        render(event, session);
    }
}

pub fn prompt(prompt: Prompt) {
    match prompt {
        Prompt::Menu | Prompt::Name | Prompt::ExamConfirmation => {}
        Prompt::Command => println!(
            "\nEnter {}orth, {}ast, {}outh, {}est, {}elp, or {}.",
            "(n)".green(),
            "(e)".green(),
            "(s)".green(),
            "(w)".green(),
            "(h)".cyan(),
            "(exit)".magenta()
        ),
        Prompt::Answer => print!("Enter answer here: "),
    }
    if prompt != Prompt::Answer {
        print!("{}", "> ".bold());
    }
}

fn render(event: &GameEvent, session: &GameSession) {
    match event {
        GameEvent::Intro => intro(),
        GameEvent::InvalidMenuCommand => {
            println!("{}", "Invalid command. Please enter 'start' or 'exit'.".red());
        }
        GameEvent::NamePrompt => println!("\nEnter your {} below:", "name".yellow()),
        GameEvent::Welcome { name } => welcome(name, session.graph()),
        GameEvent::Arrived { room, first_visit } => arrived(room, *first_visit),
        GameEvent::NoExit { direction } => println!(
            "{}",
            format!("There is no exit {direction}. Please enter 'h' for help.").red()
        ),
        GameEvent::Help { room } => help(room, session.graph()),
        GameEvent::Backpack { items, grades, gpa } => {
            backpack(items, grades, *gpa, session.graph());
        }
        GameEvent::Explored { count } => match *count {
            0 => println!("\nThis room does not contain any scantrons."),
            1 => println!("\nThis room contains {} scantron.", "1".yellow()),
            n => println!("\nThis room contains {} scantrons.", n.to_string().yellow()),
        },
        GameEvent::Inspected { description, .. } => println!("\n{description}"),
        GameEvent::NothingToInspect { name } => {
            println!("\nThere are no {name}s in this room to inspect.");
        }
        GameEvent::PickedUp { name } => println!("\nYou picked up the {name}!"),
        GameEvent::NothingToPickUp { name } => {
            println!("\nThere is no {name} in this room to pick up.");
        }
        GameEvent::InvalidCommand { .. } => {
            println!("{}", "Invalid command. Please enter 'h' for help.".red());
        }
        GameEvent::Shortfall {
            kind,
            required,
            held,
        } => println!(
            "\nYou need {} scantron{} to take the {}. You have {held}.",
            required.to_string().yellow(),
            if *required == 1 { "" } else { "s" },
            kind.to_string().to_lowercase()
        ),
        GameEvent::QuizStarted { total } => {
            println!("\n{}", format!("Complete the {total}-question quiz:").bold());
        }
        GameEvent::ExamConfirmation => println!(
            "\nAre you ready to take the exam? ({}/{})",
            "yes".green(),
            "no".magenta()
        ),
        GameEvent::ExamDeferred => println!("\nYou chose not to take the exam right now."),
        GameEvent::ExamStarted { total } => {
            println!("\n{}", format!("Complete the {total}-question exam:").bold());
        }
        GameEvent::Question(view) => question(view),
        GameEvent::Answered {
            correct,
            correct_answer,
        } => {
            if *correct {
                println!("{}", "Correct!".green());
            } else {
                println!(
                    "{}",
                    format!("Incorrect. The correct answer is {correct_answer}.").red()
                );
            }
        }
        GameEvent::AssessmentFinished {
            class,
            correct,
            total,
            grade,
            recorded,
            gpa,
        } => {
            println!(
                "\nYou answered {} out of {total} questions correctly.",
                correct.to_string().green()
            );
            println!("Grade for {}: {}", class.yellow(), colored_grade(*grade));
            if recorded != grade {
                println!("Report card now shows {}.", colored_grade(*recorded));
            }
            println!("GPA: {}", format!("{gpa:.2}").bold());
        }
        GameEvent::Goodbye => println!("{}", "Thanks for playing. Goodbye!".bold()),
    }
}

fn intro() {
    println!("\n{RULE}\n");
    println!("{}", "C O L L E G E  ·  C H R O N I C L E S".green().bold());
    println!();
    println!("Embark on the ultimate academic adventure.");
    println!("Will you ace every exam and overcome life's curveballs?");
    println!(
        "The goal is clear: finish with a perfect {}!",
        "4.0".yellow().bold()
    );
    println!(
        "\nEnter {} to begin or {} to end.",
        "start".green(),
        "exit".magenta()
    );
}

fn welcome(name: &str, graph: &RoomGraph) {
    println!("\n{RULE}\n");
    println!("Welcome, {}!\n", name.to_uppercase().bold());
    println!("I'm your advisor here at Not-So Ivy League College.");
    println!("Here is the campus and the basic rules you need to succeed this semester.\n");
    println!("{}", campus_map(graph, graph.starting_room().id));
    println!("\n{}", "RULES:".bold());
    println!(
        "- Move {}orth, {}ast, {}outh or {}est",
        "(n)".green(),
        "(e)".green(),
        "(s)".green(),
        "(w)".green()
    );
    println!("- Collect {} to sit quizzes and exams", "scantrons".yellow());
    println!("- For {}elp", "(h)".cyan());
    println!("- Exit Game {}", "(exit)".magenta());
    println!("\n{RULE}");
}

fn arrived(room: &RoomView, first_visit: bool) {
    if first_visit {
        println!("\n{}\n", format!("New Location: {}", room.name).yellow());
    } else {
        println!("\nLocation: {}\n", room.name.yellow());
    }
    println!("{}", room.description);
    if !room.exits.is_empty() {
        let exits: Vec<&str> = room.exits.iter().map(Direction::name).collect();
        println!("Exits: {}", exits.join(", ").dimmed());
    }
}

fn help(room: &str, graph: &RoomGraph) {
    let mut commands = Table::new();
    commands.set_content_arrangement(ContentArrangement::Dynamic);
    commands.set_header(vec!["Command", "Aliases", "Action"]);
    for (command, aliases, action) in [
        ("north", "n", "Move north"),
        ("east", "e", "Move east"),
        ("south", "s", "Move south"),
        ("west", "w", "Move west"),
        ("explore", "ex", "Count the scantrons in this room"),
        ("inspect <item>", "in <item>", "Read an item's description"),
        ("pickup <item>", "pk <item>", "Pick up one unit of an item"),
        ("backpack", "ba", "View backpack and grades"),
        ("help", "h", "View commands and instructions"),
        ("exit", "", "Exit the game"),
    ] {
        commands.add_row(vec![command, aliases, action]);
    }

    println!("\n{RULE}\n");
    println!("{}", "COMMAND LIST".bold().italic());
    println!("{commands}");

    let current = graph
        .rooms()
        .iter()
        .find(|r| r.name == room)
        .map(|r| r.id)
        .unwrap_or(RoomId::NONE);
    println!("\n{}", "CAMPUS MAP".bold().italic());
    println!("{}", campus_map(graph, current));

    println!("\n{}", "GAME INSTRUCTIONS".bold().italic());
    println!("1. Explore the campus by moving between rooms.");
    println!("2. Find and collect scantrons. They move around every few minutes.");
    println!("3. Spend scantrons on quizzes (1 each) and exams (2 each).");
    println!("4. Aim for a perfect 4.0 GPA.");
    println!("\n{RULE}");
}

/// One row per room with its exits by name. `*` marks the player, `?` a
/// room not visited yet.
fn campus_map(graph: &RoomGraph, current: RoomId) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "North", "East", "South", "West"]);

    let exit_name = |target: RoomId| {
        graph
            .find_by_id(target)
            .map(|r| r.name.clone())
            .unwrap_or_default()
    };

    for room in graph.rooms() {
        let marker = if room.id == current {
            "* "
        } else if room.visited {
            "  "
        } else {
            "? "
        };
        let mut row = vec![format!("{marker}{}", room.name)];
        row.extend(Direction::ALL.iter().map(|&d| exit_name(room.exits.get(d))));
        table.add_row(row);
    }
    table
}

fn backpack(items: &[ItemRef], grades: &[(String, Grade)], gpa: f64, graph: &RoomGraph) {
    println!("\n{}", "BACKPACK".bold());
    if items.is_empty() {
        println!("  Your backpack is empty.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Item", "Found In"]);
        for item in items {
            let origin = graph
                .find_by_id(item.origin)
                .map(|r| r.name.as_str())
                .unwrap_or("-");
            table.add_row(vec![item.name.as_str(), origin]);
        }
        println!("{table}");
        println!("  {} items", items.len());
    }

    println!("\n{}", "REPORT CARD".bold());
    if grades.is_empty() {
        println!("  No grades recorded yet.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Class", "Grade"]);
        for (class, grade) in grades {
            table.add_row(vec![class.clone(), grade.to_string()]);
        }
        println!("{table}");
    }
    println!("  GPA: {}", format!("{gpa:.2}").bold());
}

fn question(view: &QuestionView) {
    println!(
        "\n{} {}",
        format!("[{}/{}]", view.number, view.total).dimmed(),
        view.question
    );
    println!();
    for (label, option) in OPTION_LABELS.iter().zip(&view.options) {
        println!("   {label}) {option}");
    }
    println!();
}

fn colored_grade(grade: Grade) -> colored::ColoredString {
    let letter = grade.letter();
    match grade {
        Grade::A | Grade::B => letter.green().bold(),
        Grade::C => letter.yellow().bold(),
        Grade::D | Grade::F => letter.red().bold(),
    }
}
