//! Interactive session command handler
//!
//! A small line-oriented shell over [`GpaTracker`]. Courses are added to the
//! working semester, edited by id, and the live/cumulative GPA is shown after
//! every change. Saving freezes the working semester into the history.

use gpa_track::core::models::{CourseId, Grade, GRADE_SCALE};
use gpa_track::core::tracker::{CourseUpdate, GpaTracker};
use logger::info;
use std::io::{self, BufRead, Write};

const MIN_CREDITS: u32 = 1;
const MAX_CREDITS: u32 = 6;

/// Run the interactive session until `quit` or end of input.
pub fn run() {
    let stdin = io::stdin();
    let mut tracker = GpaTracker::new();

    println!("gpatrack interactive session. Type 'help' for commands.");
    print_status(&tracker);

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if !handle_line(&mut tracker, line.trim()) {
            break;
        }
    }

    println!("Session ended.");
}

/// Process one command line. Returns `false` when the session should end.
fn handle_line(tracker: &mut GpaTracker, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" | "?" => print_help(),
        "add" => {
            let id = tracker.add_course();
            info!("Added course {id}");
            println!("✓ Added course {id} (3 credits, grade A)");
            print_status(tracker);
        }
        "name" => handle_name(tracker, rest),
        "credits" => handle_credits(tracker, rest),
        "grade" => handle_grade(tracker, rest),
        "remove" => handle_remove(tracker, rest),
        "rename" => {
            if rest.is_empty() {
                eprintln!("✗ Usage: rename <semester name>");
            } else {
                tracker.rename_semester(rest.to_string());
                println!("✓ Working semester renamed to '{rest}'");
            }
        }
        "list" | "status" => print_status(tracker),
        "scale" => print_scale(),
        "save" => match tracker.save_semester() {
            Ok(record) => {
                info!("Saved semester '{}' with GPA {:.2}", record.name, record.gpa);
                println!(
                    "✓ Saved '{}' with GPA {:.2} ({} courses)",
                    record.name,
                    record.gpa,
                    record.course_count()
                );
                print_status(tracker);
            }
            Err(e) => eprintln!("✗ {e}"),
        },
        "quit" | "exit" | "q" => return false,
        other => eprintln!("✗ Unknown command: '{other}'. Type 'help' for commands."),
    }

    true
}

fn handle_name(tracker: &mut GpaTracker, rest: &str) {
    let Some((id, name)) = rest.split_once(char::is_whitespace) else {
        eprintln!("✗ Usage: name <id> <course name>");
        return;
    };

    let Some(id) = parse_course_id(id) else {
        return;
    };

    if tracker.update_course(id, CourseUpdate::SetName(name.trim().to_string())) {
        println!("✓ Course {id} renamed");
    } else {
        eprintln!("✗ No course with id {id}");
    }
}

fn handle_credits(tracker: &mut GpaTracker, rest: &str) {
    let Some((id, value)) = rest.split_once(char::is_whitespace) else {
        eprintln!("✗ Usage: credits <id> <1-6>");
        return;
    };

    let Some(id) = parse_course_id(id) else {
        return;
    };

    let Ok(credits) = value.trim().parse::<u32>() else {
        eprintln!("✗ Invalid credits value: '{}'", value.trim());
        return;
    };

    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        eprintln!("✗ Credits must be between {MIN_CREDITS} and {MAX_CREDITS}");
        return;
    }

    if tracker.update_course(id, CourseUpdate::SetCredits(credits)) {
        println!("✓ Course {id} set to {credits} credits");
        print_status(tracker);
    } else {
        eprintln!("✗ No course with id {id}");
    }
}

fn handle_grade(tracker: &mut GpaTracker, rest: &str) {
    let Some((id, letter)) = rest.split_once(char::is_whitespace) else {
        eprintln!("✗ Usage: grade <id> <letter>");
        return;
    };

    let Some(id) = parse_course_id(id) else {
        return;
    };

    let grade = match letter.trim().parse::<Grade>() {
        Ok(grade) => grade,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    if tracker.update_course(id, CourseUpdate::SetGrade(grade)) {
        println!("✓ Course {id} graded {grade} ({:.1} points)", grade.points());
        print_status(tracker);
    } else {
        eprintln!("✗ No course with id {id}");
    }
}

fn handle_remove(tracker: &mut GpaTracker, rest: &str) {
    let Some(id) = parse_course_id(rest) else {
        return;
    };

    if tracker.remove_course(id) {
        println!("✓ Course {id} removed");
        print_status(tracker);
    } else {
        eprintln!("✗ No course with id {id}");
    }
}

/// Parse a course id, accepting both `3` and `#3`
fn parse_course_id(raw: &str) -> Option<CourseId> {
    let trimmed = raw.trim().trim_start_matches('#');
    match trimmed.parse::<u64>() {
        Ok(n) => Some(CourseId(n)),
        Err(_) => {
            eprintln!("✗ Invalid course id: '{raw}'");
            None
        }
    }
}

fn print_status(tracker: &GpaTracker) {
    let working = tracker.working();

    println!("\n--- {} ---", working.name);
    if working.courses.is_empty() {
        println!("(no courses)");
    } else {
        for course in &working.courses {
            let name = if course.name.is_empty() {
                "(unnamed)"
            } else {
                &course.name
            };
            println!(
                "{}  {name}  {} cr  {}  ({:.1})",
                course.id,
                course.credits,
                course.grade,
                course.points()
            );
        }
    }
    println!("Semester GPA: {:.2}", tracker.current_gpa());

    if !tracker.history().is_empty() {
        println!("\nSaved semesters:");
        for record in tracker.history() {
            println!(
                "  {}  GPA {:.2}  ({} courses, {} credits)",
                record.name,
                record.gpa,
                record.course_count(),
                record.total_credits()
            );
        }
        println!("Cumulative GPA: {:.2}", tracker.cumulative_gpa());
    }
    println!();
}

fn print_scale() {
    println!("\nGrade scale:");
    for grade in GRADE_SCALE {
        println!("  {:<2}  {:.1}", grade.to_string(), grade.points());
    }
    println!();
}

fn print_help() {
    println!("\nCommands:");
    println!("  add                    add a course (3 credits, grade A)");
    println!("  name <id> <text>       rename a course");
    println!("  credits <id> <1-6>     set credit hours");
    println!("  grade <id> <letter>    set letter grade (A+ through F)");
    println!("  remove <id>            remove a course");
    println!("  rename <text>          rename the working semester");
    println!("  save                   freeze the semester into history");
    println!("  list                   show current state");
    println!("  scale                  show the grade scale");
    println!("  quit                   end the session");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_course_ids_with_and_without_hash() {
        assert_eq!(parse_course_id("3"), Some(CourseId(3)));
        assert_eq!(parse_course_id("#7"), Some(CourseId(7)));
        assert_eq!(parse_course_id("abc"), None);
    }

    #[test]
    fn add_and_grade_through_command_lines() {
        let mut tracker = GpaTracker::new();

        assert!(handle_line(&mut tracker, "add"));
        assert!(handle_line(&mut tracker, "grade 1 B"));
        assert!((tracker.current_gpa() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn credits_outside_range_are_rejected() {
        let mut tracker = GpaTracker::new();
        handle_line(&mut tracker, "add");

        handle_line(&mut tracker, "credits 1 9");
        assert_eq!(tracker.working().courses[0].credits, 3);

        handle_line(&mut tracker, "credits 1 5");
        assert_eq!(tracker.working().courses[0].credits, 5);
    }

    #[test]
    fn save_flows_into_history() {
        let mut tracker = GpaTracker::new();
        handle_line(&mut tracker, "rename Fall 2025");
        handle_line(&mut tracker, "add");
        handle_line(&mut tracker, "save");

        assert_eq!(tracker.history().len(), 1);
        assert_eq!(tracker.history()[0].name, "Fall 2025");
        assert!(tracker.working().courses.is_empty());
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut tracker = GpaTracker::new();
        assert!(!handle_line(&mut tracker, "quit"));
    }
}
