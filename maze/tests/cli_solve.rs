//! CLI tests for `maze solve` and `maze check`.
//!
//! Spawns the maze binary and verifies exit codes and the written report
//! for solvable, unsolvable, blocked and malformed mazes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use maze::core::grid::Grid;
use maze::core::render::parse_report;
use maze::exit_codes;
use maze::test_support::{temp_maze, write_maze};

fn run_maze(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_maze"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run maze")
}

#[test]
fn solve_open_board_writes_every_path() {
    let (temp, _) = temp_maze("maze.txt", 2, 2, &[]);

    let output = run_maze(temp.path(), &["solve", "maze.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Success! Generating paths and writing solution to 'solution.out'"));
    assert!(stdout.contains(" O  O "));

    let report = fs::read_to_string(temp.path().join("solution.out")).expect("read report");
    let parsed = parse_report(&report).expect("parse report");
    assert_eq!(parsed.len(), 2);
    let grid = Grid::new(2, 2).expect("grid");
    for path in &parsed {
        assert_eq!(path.locations(grid.entry()).last(), Some(&grid.exit()));
    }
}

#[test]
fn solve_unreachable_exit_exits_with_no_solutions_code() {
    let (temp, _) = temp_maze("maze.txt", 2, 2, &[(0, 1), (1, 0)]);

    let output = run_maze(temp.path(), &["solve", "maze.txt", "--no-board"]);
    assert_eq!(output.status.code(), Some(exit_codes::NO_SOLUTIONS));

    let report = fs::read_to_string(temp.path().join("solution.out")).expect("read report");
    assert_eq!(report, "No solutions\n");
}

#[test]
fn solve_blocked_entry_exits_with_blocked_code() {
    let (temp, _) = temp_maze("maze.txt", 3, 3, &[(0, 0)]);

    let output = run_maze(temp.path(), &["solve", "maze.txt", "-o", "paths.out"]);
    assert_eq!(output.status.code(), Some(exit_codes::BLOCKED));

    let report = fs::read_to_string(temp.path().join("paths.out")).expect("read report");
    assert_eq!(report, "Entry point blocked. No solutions.\n");
}

#[test]
fn solve_respects_limit_from_config() {
    let (temp, _) = temp_maze("maze.txt", 3, 3, &[]);
    fs::write(temp.path().join("maze.toml"), "max_solutions = 4\nprint_board = false\n")
        .expect("write config");

    let output = run_maze(temp.path(), &["solve", "maze.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let report = fs::read_to_string(temp.path().join("solution.out")).expect("read report");
    assert_eq!(parse_report(&report).expect("parse report").len(), 4);
}

#[test]
fn solve_bad_file_name_is_invalid() {
    let (temp, _) = temp_maze("maze.txt", 2, 2, &[]);
    write_maze(temp.path(), "maze-2.txt", 2, 2, &[]);

    let output = run_maze(temp.path(), &["solve", "maze-2.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load maze maze-2.txt: bad file format: 'maze-2.txt'"));
    assert!(!temp.path().join("solution.out").exists());

    let output = run_maze(temp.path(), &["solve", "maze-2.txt", "--lenient-names"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn solve_missing_file_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_maze(temp.path(), &["solve", "absent.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load maze absent.txt: error reading file absent.txt"));
}

#[test]
fn check_prints_board_without_report() {
    let (temp, _) = temp_maze("maze.txt", 2, 3, &[(0, 2)]);

    let output = run_maze(temp.path(), &["check", "maze.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" O  O  | "));
    assert!(stdout.contains("2x3 board, 1 wall(s)"));
    assert!(!temp.path().join("solution.out").exists());
}
