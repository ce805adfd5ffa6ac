//! End-to-end tests for the interpreter pipeline through the library API
//!
//! Commands are fed through `Session` with an in-memory log, so no files are
//! touched.

use bitmap_editor::log::MemoryLog;
use bitmap_editor::parser::{parse_stream, RawCommand};
use bitmap_editor::session::{RunSummary, Session};

struct Run {
    output: String,
    log: MemoryLog,
    session: Session,
    summary: RunSummary,
}

fn interpret(script: &str) -> Run {
    let commands: Vec<RawCommand> = parse_stream(script.as_bytes()).unwrap();
    let mut log = MemoryLog::new();
    let mut out = Vec::new();
    let mut session = Session::new();
    let summary = session.run(&commands, &mut log, &mut out).unwrap();
    Run { output: String::from_utf8(out).unwrap(), log, session, summary }
}

#[test]
fn test_init_dimensions_across_range() {
    for height in [1, 2, 17, 125, 249, 250] {
        for width in [1, 3, 64, 250] {
            let run = interpret(&format!("I {} {}\n", height, width));
            let grid = run.session.executor().grid().unwrap();
            assert_eq!(grid.height(), height);
            assert_eq!(grid.width(), width);
            assert!(grid.rows().flatten().all(|c| c.as_str() == "O"));
        }
    }
}

#[test]
fn test_clear_after_mutations() {
    let run = interpret("I 4 7\nL 1 1 A\nV 3 1 4 B\nH 2 1 7 C\nC\n");
    let grid = run.session.executor().grid().unwrap();
    assert_eq!((grid.height(), grid.width()), (4, 7));
    assert!(grid.rows().flatten().all(|c| c.as_str() == "O"));
}

#[test]
fn test_pixel_lands_at_row_y_column_x() {
    for (x, y) in [(1, 1), (6, 5), (2, 4), (5, 1)] {
        let run = interpret(&format!("I 5 6\nL {} {} K\nS\n", x, y));
        let rows: Vec<&str> = run.output.lines().collect();
        assert_eq!(rows.len(), 5);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let expected = if r == y - 1 && c == x - 1 { 'K' } else { 'O' };
                assert_eq!(ch, expected, "cell ({}, {}) after L {} {}", c, r, x, y);
            }
        }
    }
}

#[test]
fn test_reversed_vertical_endpoints_paint_span() {
    let forward = interpret("I 6 3\nV 2 2 5 X\nS\n");
    let reversed = interpret("I 6 3\nV 2 5 2 X\nS\n");
    assert_eq!(reversed.output, "OOO\nOXO\nOXO\nOXO\nOXO\nOOO\n");
    assert_eq!(forward.output, reversed.output);
}

#[test]
fn test_reversed_horizontal_endpoints_paint_span() {
    let run = interpret("I 2 5\nH 1 4 2 Y\nS\n");
    assert_eq!(run.output, "OYYYO\nOOOOO\n");
}

#[test]
fn test_drawing_before_init_is_harmless() {
    let run = interpret("L 1 1 A\nV 1 1 3 B\nH 2 1 3 C\nC\nS\n");
    assert_eq!(run.output, "No bitmap created yet\n");
    assert!(run.log.is_empty());
    assert!(run.session.executor().grid().is_none());
}

#[test]
fn test_spec_scenario() {
    let run = interpret("I 5 6\nL 3 2 A\nS\n");
    assert_eq!(run.output, "OOOOOO\nOOAOOO\nOOOOOO\nOOOOOO\nOOOOOO\n");
}

#[test]
fn test_missing_color_is_logged_and_skipped() {
    let run = interpret("I 3 3\nL 1 2\nS\n");
    assert_eq!(run.log.lines(), vec!["Line 2 : Command key L requires 3 parameters"]);
    assert_eq!(run.output, "OOO\nOOO\nOOO\n");
    assert_eq!(run.summary, RunSummary { lines: 3, executed: 2, rejected: 1 });
}

#[test]
fn test_partially_outside_stroke_is_clipped() {
    let run = interpret("I 3 4\nH 2 3 250 Q\nV 4 250 2 R\nS\n");
    assert_eq!(run.output, "OOOO\nOOQR\nOOOR\n");
}

#[test]
fn test_fully_outside_geometry_is_silent() {
    let run = interpret("I 3 4\nL 5 1 A\nV 5 1 3 B\nH 4 1 4 C\nV 1 4 9 D\nS\n");
    assert_eq!(run.output, "OOOO\nOOOO\nOOOO\n");
    assert!(run.log.is_empty());
}

#[test]
fn test_horizontal_beyond_both_edges_is_silent() {
    let run = interpret("I 3 4\nH 1 5 9 C\nS\n");
    assert_eq!(run.output, "OOOO\nOOOO\nOOOO\n");
    assert!(run.log.is_empty());
    assert_eq!(run.summary, RunSummary { lines: 3, executed: 3, rejected: 0 });
}

#[test]
fn test_multi_char_color_renders_verbatim() {
    let run = interpret("I 2 3\nL 1 1 Red\nS\n");
    assert_eq!(run.output, "RedOO\nOOO\n");
    assert!(run.log.is_empty());
}

#[test]
fn test_windows_line_endings() {
    let run = interpret("I 1 2\r\nL 2 1 A\r\nS\r\n");
    assert_eq!(run.output, "OA\n");
    assert!(run.log.is_empty());
}
