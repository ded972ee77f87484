//! Interactive editing over stdin, one event per line.
//!
//! This is the simplest modality for the session's event loop: no plot, just
//! textual commands. A GUI frontend would feed the same [`SessionEvent`]s.
//!
//! Commands:
//!   select <x0> <y0> <x1> <y1>   draw a region (corners in any order)
//!   confirm <ratio>              apply the pending region
//!   undo / redo                  revert or reapply the last operation
//!   show                         re-print the session summary
//!   quit                         finish; the output file is written

use flowtune::{Frontend, SessionEvent};
use flowtune_core::{MotionRecord, Operation, Region};
use std::{
    io::{BufRead, Write as _},
    path::Path,
};

pub fn run(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    super::process(input, output, |session| {
        let stdin = std::io::stdin();
        let mut frontend = TextFrontend::default();
        frontend.render(session.records(), session.operations());

        loop {
            print!("flowtune> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF ends the session like `quit`
            }

            let event = match parse_command(&line) {
                Ok(Some(event)) => event,
                Ok(None) => {
                    frontend.render(session.records(), session.operations());
                    continue;
                }
                Err(message) => {
                    println!("{message}");
                    continue;
                }
            };

            if !session.handle(event, &mut frontend) {
                break;
            }
        }
        Ok(())
    })
}

/// Parses one input line. `Ok(None)` means `show` (handled locally), an
/// empty line is reported as an error like any unknown command.
fn parse_command(line: &str) -> Result<Option<SessionEvent>, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    let rest: Vec<&str> = words.collect();

    match (command, rest.as_slice()) {
        ("select", [x0, y0, x1, y1]) => {
            let parse = |s: &str| {
                s.parse::<f64>()
                    .map_err(|_| format!("not a number: {s:?}"))
            };
            let region = Region::from_corners(
                (parse(x0)?, parse(y0)?),
                (parse(x1)?, parse(y1)?),
            );
            Ok(Some(SessionEvent::Select(region)))
        }
        ("confirm", [ratio]) => Ok(Some(SessionEvent::Confirm {
            ratio: (*ratio).to_owned(),
        })),
        ("undo", []) => Ok(Some(SessionEvent::Undo)),
        ("redo", []) => Ok(Some(SessionEvent::Redo)),
        ("show", []) => Ok(None),
        ("quit", []) => Ok(Some(SessionEvent::Quit)),
        _ => Err(format!(
            "unknown command {:?}; try select/confirm/undo/redo/show/quit",
            line.trim()
        )),
    }
}

/// Line-mode stand-in for the plotted toolpath view.
#[derive(Debug, Default)]
struct TextFrontend;

impl Frontend for TextFrontend {
    fn render(&mut self, records: &[MotionRecord], operations: &[Operation]) {
        let total: f64 = records.iter().map(|r| r.extrusion).sum();
        println!("{} records, total extrusion {total:.5}", records.len());
        for (i, op) in operations.iter().enumerate() {
            println!(
                "  {}: {} over x [{:.2}, {:.2}] y [{:.2}, {:.2}]",
                i + 1,
                op.label(),
                op.region.x_min,
                op.region.x_max,
                op.region.y_min,
                op.region.y_max,
            );
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_parses_corners_in_any_order() {
        let event = parse_command("select 10 5 0 0\n").unwrap().unwrap();
        assert_eq!(
            event,
            SessionEvent::Select(Region::from_corners((0.0, 0.0), (10.0, 5.0)))
        );
    }

    #[test]
    fn confirm_keeps_raw_ratio_text() {
        let event = parse_command("confirm 1.5\n").unwrap().unwrap();
        assert_eq!(
            event,
            SessionEvent::Confirm {
                ratio: "1.5".to_owned()
            }
        );
    }

    #[test]
    fn show_is_local_and_junk_is_rejected() {
        assert_eq!(parse_command("show\n").unwrap(), None);
        assert!(parse_command("frobnicate\n").is_err());
        assert!(parse_command("select 1 2 3\n").is_err());
        assert!(parse_command("select a b c d\n").is_err());
        assert!(parse_command("\n").is_err());
    }
}
