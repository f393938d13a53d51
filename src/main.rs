mod logger;
mod sheet;
use crate::sheet::{describe, Sheet};
use anyhow::{bail, Context};
use datepick::{
    parse_date, today, Bounds, CellClick, DateRange, Direction, Picker, PickerKind, Props,
    Selection, SelectionEvent, Trigger,
};
use lexopt::{Arg, Parser, ValueExt};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Options {
    kind: PickerKind,
    date: Option<Date>,
    bounds: Bounds,
    value: Option<Date>,
    start: Option<Date>,
    end: Option<Date>,
    pages: Vec<Direction>,
    click: Option<usize>,
    verbosity: u8,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            kind: PickerKind::Day,
            date: None,
            bounds: Bounds::new(),
            value: None,
            start: None,
            end: None,
            pages: Vec::new(),
            click: None,
            verbosity: 0,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('k') | Arg::Long("kind") => opts.kind = parser.value()?.parse()?,
                Arg::Long("min") => opts.bounds.min = Some(parser.value()?.parse_with(parse_date)?),
                Arg::Long("max") => opts.bounds.max = Some(parser.value()?.parse_with(parse_date)?),
                Arg::Short('d') | Arg::Long("disable") => {
                    let date = parser.value()?.parse_with(parse_date)?;
                    opts.bounds.disabled.push(date);
                }
                Arg::Long("value") => opts.value = Some(parser.value()?.parse_with(parse_date)?),
                Arg::Long("start") => opts.start = Some(parser.value()?.parse_with(parse_date)?),
                Arg::Long("end") => opts.end = Some(parser.value()?.parse_with(parse_date)?),
                Arg::Short('n') | Arg::Long("next") => opts.pages.push(Direction::Forwards),
                Arg::Short('p') | Arg::Long("prev") => opts.pages.push(Direction::Backwards),
                Arg::Short('c') | Arg::Long("click") => opts.click = Some(parser.value()?.parse()?),
                Arg::Short('v') | Arg::Long("verbose") => {
                    opts.verbosity = opts.verbosity.saturating_add(1);
                }
                Arg::Value(value) if opts.date.is_none() => {
                    opts.date = Some(value.parse_with(parse_date)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                logger::init(opts.verbosity).context("failed to install logger")?;
                let selection = opts.selection()?;
                let props = Props::new(opts.kind)
                    .bounds(opts.bounds)
                    .selection(selection);
                let mut picker = Picker::new(opts.kind, today());
                if let Some(date) = opts.date {
                    picker = picker.start_date(date);
                }
                for direction in opts.pages {
                    picker
                        .turn_page(&props.bounds, direction)
                        .with_context(|| format!("failed to turn to the {direction} page"))?;
                }
                let view = picker.view(&props).context("failed to lay out page")?;
                print!("{}", Sheet(&view));
                if let Some(index) = opts.click {
                    let mut handler = |_: Trigger, event: SelectionEvent| {
                        println!("{}", describe(&event));
                    };
                    let changed = picker
                        .click(&props, &CellClick::new(index), &mut handler)
                        .with_context(|| format!("failed to click cell {index}"))?;
                    if !changed {
                        println!("cell {index} is disabled");
                    }
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [<options>] [YYYY-MM-DD]");
                println!();
                println!("Show one page of a date picker and optionally click on a cell");
                println!();
                println!("Options:");
                println!("  -k, --kind <KIND>     Picker kind: day, range, month, or year [default: day]");
                println!("      --min <DATE>      Earliest selectable date");
                println!("      --max <DATE>      Latest selectable date");
                println!("  -d, --disable <DATE>  Disable the given date (may be repeated)");
                println!("      --value <DATE>    Currently selected date");
                println!("      --start <DATE>    Start of the currently selected range");
                println!("      --end <DATE>      End of the currently selected range");
                println!("  -n, --next            Turn to the next page (may be repeated)");
                println!("  -p, --prev            Turn to the previous page (may be repeated)");
                println!("  -c, --click <INDEX>   Click on the given cell and show the new selection");
                println!("  -v, --verbose         Log page computations to stderr (twice for more detail)");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Options {
    fn selection(&self) -> anyhow::Result<Selection> {
        if self.kind.is_range() {
            if self.value.is_some() {
                bail!("--value cannot be used with a range picker; use --start and --end");
            }
            if let (Some(start), Some(end)) = (self.start, self.end) {
                if end < start {
                    bail!("--end {end} is before --start {start}");
                }
            }
            Ok(Selection::Range(DateRange {
                start: self.start,
                end: self.end,
            }))
        } else {
            if self.start.is_some() || self.end.is_some() {
                bail!("--start and --end can only be used with a range picker");
            }
            Ok(Selection::Single(self.value))
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Options::default()));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--kind", "year", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_full_args() {
        let cmd = parse(&[
            "-k", "range", "--min", "2018-08-04", "--max", "2018-09-30", "-d", "2018-08-20",
            "--disable", "2018-08-21", "--start", "2018-08-09", "-n", "-p", "-n", "--click",
            "17", "-v", "2018-08-12", "--verbose",
        ])
        .unwrap();
        assert_eq!(
            cmd,
            Command::Run(Options {
                kind: PickerKind::DateRange,
                date: Some(date!(2018 - 08 - 12)),
                bounds: Bounds::new()
                    .min(date!(2018 - 08 - 04))
                    .max(date!(2018 - 09 - 30))
                    .disable([date!(2018 - 08 - 20), date!(2018 - 08 - 21)]),
                value: None,
                start: Some(date!(2018 - 08 - 09)),
                end: None,
                pages: vec![Direction::Forwards, Direction::Backwards, Direction::Forwards],
                click: Some(17),
                verbosity: 2,
            })
        );
    }

    #[test]
    fn test_bad_args() {
        assert!(parse(&["--kind", "decade"]).is_err());
        assert!(parse(&["--min", "2018-02-30"]).is_err());
        assert!(parse(&["--click", "first"]).is_err());
        assert!(parse(&["2018-08-12", "2018-08-13"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_selection_shape() {
        let opts = Options {
            kind: PickerKind::DateRange,
            value: Some(date!(2018 - 08 - 12)),
            ..Options::default()
        };
        assert!(opts.selection().is_err());
        let opts = Options {
            start: Some(date!(2018 - 08 - 12)),
            ..Options::default()
        };
        assert!(opts.selection().is_err());
        let opts = Options {
            kind: PickerKind::DateRange,
            start: Some(date!(2018 - 08 - 12)),
            end: Some(date!(2018 - 08 - 11)),
            ..Options::default()
        };
        assert!(opts.selection().is_err());
        let opts = Options {
            kind: PickerKind::Month,
            value: Some(date!(2018 - 08 - 12)),
            ..Options::default()
        };
        assert_eq!(
            opts.selection().unwrap(),
            Selection::Single(Some(date!(2018 - 08 - 12)))
        );
    }
}
