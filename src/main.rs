mod app;
mod help;
use crate::app::{App, PickerKind};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use monthpick::{CalendarProperties, YearMonth};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Extent of the navigable range when only one bound is given
const OPEN_BOUND_MONTHS: i64 = 100 * 12;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Options {
    init: Option<YearMonth>,
    from: Option<YearMonth>,
    to: Option<YearMonth>,
    today: Option<Date>,
    locale: Option<String>,
    sunday_first: bool,
    multi: bool,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('s') | Arg::Long("sunday-first") => opts.sunday_first = true,
                Arg::Short('m') | Arg::Long("multi") => opts.multi = true,
                Arg::Long("locale") => opts.locale = Some(parser.value()?.string()?),
                Arg::Long("from") => opts.from = Some(parse_month(parser.value()?.string()?)?),
                Arg::Long("to") => opts.to = Some(parse_month(parser.value()?.string()?)?),
                Arg::Long("today") => {
                    let value = parser.value()?.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.today = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Value(value) if opts.init.is_none() => {
                    opts.init = Some(parse_month(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let today = match opts.today {
                    Some(d) => d,
                    None => OffsetDateTime::now_local()
                        .context("failed to determine local date")?
                        .date(),
                };
                let init = opts.init.unwrap_or_else(|| YearMonth::from_date(today));
                // The demo takes the forgiving path: reversed --from/--to
                // bounds are repaired rather than rejected.
                let from = opts
                    .from
                    .unwrap_or_else(|| init.saturating_add_months(-OPEN_BOUND_MONTHS));
                let to = opts
                    .to
                    .unwrap_or_else(|| init.saturating_add_months(OPEN_BOUND_MONTHS));
                let mut props = CalendarProperties::normalized(init, from, to);
                if opts.sunday_first {
                    props = props.with_first_weekday(time::Weekday::Sunday);
                }
                if let Some(locale) = opts.locale {
                    props = props.with_locale(locale);
                }
                let picker = if opts.multi {
                    PickerKind::multi()
                } else {
                    PickerKind::single()
                };
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(props, today, picker).run(&mut terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: monthpick [OPTIONS] [YYYY-MM]");
                println!();
                println!("Paged month calendar and date pickers for the terminal");
                println!();
                println!("Options:");
                println!("  -s, --sunday-first      Start weeks on Sunday");
                println!("  -m, --multi             Pick any number of dates");
                println!("      --locale <TAG>      Locale for weekday labels (en, de, es, fr, ru)");
                println!("      --from <YYYY-MM>    Earliest month that can be shown");
                println!("      --to <YYYY-MM>      Latest month that can be shown");
                println!("      --today <DATE>      Highlight DATE (YYYY-MM-DD) instead of today");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_month(value: String) -> Result<YearMonth, lexopt::Error> {
    match value.parse::<YearMonth>() {
        Ok(month) => Ok(month),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
