//! A quick tour: color swatches, pretty-printed values, console logging.
//!
//! Run with `cargo run --example showcase`.

use std::io::{Result, Write};
use std::sync::Arc;

use rand::Rng;

use spiffy::sgr::{DynBackground24, DynForeground8, ResetStyle};
use spiffy::{pretty, separated, ConsoleDestination, Destination, Logger, Severity};

fn main() -> Result<()> {
    let mut stdout = std::io::stdout();

    // A strip of random true colors, then a run through the 8-bit cube.
    let mut rng = rand::rng();
    for _ in 0..32 {
        let color: u32 = rng.random_range(0..=0xff_ffff);
        write!(stdout, "{}  ", DynBackground24::from(color))?;
    }
    writeln!(stdout, "{}", ResetStyle)?;

    for color in 16..=51 {
        write!(stdout, "{}▮", DynForeground8(color))?;
    }
    writeln!(stdout, "{}", ResetStyle)?;

    // Values rendered for humans.
    writeln!(stdout, "{}", pretty(&(1, "hello", 9)))?;
    writeln!(stdout, "{}", pretty(&vec![("one", 1), ("two", 2)]))?;
    writeln!(stdout, "{}", separated!(" | ", 3.14_f32, 42, "hello world"))?;

    // A logger with a filtered console destination.
    let console = Arc::new(ConsoleDestination::new());
    console.set_min_severity(Severity::Info);

    let logger = Logger::new();
    logger.add_destination(console);
    logger.log_debug("this record is filtered out")?;
    logger.log_info("showcase finished")?;
    Ok(())
}
