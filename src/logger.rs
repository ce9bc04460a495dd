use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

// Uses 'log' to allow for logging
// The error level for specific modules can be specified
// Logging is done by logging the level, target and the given arguments
// Records go to stderr, stdout is reserved for the listing
struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level()
            <= match metadata.target() {
                target if target.starts_with("tacc_lib::lexer") => Level::Info,
                target if target.starts_with("tacc_lib::parser") => Level::Info,
                _ => Level::Trace,
            }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let output = format!(
                "{} - {} - {}",
                record.level(),
                record.target(),
                record.args()
            );

            match record.level() {
                Level::Error => eprintln!("{}", output.red()),
                Level::Warn => eprintln!("{}", output.purple()),
                Level::Info => eprintln!("{}", output.blue()),
                _ => eprintln!("{}", output),
            }
        }
    }

    fn flush(&self) {}
}

pub fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Initializes 'log' with the custom logger
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
static LOGGER: SimpleLogger = SimpleLogger;
