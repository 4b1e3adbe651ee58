use std::io::Write;

use env_logger::{Builder, Env, fmt::Color};
use log::{Level, LevelFilter};

/// Environment variable overriding the command-line verbosity level.
const LOG_ENV_VAR: &str = "MENDEL_LOG";

#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Install the global logger, with a console format of the form
    /// `[<local time> <LEVEL> <target>] <message>`. Error records additionally
    /// carry the file and line they were emitted from.
    ///
    /// # Arguments
    /// - `verbosity`: requested verbosity (0 = Error ... 4+ = Trace). The
    ///   `MENDEL_LOG` environment variable takes precedence when set.
    ///
    /// # Panics
    /// - if a global logger was already installed.
    pub fn init(verbosity: u8) {
        let env = Env::default().filter(LOG_ENV_VAR);
        Builder::new()
            .filter_level(Self::u8_to_loglevel(verbosity))
            .format(|buf, record| {
                let traceback = match record.level() {
                    Level::Error => format!(
                        "(@ {}:{}) ",
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0)
                    ),
                    _ => String::new(),
                };

                let mut level_style = buf.style();
                level_style.set_bold(true).set_color(match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan,
                });

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    record.args()
                )
            })
            .parse_env(env)
            .try_init()
            .expect("Failed to initialize logger");
    }

    /// Map a command-line verbosity count to a log level filter.
    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0           => LevelFilter::Error,
            1           => LevelFilter::Warn,
            2           => LevelFilter::Info,
            3           => LevelFilter::Debug,
            4..=u8::MAX => LevelFilter::Trace,
        }
    }

    /// Update the maximum level of the already-installed logger.
    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level() {
        Logger::init(0);
        for level in 0..u8::MAX {
            Logger::set_level(level);

            let expected_level = match level {
                0           => LevelFilter::Error,
                1           => LevelFilter::Warn,
                2           => LevelFilter::Info,
                3           => LevelFilter::Debug,
                4..=u8::MAX => LevelFilter::Trace,
            };

            assert_eq!(log::max_level(), expected_level);
        }
    }
}
