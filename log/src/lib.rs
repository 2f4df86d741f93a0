//! A thin facade over `tracing` for code that builds log messages lazily:
//! every method takes a message-producing closure and only runs it if the
//! corresponding level is currently enabled.

use std::{any::type_name, env, error::Error};

use log::{enabled, event, level_filters::LevelFilter, Level};
use tracing_subscriber::filter::Targets;

/// The lib crates of this workspace, as log targets.
pub static SUNDRY_MODULES: &[&str] = &["sundry_log", "sundry_utils"];

pub const ENV: &str = "RUST_LOG";

/// A named logging handle.
///
/// The name is supplied explicitly at construction (or derived statically
/// from a type via [`Logger::for_type`]) and travels as a structured
/// `logger` field on every emitted event.
pub struct Logger {
    name: String,
}

macro_rules! leveled {
    ($level: expr, $single: ident, $each: ident, $with_cause: ident) => {
        pub fn $single(&self, message: impl FnOnce() -> String) {
            if enabled!($level) {
                event!($level, logger = %self.name, "{}", message());
            }
        }

        pub fn $each(&self, messages: impl FnOnce() -> Vec<String>) {
            if enabled!($level) {
                for message in messages() {
                    event!($level, logger = %self.name, "{}", message);
                }
            }
        }

        pub fn $with_cause(&self, cause: &dyn Error, message: impl FnOnce() -> String) {
            if enabled!($level) {
                event!($level, logger = %self.name, cause = %cause, "{}", message());
            }
        }
    };
}

impl Logger {
    pub fn named(name: impl Into<String>) -> Self {
        Logger { name: name.into() }
    }

    /// A logger named after `T`. `std::any::type_name` resolves the name
    /// at compile time, so no runtime introspection is involved.
    pub fn for_type<T: ?Sized>() -> Self {
        Logger {
            name: type_name::<T>().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // For every level: a lazy single message, a lazy message list, and a
    // lazy message with an error cause. A masked level evaluates none of
    // the closures.
    leveled!(Level::ERROR, error, error_each, error_with_cause);
    leveled!(Level::WARN, warn, warn_each, warn_with_cause);
    leveled!(Level::INFO, info, info_each, info_with_cause);
    leveled!(Level::DEBUG, debug, debug_each, debug_with_cause);
    leveled!(Level::TRACE, trace, trace_each, trace_with_cause);
}

pub trait TargetsExt {
    /// Enables all of this workspace's crates at `level`.
    fn with_sundry_targets(self, level: LevelFilter) -> Self;
    /// Folds `RUST_LOG`-style directives from the environment into the
    /// filter. The pseudo-target `sundry` expands to all workspace crates;
    /// malformed directives are skipped.
    fn with_env(self) -> Self;
}

impl TargetsExt for Targets {
    fn with_sundry_targets(mut self, level: LevelFilter) -> Targets {
        for &module in SUNDRY_MODULES {
            self = self.with_target(module, level);
        }
        self
    }

    fn with_env(mut self) -> Targets {
        let directives = match env::var(ENV) {
            Ok(directives) => directives,
            Err(_) => return self,
        };
        for directive in directives.split(',') {
            let (target, level) = match directive.split_once('=') {
                Some((target, level)) => (Some(target), level),
                None => (None, directive),
            };
            let level: LevelFilter = match level.parse() {
                Ok(level) => level,
                Err(_) => continue,
            };
            self = match target {
                Some("sundry") => self.with_sundry_targets(level),
                Some(target) => self.with_target(target, level),
                None => self.with_default(level),
            };
        }
        self
    }
}
