use crate::logging;
use crate::profiling::{self, ProfilingBackend};

/// Runtime configuration for hosts embedding Linea.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive, e.g. `"info"` or `"linea=trace"`.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: logging::DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Install logging and, if requested, start profiling.
    pub fn apply(&self) {
        logging::init_with_filter(&self.log_filter);
        match self.profiling {
            ProfilingMode::Off => {}
            ProfilingMode::On => puffin::set_scopes_on(true),
            ProfilingMode::WithWebserver => {
                profiling::init_profiling(ProfilingBackend::PuffinHttp)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to 'puffin_viewer' over HTTP
    WithWebserver,
}
