//! Debug logging
//!
//! Only debug builds log. Output goes to a file under the cache directory so
//! it never interferes with the terminal UI or with script output on stdout.
//! The filter is read from `QUICKSEARCH_LOG` (default `debug`).

use std::path::PathBuf;

pub const LOG_ENV: &str = "QUICKSEARCH_LOG";

/// Location of the debug log
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("quicksearch").join("debug.log"))
}

/// Install the file logger. Does nothing in release builds.
pub fn init() {
    #[cfg(debug_assertions)]
    {
        use std::fs::{self, File};
        use std::io::Write;

        let Some(path) = log_file_path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            if fs::create_dir_all(dir).is_err() {
                return;
            }
        }
        let Ok(file) = File::create(&path) else {
            return;
        };

        let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();
    }
}
