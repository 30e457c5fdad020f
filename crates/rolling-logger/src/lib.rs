//! Rolling File Logger
//!
//! Writes tracing (and `log`) output to one file per day under a log
//! directory, keeps only the newest files, and mirrors every line into a
//! fixed-capacity ring buffer so the app can show recent diagnostics.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use chrono::{Local, NaiveDate};
use tracing_subscriber::fmt::writer::MakeWriter;

/// Number of daily log files kept on disk.
pub const MAX_LOG_FILES: usize = 7;

/// Number of lines kept in the in-memory ring buffer.
pub const RECENT_LINES_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Install the global logger writing into `log_dir`.
///
/// Both `tracing` events and `log` records end up in the same files.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    let logger = RollingLogger::open(log_dir, app_name)?;

    tracing_subscriber::fmt()
        .with_writer(logger.clone())
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    LOGGER.set(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::info!("{} logger started", app_name);
    Ok(())
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::error!("{}", message);
    Ok(())
}

/// Most recent log lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent_lines).unwrap_or_default()
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

/// Daily-rotating log sink; cheap to clone.
#[derive(Clone)]
pub struct RollingLogger {
    inner: Arc<Mutex<LoggerState>>,
}

struct LoggerState {
    dir: PathBuf,
    app_name: String,
    date: NaiveDate,
    file: File,
    recent: RecentLines,
}

impl RollingLogger {
    pub fn open(dir: impl Into<PathBuf>, app_name: &str) -> Result<Self, LoggerError> {
        Self::open_on(dir.into(), app_name, Local::now().date_naive(), RECENT_LINES_CAPACITY)
    }

    fn open_on(
        dir: PathBuf,
        app_name: &str,
        date: NaiveDate,
        capacity: usize,
    ) -> Result<Self, LoggerError> {
        fs::create_dir_all(&dir)?;
        let file = open_log_file(&dir, app_name, date)?;
        prune_old_logs(&dir, app_name, MAX_LOG_FILES)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(LoggerState {
                dir,
                app_name: app_name.to_string(),
                date,
                file,
                recent: RecentLines::new(capacity),
            })),
        })
    }

    /// Path of the file currently being written.
    pub fn current_file(&self) -> PathBuf {
        let state = self.lock();
        log_file_path(&state.dir, &state.app_name, state.date)
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().recent.lines()
    }

    fn write_on(&self, date: NaiveDate, buf: &[u8]) -> io::Result<()> {
        let mut state = self.lock();
        if date != state.date {
            state.file.flush()?;
            state.file = open_log_file(&state.dir, &state.app_name, date)?;
            state.date = date;
            prune_old_logs(&state.dir, &state.app_name, MAX_LOG_FILES)?;
        }
        state.file.write_all(buf)?;
        state.recent.push(buf);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        // A panic while holding the lock leaves the state usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<'a> MakeWriter<'a> for RollingLogger {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter {
            logger: self.clone(),
        }
    }
}

/// Writer handed out per event by [`RollingLogger`].
pub struct RollingWriter {
    logger: RollingLogger,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logger.write_on(Local::now().date_naive(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.logger.lock().file.flush()
    }
}

/// Fixed-capacity line buffer that drops the oldest lines when full.
struct RecentLines {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RecentLines {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    fn push(&mut self, buf: &[u8]) {
        if self.capacity == 0 {
            return;
        }
        for line in String::from_utf8_lossy(buf).lines() {
            if line.trim().is_empty() {
                continue;
            }
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(line.to_string());
        }
    }

    fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

fn log_file_path(dir: &Path, app_name: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}-{}.log", app_name, date.format("%Y-%m-%d")))
}

fn open_log_file(dir: &Path, app_name: &str, date: NaiveDate) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(dir, app_name, date))
}

/// Delete the oldest `<app>-<date>.log` files beyond `keep`.
fn prune_old_logs(dir: &Path, app_name: &str, keep: usize) -> io::Result<()> {
    let prefix = format!("{}-", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".log"))
        })
        .collect();

    if logs.len() <= keep {
        return Ok(());
    }

    // ISO dates in the file name sort chronologically.
    logs.sort();
    let excess = logs.len() - keep;
    for path in logs.into_iter().take(excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}
