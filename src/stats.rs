use chrono::Local;
use directories::ProjectDirs;
use serde::Serialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::time::{Duration, SystemTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Running keystroke counts for one session.
///
/// `words_typed` starts at 1: the word in progress is pre-counted, and the
/// count moves only when a keystroke crosses a word boundary (forward) or a
/// backspace re-crosses one (backward).
#[derive(Debug)]
pub struct StatsAccumulator {
    pub typed_chars: usize,
    pub correctly_typed: usize,
    pub wrongly_typed: usize,
    pub backspace_typed: usize,
    pub words_typed: usize,
    started_at: SystemTime,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self {
            typed_chars: 0,
            correctly_typed: 0,
            wrongly_typed: 0,
            backspace_typed: 0,
            words_typed: 1,
            started_at: SystemTime::now(),
        }
    }

    pub fn record_keystroke(&mut self, outcome: Outcome, is_word_boundary: bool) {
        if is_word_boundary {
            self.words_typed += 1;
        }
        self.typed_chars += 1;
        match outcome {
            Outcome::Correct => self.correctly_typed += 1,
            Outcome::Incorrect => self.wrongly_typed += 1,
        }
    }

    pub fn record_backspace(&mut self, crossed_word_boundary: bool) {
        self.backspace_typed += 1;
        if crossed_word_boundary && self.words_typed > 1 {
            self.words_typed -= 1;
        }
    }

    pub fn finalize(&self) -> Report {
        self.finalize_with_elapsed(self.started_at.elapsed().unwrap_or_default())
    }

    /// Build the report from an explicit elapsed duration. A zero duration is
    /// clamped to 1ms so words-per-minute stays defined.
    pub fn finalize_with_elapsed(&self, elapsed: Duration) -> Report {
        let elapsed_seconds = elapsed.as_secs_f64().max(0.001);
        let words_per_minute = self.words_typed as f64 / (elapsed_seconds / 60.0);
        let accuracy = if self.typed_chars > 0 {
            (self.correctly_typed as f64 / self.typed_chars as f64 * 100.0).round()
        } else {
            0.0
        };

        Report {
            typed_chars: self.typed_chars,
            correctly_typed: self.correctly_typed,
            wrongly_typed: self.wrongly_typed,
            backspace_typed: self.backspace_typed,
            words_typed: self.words_typed,
            elapsed_seconds,
            words_per_minute,
            accuracy,
        }
    }
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Final session report, printed after the terminal leaves raw mode and
/// optionally appended to the results log.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub typed_chars: usize,
    pub correctly_typed: usize,
    pub wrongly_typed: usize,
    pub backspace_typed: usize,
    pub words_typed: usize,
    pub elapsed_seconds: f64,
    pub words_per_minute: f64,
    pub accuracy: f64,
}

impl Report {
    /// Append this report as one CSV row under the project config dir,
    /// emitting the header if the log does not exist yet.
    pub fn append_to_log(&self) -> io::Result<()> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "tapline") {
            let config_dir = proj_dirs.config_dir();
            let log_path = config_dir.join("results.csv");

            std::fs::create_dir_all(config_dir)?;

            let needs_header = !log_path.exists();

            let mut log_file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(log_path)?;

            if needs_header {
                writeln!(
                    log_file,
                    "date,typed_chars,correct,incorrect,backspaces,words,elapsed_secs,wpm,accuracy"
                )?;
            }

            writeln!(
                log_file,
                "{},{},{},{},{},{},{:.2},{:.2},{}",
                Local::now().format("%c"),
                self.typed_chars,
                self.correctly_typed,
                self.wrongly_typed,
                self.backspace_typed,
                self.words_typed,
                self.elapsed_seconds,
                self.words_per_minute,
                self.accuracy,
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "characters typed: {}", self.typed_chars)?;
        writeln!(f, "correct:          {}", self.correctly_typed)?;
        writeln!(f, "incorrect:        {}", self.wrongly_typed)?;
        writeln!(f, "backspaces:       {}", self.backspace_typed)?;
        writeln!(f, "words:            {}", self.words_typed)?;
        writeln!(f, "accuracy:         {}%", self.accuracy)?;
        writeln!(f, "elapsed:          {:.2}s", self.elapsed_seconds)?;
        write!(f, "wpm:              {:.2}", self.words_per_minute)
    }
}
