//! Append-only log file behind the `log` facade.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

/// Writes `YYYY-MM-DD HH:MM:SS LEVEL message` lines, local time.
pub struct FileLogger<W: Write + Send> {
    level: LevelFilter,
    out: Mutex<W>,
}

impl<W: Write + Send> FileLogger<W> {
    pub fn new(out: W, level: LevelFilter) -> Self {
        Self {
            level,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Log for FileLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // nowhere left to report a failing log file
        let _ = writeln!(
            out,
            "{} {} {}",
            Local::now().format("%F %T"),
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Install a [`FileLogger`] appending to `path` as the global logger.
pub fn init(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let logger: &'static FileLogger<_> = Box::leak(Box::new(FileLogger::new(file, level)));
    log::set_logger(logger).map_err(io::Error::other)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn writes_timestamped_lines() {
        let logger = FileLogger::new(Vec::new(), LevelFilter::Info);
        logger.log(
            &Record::builder()
                .args(format_args!("SPI transfer failed"))
                .level(Level::Error)
                .build(),
        );
        let text = String::from_utf8(logger.into_inner()).unwrap();
        let line = text.lines().next().unwrap();
        // "2024-05-01 12:00:00 ERROR SPI transfer failed"
        assert_eq!(line.len(), 19 + " ERROR SPI transfer failed".len());
        assert!(line.ends_with(" ERROR SPI transfer failed"));
        assert_eq!(&line[4..5], "-");
        assert_eq!(&line[10..11], " ");
        assert_eq!(&line[13..14], ":");
    }

    #[test]
    fn drops_records_above_level() {
        let logger = FileLogger::new(Vec::new(), LevelFilter::Info);
        logger.log(&Record::builder().args(format_args!("noise")).level(Level::Debug).build());
        logger.log(&Record::builder().args(format_args!("started")).level(Level::Info).build());
        let text = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with("INFO started\n"));
    }
}
