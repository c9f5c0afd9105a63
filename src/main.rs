#[cfg(all(target_os = "linux", not(feature = "async")))]
mod daemon {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc;
    use std::time::Instant;

    use anyhow::{Context, Result, anyhow};
    use log::LevelFilter;
    use signal_hook::consts::{SIGINT, SIGTERM};

    use raspi_mon::config::Config;
    use raspi_mon::hardware;
    use raspi_mon::input::InputWatcher;
    use raspi_mon::logger;
    use raspi_mon::monitor::Monitor;
    use raspi_mon::st7789::{self, BUF_SIZE, ST7789};
    use raspi_mon::telemetry::ProcTelemetry;

    pub fn run() -> Result<()> {
        let config_path = std::env::args_os().nth(1).map(PathBuf::from);
        let (config, load_error) = match &config_path {
            Some(path) => match Config::load(path) {
                Ok(config) => (config, None),
                Err(e) => (Config::default(), Some(e)),
            },
            None => (Config::default(), None),
        };

        logger::init(&config.log_file, LevelFilter::Info)
            .with_context(|| format!("opening log file {}", config.log_file.display()))?;
        if let Some(e) = load_error {
            log::warn!("{}, using built-in defaults", e);
        }
        log::info!("starting on {}", config.spi_device);

        let shutdown = Arc::new(AtomicBool::new(false));
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&shutdown))
                .context("installing signal handler")?;
        }

        let lines = hardware::open_lines(&config)?;
        let spi = hardware::open_spi(&config.spi_device)?;

        let mut buffer = [0u8; BUF_SIZE];
        let mut panel: hardware::Panel<'_> =
            ST7789::new(st7789::Config::default(), spi, lines.data, lines.reset, &mut buffer);
        panel.init().map_err(|e| anyhow!("panel initialization failed: {}", e))?;

        let (events, receiver) = mpsc::channel();
        let watcher = InputWatcher::new(lines.button, events, Arc::clone(&shutdown))
            .spawn()
            .context("starting input watcher")?;

        let mut monitor = Monitor::new(
            config,
            panel,
            lines.backlight,
            ProcTelemetry::new(),
            receiver,
            Arc::clone(&shutdown),
            Instant::now(),
        );
        monitor.run();

        shutdown.store(true, Ordering::Relaxed);
        if watcher.join().is_err() {
            log::error!("input watcher panicked");
        }
        let (panel, backlight) = monitor.into_parts();
        let (spi, data, reset) = panel.release();
        drop(spi);
        drop((data, reset, backlight));
        log::info!("stopped");
        Ok(())
    }
}

#[cfg(all(target_os = "linux", not(feature = "async")))]
fn main() -> std::process::ExitCode {
    match daemon::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("raspi-mon: {:#}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(all(target_os = "linux", not(feature = "async"))))]
fn main() {
    eprintln!("raspi-mon runs on Linux with the blocking panel driver only");
    std::process::exit(1);
}
