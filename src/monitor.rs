//! The update scheduler and the state it owns.
//!
//! [`Monitor`] is built once at startup from the resolved [`Config`]. It owns
//! the panel, the backlight line, the interface counters and the power
//! machine; the input watcher only reaches it through the event channel.
//!
//! Startup draws the static layout into a full framebuffer, flushes it, then
//! waits for interface addresses while the volatile fields already tick.
//! After a second full flush the loop refreshes only field regions.

use core::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_hal::digital::OutputPin;

use crate::cadence::Cadence;
use crate::config::Config;
use crate::font::{self, GLYPH_HEIGHT};
use crate::format;
use crate::framebuffer::{FieldBuffer, Framebuffer};
use crate::layout::{self, FRAMES, Field, LABELS, Region, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::power::{Backlight, Event, PowerMachine};
use crate::telemetry::{NetCounters, Telemetry};

/// Address lookups before unresolved interfaces are given up on.
pub const ADDRESS_ATTEMPTS: u32 = 120;
pub const ADDRESS_RETRY: Duration = Duration::from_secs(1);

const WAITING: &str = "Waiting...";
const NOT_READY: &str = "Device not ready";
const NOT_AVAILABLE: &str = "N/A";

const NET_FIELDS: [[Field; 2]; 2] = [[Field::Net1Rx, Field::Net1Tx], [Field::Net2Rx, Field::Net2Tx]];
const NET_LABEL_Y: [u16; 2] = [layout::NET1_LABEL_Y, layout::NET2_LABEL_Y];
const NET_DATA_Y: [u16; 2] = [layout::NET1_DATA_Y, layout::NET2_DATA_Y];
const FS_FIELDS: [Field; 2] = [Field::Fs1, Field::Fs2];
const FS_Y: [u16; 2] = [layout::FS1_Y, layout::FS2_Y];

/// Sink for finished pixel regions.
pub trait Panel {
    type Error: fmt::Display;

    fn draw_region(&mut self, region: Region, pixels: &[u16]) -> Result<(), Self::Error>;
}

#[cfg(not(feature = "async"))]
mod panel_impl {
    use core::fmt::Debug;

    use embedded_hal::digital::OutputPin;
    use embedded_hal::spi::SpiDevice;

    use super::Panel;
    use crate::layout::Region;
    use crate::st7789::{self, ST7789, Timer};

    impl<'b, SPI, DC, RST, E, PE, TIMER> Panel for ST7789<'b, SPI, DC, RST, TIMER>
    where
        SPI: SpiDevice<Error = E>,
        DC: OutputPin<Error = PE>,
        RST: OutputPin<Error = PE>,
        TIMER: Timer,
        E: Debug,
        PE: Debug,
    {
        type Error = st7789::Error<E, PE>;

        fn draw_region(&mut self, region: Region, pixels: &[u16]) -> Result<(), Self::Error> {
            ST7789::draw_region(self, region, pixels)
        }
    }
}

#[derive(Debug)]
pub enum UpdateError<E> {
    Glyph(font::Error),
    Panel(E),
}

impl<E: fmt::Display> fmt::Display for UpdateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Glyph(e) => write!(f, "{}", e),
            UpdateError::Panel(e) => write!(f, "{}", e),
        }
    }
}

pub struct Monitor<P, BL, T> {
    config: Config,
    panel: P,
    backlight: BL,
    telemetry: T,
    power: PowerMachine,
    counters: [NetCounters; 2],
    fields: [FieldBuffer; 11],
    fs_present: [bool; 2],
    last_fs_update: Option<Instant>,
    failures: u64,
    events: Receiver<Event>,
    shutdown: Arc<AtomicBool>,
}

impl<P, BL, T> Monitor<P, BL, T>
where
    P: Panel,
    BL: OutputPin,
    BL::Error: fmt::Debug,
    T: Telemetry,
{
    pub fn new(
        config: Config,
        panel: P,
        backlight: BL,
        telemetry: T,
        events: Receiver<Event>,
        shutdown: Arc<AtomicBool>,
        now: Instant,
    ) -> Self {
        let power = PowerMachine::new(now, config.sleep_after);
        Self {
            config,
            panel,
            backlight,
            telemetry,
            power,
            counters: [NetCounters::default(); 2],
            fields: Field::ALL.map(|field| FieldBuffer::new(field.region())),
            fs_present: [false; 2],
            last_fs_update: None,
            failures: 0,
            events,
            shutdown,
        }
    }

    pub fn power(&self) -> &PowerMachine {
        &self.power
    }

    /// Failed field and flush writes since startup.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Which filesystems answered the startup probe.
    pub fn fs_present(&self) -> [bool; 2] {
        self.fs_present
    }

    pub fn into_parts(self) -> (P, BL) {
        (self.panel, self.backlight)
    }

    fn running(&self) -> bool {
        !self.shutdown.load(Ordering::Relaxed)
    }

    pub fn run(&mut self) {
        self.warm_counters();
        let mut screen = self.compose_static();
        self.flush(&screen);

        self.resolve_addresses(&mut screen, ADDRESS_ATTEMPTS, ADDRESS_RETRY);
        if !self.running() {
            return;
        }
        self.flush(&screen);
        log::info!("static layout done, entering update loop");

        let mut cadence = Cadence::new(subsec_nanos());
        while self.running() {
            self.step(Instant::now());
            let sleep = cadence.next_sleep(subsec_nanos());
            self.wait(sleep);
        }
        log::info!("update loop stopped, {} failed writes", self.failures);
    }

    /// One scheduler iteration at `now`. Returns the number of failed field
    /// writes.
    pub fn step(&mut self, now: Instant) -> usize {
        self.drain_events();
        if !self.power.updates_enabled() {
            return 0;
        }

        let mut failed = self.refresh_volatile();
        if self.fs_due(now) {
            failed += self.refresh_filesystems();
            self.last_fs_update = Some(now);
        }

        if let Some(change) = self.power.tick(now) {
            log::info!("no interaction for {:?}, going idle", self.config.sleep_after);
            self.set_backlight(change);
        }

        if failed > 0 {
            log::warn!("{} field updates failed this frame", failed);
        }
        failed
    }

    /// Read the interface counters once so the first delta is a rate.
    pub fn warm_counters(&mut self) {
        for (i, device) in self.config.net_devices.iter().enumerate() {
            if !device.enabled {
                continue;
            }
            if let Some(counters) = self.telemetry.net_counters(&device.name) {
                self.counters[i] = counters;
            }
        }
    }

    pub fn update_field(&mut self, field: Field, text: &str) -> Result<(), UpdateError<P::Error>> {
        let palette = self.config.palette;
        let buffer = &mut self.fields[field.index()];
        buffer
            .render(&font::sanitize(text), palette.data, palette.window)
            .map_err(UpdateError::Glyph)?;
        self.panel
            .draw_region(buffer.region(), buffer.pixels())
            .map_err(UpdateError::Panel)
    }

    fn show(&mut self, field: Field, text: &str) -> usize {
        match self.update_field(field, text) {
            Ok(()) => 0,
            Err(e) => {
                log::error!("updating {:?} failed: {}", field, e);
                self.failures += 1;
                1
            }
        }
    }

    fn refresh_volatile(&mut self) -> usize {
        let mut failed = 0;

        let clock = self.telemetry.local_time().format("%F %T").to_string();
        failed += self.show(Field::Clock, &clock);

        for i in 0..2 {
            if !self.config.net_devices[i].enabled {
                continue;
            }
            let [rx, tx] = NET_FIELDS[i];
            let Some(current) = self.telemetry.net_counters(&self.config.net_devices[i].name) else {
                skipped(rx);
                continue;
            };
            let previous = core::mem::replace(&mut self.counters[i], current);
            failed += self.show(rx, &format::byte_rate(current.rx_bytes.saturating_sub(previous.rx_bytes)));
            failed += self.show(tx, &format::byte_rate(current.tx_bytes.saturating_sub(previous.tx_bytes)));
        }

        match self.telemetry.load_average() {
            Some(load) => failed += self.show(Field::Cpu, &format::percent(format::load_percent(load))),
            None => skipped(Field::Cpu),
        }

        let memory = self
            .telemetry
            .memory()
            .and_then(|m| format::memory_percent(m.total_kb, m.available_kb));
        match memory {
            Some(used) => failed += self.show(Field::Ram, &format::percent(used)),
            None => skipped(Field::Ram),
        }

        match self.telemetry.temperature() {
            Some(milli) => failed += self.show(Field::Temperature, &format::temperature(milli)),
            None => skipped(Field::Temperature),
        }

        match self.telemetry.uptime() {
            Some(seconds) => failed += self.show(Field::Uptime, &format::uptime(seconds)),
            None => skipped(Field::Uptime),
        }

        failed
    }

    fn fs_due(&self, now: Instant) -> bool {
        match self.last_fs_update {
            None => true,
            Some(at) => now.saturating_duration_since(at) > self.config.update_fs_time,
        }
    }

    fn refresh_filesystems(&mut self) -> usize {
        let mut failed = 0;
        for i in 0..2 {
            if !self.fs_present[i] {
                continue;
            }
            let usage = self
                .telemetry
                .fs_stats(&self.config.filesystems[i])
                .and_then(|s| format::usage_percent(s.blocks, s.free_blocks));
            match usage {
                Some(used) => failed += self.show(FS_FIELDS[i], &format::percent(used)),
                None => skipped(FS_FIELDS[i]),
            }
        }
        failed
    }

    /// Draw everything that does not change per frame and probe the
    /// configured filesystems.
    pub fn compose_static(&mut self) -> Framebuffer {
        let palette = self.config.palette;
        let (fixed, label, window) = (palette.fixed, palette.label, palette.window);
        let mut screen = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, palette.background);

        for frame in FRAMES {
            screen.rounded_rect(frame, window);
        }

        match self.telemetry.hostname() {
            Some(name) => put_centered(&mut screen, layout::NAME_Y, &name, fixed, window),
            None => log::warn!("host name unavailable"),
        }

        for (i, device) in self.config.net_devices.iter().enumerate() {
            if !device.enabled {
                continue;
            }
            let y = NET_LABEL_Y[i];
            put(&mut screen, layout::NET_LABEL_X, y, &device.name, label, window);
            put_centered(&mut screen, NET_DATA_Y[i], WAITING, fixed, window);
            put(&mut screen, layout::NET_RX_LABEL_X, y, "RX", label, window);
            put(&mut screen, layout::NET_TX_LABEL_X, y, "TX", label, window);
        }

        for l in LABELS {
            put(&mut screen, l.x, l.y, l.text, label, window);
        }
        let degree = font::DEGREE.to_string();
        put(&mut screen, layout::DEGREE_X, layout::TEMP_Y, &degree, palette.data, window);

        for i in 0..2 {
            let path = &self.config.filesystems[i];
            let stats = if path.is_empty() {
                None
            } else {
                self.telemetry.fs_stats(path)
            };
            self.fs_present[i] = stats.is_some();
            let text = match stats {
                Some(stats) => format::capacity(stats.capacity_bytes()),
                None => NOT_AVAILABLE.to_string(),
            };
            put(&mut screen, layout::FS_CAPACITY_X, FS_Y[i], &text, fixed, window);
        }

        screen
    }

    /// Transfer a whole-screen buffer. Returns the number of failed writes.
    pub fn flush(&mut self, screen: &Framebuffer) -> usize {
        match self.panel.draw_region(Region::full_screen(), screen.pixels()) {
            Ok(()) => 0,
            Err(e) => {
                log::error!("full screen flush failed: {}", e);
                self.failures += 1;
                1
            }
        }
    }

    /// Poll interface addresses up to `attempts` times, `retry` apart,
    /// drawing each enabled interface's IPv4 address on its data line.
    /// Interfaces still unresolved afterwards are marked not ready.
    pub fn resolve_addresses(&mut self, screen: &mut Framebuffer, attempts: u32, retry: Duration) {
        let enabled = self.config.net_devices.each_ref().map(|d| d.enabled);
        if !enabled.contains(&true) {
            return;
        }
        let (fixed, window) = (self.config.palette.fixed, self.config.palette.window);
        let mut ready = [false; 2];

        for _ in 0..attempts {
            if !self.running() {
                return;
            }
            self.wait(retry);
            if !self.running() {
                return;
            }

            let addrs = match self.telemetry.ipv4_addresses() {
                Ok(addrs) => addrs,
                Err(e) => {
                    log::error!("listing interface addresses failed: {}", e);
                    continue;
                }
            };
            for entry in &addrs {
                for i in 0..2 {
                    if enabled[i] && entry.interface == self.config.net_devices[i].name {
                        clear_data_line(screen, NET_DATA_Y[i], window);
                        put_centered(screen, NET_DATA_Y[i], &entry.addr.to_string(), fixed, window);
                        ready[i] = true;
                    }
                }
            }
            if (0..2).all(|i| !enabled[i] || ready[i]) {
                log::info!("interface addresses resolved");
                return;
            }

            self.step(Instant::now());
        }

        for i in 0..2 {
            if enabled[i] && !ready[i] {
                log::warn!("{} has no IPv4 address", self.config.net_devices[i].name);
                clear_data_line(screen, NET_DATA_Y[i], window);
                put_centered(screen, NET_DATA_Y[i], NOT_READY, fixed, window);
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    /// Sleep for `duration`, applying input events as they arrive.
    fn wait(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            match self.events.recv_timeout(remaining) {
                Ok(event) => self.apply(event),
                Err(RecvTimeoutError::Timeout) => return,
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(remaining);
                    return;
                }
            }
        }
    }

    fn apply(&mut self, event: Event) {
        if !self.power.updates_enabled() {
            log::info!("button pressed, waking up");
        }
        let change = self.power.handle(event);
        self.set_backlight(change);
    }

    fn set_backlight(&mut self, change: Backlight) {
        let result = match change {
            Backlight::On => self.backlight.set_high(),
            Backlight::Off => self.backlight.set_low(),
        };
        if let Err(e) = result {
            log::error!("switching backlight {:?} failed: {:?}", change, e);
        }
    }
}

fn skipped(field: Field) {
    log::debug!("{:?} source unavailable, skipped", field);
}

fn subsec_nanos() -> u32 {
    Utc::now().timestamp_subsec_nanos()
}

fn put(screen: &mut Framebuffer, x: u16, y: u16, text: &str, color: Rgb565, background: Rgb565) {
    if let Err(e) = screen.draw_text(x, y, &font::sanitize(text), color, background) {
        log::warn!("drawing {:?} failed: {}", text, e);
    }
}

fn put_centered(screen: &mut Framebuffer, y: u16, text: &str, color: Rgb565, background: Rgb565) {
    let width = u16::try_from(font::text_width(text)).unwrap_or(u16::MAX);
    put(screen, layout::centered_x(width), y, text, color, background);
}

/// Blank an interface data line inside the network window, clear of its
/// rounded corners.
fn clear_data_line(screen: &mut Framebuffer, y: u16, window: Rgb565) {
    let frame = FRAMES[1];
    for row in y..y + GLYPH_HEIGHT as u16 {
        screen.h_line(frame.x + 4, frame.x + frame.w - 4, row, window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::io;
    use std::net::Ipv4Addr;
    use std::rc::Rc;
    use std::sync::mpsc::{self, Sender};

    use chrono::{DateTime, Local, TimeZone};
    use embedded_hal::digital::ErrorType;

    use crate::config::{NetDevice, Palette};
    use crate::telemetry::{FsStats, InterfaceAddr, MemInfo};

    #[derive(Clone, Default)]
    struct FakePanel {
        draws: Rc<RefCell<Vec<(Region, Vec<u16>)>>>,
        fail: Rc<Cell<bool>>,
    }

    impl FakePanel {
        fn regions(&self) -> Vec<Region> {
            self.draws.borrow().iter().map(|(r, _)| *r).collect()
        }

        fn last_pixels(&self, region: Region) -> Option<Vec<u16>> {
            self.draws
                .borrow()
                .iter()
                .rev()
                .find(|(r, _)| *r == region)
                .map(|(_, p)| p.clone())
        }
    }

    impl Panel for FakePanel {
        type Error = String;

        fn draw_region(&mut self, region: Region, pixels: &[u16]) -> Result<(), String> {
            self.draws.borrow_mut().push((region, pixels.to_vec()));
            if self.fail.get() {
                return Err("bus down".into());
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeBacklight {
        on: Rc<Cell<Option<bool>>>,
    }

    impl ErrorType for FakeBacklight {
        type Error = Infallible;
    }

    impl OutputPin for FakeBacklight {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.on.set(Some(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.on.set(Some(true));
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeTelemetry {
        net: Rc<RefCell<HashMap<String, NetCounters>>>,
        fs: Rc<RefCell<HashMap<String, FsStats>>>,
        fs_probes: Rc<RefCell<Vec<String>>>,
        addrs: Rc<RefCell<Vec<InterfaceAddr>>>,
        addr_queries: Rc<Cell<usize>>,
        temperature: Rc<Cell<Option<i64>>>,
    }

    impl FakeTelemetry {
        fn set_counters(&self, interface: &str, rx_bytes: i64, tx_bytes: i64) {
            self.net
                .borrow_mut()
                .insert(interface.into(), NetCounters { rx_bytes, tx_bytes });
        }
    }

    impl Telemetry for FakeTelemetry {
        fn load_average(&self) -> Option<f64> {
            Some(1.0)
        }

        fn memory(&self) -> Option<MemInfo> {
            Some(MemInfo {
                total_kb: 1000,
                available_kb: 750,
            })
        }

        fn temperature(&self) -> Option<i64> {
            self.temperature.get()
        }

        fn uptime(&self) -> Option<u64> {
            Some(3661)
        }

        fn net_counters(&self, interface: &str) -> Option<NetCounters> {
            self.net.borrow().get(interface).copied()
        }

        fn fs_stats(&self, path: &str) -> Option<FsStats> {
            self.fs_probes.borrow_mut().push(path.into());
            self.fs.borrow().get(path).copied()
        }

        fn hostname(&self) -> Option<String> {
            Some("raspberrypi".into())
        }

        fn ipv4_addresses(&self) -> io::Result<Vec<InterfaceAddr>> {
            self.addr_queries.set(self.addr_queries.get() + 1);
            Ok(self.addrs.borrow().clone())
        }

        fn local_time(&self) -> DateTime<Local> {
            Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).earliest().unwrap()
        }
    }

    struct Rig {
        monitor: Monitor<FakePanel, FakeBacklight, FakeTelemetry>,
        panel: FakePanel,
        backlight: FakeBacklight,
        telemetry: FakeTelemetry,
        events: Sender<Event>,
        shutdown: Arc<AtomicBool>,
        t0: Instant,
    }

    fn rig(config: Config) -> Rig {
        let panel = FakePanel::default();
        let backlight = FakeBacklight::default();
        let telemetry = FakeTelemetry::default();
        telemetry.temperature.set(Some(48_312));
        telemetry.set_counters("eth0", 1000, 2000);
        telemetry.fs.borrow_mut().insert(
            "/".into(),
            FsStats {
                blocks: 1000,
                free_blocks: 250,
                fragment_size: 4096,
            },
        );
        let (events, rx) = mpsc::channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let t0 = Instant::now();
        let monitor = Monitor::new(
            config,
            panel.clone(),
            backlight.clone(),
            telemetry.clone(),
            rx,
            shutdown.clone(),
            t0,
        );
        Rig {
            monitor,
            panel,
            backlight,
            telemetry,
            events,
            shutdown,
            t0,
        }
    }

    fn rendered(text: &str) -> Vec<u16> {
        let palette = Palette::default();
        font::rasterize(text, palette.data, palette.window).unwrap()
    }

    #[test]
    fn first_frame_updates_every_enabled_field() {
        let mut rig = rig(Config::default());
        rig.monitor.compose_static();
        assert_eq!(rig.monitor.fs_present(), [true, false]);

        assert_eq!(rig.monitor.step(rig.t0), 0);
        let expected: Vec<Region> = [
            Field::Clock,
            Field::Net1Rx,
            Field::Net1Tx,
            Field::Cpu,
            Field::Ram,
            Field::Temperature,
            Field::Uptime,
            Field::Fs1,
        ]
        .iter()
        .map(|f| f.region())
        .collect();
        assert_eq!(rig.panel.regions(), expected);
        assert_eq!(
            rig.panel.last_pixels(Field::Clock.region()),
            Some(rendered("2024-05-01 12:00:00"))
        );
        assert_eq!(rig.panel.last_pixels(Field::Cpu.region()), Some(rendered(" 25%")));
        assert_eq!(rig.panel.last_pixels(Field::Ram.region()), Some(rendered(" 25%")));
        assert_eq!(rig.panel.last_pixels(Field::Temperature.region()), Some(rendered("48")));
        assert_eq!(
            rig.panel.last_pixels(Field::Uptime.region()),
            Some(rendered(" 01:01:01H"))
        );
        assert_eq!(rig.panel.last_pixels(Field::Fs1.region()), Some(rendered(" 75%")));
    }

    #[test]
    fn filesystem_fields_wait_for_refresh_interval() {
        let mut rig = rig(Config::default());
        rig.monitor.compose_static();
        let fs1 = Field::Fs1.region();
        let fs1_draws = |panel: &FakePanel| panel.regions().iter().filter(|r| **r == fs1).count();

        rig.monitor.step(rig.t0);
        rig.monitor.step(rig.t0 + Duration::from_secs(1));
        rig.monitor.step(rig.t0 + Duration::from_secs(300));
        assert_eq!(fs1_draws(&rig.panel), 1);

        rig.monitor.step(rig.t0 + Duration::from_secs(301));
        assert_eq!(fs1_draws(&rig.panel), 2);
    }

    #[test]
    fn empty_filesystem_path_is_never_probed() {
        let mut rig = rig(Config::default());
        rig.monitor.compose_static();
        rig.monitor.step(rig.t0);
        assert!(rig.telemetry.fs_probes.borrow().iter().all(|p| p == "/"));
    }

    #[test]
    fn counter_deltas_pass_through_resets() {
        let mut rig = rig(Config::default());
        rig.monitor.warm_counters();

        rig.telemetry.set_counters("eth0", 1500, 2000);
        rig.monitor.step(rig.t0);
        assert_eq!(rig.panel.last_pixels(Field::Net1Rx.region()), Some(rendered("500B")));
        assert_eq!(rig.panel.last_pixels(Field::Net1Tx.region()), Some(rendered("  0B")));

        // 1500 -> 1300 reads as -200 and is cut to the field width
        rig.telemetry.set_counters("eth0", 1300, 2000);
        rig.monitor.step(rig.t0 + Duration::from_secs(1));
        assert_eq!(rig.panel.last_pixels(Field::Net1Rx.region()), Some(rendered("-200")));
    }

    #[test]
    fn disabled_interface_is_not_drawn() {
        let mut rig = rig(Config::default());
        rig.telemetry.set_counters("wlan0", 5, 5);
        rig.monitor.step(rig.t0);
        let regions = rig.panel.regions();
        assert!(!regions.contains(&Field::Net2Rx.region()));
        assert!(!regions.contains(&Field::Net2Tx.region()));
    }

    #[test]
    fn unavailable_source_is_skipped_without_failure() {
        let mut rig = rig(Config::default());
        rig.telemetry.temperature.set(None);
        assert_eq!(rig.monitor.step(rig.t0), 0);
        assert!(!rig.panel.regions().contains(&Field::Temperature.region()));
        assert_eq!(rig.monitor.failures(), 0);
    }

    #[test]
    fn failed_writes_are_counted_and_do_not_stop_the_frame() {
        let mut rig = rig(Config::default());
        rig.panel.fail.set(true);
        // clock, rx, tx, cpu, ram, temp, uptime; fs1 was never probed
        assert_eq!(rig.monitor.step(rig.t0), 7);
        assert_eq!(rig.panel.regions().len(), 7);
        assert_eq!(rig.monitor.failures(), 7);

        rig.panel.fail.set(false);
        assert_eq!(rig.monitor.step(rig.t0 + Duration::from_secs(1)), 0);
        assert_eq!(rig.monitor.failures(), 7);
    }

    #[test]
    fn idles_then_wakes_on_button() {
        let mut rig = rig(Config::default());
        let timeout = Config::default().sleep_after;

        rig.monitor.step(rig.t0 + timeout + Duration::from_secs(1));
        assert_eq!(rig.backlight.on.get(), Some(false));
        assert!(!rig.monitor.power().updates_enabled());

        let drawn = rig.panel.regions().len();
        rig.monitor.step(rig.t0 + timeout * 5);
        assert_eq!(rig.panel.regions().len(), drawn);

        let press = rig.t0 + timeout * 10;
        rig.events.send(Event::Interaction(press)).unwrap();
        rig.monitor.step(press);
        assert_eq!(rig.backlight.on.get(), Some(true));
        assert!(rig.monitor.power().updates_enabled());
        assert!(rig.panel.regions().len() > drawn);
    }

    #[test]
    fn press_during_sleep_lights_backlight() {
        let mut rig = rig(Config::default());
        let timeout = Config::default().sleep_after;
        rig.monitor.step(rig.t0 + timeout + Duration::from_secs(1));
        assert_eq!(rig.backlight.on.get(), Some(false));

        let events = rig.events.clone();
        let presser = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            events.send(Event::Interaction(Instant::now())).unwrap();
        });
        let started = Instant::now();
        rig.monitor.wait(Duration::from_millis(300));
        presser.join().unwrap();

        assert!(started.elapsed() >= Duration::from_millis(300));
        assert_eq!(rig.backlight.on.get(), Some(true));
        assert!(rig.monitor.power().updates_enabled());
    }

    #[test]
    fn static_layout_colours_and_capacity() {
        let mut rig = rig(Config::default());
        let screen = rig.monitor.compose_static();
        let palette = Palette::default();
        let background = crate::framebuffer::raw(palette.background);
        let window = crate::framebuffer::raw(palette.window);

        assert_eq!(screen.pixel(0, 0), Some(background));
        assert_eq!(screen.pixel(12, 40), Some(window));
        assert_eq!(screen.pixel(315, 40), Some(background));

        // 1000 blocks of 4 KiB on "/"
        let capacity = font::rasterize(&format::capacity(4_096_000), palette.fixed, palette.window).unwrap();
        let width = capacity.len() / GLYPH_HEIGHT;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..width {
                assert_eq!(
                    screen.pixel(layout::FS_CAPACITY_X + col as u16, layout::FS1_Y + row as u16),
                    Some(capacity[row * width + col])
                );
            }
        }

        let degree = font::rasterize(&font::DEGREE.to_string(), palette.data, palette.window).unwrap();
        for row in 0..GLYPH_HEIGHT {
            for col in 0..font::GLYPH_WIDTH {
                assert_eq!(
                    screen.pixel(layout::DEGREE_X + col as u16, layout::TEMP_Y + row as u16),
                    Some(degree[row * font::GLYPH_WIDTH + col])
                );
            }
        }
    }

    fn line_matches(screen: &Framebuffer, y: u16, text: &str) -> bool {
        let palette = Palette::default();
        let expected = font::rasterize(text, palette.fixed, palette.window).unwrap();
        let width = font::text_width(text);
        let x = layout::centered_x(width as u16);
        (0..GLYPH_HEIGHT).all(|row| {
            (0..width).all(|col| {
                screen.pixel(x + col as u16, y + row as u16) == Some(expected[row * width + col])
            })
        })
    }

    #[test]
    fn resolved_address_replaces_placeholder() {
        let mut rig = rig(Config::default());
        rig.telemetry.addrs.borrow_mut().push(InterfaceAddr {
            interface: "eth0".into(),
            addr: Ipv4Addr::new(10, 0, 0, 2),
        });
        let mut screen = rig.monitor.compose_static();
        assert!(line_matches(&screen, layout::NET1_DATA_Y, WAITING));

        rig.monitor.resolve_addresses(&mut screen, 5, Duration::ZERO);
        assert_eq!(rig.telemetry.addr_queries.get(), 1);
        assert!(line_matches(&screen, layout::NET1_DATA_Y, "10.0.0.2"));
        // the longer placeholder is gone
        let window = crate::framebuffer::raw(Palette::default().window);
        let left = layout::centered_x(font::text_width(WAITING) as u16);
        assert!((0..GLYPH_HEIGHT as u16).all(|row| screen.pixel(left, layout::NET1_DATA_Y + row) == Some(window)));
    }

    #[test]
    fn unresolved_interface_is_marked_not_ready() {
        let mut config = Config::default();
        config.net_devices[1] = NetDevice {
            name: "wlan0".into(),
            enabled: true,
        };
        let mut rig = rig(config);
        rig.telemetry.addrs.borrow_mut().push(InterfaceAddr {
            interface: "eth0".into(),
            addr: Ipv4Addr::new(192, 168, 1, 20),
        });
        let mut screen = rig.monitor.compose_static();
        rig.monitor.resolve_addresses(&mut screen, 3, Duration::ZERO);

        assert_eq!(rig.telemetry.addr_queries.get(), 3);
        assert!(line_matches(&screen, layout::NET1_DATA_Y, "192.168.1.20"));
        assert!(line_matches(&screen, layout::NET2_DATA_Y, NOT_READY));
        // volatile fields kept updating between attempts
        assert!(rig.panel.regions().contains(&Field::Clock.region()));
    }

    #[test]
    fn no_enabled_interface_skips_resolution() {
        let mut rig = rig(Config::parse(""));
        let mut screen = rig.monitor.compose_static();
        rig.monitor.resolve_addresses(&mut screen, 3, Duration::ZERO);
        assert_eq!(rig.telemetry.addr_queries.get(), 0);
    }

    #[test]
    fn shutdown_interrupts_resolution_and_loop() {
        let mut rig = rig(Config::default());
        rig.shutdown.store(true, Ordering::Relaxed);
        rig.monitor.run();
        assert_eq!(rig.telemetry.addr_queries.get(), 0);
        assert_eq!(rig.panel.regions(), vec![Region::full_screen()]);
    }

    #[cfg(not(feature = "async"))]
    #[test]
    fn field_update_reaches_the_bus() {
        use crate::st7789::mock::{Bus, NoDelay, Wire};
        use crate::st7789::{self, BUF_SIZE, ST7789};

        let bus = Bus::default();
        let mut buffer = [0u8; BUF_SIZE];
        let panel: ST7789<'_, _, _, _, NoDelay> =
            ST7789::new(st7789::Config::default(), bus.spi(), bus.dc(), bus.rst(), &mut buffer);
        let (_events, rx) = mpsc::channel();
        let mut monitor = Monitor::new(
            Config::default(),
            panel,
            FakeBacklight::default(),
            FakeTelemetry::default(),
            rx,
            Arc::new(AtomicBool::new(false)),
            Instant::now(),
        );

        monitor.update_field(Field::Cpu, " 25%").unwrap();
        assert_eq!(bus.commands(), vec![0x2A, 0x2B, 0x2C]);
        let region = Field::Cpu.region();
        let expected: Vec<u8> = rendered(" 25%").iter().flat_map(|p| p.to_le_bytes()).collect();
        assert_eq!(bus.wire().last(), Some(&Wire::Data(expected)));
        assert_eq!(region.pixel_count() * 2, 4 * 11 * 16 * 2);
    }
}
