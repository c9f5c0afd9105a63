//! Host telemetry sources.
//!
//! [`Telemetry`] is the seam between the scheduler and the operating system.
//! [`ProcTelemetry`] reads the usual `/proc` and sysfs text files below a
//! configurable root, so tests can point it at a fixture directory.

use std::fs;
use std::io;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Memory figures from `/proc/meminfo`, in kB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kb: u64,
    pub available_kb: u64,
}

/// Cumulative byte counters of one network interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub rx_bytes: i64,
    pub tx_bytes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsStats {
    pub blocks: u64,
    pub free_blocks: u64,
    pub fragment_size: u64,
}

impl FsStats {
    pub fn capacity_bytes(&self) -> u64 {
        self.blocks.saturating_mul(self.fragment_size)
    }
}

/// One IPv4 address bound to a named interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub interface: String,
    pub addr: Ipv4Addr,
}

pub trait Telemetry {
    /// One-minute load average.
    fn load_average(&self) -> Option<f64>;
    fn memory(&self) -> Option<MemInfo>;
    /// CPU temperature in millidegrees Celsius.
    fn temperature(&self) -> Option<i64>;
    /// Seconds since boot.
    fn uptime(&self) -> Option<u64>;
    fn net_counters(&self, interface: &str) -> Option<NetCounters>;
    fn fs_stats(&self, path: &str) -> Option<FsStats>;
    fn hostname(&self) -> Option<String>;
    fn ipv4_addresses(&self) -> io::Result<Vec<InterfaceAddr>>;

    fn local_time(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone)]
pub struct ProcTelemetry {
    root: PathBuf,
}

impl Default for ProcTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcTelemetry {
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Resolve every source file below `root` instead of `/`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, relative: &str) -> Option<String> {
        let path = self.root.join(relative);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("reading {} failed: {}", path.display(), e);
                None
            }
        }
    }
}

impl Telemetry for ProcTelemetry {
    fn load_average(&self) -> Option<f64> {
        parse_loadavg(&self.read("proc/loadavg")?)
    }

    fn memory(&self) -> Option<MemInfo> {
        parse_meminfo(&self.read("proc/meminfo")?)
    }

    fn temperature(&self) -> Option<i64> {
        parse_temperature(&self.read("sys/class/thermal/thermal_zone0/temp")?)
    }

    fn uptime(&self) -> Option<u64> {
        parse_uptime(&self.read("proc/uptime")?)
    }

    fn net_counters(&self, interface: &str) -> Option<NetCounters> {
        parse_net_dev(&self.read("proc/net/dev")?, interface)
    }

    fn fs_stats(&self, path: &str) -> Option<FsStats> {
        if path.is_empty() {
            return None;
        }
        match statvfs(Path::new(path)) {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::debug!("statvfs {} failed: {}", path, e);
                None
            }
        }
    }

    fn hostname(&self) -> Option<String> {
        hostname()
    }

    fn ipv4_addresses(&self) -> io::Result<Vec<InterfaceAddr>> {
        ipv4_addresses()
    }
}

pub fn parse_loadavg(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.parse().ok()
}

pub fn parse_meminfo(text: &str) -> Option<MemInfo> {
    let mut total = None;
    let mut available = None;
    for line in text.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let value = rest.split_whitespace().next().and_then(|v| v.parse().ok());
        match key.trim() {
            "MemTotal" => total = value,
            "MemAvailable" => available = value,
            _ => {}
        }
    }
    Some(MemInfo {
        total_kb: total?,
        available_kb: available?,
    })
}

pub fn parse_temperature(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Whole seconds of the first `/proc/uptime` value.
pub fn parse_uptime(text: &str) -> Option<u64> {
    let seconds: f64 = text.split_whitespace().next()?.parse().ok()?;
    if seconds.is_sign_negative() {
        return None;
    }
    Some(seconds as u64)
}

/// Counters for `interface` from `/proc/net/dev`: receive bytes is the first
/// field after the colon, transmit bytes the ninth. The name must match
/// exactly.
pub fn parse_net_dev(text: &str, interface: &str) -> Option<NetCounters> {
    text.lines().find_map(|line| {
        let (name, fields) = line.split_once(':')?;
        if name.trim() != interface {
            return None;
        }
        let mut fields = fields.split_whitespace();
        let rx_bytes = fields.next()?.parse().ok()?;
        let tx_bytes = fields.nth(7)?.parse().ok()?;
        Some(NetCounters { rx_bytes, tx_bytes })
    })
}

#[cfg(target_os = "linux")]
fn statvfs(path: &Path) -> io::Result<FsStats> {
    let stat = nix::sys::statvfs::statvfs(path)?;
    // field widths differ between 32- and 64-bit targets
    #[allow(clippy::unnecessary_cast)]
    let stats = FsStats {
        blocks: stat.blocks() as u64,
        free_blocks: stat.blocks_free() as u64,
        fragment_size: stat.fragment_size() as u64,
    };
    Ok(stats)
}

#[cfg(not(target_os = "linux"))]
fn statvfs(_path: &Path) -> io::Result<FsStats> {
    Err(io::Error::from(io::ErrorKind::Unsupported))
}

#[cfg(target_os = "linux")]
fn hostname() -> Option<String> {
    nix::unistd::gethostname().ok()?.into_string().ok()
}

#[cfg(not(target_os = "linux"))]
fn hostname() -> Option<String> {
    None
}

#[cfg(target_os = "linux")]
fn ipv4_addresses() -> io::Result<Vec<InterfaceAddr>> {
    use std::net::SocketAddrV4;

    let addrs = nix::ifaddrs::getifaddrs()?;
    Ok(addrs
        .filter_map(|entry| {
            let sin = entry.address.as_ref()?.as_sockaddr_in()?;
            Some(InterfaceAddr {
                interface: entry.interface_name.clone(),
                addr: *SocketAddrV4::from(*sin).ip(),
            })
        })
        .collect())
}

#[cfg(not(target_os = "linux"))]
fn ipv4_addresses() -> io::Result<Vec<InterfaceAddr>> {
    Err(io::Error::from(io::ErrorKind::Unsupported))
}
