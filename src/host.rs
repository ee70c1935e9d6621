use tracing::debug;

/// Best-effort host identity strings. Probing never fails; missing
/// sources degrade to a generic label.
pub struct HostInfo {
    pub os_version: String,
    pub cpu_model: String,
}

impl HostInfo {
    pub fn probe() -> Self {
        let info = Self { os_version: probe_os_version(), cpu_model: probe_cpu_model() };
        debug!("host probe: os={:?} cpu={:?}", info.os_version, info.cpu_model);
        info
    }
}

/// Strips the decoration os-release/cpuinfo values carry around the
/// content: leading whitespace, colons and quotes, trailing line
/// terminators and quotes.
fn trim_value(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', ':', '"']).trim_end_matches(['\n', '\r', '"'])
}

/// Returns the trimmed value of the first line starting with `key`, if any.
fn keyed_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .map(|rest| trim_value(rest.trim_start_matches(['=', ' '])))
        .filter(|v| !v.is_empty())
}

#[cfg(target_os = "linux")]
fn probe_os_version() -> String {
    std::fs::read_to_string("/etc/os-release")
        .ok()
        .and_then(|content| {
            keyed_value(&content, "PRETTY_NAME")
                .or_else(|| keyed_value(&content, "NAME"))
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "Linux".to_owned())
}

#[cfg(target_os = "linux")]
fn probe_cpu_model() -> String {
    std::fs::read_to_string("/proc/cpuinfo")
        .ok()
        .and_then(|content| {
            // ARM SoCs report a Hardware line; x86 has model name; some
            // embedded kernels only fill in Processor.
            keyed_value(&content, "Hardware")
                .or_else(|| keyed_value(&content, "model name"))
                .or_else(|| keyed_value(&content, "Processor"))
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(target_os = "macos")]
fn probe_os_version() -> String {
    compose_mac_version(
        command_output("sw_vers", &["-productName"]),
        command_output("sw_vers", &["-productVersion"]),
    )
}

/// Either sw_vers query may fail on its own; whatever half succeeded
/// still makes it into the report.
#[cfg(any(target_os = "macos", test))]
fn compose_mac_version(name: Option<String>, version: Option<String>) -> String {
    match (name, version) {
        (Some(name), Some(version)) => format!("{name} {version}"),
        (Some(name), None) => name,
        (None, Some(version)) => format!("macOS {version}"),
        (None, None) => "macOS".to_owned(),
    }
}

#[cfg(target_os = "macos")]
fn probe_cpu_model() -> String {
    command_output("sysctl", &["-n", "machdep.cpu.brand_string"])
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(target_os = "windows")]
fn probe_os_version() -> String {
    command_output("wmic", &["os", "get", "Caption"])
        .and_then(|out| out.lines().nth(1).map(|l| trim_value(l).to_owned()))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "Windows".to_owned())
}

#[cfg(target_os = "windows")]
fn probe_cpu_model() -> String {
    command_output("wmic", &["cpu", "get", "Name"])
        .and_then(|out| out.lines().nth(1).map(|l| trim_value(l).to_owned()))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn probe_os_version() -> String {
    std::env::consts::OS.to_owned()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn probe_cpu_model() -> String {
    "unknown".to_owned()
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_quotes_and_line_endings() {
        assert_eq!(trim_value("\"Ubuntu 14.04\"\n"), "Ubuntu 14.04");
        assert_eq!(trim_value(": \tIntel(R) Core(TM) i7\r\n"), "Intel(R) Core(TM) i7");
        assert_eq!(trim_value("plain"), "plain");
        assert_eq!(trim_value(""), "");
    }

    #[test]
    fn trim_leaves_inner_content_alone() {
        assert_eq!(trim_value("\"a \"quoted\" middle\""), "a \"quoted\" middle");
    }

    #[test]
    fn keyed_value_picks_first_matching_line() {
        let content = "NAME=\"Ubuntu\"\nPRETTY_NAME=\"Ubuntu 14.04\"\nID=ubuntu\n";
        assert_eq!(keyed_value(content, "PRETTY_NAME"), Some("Ubuntu 14.04"));
        assert_eq!(keyed_value(content, "NAME"), Some("Ubuntu"));
        assert_eq!(keyed_value(content, "VERSION_ID"), None);
    }

    #[test]
    fn keyed_value_handles_cpuinfo_colons() {
        let content = "processor\t: 0\nmodel name\t: AMD Ryzen 9 5950X 16-Core Processor\n";
        assert_eq!(keyed_value(content, "model name"), Some("AMD Ryzen 9 5950X 16-Core Processor"));
    }

    #[test]
    fn keyed_value_rejects_empty_values() {
        assert_eq!(keyed_value("Hardware :\nmodel name : foo\n", "Hardware"), None);
    }

    #[test]
    fn mac_version_survives_partial_probe_failure() {
        let name = || Some("macOS".to_owned());
        let version = || Some("14.5".to_owned());
        assert_eq!(compose_mac_version(name(), version()), "macOS 14.5");
        assert_eq!(compose_mac_version(name(), None), "macOS");
        assert_eq!(compose_mac_version(None, version()), "macOS 14.5");
        assert_eq!(compose_mac_version(None, None), "macOS");
    }

    #[test]
    fn probe_always_produces_strings() {
        let info = HostInfo::probe();
        assert!(!info.os_version.is_empty());
        assert!(!info.cpu_model.is_empty());
    }
}
