use super::{Device, Simctl, Status};
use crate::util::cli::{Report, Reportable};
use once_cell_regex::regex;
use std::io;
use thiserror::Error;

static DEVICES_START: &str = "== Devices ==";
static DEVICES_END: &str = "== Device Pairs ==";

#[derive(Debug, Error)]
pub enum DeviceListError {
    #[error("Failed to request device list from `simctl`: {0}")]
    DetectionFailed(#[from] io::Error),
    #[error("`xcrun simctl list` failed with {status}: {stderr}")]
    ListFailed { status: Status, stderr: String },
}

impl Reportable for DeviceListError {
    fn report(&self) -> Report {
        Report::error(
            "Unable to get device list",
            format!(
                "Please make sure you have installed additional components in Xcode.\n{}",
                self
            ),
        )
    }
}

// Everything from the devices heading up to the device pairs heading, or to
// the end of the listing if there are no pairs.
fn devices_section(raw: &str) -> Option<&str> {
    let section = &raw[raw.find(DEVICES_START)?..];
    Some(match section.find(DEVICES_END) {
        Some(end) => &section[..end],
        None => section,
    })
}

fn parse_device_line(line: &str) -> Option<Device> {
    let id = regex!(r"[0-9A-Za-z_]{1,20}(?:-[0-9A-Za-z_]{1,20}){3,}").find(line)?;
    let name = {
        // Drops the `(` that opens the identifier.
        let mut prefix = line[..id.start()].chars();
        prefix.next_back();
        prefix.as_str().trim()
    };
    let state = regex!(r"^\)\s*\(([^()]+)\)")
        .captures(&line[id.end()..])
        .map(|caps| caps[1].trim().to_owned());
    Some(Device::new(id.as_str(), name, state))
}

/// Extracts the simulators from the human-readable `simctl list` report, in
/// the order they're listed.
///
/// Runtime headings (`-- iOS 16.0 --`) and the section's own heading are
/// skipped, as is any line without a UUID-like identifier.
pub fn parse_device_list(raw: &str) -> Vec<Device> {
    devices_section(raw)
        .map(|section| {
            section
                .lines()
                .filter(|line| !line.contains("--"))
                .skip(1)
                .filter_map(parse_device_line)
                .collect()
        })
        .unwrap_or_default()
}

pub fn device_list(simctl: &impl Simctl) -> Result<Vec<Device>, DeviceListError> {
    let output = simctl.list()?;
    if !output.success() {
        return Err(DeviceListError::ListFailed {
            status: output.status,
            stderr: output.stderr.trim().to_owned(),
        });
    }
    let devices = parse_device_list(&output.stdout);
    if devices.is_empty() {
        log::info!("`simctl list` succeeded, but its output didn't contain any devices");
    }
    Ok(devices)
}
