use super::{Simctl, Status};
use crate::util::cli::{Report, Reportable};
use once_cell_regex::regex;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootError {
    #[error("The device is already booted")]
    AlreadyBooted,
    #[error("Failed to run `xcrun simctl boot`: {0}")]
    CommandFailed(#[from] io::Error),
    #[error("`xcrun simctl boot` failed with {status}: {stderr}")]
    Failed { status: Status, stderr: String },
}

impl Reportable for BootError {
    fn report(&self) -> Report {
        Report::error(
            "Unable to boot device",
            format!(
                "Please make sure you have installed additional components in Xcode.\n{}",
                self
            ),
        )
    }
}

impl BootError {
    pub fn already_booted(&self) -> bool {
        matches!(self, Self::AlreadyBooted)
    }
}

// `simctl` has no machine-readable way to say this, so it's recognized from
// the wording of its error: "Unable to boot device in current state: Booted".
fn already_booted(stderr: &str) -> bool {
    match regex!(r"current state: (\w+)").captures(stderr) {
        Some(caps) => &caps[1] == "Booted",
        None => stderr.contains("state: Booted"),
    }
}

pub fn boot(simctl: &impl Simctl, id: &str) -> Result<(), BootError> {
    let output = simctl.boot(id)?;
    if output.success() {
        Ok(())
    } else if already_booted(&output.stderr) {
        Err(BootError::AlreadyBooted)
    } else {
        Err(BootError::Failed {
            status: output.status,
            stderr: output.stderr.trim().to_owned(),
        })
    }
}
