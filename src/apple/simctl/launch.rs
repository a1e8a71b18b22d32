use super::{Simctl, Status};
use crate::util::cli::{Report, Reportable};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to run `open -a Simulator`: {0}")]
    CommandFailed(#[from] io::Error),
    #[error("`open -a Simulator` failed with {status}: {stderr}")]
    Failed { status: Status, stderr: String },
}

impl Reportable for LaunchError {
    fn report(&self) -> Report {
        Report::error(
            "Unable to launch device",
            format!("Xcode 7 or later is required.\n{}", self),
        )
    }
}

/// Opens Simulator.app focused on an already booted device.
pub fn launch(simctl: &impl Simctl, id: &str) -> Result<(), LaunchError> {
    let output = simctl.open(id)?;
    if output.success() {
        Ok(())
    } else {
        Err(LaunchError::Failed {
            status: output.status,
            stderr: output.stderr.trim().to_owned(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::apple::simctl::fake::{Call, FakeSimctl};

    #[test]
    fn test_launch_opens_simulator_for_device() {
        let simctl = FakeSimctl::new();
        launch(&simctl, "ABCDEFGH-1234-5678-ABCD-1234567890AB").unwrap();
        assert_eq!(
            simctl.calls(),
            vec![Call::Open("ABCDEFGH-1234-5678-ABCD-1234567890AB".into())]
        );
    }

    #[test]
    fn test_launch_failure_hints_at_xcode_version() {
        let simctl = FakeSimctl::new().open_fails(1, "Unable to find application named 'Simulator'");
        let err = launch(&simctl, "ABCDEFGH-1234-5678-ABCD-1234567890AB").unwrap_err();
        let report = err.report();
        assert_eq!(report.msg(), "Unable to launch device");
        assert!(report.details().starts_with("Xcode 7 or later is required."));
        assert!(report.details().contains("Unable to find application named 'Simulator'"));
    }
}
