use super::{boot, launch, BootError, LaunchError, Simctl};
use crate::util::cli::{Report, Reportable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    BootFailed(BootError),
    #[error(transparent)]
    LaunchFailed(#[from] LaunchError),
}

impl Reportable for StartError {
    fn report(&self) -> Report {
        match self {
            Self::BootFailed(err) => err.report(),
            Self::LaunchFailed(err) => err.report(),
        }
    }
}

/// Boots the device, then opens it in Simulator.app. Booting a device
/// that's already running isn't an error.
pub fn start(simctl: &impl Simctl, id: &str) -> Result<(), StartError> {
    match boot(simctl, id) {
        Ok(()) => log::info!("booted device {}", id),
        Err(BootError::AlreadyBooted) => {
            log::info!("device {} is already booted; opening it anyway", id)
        }
        Err(err) => return Err(StartError::BootFailed(err)),
    }
    launch(simctl, id)?;
    Ok(())
}
