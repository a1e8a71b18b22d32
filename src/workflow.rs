//! List the simulators, ask which one to use, then boot and open it.
//!
//! Every stage hands its failure back to the caller; nothing in here exits.

use crate::{
    apple::simctl::{self, Device, DeviceListError, Simctl, StartError},
    device::{self, PromptError, Select},
    util::cli::{Report, Reportable},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ListFailed(#[from] DeviceListError),
    #[error(transparent)]
    DevicePromptFailed(#[from] PromptError),
    #[error(transparent)]
    StartFailed(#[from] StartError),
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::ListFailed(err) => err.report(),
            Self::DevicePromptFailed(err) => err.report(),
            Self::StartFailed(err) => err.report(),
        }
    }
}

pub fn run(simctl: &impl Simctl, selector: &mut impl Select) -> Result<Device, Error> {
    let devices = simctl::device_list(simctl)?;
    let device = device::prompt(selector, devices)?;
    simctl::start(simctl, device.id())?;
    Ok(device)
}
