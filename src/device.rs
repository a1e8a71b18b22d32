use crate::{
    apple::simctl::Device,
    util::{
        cli::{Report, Reportable},
        prompt,
    },
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read a choice: {0}")]
    PromptFailed(#[from] io::Error),
    #[error("`simctl list` didn't list any devices")]
    NoneDetected,
    #[error("No listed device has the id or name {query:?}")]
    NotFound { query: String },
    #[error("Not prompting for a device since we're running non-interactively")]
    NonInteractive,
}

impl Reportable for PromptError {
    fn report(&self) -> Report {
        match self {
            Self::PromptFailed(err) => {
                Report::error("There was an error receiving your choice", err)
            }
            Self::NoneDetected => Report::action_request(
                "Please create a simulator and try again!",
                format!(
                    "{}. You can add one from Xcode's \"Devices and Simulators\" window, or with `xcrun simctl create`.",
                    self
                ),
            ),
            Self::NotFound { .. } => Report::error(
                "Failed to find the requested device",
                format!("{}. Run `sim-launcher list` to see what's available.", self),
            ),
            Self::NonInteractive => Report::action_request(
                "Please specify a device with `--device <ID or NAME>`",
                self,
            ),
        }
    }
}

/// Picks one device out of a non-empty list.
pub trait Select {
    fn select<'a>(&mut self, devices: &'a [Device]) -> Result<&'a Device, PromptError>;
}

/// Asks on stdout and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct Interactive;

impl Select for Interactive {
    fn select<'a>(&mut self, devices: &'a [Device]) -> Result<&'a Device, PromptError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let index = prompt::list(
            &mut stdin.lock(),
            &mut stdout.lock(),
            "Available devices",
            devices.iter(),
            "device",
            "Please choose a device",
        )?;
        devices.get(index).ok_or_else(|| {
            PromptError::PromptFailed(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("index {} is out of range", index),
            ))
        })
    }
}

/// Matches a device by exact id first, then by case-insensitive name.
#[derive(Debug)]
pub struct ByIdOrName {
    query: String,
}

impl ByIdOrName {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Select for ByIdOrName {
    fn select<'a>(&mut self, devices: &'a [Device]) -> Result<&'a Device, PromptError> {
        devices
            .iter()
            .find(|device| device.id() == self.query)
            .or_else(|| {
                devices
                    .iter()
                    .find(|device| device.name().eq_ignore_ascii_case(&self.query))
            })
            .ok_or_else(|| PromptError::NotFound {
                query: self.query.clone(),
            })
    }
}

#[derive(Debug, Default)]
pub struct NonInteractive;

impl Select for NonInteractive {
    fn select<'a>(&mut self, _devices: &'a [Device]) -> Result<&'a Device, PromptError> {
        Err(PromptError::NonInteractive)
    }
}

pub fn prompt(selector: &mut impl Select, devices: Vec<Device>) -> Result<Device, PromptError> {
    if devices.is_empty() {
        return Err(PromptError::NoneDetected);
    }
    let device = selector.select(&devices)?.clone();
    log::info!("selected device {} ({})", device, device.id());
    Ok(device)
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn devices() -> Vec<Device> {
        vec![
            Device::new(
                "ABCDEFGH-1234-5678-ABCD-1234567890AB",
                "iPhone 14",
                Some("Shutdown".into()),
            ),
            Device::new(
                "8C5C0F1B-4E4B-4E0E-9D3F-2D7C1F0A9B11",
                "iPhone 14 Pro",
                Some("Booted".into()),
            ),
        ]
    }

    #[rstest(query, id,
        case("8C5C0F1B-4E4B-4E0E-9D3F-2D7C1F0A9B11", "8C5C0F1B-4E4B-4E0E-9D3F-2D7C1F0A9B11"),
        case("iphone 14", "ABCDEFGH-1234-5678-ABCD-1234567890AB"),
        case("iPhone 14 Pro", "8C5C0F1B-4E4B-4E0E-9D3F-2D7C1F0A9B11")
    )]
    fn test_by_id_or_name(query: &str, id: &str) {
        let device = prompt(&mut ByIdOrName::new(query), devices()).unwrap();
        assert_eq!(device.id(), id);
    }

    #[test]
    fn test_by_id_or_name_not_found() {
        match prompt(&mut ByIdOrName::new("Pixel 7"), devices()) {
            Err(PromptError::NotFound { query }) => assert_eq!(query, "Pixel 7"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_prompt_without_devices() {
        assert!(matches!(
            prompt(&mut ByIdOrName::new("iPhone 14"), Vec::new()),
            Err(PromptError::NoneDetected)
        ));
    }

    #[test]
    fn test_non_interactive_refuses() {
        let err = prompt(&mut NonInteractive, devices()).unwrap_err();
        assert!(matches!(err, PromptError::NonInteractive));
        assert!(err.report().msg().contains("--device"));
    }
}
