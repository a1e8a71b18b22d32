use crate::{
    env::{Env, ExplicitEnv as _},
    DuctExpressionExt,
};
use serde::Serialize;
use std::{
    fmt::{self, Display},
    io,
};

mod boot;
mod device_list;
#[cfg(test)]
pub(crate) mod fake;
mod launch;
mod start;

pub use boot::{boot, BootError};
pub use device_list::{device_list, parse_device_list, DeviceListError};
pub use launch::{launch, LaunchError};
pub use start::{start, StartError};

/// One simulator as listed by `simctl list`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Device {
    id: String,
    name: String,
    state: Option<String>,
}

impl Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(state) = &self.state {
            write!(f, " ({})", state)?;
        }
        Ok(())
    }
}

impl Device {
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Status(Option<i32>);

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "no exit code (terminated by a signal)"),
        }
    }
}

impl Status {
    pub fn new(code: Option<i32>) -> Self {
        Self(code)
    }

    pub fn success(self) -> bool {
        self.0 == Some(0)
    }
}

/// What a finished `xcrun` or `open` invocation left behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    pub status: Status,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            status: Status::new(output.status.code()),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// The host commands that list, boot, and open simulators.
///
/// A non-zero exit is still `Ok`; `Err` means the command couldn't be run
/// at all.
pub trait Simctl {
    fn list(&self) -> io::Result<Output>;

    fn boot(&self, id: &str) -> io::Result<Output>;

    fn open(&self, id: &str) -> io::Result<Output>;
}

#[derive(Debug)]
pub struct Xcrun<'a> {
    env: &'a Env,
}

impl<'a> Xcrun<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    fn run(&self, expr: duct::Expression) -> io::Result<Output> {
        log::debug!("running {:?}", expr);
        expr.vars(self.env.explicit_env())
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .map(Output::from)
    }
}

impl<'a> Simctl for Xcrun<'a> {
    fn list(&self) -> io::Result<Output> {
        which::which_in("xcrun", Some(self.env.path()), ".").map_err(|err| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("`xcrun` wasn't found on `PATH`: {}", err),
            )
        })?;
        self.run(duct::cmd("xcrun", ["simctl", "list"]))
    }

    fn boot(&self, id: &str) -> io::Result<Output> {
        self.run(duct::cmd("xcrun", ["simctl", "boot", id]))
    }

    fn open(&self, id: &str) -> io::Result<Output> {
        self.run(duct::cmd(
            "open",
            ["-a", "Simulator", "--args", "-CurrentDeviceUDID", id],
        ))
    }
}
