use crate::{
    apple::simctl::{self, DeviceListError, StartError, Xcrun},
    device::{ByIdOrName, Interactive, NonInteractive},
    env::{Env, Error as EnvError},
    opts,
    util::{
        cli::{self, Exec, GlobalFlags, Report, Reportable, TextWrapper},
        prompt,
    },
    workflow,
};
use std::io;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sim-launcher",
    about = "Pick an iOS simulator, then boot it and open it in Simulator.app",
    settings = cli::SETTINGS,
)]
pub struct Input {
    #[structopt(flatten)]
    flags: GlobalFlags,
    #[structopt(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, StructOpt)]
pub enum Command {
    #[structopt(
        name = "start",
        about = "Prompts for a simulator, then boots and opens it (the default)"
    )]
    Start {
        #[structopt(
            short = "d",
            long = "device",
            value_name = "ID or NAME",
            help = "Start this simulator instead of prompting"
        )]
        device: Option<String>,
    },
    #[structopt(name = "list", about = "Lists available simulators")]
    List {
        #[structopt(
            long = "json",
            help = "Print the list as JSON",
            parse(from_flag = opts::Format::from_flag),
        )]
        format: opts::Format,
    },
    #[structopt(name = "boot", about = "Boots and opens the simulator with this id")]
    Boot {
        #[structopt(name = "ID", index = 1, required = true)]
        id: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Start { device: None }
    }
}

#[derive(Debug)]
pub enum Error {
    EnvInitFailed(EnvError),
    WorkflowFailed(workflow::Error),
    ListFailed(DeviceListError),
    JsonFailed(serde_json::Error),
    PrintFailed(io::Error),
    StartFailed(StartError),
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::EnvInitFailed(err) => err.report(),
            Self::WorkflowFailed(err) => err.report(),
            Self::ListFailed(err) => err.report(),
            Self::JsonFailed(err) => Report::error("Failed to serialize device list", err),
            Self::PrintFailed(err) => Report::error("Failed to print device list", err),
            Self::StartFailed(err) => err.report(),
        }
    }
}

impl Exec for Input {
    type Report = Error;

    fn global_flags(&self) -> GlobalFlags {
        self.flags
    }

    fn exec(self, wrapper: &TextWrapper) -> Result<(), Self::Report> {
        let Self {
            flags: GlobalFlags { interactivity, .. },
            command,
        } = self;
        let env = Env::new().map_err(Error::EnvInitFailed)?;
        let simctl = Xcrun::new(&env);
        match command.unwrap_or_default() {
            Command::Start { device } => {
                let device = match device {
                    Some(query) => workflow::run(&simctl, &mut ByIdOrName::new(query)),
                    None if interactivity.none() => workflow::run(&simctl, &mut NonInteractive),
                    None => workflow::run(&simctl, &mut Interactive),
                }
                .map_err(Error::WorkflowFailed)?;
                Report::victory(
                    format!("Started {}", device.name()),
                    format!("Simulator.app is showing device {}", device.id()),
                )
                .print(wrapper);
                Ok(())
            }
            Command::List { format } => {
                let devices = simctl::device_list(&simctl).map_err(Error::ListFailed)?;
                if format.json() {
                    let json = serde_json::to_string_pretty(&devices).map_err(Error::JsonFailed)?;
                    println!("{}", json);
                    Ok(())
                } else {
                    prompt::list_display_only(&mut io::stdout(), devices.iter(), devices.len())
                        .map_err(Error::PrintFailed)
                }
            }
            Command::Boot { id } => {
                simctl::start(&simctl, &id).map_err(Error::StartFailed)?;
                Report::victory(
                    format!("Started device {}", id),
                    "Simulator.app should now be in the foreground",
                )
                .print(wrapper);
                Ok(())
            }
        }
    }
}
