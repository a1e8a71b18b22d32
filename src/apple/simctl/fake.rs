use super::{Output, Simctl, Status};
use std::{cell::RefCell, io};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    List,
    Boot(String),
    Open(String),
}

#[derive(Clone, Debug)]
enum Reply {
    Finished(Output),
    Unspawnable,
}

impl Reply {
    fn succeed(stdout: &str) -> Self {
        Self::Finished(Output {
            status: Status::new(Some(0)),
            stdout: stdout.to_owned(),
            stderr: String::new(),
        })
    }

    fn fail(code: i32, stderr: &str) -> Self {
        Self::Finished(Output {
            status: Status::new(Some(code)),
            stdout: String::new(),
            stderr: stderr.to_owned(),
        })
    }

    fn get(&self) -> io::Result<Output> {
        match self {
            Self::Finished(output) => Ok(output.clone()),
            Self::Unspawnable => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory (os error 2)",
            )),
        }
    }
}

/// Scripted stand-in for `xcrun`/`open` that records what was asked of it.
#[derive(Debug)]
pub struct FakeSimctl {
    list: Reply,
    boot: Reply,
    open: Reply,
    calls: RefCell<Vec<Call>>,
}

impl FakeSimctl {
    pub fn new() -> Self {
        Self {
            list: Reply::succeed(""),
            boot: Reply::succeed(""),
            open: Reply::succeed(""),
            calls: Default::default(),
        }
    }

    pub fn listing(mut self, stdout: &str) -> Self {
        self.list = Reply::succeed(stdout);
        self
    }

    pub fn list_fails(mut self, code: i32, stderr: &str) -> Self {
        self.list = Reply::fail(code, stderr);
        self
    }

    pub fn list_unspawnable(mut self) -> Self {
        self.list = Reply::Unspawnable;
        self
    }

    pub fn boot_fails(mut self, code: i32, stderr: &str) -> Self {
        self.boot = Reply::fail(code, stderr);
        self
    }

    pub fn boot_unspawnable(mut self) -> Self {
        self.boot = Reply::Unspawnable;
        self
    }

    pub fn open_fails(mut self, code: i32, stderr: &str) -> Self {
        self.open = Reply::fail(code, stderr);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn opens(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Open(_)))
            .count()
    }
}

impl Simctl for FakeSimctl {
    fn list(&self) -> io::Result<Output> {
        self.calls.borrow_mut().push(Call::List);
        self.list.get()
    }

    fn boot(&self, id: &str) -> io::Result<Output> {
        self.calls.borrow_mut().push(Call::Boot(id.to_owned()));
        self.boot.get()
    }

    fn open(&self, id: &str) -> io::Result<Output> {
        self.calls.borrow_mut().push(Call::Open(id.to_owned()));
        self.open.get()
    }
}
