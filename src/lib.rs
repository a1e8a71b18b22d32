#![deny(unsafe_code)]

pub mod apple;
pub mod device;
pub mod env;
pub mod opts;
pub mod util;
pub mod workflow;

use std::ffi::OsStr;

pub static NAME: &str = "sim-launcher";

trait DuctExpressionExt {
    fn vars(self, vars: impl IntoIterator<Item = (impl AsRef<OsStr>, impl AsRef<OsStr>)>) -> Self;
}

impl DuctExpressionExt for duct::Expression {
    fn vars(
        mut self,
        vars: impl IntoIterator<Item = (impl AsRef<OsStr>, impl AsRef<OsStr>)>,
    ) -> Self {
        for (k, v) in vars {
            self = self.env(&k, &v);
        }
        self
    }
}
