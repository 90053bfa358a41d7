use crate::errors::{GatorError, GatorResult};

/// One CLI invocation: the verb plus its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Return the first `count` arguments, or a `MissingArgument` error
    /// naming what this command expects.
    pub fn require_args(&self, count: usize, expected: &'static str) -> GatorResult<&[String]> {
        if self.args.len() < count {
            return Err(GatorError::MissingArgument {
                command: self.name.clone(),
                expected,
            });
        }
        Ok(&self.args[..count])
    }
}
