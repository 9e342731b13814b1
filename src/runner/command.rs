//! Command lines handed to the runner.

use std::fmt;

/// A program plus its arguments, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelmCommand {
    /// Program to execute.
    program: String,
    /// Arguments, one token each.
    args: Vec<String>,
}

impl HelmCommand {
    /// Creates a command with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program to execute.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Renders the command line the way an operator would type it.
impl fmt::Display for HelmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_line() {
        let cmd = HelmCommand::new("helm")
            .arg("status")
            .with_args(["mysql", "-o", "json"]);
        assert_eq!(cmd.to_string(), "helm status mysql -o json");
        assert_eq!(cmd.args(), ["status", "mysql", "-o", "json"]);
    }

    #[test]
    fn test_render_without_args() {
        assert_eq!(HelmCommand::new("/usr/local/bin/helm").to_string(), "/usr/local/bin/helm");
    }
}
