//! Scripted command runner for tests
//!
//! [`ScriptedRunner`] stands in for the real `adb` binary: it records every
//! invocation and answers from a small rule table, so the whole push
//! pipeline can be exercised without a device attached.
//!
//! Rules match on a substring of the joined argument list; the first match
//! wins. With no matching rule the configured default output is returned.

use crate::bridge::runner::{CommandOutput, CommandRunner};
use crate::core::error::{PushError, Result};
use std::sync::Mutex;

/// One scripted response rule
struct Rule {
    /// Substring matched against `args.join(" ")`
    needle: String,
    output: CommandOutput,
}

/// A [`CommandRunner`] that replays scripted outputs and logs invocations
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Mutex<Vec<Rule>>,
    default: Mutex<Option<CommandOutput>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
    /// When set, every invocation fails as if the binary were missing
    unavailable: bool,
}

impl ScriptedRunner {
    /// Runner that answers every invocation with the same output
    pub fn always(output: CommandOutput) -> Self {
        let runner = Self::default();
        *runner.default.lock().unwrap() = Some(output);
        runner
    }

    /// Runner that answers every invocation with exit status zero
    pub fn succeeding() -> Self {
        Self::always(CommandOutput::success_with(""))
    }

    /// Runner that fails every invocation as if the tool were not installed
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add a rule: invocations whose joined arguments contain `needle`
    /// receive `output`. Earlier rules take precedence.
    pub fn respond_when(self, needle: &str, output: CommandOutput) -> Self {
        self.rules.lock().unwrap().push(Rule {
            needle: needle.to_string(),
            output,
        });
        self
    }

    /// All recorded invocations, arguments only
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    /// The program name of each recorded invocation
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(program, _)| program.clone())
            .collect()
    }

    /// Number of recorded invocations whose arguments contain `needle`
    pub fn count_calls_containing(&self, needle: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, args)| args.join(" ").contains(needle))
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));

        if self.unavailable {
            return Err(PushError::BridgeUnavailable(program.to_string()));
        }

        let joined = args.join(" ");
        if let Some(rule) = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|r| joined.contains(&r.needle))
        {
            return Ok(rule.output.clone());
        }

        Ok(self
            .default
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| CommandOutput::success_with("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_invocations() {
        let runner = ScriptedRunner::succeeding();
        runner.run("adb", &["push", "a.mp4", "/sdcard/a.mp4"]).unwrap();
        runner.run("adb", &["devices", "-l"]).unwrap();

        assert_eq!(runner.calls().len(), 2);
        assert_eq!(runner.count_calls_containing("push"), 1);
        assert_eq!(runner.programs(), vec!["adb", "adb"]);
    }

    #[test]
    fn test_rule_matching_precedence() {
        let runner = ScriptedRunner::succeeding()
            .respond_when("broken.mp4", CommandOutput::failure_with(1, "read error"))
            .respond_when("push", CommandOutput::success_with("1 file pushed"));

        let out = runner
            .run("adb", &["push", "broken.mp4", "/sdcard/broken.mp4"])
            .unwrap();
        assert!(!out.success());

        let out = runner
            .run("adb", &["push", "fine.mp4", "/sdcard/fine.mp4"])
            .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "1 file pushed");
    }

    #[test]
    fn test_unavailable_runner() {
        let runner = ScriptedRunner::unavailable();
        let err = runner.run("adb", &["devices"]).unwrap_err();
        assert!(matches!(err, PushError::BridgeUnavailable(_)));
        // The failed invocation is still recorded.
        assert_eq!(runner.calls().len(), 1);
    }
}
