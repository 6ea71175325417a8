//! Method name to parser registry
//!
//! A registry is filled once during start-up and only read afterwards.
//! Lookups take `&self`, so a registry stored in a `static` or behind an
//! `Arc` can be shared by any number of request handlers without locking.

use crate::{CmdError, DuplicatePolicy, RawCmd, Result};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Function turning a generic envelope into a typed command
pub type Parser<C> = fn(&RawCmd) -> Result<C>;

#[derive(Debug)]
pub struct CommandRegistry<C> {
    parsers: HashMap<String, Parser<C>>,
    policy: DuplicatePolicy,
}

impl<C> CommandRegistry<C> {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            parsers: HashMap::new(),
            policy,
        }
    }

    /// Bind `method` to `parser`.
    ///
    /// With `DuplicatePolicy::Replace` a later registration overrides an
    /// earlier one; with `DuplicatePolicy::Reject` it fails and the first
    /// binding is kept.
    pub fn register(&mut self, method: &str, parser: Parser<C>) -> Result<()> {
        if self.parsers.contains_key(method) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(CmdError::DuplicateMethod(method.to_string()));
                }
                DuplicatePolicy::Replace => {
                    warn!(method, "replacing registered command parser");
                }
            }
        }

        self.parsers.insert(method.to_string(), parser);
        debug!(method, "registered command parser");
        Ok(())
    }

    pub fn lookup(&self, method: &str) -> Option<Parser<C>> {
        self.parsers.get(method).copied()
    }

    /// Registered method names, sorted
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Dispatch `raw` to the parser registered for its method
    pub fn parse(&self, raw: &RawCmd) -> Result<C> {
        let parser = self
            .lookup(&raw.method)
            .ok_or_else(|| CmdError::UnknownMethod(raw.method.clone()))?;

        match parser(raw) {
            Ok(cmd) => {
                trace!(method = %raw.method, "parsed command");
                Ok(cmd)
            }
            Err(err) => {
                debug!(method = %raw.method, error = %err, "rejected command");
                Err(err)
            }
        }
    }
}

impl<C> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
