//! Scripted resolver for deterministic tests
//!
//! Replays a fixed sequence of answers in request order and records every
//! request it saw, so tests can assert both the derivation result and the
//! exact prompting sequence. When the script runs out, every further
//! request is declined.

use std::collections::VecDeque;

use super::errors::ResolveResult;
use super::resolver::{FactResolver, Resolution, ResolveRequest};

/// Resolver that replays a canned answer sequence.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    script: VecDeque<Resolution>,
    requests: Vec<String>,
}

impl ScriptedResolver {
    /// Create a resolver with no script: every request is declined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from an answer sequence.
    pub fn with_script(script: impl IntoIterator<Item = Resolution>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Queue one more answer.
    pub fn push(&mut self, answer: Resolution) {
        self.script.push_back(answer);
    }

    /// Variables requested so far, in request order.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl FactResolver for ScriptedResolver {
    fn resolve(&mut self, request: &ResolveRequest<'_>) -> ResolveResult<Resolution> {
        self.requests.push(request.variable.to_string());
        Ok(self.script.pop_front().unwrap_or(Resolution::Declined))
    }
}
