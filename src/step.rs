/// Agent used when a step doesn't name one.
pub const DEFAULT_AGENT: &str = "octavia";

/// One named unit of work: an instruction bound to a target agent.
///
/// Steps are immutable once built. Nothing is validated, so empty names or
/// instructions are carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    instruction: String,
    agent_id: String,
}

impl Step {
    pub fn new(
        name: impl Into<String>,
        instruction: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instruction: instruction.into(),
            agent_id: agent_id.into(),
        }
    }

    /// Create a step bound to [`DEFAULT_AGENT`].
    pub fn with_default_agent(name: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self::new(name, instruction, DEFAULT_AGENT)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }
}
