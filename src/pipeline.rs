use crate::step::Step;

/// A named, ordered list of steps. Insertion order is execution order.
///
/// ```rust
/// use task_chain::Pipeline;
///
/// let pipe = Pipeline::new("review")
///     .add("draft", "Write a draft")
///     .add_with_agent("edit", "Tighten the draft", "lucidia");
///
/// assert_eq!(pipe.len(), 2);
/// assert_eq!(pipe.steps()[1].agent_id(), "lucidia");
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step bound to the default agent.
    pub fn add(self, name: impl Into<String>, instruction: impl Into<String>) -> Self {
        self.push(Step::with_default_agent(name, instruction))
    }

    /// Append a step bound to `agent_id`.
    pub fn add_with_agent(
        self,
        name: impl Into<String>,
        instruction: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        self.push(Step::new(name, instruction, agent_id))
    }

    /// Append an already built step.
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
