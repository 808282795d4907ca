use serde::Deserialize;
use thiserror::Error;

/// What an agent sends back for one call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentReply {
    /// Text handed to the next step. A reply without it decodes as empty.
    #[serde(default)]
    pub output: String,
}

impl AgentReply {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Performs one attempt at invoking a remote agent.
///
/// Implementors must return an error rather than a partial reply when the
/// call can't be completed, and enforce their own timeout. The runner adds
/// none of its own.
pub trait AgentCaller {
    fn call(
        &mut self,
        agent_id: &str,
        instruction: &str,
        context: &str,
    ) -> Result<AgentReply, StepError>;
}

impl<C: AgentCaller + ?Sized> AgentCaller for &mut C {
    fn call(
        &mut self,
        agent_id: &str,
        instruction: &str,
        context: &str,
    ) -> Result<AgentReply, StepError> {
        (**self).call(agent_id, instruction, context)
    }
}

impl<C: AgentCaller + ?Sized> AgentCaller for Box<C> {
    fn call(
        &mut self,
        agent_id: &str,
        instruction: &str,
        context: &str,
    ) -> Result<AgentReply, StepError> {
        (**self).call(agent_id, instruction, context)
    }
}

/// A failed attempt to invoke an agent.
///
/// The runner treats every variant the same way (retry, then record); the
/// variants only exist so the recorded message says what went wrong.
#[derive(Debug, Error)]
pub enum StepError {
    /// Connection refused, DNS, timeout and other transport trouble.
    #[error("transport: {0}")]
    Transport(String),
    /// The gateway answered with a non-success status.
    #[error("gateway returned status {0}")]
    Status(u16),
    /// The response body wasn't the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}

impl From<ureq::Error> for StepError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => StepError::Status(code),
            ureq::Error::Json(err) => StepError::Decode(err.to_string()),
            other => StepError::Transport(other.to_string()),
        }
    }
}

impl StepError {
    pub fn transport(msg: impl Into<String>) -> Self {
        StepError::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        StepError::Decode(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        StepError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- StepError Display ---

    #[test]
    fn display_transport() {
        let err = StepError::transport("connection refused");
        assert_eq!(err.to_string(), "transport: connection refused");
    }

    #[test]
    fn display_status() {
        assert_eq!(StepError::Status(503).to_string(), "gateway returned status 503");
    }

    #[test]
    fn display_decode() {
        let err = StepError::decode("expected value");
        assert_eq!(err.to_string(), "malformed response: expected value");
    }

    #[test]
    fn display_other() {
        assert_eq!(StepError::other("boom").to_string(), "boom");
    }

    // --- From conversions ---

    #[test]
    fn from_ureq_status_code() {
        let err: StepError = ureq::Error::StatusCode(500).into();
        assert!(matches!(err, StepError::Status(500)));
    }

    // --- AgentReply decoding ---

    #[test]
    fn reply_decodes_output() {
        let reply: AgentReply = serde_json::from_str(r#"{"output":"hi","extra":1}"#).unwrap();
        assert_eq!(reply, AgentReply::new("hi"));
    }

    #[test]
    fn reply_without_output_is_empty() {
        let reply: AgentReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.output, "");
    }

    #[test]
    fn reply_with_non_string_output_is_rejected() {
        assert!(serde_json::from_str::<AgentReply>(r#"{"output":42}"#).is_err());
    }

    // --- forwarding impls ---

    struct Echo;
    impl AgentCaller for Echo {
        fn call(&mut self, agent_id: &str, _: &str, context: &str) -> Result<AgentReply, StepError> {
            Ok(AgentReply::new(format!("{agent_id}:{context}")))
        }
    }

    fn call_through<C: AgentCaller>(mut caller: C, agent_id: &str, context: &str) -> String {
        caller.call(agent_id, "instruction", context).unwrap().output
    }

    #[test]
    fn boxed_and_borrowed_callers_forward() {
        let mut echo = Echo;
        assert_eq!(call_through(&mut echo, "a", "x"), "a:x");

        let boxed: Box<dyn AgentCaller> = Box::new(Echo);
        assert_eq!(call_through(boxed, "b", "y"), "b:y");
    }
}
