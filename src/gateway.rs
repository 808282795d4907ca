use serde::Serialize;
use tracing::debug;
use ureq::Agent;

use crate::agent::{AgentCaller, AgentReply, StepError};
use crate::config::GatewayConfig;

#[derive(Debug, Serialize)]
struct AgentRequest<'a> {
    agent: &'a str,
    intent: &'a str,
    input: &'a str,
}

/// [`AgentCaller`] that POSTs each task to an HTTP agent gateway.
///
/// The configured timeout bounds the whole exchange, connect through body.
/// Non-2xx statuses come back as [`StepError::Status`].
pub struct HttpGateway {
    http: Agent,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        let http: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();

        Self {
            http,
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AgentCaller for HttpGateway {
    fn call(
        &mut self,
        agent_id: &str,
        instruction: &str,
        context: &str,
    ) -> Result<AgentReply, StepError> {
        let request = AgentRequest {
            agent: agent_id,
            intent: instruction,
            input: context,
        };

        debug!(endpoint = %self.endpoint, agent = agent_id, input_len = context.len(), "calling agent");

        let reply: AgentReply = self
            .http
            .post(self.endpoint.as_str())
            .send_json(&request)?
            .body_mut()
            .read_json()?;

        debug!(agent = agent_id, output_len = reply.output.len(), "agent replied");
        Ok(reply)
    }
}
