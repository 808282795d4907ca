//! Chain remote agent calls into a linear pipeline.
//!
//! Build a [`Pipeline`] of named steps, hand it to a [`Runner`] together with
//! an [`AgentCaller`], and run it. Each step's output becomes the next step's
//! input. Failed calls are retried with doubling [`Backoff`]; a step that
//! never succeeds is recorded as a [`StepRecord::Failure`] and the run keeps
//! going with the last good output.
//!
//! # Quick start
//!
//! ```rust
//! use task_chain::{AgentCaller, AgentReply, Backoff, Pipeline, Runner, StepError};
//!
//! struct Shout;
//! impl AgentCaller for Shout {
//!     fn call(&mut self, _agent: &str, _instruction: &str, input: &str) -> Result<AgentReply, StepError> {
//!         Ok(AgentReply::new(format!("{}!", input.to_uppercase())))
//!     }
//! }
//!
//! let pipe = Pipeline::new("demo")
//!     .add("loud", "Make it loud")
//!     .add("louder", "Make it louder");
//!
//! let mut runner = Runner::new(pipe, Shout).with_backoff(Backoff::none());
//! let results = runner.run("hi");
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].output(), Some("HI!!"));
//! ```
//!
//! Talking to a real gateway goes through [`HttpGateway`]:
//!
//! ```rust,no_run
//! use task_chain::{GatewayConfig, HttpGateway, Pipeline, Runner};
//!
//! let gateway = HttpGateway::new(GatewayConfig::from_env());
//! let pipe = Pipeline::new("remote").add_with_agent("summarize", "Summarize", "lucidia");
//! let mut runner = Runner::new(pipe, gateway).with_tracing();
//! runner.run("some text");
//! ```

mod agent;
mod backoff;
mod config;
mod gateway;
mod pipeline;
mod record;
mod runner;
mod step;

pub use agent::{AgentCaller, AgentReply, StepError};
pub use backoff::Backoff;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GATEWAY_URL_ENV, GatewayConfig};
pub use gateway::HttpGateway;
pub use pipeline::Pipeline;
pub use record::{OUTPUT_PREVIEW_CHARS, StepRecord};
pub use runner::{ErrorEvent, Runner, StepEvent};
pub use step::{DEFAULT_AGENT, Step};
