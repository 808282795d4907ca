use crate::agent::{AgentCaller, StepError};
use crate::backoff::Backoff;
use crate::pipeline::Pipeline;
use crate::record::StepRecord;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Passed to the `on_step` hook after a step succeeds.
pub struct StepEvent<'a> {
    pub step: &'a str,
    pub agent: &'a str,
    /// Attempts used, including the successful one.
    pub attempts: u32,
    /// Length in characters of the full, untruncated output.
    pub output_chars: usize,
    pub duration: Duration,
}

/// Passed to the `on_error` hook after every failed attempt.
pub struct ErrorEvent<'a> {
    pub step: &'a str,
    pub agent: &'a str,
    pub error: &'a StepError,
    /// 0-indexed attempt that just failed.
    pub attempt: u32,
    /// Delay before the next attempt, or `None` when the step is out of
    /// attempts and will be recorded as failed.
    pub retry_in: Option<Duration>,
}

/// Executes a [`Pipeline`] step by step against an [`AgentCaller`].
///
/// Each step's full output becomes the next step's input. A step that keeps
/// failing is recorded as an error and the run carries on with the last
/// successful output. Results accumulate across calls to [`Runner::run`]
/// until [`Runner::clear_results`] is called.
pub struct Runner<C: AgentCaller> {
    pipeline: Pipeline,
    caller: C,
    max_retries: u32,
    backoff: Backoff,
    results: Vec<StepRecord>,
    on_step: Option<Box<dyn FnMut(&StepEvent)>>,
    on_error: Option<Box<dyn FnMut(&ErrorEvent)>>,
}

impl<C: AgentCaller> Runner<C> {
    pub fn new(pipeline: Pipeline, caller: C) -> Self {
        Self {
            pipeline,
            caller,
            max_retries: 2,
            backoff: Backoff::default(),
            results: Vec::new(),
            on_step: None,
            on_error: None,
        }
    }

    /// Retries per step after the first attempt, so each step gets
    /// `max_retries + 1` attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Register a callback that fires after each successful step.
    pub fn on_step(mut self, cb: impl FnMut(&StepEvent) + 'static) -> Self {
        self.on_step = Some(Box::new(cb));
        self
    }

    /// Register a callback that fires after each failed attempt.
    pub fn on_error(mut self, cb: impl FnMut(&ErrorEvent) + 'static) -> Self {
        self.on_error = Some(Box::new(cb));
        self
    }

    /// Set both hooks to report progress through `tracing`.
    pub fn with_tracing(self) -> Self {
        self.on_step(|e| {
            info!(
                step = e.step,
                agent = e.agent,
                attempts = e.attempts,
                "✓ {} ({} chars, {:.3}s)",
                e.step,
                e.output_chars,
                e.duration.as_secs_f64()
            );
        })
        .on_error(|e| match e.retry_in {
            Some(delay) => warn!(
                step = e.step,
                agent = e.agent,
                attempt = e.attempt,
                "attempt failed: {}; retrying in {:.3}s",
                e.error,
                delay.as_secs_f64()
            ),
            None => warn!(step = e.step, agent = e.agent, "✗ {} failed: {}", e.step, e.error),
        })
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn caller(&self) -> &C {
        &self.caller
    }

    /// Everything recorded so far, across all runs.
    pub fn results(&self) -> &[StepRecord] {
        &self.results
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Run every step once, in order, starting from `initial_input`.
    ///
    /// Appends one record per step and returns the whole accumulated log.
    /// Attempts per step come from [`Runner::with_max_retries`].
    pub fn run(&mut self, initial_input: &str) -> &[StepRecord] {
        info!(
            pipeline = self.pipeline.name(),
            steps = self.pipeline.len(),
            "starting pipeline"
        );

        let mut context = initial_input.to_string();

        for step in self.pipeline.steps() {
            info!(step = step.name(), agent = step.agent_id(), "▶ {}...", step.name());
            let start = Instant::now();

            for attempt in 0..=self.max_retries {
                match self
                    .caller
                    .call(step.agent_id(), step.instruction(), &context)
                {
                    Ok(reply) => {
                        if let Some(cb) = &mut self.on_step {
                            cb(&StepEvent {
                                step: step.name(),
                                agent: step.agent_id(),
                                attempts: attempt + 1,
                                output_chars: reply.output.chars().count(),
                                duration: start.elapsed(),
                            });
                        }
                        self.results
                            .push(StepRecord::success(step.name(), &reply.output));
                        context = reply.output;
                        break;
                    }
                    Err(err) => {
                        let retry_in =
                            (attempt < self.max_retries).then(|| self.backoff.delay_for(attempt));

                        if let Some(cb) = &mut self.on_error {
                            cb(&ErrorEvent {
                                step: step.name(),
                                agent: step.agent_id(),
                                error: &err,
                                attempt,
                                retry_in,
                            });
                        }

                        match retry_in {
                            Some(delay) => std::thread::sleep(delay),
                            None => self
                                .results
                                .push(StepRecord::failure(step.name(), err.to_string())),
                        }
                    }
                }
            }
        }

        &self.results
    }
}
