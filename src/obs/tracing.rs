// self
use crate::{_prelude::*, obs::FlowKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// A span builder used by client flows.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth1_client.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `warn` event describing a failed flow. Provider bodies are logged; secrets never
/// reach errors, so nothing sensitive is emitted.
pub fn warn_flow_failure(kind: FlowKind, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		match error {
			Error::ProtocolViolation { status, body, .. } => tracing::warn!(
				flow = kind.as_str(),
				status = ?status,
				body = body.as_str(),
				"{error}"
			),
			Error::MalformedResponse { body, .. } =>
				tracing::warn!(flow = kind.as_str(), body = body.as_str(), "{error}"),
			_ => tracing::warn!(flow = kind.as_str(), "{error}"),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn warn_is_noop_safe_without_subscriber() {
		warn_flow_failure(
			FlowKind::RequestToken,
			&Error::MalformedResponse { reason: "missing oauth_token".into(), body: String::new() },
		);
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = FlowSpan::new(FlowKind::SignedRequest, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
