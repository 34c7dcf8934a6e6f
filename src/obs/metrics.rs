// self
use crate::{
	_prelude::*,
	error::ConfigError,
	obs::{FlowKind, FlowOutcome},
};

/// Records a flow outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_client_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts a failed flow under `oauth1_client_flow_failure_total`, labeled by [`failure_reason`].
pub fn record_flow_failure(kind: FlowKind, error: &Error) {
	let reason = failure_reason(error);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_client_flow_failure_total",
			"flow" => kind.as_str(),
			"reason" => reason
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, reason);
	}
}

/// Low-cardinality label describing why a flow failed.
pub fn failure_reason(error: &Error) -> &'static str {
	match error {
		Error::Config(ConfigError::MissingVerifier) => "missing_verifier",
		Error::Config(_) => "config",
		Error::Transport(_) => "transport",
		Error::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
		Error::ProtocolViolation { status: Some(200), .. } => "callback_unconfirmed",
		Error::ProtocolViolation { .. } => "provider_status",
		Error::MalformedResponse { .. } => "malformed_response",
		Error::InvalidState { .. } => "invalid_state",
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{error::TransportError, flows::HandshakeState};

	#[test]
	fn recording_is_safe_without_a_recorder() {
		record_flow_outcome(FlowKind::AccessToken, FlowOutcome::Failure);
		record_flow_failure(FlowKind::AccessToken, &ConfigError::MissingVerifier.into());
	}

	#[test]
	fn failure_reasons_separate_handshake_errors() {
		let unconfirmed = Error::ProtocolViolation {
			reason: "request_token response did not confirm the callback".into(),
			status: Some(200),
			body: "oauth_token=t&oauth_token_secret=s".into(),
		};
		let rejected = Error::ProtocolViolation {
			reason: "request_token endpoint answered with HTTP 401".into(),
			status: Some(401),
			body: String::new(),
		};

		assert_eq!(failure_reason(&unconfirmed), "callback_unconfirmed");
		assert_eq!(failure_reason(&rejected), "provider_status");
		assert_eq!(failure_reason(&ConfigError::MissingVerifier.into()), "missing_verifier");
		assert_eq!(failure_reason(&ConfigError::MissingApiUrl.into()), "config");
		assert_eq!(
			failure_reason(&TransportError::Io(std::io::Error::other("reset")).into()),
			"transport"
		);
		assert_eq!(
			failure_reason(&Error::InvalidState {
				state: HandshakeState::Failed,
				operation: "access_token"
			}),
			"invalid_state"
		);
	}
}
