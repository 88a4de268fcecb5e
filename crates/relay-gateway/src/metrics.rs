//! Relay request counters, exposed on `/metrics`.
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use relay_core::Capability;

pub struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let requests = IntCounterVec::new(
            Opts::new(
                "relay_requests_total",
                "Relayed demo requests by capability and outcome",
            ),
            &["capability", "outcome"],
        )
        .expect("valid metric definition");
        registry
            .register(Box::new(requests.clone()))
            .expect("metric registration");
        Self { registry, requests }
    }

    pub fn record(&self, capability: Capability, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.requests
            .with_label_values(&[capability.webhook_route(), outcome])
            .inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_encode() {
        let metrics = Metrics::new();
        metrics.record(Capability::Chat, true);
        metrics.record(Capability::Chat, false);
        metrics.record(Capability::DocumentQa, true);

        let text = metrics.encode().unwrap();
        assert!(text.contains("relay_requests_total"));
        assert!(text.contains("capability=\"ai-test\""));
        assert!(text.contains("outcome=\"failure\""));
    }
}
