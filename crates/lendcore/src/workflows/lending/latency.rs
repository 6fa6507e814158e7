use std::time::Duration;

/// Optional artificial delay the mock API applies before answering, matching
/// the pause a real backend round trip would add to the front end. Carries no
/// ordering or correctness semantics; `None` is a strict no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLatency(Option<Duration>);

impl SimulatedLatency {
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn from_millis(millis: Option<u64>) -> Self {
        Self(millis.map(Duration::from_millis))
    }

    pub async fn pause(&self) {
        if let Some(delay) = self.0 {
            tokio::time::sleep(delay).await;
        }
    }
}
