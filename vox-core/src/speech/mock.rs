use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::speech::error::SpeechError;
use crate::speech::gemini::OUTPUT_SAMPLE_RATE;
use crate::speech::provider::SpeechSynthesizer;
use crate::speech::types::{SynthesisRequest, SynthesisResponse};

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Return a fixed 1024-byte PCM payload
    #[default]
    Success,
    /// Return the given PCM payload
    SuccessWith { pcm: Vec<u8> },
    /// Succeed with no audio payload at all
    EmptyPayload,
    /// Fail with a server-side service error
    ServiceError,
    /// Fail with a bad-request error
    InvalidRequest,
    /// Fail with a transport error
    TransportError,
    /// Play behaviors in order, one per call; Success once drained
    BehaviorQueue { behaviors: Vec<MockBehavior> },
}

/// Deterministic synthesizer for testing the pipeline without a network.
#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<MockBehavior>>,
    call_count: Arc<Mutex<usize>>,
    captured_requests: Arc<Mutex<Vec<SynthesisRequest>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            call_count: Arc::new(Mutex::new(0)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn pop_behavior_from_queue(behavior: &mut MockBehavior) -> MockBehavior {
        if let MockBehavior::BehaviorQueue { behaviors } = behavior {
            if behaviors.is_empty() {
                return MockBehavior::Success;
            }
            return behaviors.remove(0);
        }
        behavior.clone()
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn captured_requests(&self) -> Vec<SynthesisRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn last_captured_request(&self) -> Option<SynthesisRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }

    /// The payload `MockBehavior::Success` returns.
    pub fn default_pcm() -> Vec<u8> {
        (0..1024u32).map(|i| i as u8).collect()
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechError> {
        {
            let mut requests = self.captured_requests.lock().unwrap();
            requests.push(request);
        }

        {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
        }

        let effective = {
            let mut behavior = self.behavior.lock().unwrap();
            Self::pop_behavior_from_queue(&mut behavior)
        };

        match effective {
            MockBehavior::Success => Ok(SynthesisResponse {
                pcm: Some(Self::default_pcm()),
                sample_rate: OUTPUT_SAMPLE_RATE,
            }),
            MockBehavior::SuccessWith { pcm } => Ok(SynthesisResponse {
                pcm: Some(pcm),
                sample_rate: OUTPUT_SAMPLE_RATE,
            }),
            MockBehavior::EmptyPayload => Ok(SynthesisResponse {
                pcm: None,
                sample_rate: OUTPUT_SAMPLE_RATE,
            }),
            MockBehavior::ServiceError => Err(SpeechError::Service(anyhow!(
                "Mock service error"
            ))),
            MockBehavior::InvalidRequest => Err(SpeechError::InvalidRequest(anyhow!(
                "Mock invalid request"
            ))),
            MockBehavior::TransportError => Err(SpeechError::Transport(anyhow!(
                "Mock transport error"
            ))),
            MockBehavior::BehaviorQueue { .. } => {
                panic!("Bug: nested BehaviorQueue detected. Test setup error - BehaviorQueues cannot contain other BehaviorQueues")
            }
        }
    }
}
