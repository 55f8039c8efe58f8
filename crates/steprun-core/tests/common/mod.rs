use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use steprun_core::{
    RandomSource, SeededRandom, Simulator, SimulatorBuilder, SimulatorConfig, StepRequest,
    Terminator,
};

/// Terminator that counts simulated crashes instead of exiting.
#[derive(Default)]
pub struct CountingTerminator {
    calls: AtomicUsize,
}

impl CountingTerminator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Terminator for CountingTerminator {
    fn terminate(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Random source that replays a fixed list of draws
pub struct ScriptedRandom {
    draws: Mutex<VecDeque<u64>>,
}

impl ScriptedRandom {
    pub fn new(draws: &[u64]) -> Arc<Self> {
        Arc::new(Self {
            draws: Mutex::new(draws.iter().copied().collect()),
        })
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&self, bound: u64) -> u64 {
        let value = self
            .draws
            .lock()
            .unwrap()
            .pop_front()
            .expect("Random draws exhausted");
        value.min(bound - 1)
    }
}

/// Helper function to create a test simulator on tokio's clock
pub fn create_test_simulator(
    config: SimulatorConfig,
    random: Arc<dyn RandomSource>,
) -> (Arc<Simulator>, Arc<CountingTerminator>) {
    let terminator = Arc::new(CountingTerminator::default());
    let simulator = SimulatorBuilder::new()
        .with_config(config)
        .with_random(random)
        .with_terminator(terminator.clone())
        .build();
    (Arc::new(simulator), terminator)
}

/// Seeded simulator with crashes disabled
pub fn create_seeded_simulator(seed: u64) -> Arc<Simulator> {
    create_test_simulator(
        SimulatorConfig::without_crashes(),
        Arc::new(SeededRandom::new(seed)),
    )
    .0
}

pub fn step(step_name: &str, status: Option<&str>, build_time: Option<u64>) -> StepRequest {
    StepRequest {
        step_name: step_name.to_string(),
        repo_path: "/repo".to_string(),
        commit_hash: "deadbeef".to_string(),
        simulate_status: status.map(str::to_string),
        simulate_build_time: build_time,
    }
}
