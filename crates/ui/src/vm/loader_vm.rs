use std::time::Duration;

pub const LOADER_TIPS: [&str; 6] = [
    "🧠 Analyzing your symptoms...",
    "🔍 Cross-referencing medical database...",
    "📊 Processing health patterns...",
    "🩺 Consulting AI medical knowledge...",
    "💊 Preparing recommendations...",
    "✨ Almost ready with your diagnosis...",
];

pub const TIP_INTERVAL: Duration = Duration::from_secs(2);
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(500);
pub const HEARTBEAT_PHASES: u8 = 3;

/// Rotating tip and heartbeat phase shown while a prediction is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderVm {
    tip: usize,
    heartbeat: u8,
}

impl LoaderVm {
    pub fn advance_tip(&mut self) {
        self.tip = (self.tip + 1) % LOADER_TIPS.len();
    }

    pub fn advance_heartbeat(&mut self) {
        self.heartbeat = (self.heartbeat + 1) % HEARTBEAT_PHASES;
    }

    #[must_use]
    pub fn tip(&self) -> &'static str {
        LOADER_TIPS[self.tip]
    }

    #[must_use]
    pub fn heartbeat_phase(&self) -> u8 {
        self.heartbeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_wrap_around() {
        let mut vm = LoaderVm::default();
        assert_eq!(vm.tip(), LOADER_TIPS[0]);
        for _ in 0..LOADER_TIPS.len() {
            vm.advance_tip();
        }
        assert_eq!(vm.tip(), LOADER_TIPS[0]);
        vm.advance_tip();
        assert_eq!(vm.tip(), "🔍 Cross-referencing medical database...");
    }

    #[test]
    fn heartbeat_cycles_through_three_phases() {
        let mut vm = LoaderVm::default();
        let phases = (0..4)
            .map(|_| {
                let phase = vm.heartbeat_phase();
                vm.advance_heartbeat();
                phase
            })
            .collect::<Vec<_>>();
        assert_eq!(phases, vec![0, 1, 2, 0]);
    }
}
