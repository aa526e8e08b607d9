use serde::{Deserialize, Serialize};
use std::fmt;

// Run state of the probe-then-audit pipeline
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Probing,
    AuditRunning,
    Reporting,
    Done,
    Failed,
}

impl RunState {
    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Idle, Probing)
                | (Probing, AuditRunning)
                | (Probing, Failed)
                | (AuditRunning, Reporting)
                | (AuditRunning, Failed)
                | (Reporting, Done)
                | (Reporting, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state_str = match self {
            RunState::Idle => "idle",
            RunState::Probing => "probing",
            RunState::AuditRunning => "auditrunning",
            RunState::Reporting => "reporting",
            RunState::Done => "done",
            RunState::Failed => "failed",
        };
        write!(f, "{}", state_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_legal() {
        let path = [
            RunState::Idle,
            RunState::Probing,
            RunState::AuditRunning,
            RunState::Reporting,
            RunState::Done,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn cannot_skip_probing_or_leave_terminal_states() {
        assert!(!RunState::Idle.can_transition_to(RunState::AuditRunning));
        assert!(!RunState::Done.can_transition_to(RunState::Probing));
        assert!(!RunState::Failed.can_transition_to(RunState::Idle));
        assert!(RunState::Failed.is_terminal());
    }
}
