use std::env;

/// Behavior switches for the two open questions in the order workflow.
///
/// Production behavior is permissive on both counts: staff may set any
/// status from any other (they use this to correct mistakes), and
/// `picked_up_at` is never written. Both defaults reproduce that; the flags
/// exist because neither behavior is obviously intended.
// TODO: confirm with shop staff whether pickup timestamps should be recorded
// by default, then drop the flag.
#[derive(Debug, Clone, Copy)]
pub struct OrderPolicy {
    /// When set, a status may not move backwards through the pipeline.
    /// Forward skips stay legal.
    pub strict_transitions: bool,
    /// When set, moving an order to picked-up stamps `picked_up_at`.
    pub set_picked_up_at: bool,
}

impl OrderPolicy {
    pub fn permissive() -> Self {
        Self {
            strict_transitions: false,
            set_picked_up_at: false,
        }
    }

    pub fn from_env() -> Self {
        Self {
            strict_transitions: env_flag("ORDER_STRICT_TRANSITIONS"),
            set_picked_up_at: env_flag("ORDER_SET_PICKED_UP_AT"),
        }
    }
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_is_the_default() {
        let policy = OrderPolicy::default();
        assert!(!policy.strict_transitions);
        assert!(!policy.set_picked_up_at);
    }
}
