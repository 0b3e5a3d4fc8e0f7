/// What a driver should show for one cell after the latest step.
///
/// The fixed kinds (Start, Goal, Obstruction) come from the grid snapshot
/// and take precedence over frontier membership.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayState {
    Free,
    Start,
    Goal,
    Obstruction,
    /// Discovered, not yet finalized.
    Open,
    /// Finalized.
    Closed,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::engine::Outcome;

    #[test]
    fn display_state_and_outcome_serialize_by_name() {
        let json = serde_json::to_string(&(DisplayState::Closed, Outcome::NoPath)).unwrap();
        assert_eq!(json, r#"["Closed","NoPath"]"#);
        let back: (DisplayState, Outcome) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, (DisplayState::Closed, Outcome::NoPath));
    }
}
