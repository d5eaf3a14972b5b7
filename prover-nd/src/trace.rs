//! Defines the events that derivations log and a subscriber that writes them as JSON.
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// derivation log record fields:
pub const EVENT_FIELD: &str = "event";
pub const STEP_FIELD: &str = "step";
pub const RULE_FIELD: &str = "rule";
pub const PREMISE_FIELD: &str = "premise";
pub const CONCLUSION_FIELD: &str = "conclusion";
pub const GOAL_FIELD: &str = "goal";
pub const PROVED_FIELD: &str = "proved";

// log event types:
/// A rule applies to a premise.
pub const APPLY: &str = "@apply";

/// A new formula is derived.
pub const DERIVED: &str = "@derived";

/// A goal is checked against the derived formulae.
pub const GOAL: &str = "@goal";

/// The step limit is reached. The derivation stops before it is saturated.
pub const LIMIT: &str = "@limit";
