use crate::terminal::StyleId;

pub(crate) const BANNER: &str = r#"
    ┌─────────────────────────────────────┐
    │  prover  ·  first-order TPTP tools  │
    └─────────────────────────────────────┘
"#;
pub(crate) const SEPARATOR: &str = "========================";

pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_BACKGROUND: StyleId = 2;
pub(crate) const STYLE_GOAL: StyleId = 3;
pub(crate) const STYLE_STEP: StyleId = 4;
pub(crate) const STYLE_PROVED: StyleId = 5;
pub(crate) const STYLE_UNPROVED: StyleId = 6;
