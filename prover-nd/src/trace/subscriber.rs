use serde_derive::{Deserialize, Serialize};
use std::{fmt, fs::File, io::Write, sync::Mutex};
use tracing::*;

/// Thread safe json logger that writes one record per derivation event into a given log file.
pub struct JsonLogger {
    log_file: Mutex<File>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }

    fn write<T: serde::Serialize>(&self, record: &T) {
        if let (Ok(mut file), Ok(json)) = (self.log_file.lock(), serde_json::to_string(record)) {
            let _ = writeln!(file, "{}", json);
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, _: &span::Attributes) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        if let Some(event_type) = &recorder.event {
            match event_type.as_str() {
                super::APPLY | super::DERIVED | super::LIMIT => {
                    if let Some(record) = StepRecord::try_from(recorder) {
                        self.write(&record);
                    }
                }
                super::GOAL => {
                    if let Some(record) = GoalRecord::try_from(recorder) {
                        self.write(&record);
                    }
                }
                _ => (),
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record of a rule application, a derived formula, or the step limit being reached.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct StepRecord {
    event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    premise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conclusion: Option<String>,
}

impl StepRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(StepRecord {
            event: value.event?,
            step: value.step,
            rule: value.rule,
            premise: value.premise,
            conclusion: value.conclusion,
        })
    }
}

/// A record of a goal, checked against the derived formulae.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct GoalRecord {
    event: String,
    goal: String,
    proved: bool,
}

impl GoalRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(GoalRecord {
            event: value.event?,
            goal: value.goal?,
            proved: value.proved?,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the triggering event,
/// `Recorder` will be converted to its corresponding log record.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    step: Option<u64>,
    rule: Option<String>,
    premise: Option<String>,
    conclusion: Option<String>,
    goal: Option<String>,
    proved: Option<bool>,
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        if field.name() == super::STEP_FIELD {
            self.step = Some(value);
        }
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == super::PROVED_FIELD {
            self.proved = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(value.to_owned()),
            super::RULE_FIELD => self.rule = Some(value.to_owned()),
            _ => (),
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::PREMISE_FIELD => self.premise = Some(format!("{:?}", value)),
            super::CONCLUSION_FIELD => self.conclusion = Some(format!("{:?}", value)),
            super::GOAL_FIELD => self.goal = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{derive::Deriver, test_prelude::*};
    use std::io::Read;

    fn log_records<F: FnOnce()>(name: &str, run: F) -> Vec<serde_json::Value> {
        let path = std::env::temp_dir().join(format!(
            "prover-nd-{}-{}.json",
            name,
            std::process::id()
        ));
        let logger = JsonLogger::new(File::create(&path).unwrap());
        tracing::subscriber::with_default(logger, run);

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        let _ = std::fs::remove_file(&path);
        contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn log_derivation() {
        let records = log_records("derivation", || {
            let derivation = Deriver::default().derive(&fofs(&["p & q"]));
            derivation.proves(&fof("q"));
        });

        let derived = records
            .iter()
            .filter(|r| r["event"] == "@derived")
            .collect::<Vec<_>>();
        assert_eq!(2, derived.len());
        assert_eq!(1, derived[0]["step"]);
        assert_eq!("AndEL", derived[0]["rule"]);
        assert_eq!("(<p> & <q>)", derived[0]["premise"]);
        assert_eq!("<p>", derived[0]["conclusion"]);
        assert_eq!("<q>", derived[1]["conclusion"]);

        let goal = records.iter().find(|r| r["event"] == "@goal").unwrap();
        assert_eq!("<q>", goal["goal"]);
        assert_eq!(true, goal["proved"]);
    }

    #[test]
    fn log_limit() {
        let records = log_records("limit", || {
            Deriver::default().with_limit(1).derive(&fofs(&["p & q"]));
        });
        let limit = records.iter().find(|r| r["event"] == "@limit").unwrap();
        assert_eq!(1, limit["step"]);
        assert!(limit.get("rule").is_none());
    }

    #[test]
    fn goal_record() {
        let recorder = Recorder {
            event: Some("@goal".into()),
            goal: Some("<p>".into()),
            proved: Some(false),
            ..Recorder::default()
        };
        assert_eq!(
            Some(GoalRecord {
                event: "@goal".into(),
                goal: "<p>".into(),
                proved: false,
            }),
            GoalRecord::try_from(recorder)
        );
        assert_eq!(None, GoalRecord::try_from(Recorder::default()));
    }
}
