//! Flag rule rows and the interpreter that evaluates them.

use std::collections::HashSet;

use carmatch_core::errors::RuleError;
use carmatch_core::flags::{Flag, FlagSet, FlagValue, Stance};
use tracing::trace;

use crate::inputs::FlagInputs;

/// A side-effect-free test over the inputs.
pub type Predicate = fn(&FlagInputs<'_>) -> bool;

/// One `(predicate, value)` arm of a flag definition.
#[derive(Clone, Copy)]
pub struct FlagCase {
    pub when: Predicate,
    pub value: FlagValue,
}

impl FlagCase {
    pub fn new(when: Predicate, value: FlagValue) -> Self {
        Self { when, value }
    }

    pub fn stance(when: Predicate, stance: Stance) -> Self {
        Self::new(when, FlagValue::Stance(stance))
    }
}

impl std::fmt::Debug for FlagCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagCase").field("value", &self.value).finish()
    }
}

/// All the ways one flag can be set. Cases are an ordered match: the first
/// predicate that holds decides the value, otherwise the flag keeps its
/// default.
#[derive(Debug, Clone)]
pub struct FlagDefinition {
    pub flag: Flag,
    pub cases: Vec<FlagCase>,
}

impl FlagDefinition {
    /// Boolean flag set to `true` when `when` holds.
    pub fn boolean(flag: Flag, when: Predicate) -> Self {
        Self {
            flag,
            cases: vec![FlagCase::new(when, FlagValue::Bool(true))],
        }
    }

    /// Stance flag with graded cases.
    pub fn graded(flag: Flag, cases: Vec<FlagCase>) -> Self {
        Self { flag, cases }
    }

    /// Index and value of the first case that holds.
    pub fn evaluate(&self, inputs: &FlagInputs<'_>) -> Option<(usize, FlagValue)> {
        self.cases
            .iter()
            .enumerate()
            .find(|(_, case)| (case.when)(inputs))
            .map(|(i, case)| (i, case.value))
    }
}

/// A validated set of flag definitions, at most one per flag.
#[derive(Debug, Clone)]
pub struct FlagTable {
    definitions: Vec<FlagDefinition>,
}

impl FlagTable {
    /// Validate and build a table.
    ///
    /// Rejects a flag defined twice and any case whose value kind differs
    /// from the flag's declared kind.
    pub fn new(definitions: Vec<FlagDefinition>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if !seen.insert(def.flag) {
                return Err(RuleError::DuplicateFlag {
                    flag: def.flag.to_string(),
                });
            }
            if let Some(case) = def
                .cases
                .iter()
                .position(|c| c.value.kind() != def.flag.kind())
            {
                return Err(RuleError::MismatchedFlagValue {
                    flag: def.flag.to_string(),
                    case,
                });
            }
        }
        Ok(Self { definitions })
    }

    /// The built-in rule set.
    pub fn standard() -> Self {
        Self {
            definitions: crate::rules::standard_definitions(),
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn definitions(&self) -> &[FlagDefinition] {
        &self.definitions
    }

    /// Evaluate every row against `inputs`. Flags without a firing case keep
    /// their default value.
    pub fn evaluate(&self, inputs: &FlagInputs<'_>) -> FlagSet {
        let mut flags = FlagSet::defaults();
        for def in &self.definitions {
            if let Some((case, value)) = def.evaluate(inputs) {
                trace!(flag = %def.flag, case, ?value, "flag rule fired");
                flags.set(def.flag, value);
            }
        }
        flags
    }
}
