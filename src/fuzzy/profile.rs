//! Built-in inference profiles
//!
//! A profile bundles everything that differs between rule bases: the output
//! variable's breakpoints, the rule table and the output range table. The
//! engine itself is shared, so adding a profile is a matter of adding data.
//!
//! - `standard`: five mixed AND/OR rules, output universe 50..160
//! - `extended`: nine three-way AND rules, output universe 50..200

use serde::{Deserialize, Serialize};

use super::defuzzify::OutputRange;
use super::rules::{Antecedent, Input, Rule};
use super::variable::{Degrees, LinguisticVariable, Term};

/// Selects one of the built-in profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    #[default]
    Standard,
    Extended,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 2] = [ProfileKind::Standard, ProfileKind::Extended];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Standard => "standard",
            ProfileKind::Extended => "extended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "a" | "default" => Some(ProfileKind::Standard),
            "extended" | "b" => Some(ProfileKind::Extended),
            _ => None,
        }
    }

    pub fn profile(&self) -> &'static Profile {
        match self {
            ProfileKind::Standard => &STANDARD,
            ProfileKind::Extended => &EXTENDED,
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule base and output definition for one inference configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    pub kind: ProfileKind,
    pub description: &'static str,
    /// Output variable (blood sugar) breakpoints
    pub output: LinguisticVariable,
    pub rules: &'static [Rule],
    pub ranges: &'static [OutputRange],
}

impl Profile {
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Fuzzify a blood-sugar value against this profile's output terms
    pub fn fuzzify_output(&self, blood_sugar: f64) -> Degrees {
        self.output.fuzzify(blood_sugar)
    }
}

const fn age(label: &'static str) -> Antecedent {
    Antecedent::new(Input::Age, label)
}

const fn bmi(label: &'static str) -> Antecedent {
    Antecedent::new(Input::Bmi, label)
}

const fn activity(label: &'static str) -> Antecedent {
    Antecedent::new(Input::Activity, label)
}

pub static STANDARD: Profile = Profile {
    kind: ProfileKind::Standard,
    description: "Five mixed AND/OR rules, blood sugar 50-160",
    output: LinguisticVariable {
        name: "blood_sugar",
        universe: (50.0, 160.0),
        terms: &[
            Term::new("low", 50.0, 50.0, 70.0, 90.0),
            Term::new("normal", 70.0, 90.0, 100.0, 110.0),
            Term::new("high", 100.0, 110.0, 160.0, 160.0),
        ],
    },
    rules: &[
        Rule::or("low", &[age("young"), bmi("low")]),
        Rule::and("normal", &[age("middle_aged"), activity("moderate")]),
        Rule::and("high", &[age("old"), bmi("high")]),
        Rule::or("high", &[bmi("high"), activity("sedentary")]),
        Rule::and("low", &[age("young"), activity("active")]),
    ],
    ranges: &[
        OutputRange::new("low", 50, 90),
        OutputRange::new("normal", 70, 110),
        OutputRange::new("high", 100, 160),
    ],
};

pub static EXTENDED: Profile = Profile {
    kind: ProfileKind::Extended,
    description: "Nine three-way AND rules, blood sugar 50-200",
    output: LinguisticVariable {
        name: "blood_sugar",
        universe: (50.0, 200.0),
        terms: &[
            Term::new("low", 50.0, 50.0, 70.0, 90.0),
            Term::new("normal", 70.0, 90.0, 100.0, 110.0),
            Term::new("high", 100.0, 110.0, 200.0, 200.0),
        ],
    },
    rules: &[
        Rule::and("low", &[age("young"), bmi("low"), activity("active")]),
        Rule::and("low", &[age("young"), bmi("normal"), activity("active")]),
        Rule::and("normal", &[age("young"), bmi("normal"), activity("sedentary")]),
        Rule::and("normal", &[age("middle_aged"), bmi("normal"), activity("moderate")]),
        Rule::and("high", &[age("middle_aged"), bmi("high"), activity("sedentary")]),
        Rule::and("normal", &[age("middle_aged"), bmi("low"), activity("active")]),
        Rule::and("normal", &[age("old"), bmi("normal"), activity("active")]),
        Rule::and("high", &[age("old"), bmi("high"), activity("sedentary")]),
        Rule::and("high", &[age("old"), bmi("normal"), activity("sedentary")]),
    ],
    ranges: &[
        OutputRange::new("low", 50, 90),
        OutputRange::new("normal", 70, 110),
        OutputRange::new("high", 100, 200),
    ],
};

/// Fuzzify a blood-sugar value with the standard profile's output terms
pub fn fuzzify_blood_sugar(blood_sugar: f64) -> Degrees {
    STANDARD.fuzzify_output(blood_sugar)
}
