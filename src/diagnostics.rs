//! Diagnostics: membership curves and simulated time series
//!
//! Neither is part of the prediction contract. Both sit on top of the public
//! fuzzifiers and [`Predictor`], and produce plain data that front ends can
//! print or plot.

use indexmap::IndexMap;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;
use tracing::debug;

use crate::fuzzy::LinguisticVariable;
use crate::predictor::Predictor;

/// `num` evenly spaced values over `[start, stop]`, endpoints included
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sampled membership functions of one variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipCurve {
    pub variable: &'static str,
    pub xs: Vec<f64>,
    /// One series per term, aligned with `xs`
    pub series: IndexMap<&'static str, Vec<f64>>,
}

impl MembershipCurve {
    /// Render as CSV with an `x` column followed by one column per term
    pub fn to_csv(&self) -> String {
        let mut out = String::from("x");
        for label in self.series.keys() {
            out.push(',');
            out.push_str(label);
        }
        out.push('\n');
        for (i, x) in self.xs.iter().enumerate() {
            out.push_str(&x.to_string());
            for values in self.series.values() {
                out.push(',');
                out.push_str(&values[i].to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// Sample every term of `variable` at `num` points across its universe
pub fn membership_curve(variable: &LinguisticVariable, num: usize) -> MembershipCurve {
    let xs = linspace(variable.universe.0, variable.universe.1, num);
    let mut series: IndexMap<&'static str, Vec<f64>> = variable
        .labels()
        .map(|label| (label, Vec::with_capacity(xs.len())))
        .collect();

    for &x in &xs {
        for (label, degree) in variable.fuzzify(x) {
            if let Some(values) = series.get_mut(label) {
                values.push(degree);
            }
        }
    }

    MembershipCurve {
        variable: variable.name,
        xs,
        series,
    }
}

/// One point of a simulated input stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationStep {
    pub step: usize,
    pub age: f64,
    pub bmi: f64,
    pub activity: f64,
    pub blood_sugar: f64,
}

/// Simulate `steps` time steps of drifting inputs and predict each one.
///
/// Over normalized time `t` in `[0, 1]`: age rises linearly from 10 to 80,
/// BMI drifts upward by 6 from about 20 and activity falls by 3 from about 9,
/// the latter two with Gaussian noise drawn from `rng`. All BMI noise is drawn
/// before any activity noise, so a given seed always yields the same series.
pub fn simulate<R: Rng>(
    steps: usize,
    rng: &mut R,
    predictor: &Predictor,
) -> Vec<SimulationStep> {
    let time = linspace(0.0, 1.0, steps);
    let bmi_noise = noise(steps, rng);
    let activity_noise = noise(steps, rng);

    let series: Vec<SimulationStep> = time
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let age = (80.0 - 10.0) * t + 10.0;
            let bmi = 20.0 + 0.2 * bmi_noise[i] + 6.0 * t;
            let activity = 9.0 + 0.2 * activity_noise[i] - 3.0 * t;
            SimulationStep {
                step: i,
                age,
                bmi,
                activity,
                blood_sugar: predictor.predict(age, bmi, activity),
            }
        })
        .collect();

    debug!(
        steps,
        profile = predictor.profile().name(),
        "simulated prediction series"
    );
    series
}

/// `2 * N(0, 1) - 1` per step
fn noise<R: Rng>(steps: usize, rng: &mut R) -> Vec<f64> {
    (0..steps)
        .map(|_| 2.0 * rng.sample::<f64, _>(StandardNormal) - 1.0)
        .collect()
}
