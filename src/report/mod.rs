//! Reporting utilities: formula error scores against a target column.
//!
//! Scores are plain squared-error summaries (SSE / MSE / RMSE). A sample whose
//! residual is not finite (raw `exp` overflow in a formula, or a non-finite
//! target) makes the whole score infinite instead of failing the call, so a
//! ranking can still be produced.

use log::{debug, warn};
use nalgebra::DVector;
use rayon::prelude::*;

use crate::domain::{Formula, FormulaScore, Inputs};
use crate::error::{EvalError, EvalResult};
use crate::models::validate_inputs;

/// Evaluate `formula` on `x` (validated) and score it against `y`.
pub fn score(formula: Formula, x: &Inputs, y: &DVector<f64>) -> EvalResult<FormulaScore> {
    let n = validate_inputs(formula, x)?;
    if y.len() != n {
        return Err(EvalError::LengthMismatch {
            what: "target".to_string(),
            expected: n,
            actual: y.len(),
        });
    }
    if n == 0 {
        return Err(EvalError::Empty);
    }

    let predicted = formula.eval(x);
    Ok(score_predictions(formula, &predicted, y))
}

/// Score every formula whose arity `x` satisfies, best (lowest MSE) first.
///
/// Formulas needing more columns than `x` has are skipped. Formulas are
/// evaluated in parallel; ties keep formula order.
pub fn score_all(x: &Inputs, y: &DVector<f64>) -> EvalResult<Vec<FormulaScore>> {
    let candidates: Vec<Formula> = Formula::ALL
        .into_iter()
        .filter(|f| {
            let ok = f.arity() <= x.len();
            if !ok {
                debug!("skipping {f}: needs {} variables, got {}", f.arity(), x.len());
            }
            ok
        })
        .collect();

    let mut scores = candidates
        .par_iter()
        .map(|&f| score(f, x, y))
        .collect::<EvalResult<Vec<_>>>()?;

    scores.sort_by(|a, b| a.mse.total_cmp(&b.mse).then(a.formula.cmp(&b.formula)));
    Ok(scores)
}

fn score_predictions(formula: Formula, predicted: &DVector<f64>, y: &DVector<f64>) -> FormulaScore {
    let n = y.len();
    let mut sse = 0.0;
    let mut non_finite = 0;
    for (p, t) in predicted.iter().zip(y.iter()) {
        let r = t - p;
        if r.is_finite() {
            sse += r * r;
        } else {
            non_finite += 1;
        }
    }

    if non_finite > 0 {
        warn!("{formula}: {non_finite} of {n} residuals are not finite");
        sse = f64::INFINITY;
    }

    let mse = sse / n as f64;
    FormulaScore {
        formula,
        n,
        sse,
        mse,
        rmse: mse.sqrt(),
        non_finite,
    }
}
