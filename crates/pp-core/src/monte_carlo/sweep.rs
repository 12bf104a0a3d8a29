//! Parameter sweeps: one probability per parameter value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint<P> {
    pub parameter: P,
    pub probability: f64,
}

/// Evaluate `f` at each parameter, keeping input order.
///
/// Stops at the first error.
pub fn sweep<P, E, I, F>(parameters: I, mut f: F) -> Result<Vec<SweepPoint<P>>, E>
where
    I: IntoIterator<Item = P>,
    F: FnMut(&P) -> Result<f64, E>,
{
    parameters
        .into_iter()
        .map(|parameter| {
            let probability = f(&parameter)?;
            Ok(SweepPoint {
                parameter,
                probability,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order() {
        let points = sweep([3u64, 1, 2], |&k| Ok::<_, ()>(k as f64 / 10.0)).unwrap();
        let params: Vec<u64> = points.iter().map(|p| p.parameter).collect();
        assert_eq!(params, vec![3, 1, 2]);
        assert_eq!(points[0].probability, 0.3);
    }

    #[test]
    fn first_error_wins() {
        let mut calls = 0;
        let result = sweep(1..=5u64, |&k| {
            calls += 1;
            if k == 2 {
                Err("bad")
            } else {
                Ok(0.0)
            }
        });
        assert_eq!(result, Err("bad"));
        assert_eq!(calls, 2);
    }
}
