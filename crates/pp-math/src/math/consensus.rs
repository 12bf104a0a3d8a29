//! Exact distribution of the consensus degree.
//!
//! `k` independent voters each pick one of `m` options uniformly at random.
//! The consensus degree is the largest number of voters that agree on a single
//! option. Its distribution is computed here by assigning voters to options
//! one option at a time: with `r` voters still unassigned and `m - i` options
//! left, the number choosing option `i` is `Binomial(r, 1/(m-i))`. Tracking
//! only assignments whose every count stays `<= d` yields `P(degree <= d)`,
//! and differences of consecutive cumulative values give `P(degree = d)`.
//!
//! Binomial terms are evaluated in log space against a shared log-factorial
//! table, so nothing overflows even when `m^k` or `k!` would. States that can
//! no longer fit under the cap are pruned, and the distribution stops once the
//! cumulative value reaches one; only degrees near `k/m` cost real work.

/// `ln(n!)` for every `n` up to a bound.
struct LogFactorials(Vec<f64>);

impl LogFactorials {
    fn up_to(n: usize) -> Self {
        let mut table = Vec::with_capacity(n + 1);
        let mut acc = 0.0f64;
        table.push(acc);
        for i in 1..=n {
            acc += (i as f64).ln();
            table.push(acc);
        }
        Self(table)
    }

    fn ln_choose(&self, n: usize, k: usize) -> f64 {
        self.0[n] - self.0[k] - self.0[n - k]
    }
}

/// P(every option receives at most `cap` of the `voters` votes).
fn cumulative(voters: usize, options: u64, cap: usize, table: &LogFactorials) -> f64 {
    if cap >= voters {
        return 1.0;
    }
    if (cap as u64).saturating_mul(options) < voters as u64 {
        return 0.0;
    }

    // dp[r] = P(r voters still unassigned, all counts so far <= cap)
    let mut dp = vec![0.0f64; voters + 1];
    dp[voters] = 1.0;

    for i in 0..options {
        let remaining_options = options - i;
        if remaining_options == 1 {
            let last: f64 = dp.iter().take(cap + 1).sum();
            return last.clamp(0.0, 1.0);
        }

        // Voters the options after this one can still absorb.
        let later = usize::try_from((cap as u64).saturating_mul(remaining_options - 1))
            .unwrap_or(usize::MAX);
        let share = 1.0 / remaining_options as f64;
        let (ln_share, ln_rest) = (share.ln(), (1.0 - share).ln());

        let mut next = vec![0.0f64; voters + 1];
        for (r, &mass) in dp.iter().enumerate() {
            if mass == 0.0 || r > later.saturating_add(cap) {
                continue;
            }
            let ln_mass = mass.ln();
            for c in r.saturating_sub(later)..=cap.min(r) {
                let ln_term = table.ln_choose(r, c)
                    + c as f64 * ln_share
                    + (r - c) as f64 * ln_rest;
                next[r - c] += (ln_mass + ln_term).exp();
            }
        }
        dp = next;
    }

    dp[0].clamp(0.0, 1.0)
}

/// Probability of each consensus degree, indexed by degree `0..=voters`.
///
/// Degree 0 only has mass when there are no voters. Returns `None` when
/// voters exist but there are no options to vote for.
pub fn degree_distribution(voters: u64, options: u64) -> Option<Vec<f64>> {
    if options == 0 {
        return if voters == 0 { Some(vec![1.0]) } else { None };
    }
    let k = usize::try_from(voters).ok()?;
    let table = LogFactorials::up_to(k);

    let mut out = Vec::with_capacity(k + 1);
    let mut previous = 0.0f64;
    for d in 0..=k {
        let at_most = if 1.0 - previous <= f64::EPSILON {
            1.0
        } else {
            cumulative(k, options, d, &table)
        };
        out.push((at_most - previous).max(0.0));
        previous = at_most;
    }
    Some(out)
}
