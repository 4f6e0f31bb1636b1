use std::cmp;

/// Exact distribution of the number of successes among independent,
/// non-identical Bernoulli trials (Poisson-binomial distribution).
///
/// Element k of the result is P(K = k) for k in 0..=n. The vector is updated in
/// place from the high end down, so each step only reads values from the
/// previous step. The result is rescaled to sum to 1 to absorb rounding drift.
pub fn poisson_binomial_pmf(q: &[f64]) -> Vec<f64> {
    let n = q.len();
    let mut pmf = vec![0.0; n + 1];
    pmf[0] = 1.0;

    for (i, &qi) in q.iter().enumerate() {
        let pi = 1.0 - qi;
        // at most i + 1 successes after i + 1 trials
        for k in (1..=i + 1).rev() {
            pmf[k] = pmf[k] * pi + pmf[k - 1] * qi;
        }
        pmf[0] *= pi;
    }

    scale(&pmf)
}

/// Probability that none of the independent events with probabilities `ps` occur.
/// The empty product is 1.
#[inline]
pub fn prob_none(ps: &[f64]) -> f64 {
    ps.iter().map(|p| 1.0 - p).product()
}

/// Probability that at least one of the independent events occurs.
#[inline]
pub fn prob_any(ps: &[f64]) -> f64 {
    1.0 - prob_none(ps)
}

/// Mean of a distribution over 0..n.
pub fn pmf_mean(pmf: &[f64]) -> f64 {
    pmf.iter().enumerate().map(|(k, p)| k as f64 * p).sum()
}

/// Rescale to unit sum. A vector summing to zero is returned unchanged.
pub fn scale(xs: &[f64]) -> Vec<f64> {
    let s: f64 = xs.iter().sum();
    if s == 1.0 || s <= 0.0 {
        xs.to_owned()
    } else {
        xs.iter().map(|x| x / s).collect()
    }
}

/// Kullback-Leibler Divergence using log2
pub fn kl_divergence(p: &[f64], q: &[f64]) -> f64 {
    let n = cmp::min(p.len(), q.len());
    let p = &p[..n];
    let q = &q[..n];

    let mut d = 0.0;
    for i in 0..n {
        if p[i] != 0.0 {
            d += p[i] * (p[i].log2() - q[i].log2())
        }
    }

    d
}

/// Jensen-Shannon Divergence using log2
/// bounded in [0, 1]
pub fn js_divergence(p: &[f64], q: &[f64]) -> f64 {
    // ensure that p and q are proper distributions
    let p = scale(p);
    let q = scale(q);

    let m: Vec<f64> = p.iter().zip(q.iter()).map(|(&x, &y)| 0.5 * (x + y)).collect();

    0.5 * (kl_divergence(&p, &m) + kl_divergence(&q, &m))
}
