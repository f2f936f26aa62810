//! Character-level similarity.
//!
//! Jaro similarity from `strsim`, with the Winkler prefix boost applied the
//! classic way: only above a boost threshold, over at most four leading
//! characters.

/// Jaro-Winkler parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    /// Weight of each shared prefix character.
    pub prefix_scale: f64,
    /// Longest prefix that earns a bonus.
    pub max_prefix: usize,
    /// Jaro similarity below which no prefix bonus is applied.
    pub boost_threshold: f64,
}

impl JaroWinkler {
    pub const fn new() -> Self {
        Self {
            prefix_scale: 0.1,
            max_prefix: 4,
            boost_threshold: 0.7,
        }
    }

    /// Similarity in `[0, 1]`. Symmetric; `1.0` for identical non-empty
    /// strings; `0.0` when either side is empty.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        // Greedy match assignment depends on argument order; fix it.
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let jaro = strsim::jaro(a, b);
        if jaro < self.boost_threshold {
            return jaro;
        }
        let prefix = a
            .chars()
            .zip(b.chars())
            .take(self.max_prefix)
            .take_while(|(x, y)| x == y)
            .count();
        (jaro + self.prefix_scale * prefix as f64 * (1.0 - jaro)).clamp(0.0, 1.0)
    }
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::new()
    }
}

/// Surface similarity with the default Jaro-Winkler parameters.
pub fn surface_score(a: &str, b: &str) -> f64 {
    JaroWinkler::new().similarity(a, b)
}
