/// How many times a prompt is repeated after invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Ask again until the input is valid or the input stream ends.
    #[default]
    Unbounded,
    /// Give up with `InvalidInput` after this many failed attempts.
    Limited(u32),
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `failures` invalid answers.
    pub fn allows_retry(&self, failures: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => failures < *max,
        }
    }
}
