/// EnvironmentProvider port for reading runner-provided variables
///
/// Abstracts the process environment so collectors can be driven by
/// deterministic values in tests.
pub trait EnvironmentProvider: Send + Sync {
    /// Returns the value of `key`, treating empty values as absent
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the first present value among `keys`
    fn first_var(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.var(key))
    }
}
