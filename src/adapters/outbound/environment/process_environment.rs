use crate::ports::outbound::EnvironmentProvider;

/// ProcessEnvironment adapter reading the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentProvider for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable() {
        let env = ProcessEnvironment::new();
        assert!(env.var("SRM_SBOM_SURELY_UNSET_VARIABLE").is_none());
    }

    #[test]
    fn test_present_variable() {
        let env = ProcessEnvironment::new();
        // PATH is set in every test environment
        assert!(env.var("PATH").is_some());
    }

    #[test]
    fn test_first_var_falls_through() {
        let env = ProcessEnvironment::new();
        let value = env.first_var(&["SRM_SBOM_SURELY_UNSET_VARIABLE", "PATH"]);
        assert_eq!(value, env.var("PATH"));
    }
}
