//! Who is using the journal. Only ever shown, never checked.

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub display_name: String,
}

pub trait IdentityProvider {
    fn current_user(&self) -> CurrentUser;
}

/// Supplies the user name resolved by [`Config::load`].
#[derive(Debug, Clone)]
pub struct ConfiguredIdentity {
    display_name: String,
}

impl ConfiguredIdentity {
    pub fn new(display_name: impl Into<String>) -> Self {
        ConfiguredIdentity {
            display_name: display_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.user_name.clone())
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_user(&self) -> CurrentUser {
        CurrentUser {
            display_name: self.display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_identity_from_config() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/moodlog"),
            user_name: "hana".to_string(),
        };

        let user = ConfiguredIdentity::from_config(&config).current_user();

        assert_eq!(user.display_name, "hana");
    }
}
