use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub stack_name: String,
    pub template_location: String,
    pub parameters_location: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            stack_name: "udagram-network-stack".to_string(),
            template_location: "file://networking-and-infrastructure/network.yml".to_string(),
            parameters_location: "file://networking-and-infrastructure/network-params.json"
                .to_string(),
        }
    }
}

impl Configuration {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
            // .merge fills in any missing values from the environment
            .merge(Env::prefixed("APP_"))
    }

    pub fn load() -> Self {
        match Configuration::figment().extract() {
            Ok(config) => {
                tracing::info!("{}", config);
                config
            }
            Err(e) => {
                tracing::error!("Failed to load configuration: {:?}", e);
                Configuration::default()
            }
        }
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration {{ stack_name: {}, template_location: {}, parameters_location: {} }}",
            self.stack_name, self.template_location, self.parameters_location
        )
    }
}
