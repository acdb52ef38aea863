use crate::configuration::Configuration;
use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

#[derive(Debug, Clone, PartialEq)]
pub struct StackRequest {
    pub stack_name: String,
    pub template_location: String,
    pub parameters_location: String,
}

impl From<&Configuration> for StackRequest {
    fn from(configuration: &Configuration) -> Self {
        Self {
            stack_name: configuration.stack_name.clone(),
            template_location: configuration.template_location.clone(),
            parameters_location: configuration.parameters_location.clone(),
        }
    }
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait StackLauncher: Debug {
    /// Sends a create-stack request. `Ok` carries the stack id when the service returns one.
    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>, String>;
}

/// Fires the create-stack request once. The outcome is dropped.
pub async fn bootstrap<L: StackLauncher>(launcher: &L, request: &StackRequest) {
    tracing::info!("Sending create stack request for {}", request.stack_name);

    let _ = launcher.create_stack(request).await;
}
