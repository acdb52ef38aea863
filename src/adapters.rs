use crate::{
    core::{StackLauncher, StackRequest},
    template::{load_parameters, resolve_template, StackParameter, TemplateSource},
};
use async_trait::async_trait;
use aws_sdk_cloudformation::{types::Parameter, Client};

#[derive(Debug)]
pub struct CloudFormationStackLauncher {
    cloudformation_client: Client,
}

impl CloudFormationStackLauncher {
    pub fn new(cloudformation_client: Client) -> Self {
        Self {
            cloudformation_client,
        }
    }
}

impl From<StackParameter> for Parameter {
    fn from(parameter: StackParameter) -> Self {
        Parameter::builder()
            .parameter_key(parameter.parameter_key)
            .set_parameter_value(parameter.parameter_value)
            .set_use_previous_value(parameter.use_previous_value)
            .build()
    }
}

#[async_trait]
impl StackLauncher for CloudFormationStackLauncher {
    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>, String> {
        let template = resolve_template(&request.template_location)?;
        let parameters = load_parameters(&request.parameters_location)?;

        let mut create_stack = self
            .cloudformation_client
            .create_stack()
            .stack_name(&request.stack_name);

        create_stack = match template {
            TemplateSource::Body(body) => create_stack.template_body(body),
            TemplateSource::Url(url) => create_stack.template_url(url),
        };

        for parameter in parameters {
            create_stack = create_stack.parameters(Parameter::from(parameter));
        }

        create_stack
            .send()
            .await
            .map(|output| output.stack_id)
            .map_err(|e| format!("Error creating stack: {:?}", e))
    }
}
