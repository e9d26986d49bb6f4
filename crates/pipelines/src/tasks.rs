//! Task definitions and their builder helpers.

use serde::{Deserialize, Serialize};

/// API group/version for task definitions.
const TASK_API_VERSION: &str = "tekton.dev/v1beta1";

/// Kind for task definitions.
const TASK_KIND: &str = "Task";

/// Container image used by the deploy-from-source step.
const KUBECTL_IMAGE: &str = "quay.io/redhat-developer/k8s-kubectl";

/// Working directory the task's step runs in; the `source` input is
/// checked out there.
const SOURCE_WORKSPACE_DIR: &str = "/workspace/source";

/// A declarative CI task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// API group and version.
    pub api_version: String,
    /// Resource kind.
    pub kind: String,
    /// Name and namespace.
    pub metadata: Metadata,
    /// Task specification.
    pub spec: TaskSpec,
}

/// Namespaced object metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Object name.
    pub name: String,
    /// Object namespace.
    pub namespace: String,
}

/// Specification of a task: parameters, input resources, steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Declared parameters.
    pub params: Vec<ParamSpec>,
    /// Declared resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<TaskResources>,
    /// Execution steps, in order.
    pub steps: Vec<Step>,
}

/// A declared task parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Human-readable description.
    pub description: String,
    /// Default value, when the parameter is optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Parameter value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// A single string value.
    String,
}

/// Input and output resources of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResources {
    /// Input resources.
    pub inputs: Vec<TaskResource>,
}

/// A single declared task resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResource {
    /// Resource name.
    pub name: String,
    /// Resource type (e.g. `git`).
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// One execution step of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step name.
    pub name: String,
    /// Container image the step runs in.
    pub image: String,
    /// Working directory inside the container.
    pub working_dir: String,
    /// Shell script executed as the step body.
    pub script: String,
}

/// Build the deploy-from-source task: checks out the `source` git input
/// and runs the supplied script against the cluster with kubectl.
#[must_use]
pub fn create_deploy_from_source_task(ns: &str, script: &str) -> Task {
    Task {
        api_version: TASK_API_VERSION.to_string(),
        kind: TASK_KIND.to_string(),
        metadata: Metadata {
            name: "deploy-from-source-task".to_string(),
            namespace: ns.to_string(),
        },
        spec: TaskSpec {
            params: params_for_deploy_from_source_task(),
            resources: Some(resources_for_deploy_from_source_task()),
            steps: steps_for_deploy_from_source_task(script),
        },
    }
}

fn params_for_deploy_from_source_task() -> Vec<ParamSpec> {
    vec![create_task_param_with_default(
        "DRYRUN",
        "If true run a server-side dryrun.",
        "false",
    )]
}

fn resources_for_deploy_from_source_task() -> TaskResources {
    TaskResources {
        inputs: vec![create_task_resource("source", "git")],
    }
}

fn steps_for_deploy_from_source_task(script: &str) -> Vec<Step> {
    vec![Step {
        name: "run-kubectl".to_string(),
        image: KUBECTL_IMAGE.to_string(),
        working_dir: SOURCE_WORKSPACE_DIR.to_string(),
        script: script.to_string(),
    }]
}

/// Declare a string parameter with a default value.
#[must_use]
pub fn create_task_param_with_default(name: &str, description: &str, default: &str) -> ParamSpec {
    ParamSpec {
        name: name.to_string(),
        param_type: ParamType::String,
        description: description.to_string(),
        default: Some(default.to_string()),
    }
}

/// Declare a required string parameter.
#[must_use]
pub fn create_task_param(name: &str, description: &str) -> ParamSpec {
    ParamSpec {
        name: name.to_string(),
        param_type: ParamType::String,
        description: description.to_string(),
        default: None,
    }
}

/// Declare a task resource of the given type.
#[must_use]
pub fn create_task_resource(name: &str, resource_type: &str) -> TaskResource {
    TaskResource {
        name: name.to_string(),
        resource_type: resource_type.to_string(),
    }
}
