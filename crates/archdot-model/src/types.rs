//! Core types describing an architecture.
//!
//! All values are read-only input. Nothing here checks that the ids a
//! service refers to exist; dangling references are carried through as-is.

use serde::{Deserialize, Serialize};

pub type EnvironmentId = String;
pub type ServiceId = String;
pub type GroupId = String;

/// A named cluster used to group services visually.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogicalGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_attrs: Option<String>,
}

/// A deployment target, listed once in the legend.
///
/// `node_attrs` is a raw DOT attribute fragment (e.g. `shape=box`) appended
/// to every statement that refers to this environment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Environment {
    pub id: EnvironmentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_attrs: Option<String>,
}

/// A node in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Service {
    /// Emitted verbatim as the DOT node id.
    pub id: ServiceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub logical_group: GroupId,
    pub deployed_in: EnvironmentId,
    #[serde(default)]
    pub dependencies: Vec<ServiceId>,
}

/// Root input value: groups, environments and services in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Architecture {
    #[serde(default)]
    pub logical_groups: Vec<LogicalGroup>,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Architecture {
    /// Environment declared under `id`; with duplicate ids the last one wins.
    pub fn environment(&self, id: &str) -> Option<&Environment> {
        self.environments.iter().rev().find(|env| env.id == id)
    }

    /// Services whose `logical_group` equals `group_id`, in service order.
    pub fn services_in_group<'a>(
        &'a self,
        group_id: &'a str,
    ) -> impl Iterator<Item = &'a Service> {
        self.services
            .iter()
            .filter(move |svc| svc.logical_group == group_id)
    }

    /// Every (service, dependency) pair: services outer, dependencies inner.
    ///
    /// Dependencies are not resolved, so unknown ids are yielded too.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services.iter().flat_map(|svc| {
            svc.dependencies
                .iter()
                .map(move |dep| (svc.id.as_str(), dep.as_str()))
        })
    }
}
