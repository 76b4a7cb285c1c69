//! Components deployed within an environment

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DBConfig;
use crate::error::Error;
use crate::lazy::{ComponentField, EnvField};

/// Types of components available to an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentType {
    #[serde(alias = "component1")]
    Component1,
    #[serde(alias = "component2")]
    Component2,
    #[serde(alias = "component3")]
    Component3,
}

impl FromStr for ComponentType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COMPONENT1" => Ok(ComponentType::Component1),
            "COMPONENT2" => Ok(ComponentType::Component2),
            "COMPONENT3" => Ok(ComponentType::Component3),
            _ => Err(Error::InvalidComponentType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Component1 => write!(f, "COMPONENT1"),
            ComponentType::Component2 => write!(f, "COMPONENT2"),
            ComponentType::Component3 => write!(f, "COMPONENT3"),
        }
    }
}

/// Component carrying database and `foo` configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component1 {
    pub name: String,
    pub component_type: ComponentType,
    /// Database configuration, resolved against the owning environment
    pub db_config: Option<EnvField<DBConfig>>,
    /// Resolved against the component, organisation and environment
    pub foo: Option<ComponentField<String>>,
}

impl Component1 {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_type: ComponentType::Component1,
            db_config: None,
            foo: None,
        }
    }

    pub fn with_db_config(mut self, db_config: EnvField<DBConfig>) -> Self {
        self.db_config = Some(db_config);
        self
    }

    pub fn with_foo(mut self, foo: ComponentField<String>) -> Self {
        self.foo = Some(foo);
        self
    }

    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// Check that no field is still waiting on a factory.
    pub fn is_resolved(&self) -> bool {
        self.db_config.as_ref().is_none_or(|c| c.is_resolved())
            && self.foo.as_ref().is_none_or(|f| f.is_resolved())
    }
}

/// Component without extra configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component2 {
    pub name: String,
    pub component_type: ComponentType,
}

impl Component2 {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_type: ComponentType::Component2,
        }
    }

    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }
}

/// A unit of deployable functionality within an environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Component1(Component1),
    Component2(Component2),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Component1(c) => &c.name,
            Component::Component2(c) => &c.name,
        }
    }

    pub fn component_type(&self) -> ComponentType {
        match self {
            Component::Component1(c) => c.component_type,
            Component::Component2(c) => c.component_type,
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            Component::Component1(c) => c.is_resolved(),
            Component::Component2(_) => true,
        }
    }

    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(f, "{}- {} [{}]", pad, self.name(), self.component_type())?;
        if let Component::Component1(c) = self {
            write_optional(f, indent + 4, "db_config", c.db_config.as_ref())?;
            write_optional(f, indent + 4, "foo", c.foo.as_ref())?;
        }
        Ok(())
    }
}

impl From<Component1> for Component {
    fn from(component: Component1) -> Self {
        Component::Component1(component)
    }
}

impl From<Component2> for Component {
    fn from(component: Component2) -> Self {
        Component::Component2(component)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

pub(crate) fn write_optional<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    indent: usize,
    label: &str,
    value: Option<&T>,
) -> fmt::Result {
    let pad = " ".repeat(indent);
    match value {
        Some(value) => writeln!(f, "{}{}: {}", pad, label, value),
        None => writeln!(f, "{}{}: <none>", pad, label),
    }
}
