//! Code for constructing a typed representation of the registry definition. Entries that are not
//! protocol identifiers are filtered out here, so code generation only ever sees integer ids.

use std::collections::HashSet;

use log::debug;

use crate::{
    error::{Error, Result},
    registry_def,
};

/// The name of the list holding all push notification ids
pub const PUSH_ID_LIST: &str = "All_PushId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoId {
    /// The name of the identifier as written in the registry
    pub name: String,

    /// The numeric protocol id
    pub id: i64,
}

impl ProtoId {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        ProtoId { name: name.into(), id }
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList {
    pub name: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Protocol ids in registry order
    pub ids: Vec<ProtoId>,

    /// Named integer lists in registry order
    pub lists: Vec<IdList>,
}

impl Registry {
    pub fn list(&self, name: &str) -> Option<&IdList> {
        self.lists.iter().find(|list| list.name == name)
    }

    pub fn push_ids(&self) -> Result<&[i64]> {
        match self.list(PUSH_ID_LIST) {
            Some(list) => Ok(&list.values),
            None => Err(Error::MissingList(PUSH_ID_LIST)),
        }
    }
}

/// Removes all underscores from a registry name
pub fn normalize_name(name: &str) -> String {
    name.replace('_', "")
}

fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

pub fn parse_registry(def: registry_def::RegistryDef) -> Result<Registry> {
    let mut registry = Registry::default();
    let mut seen = HashSet::new();

    for definition in def.definitions {
        if !seen.insert(definition.name().to_owned()) {
            return Err(Error::DuplicateEntry(definition.name().to_owned()));
        }

        if is_private(definition.name()) {
            continue;
        }

        match definition {
            registry_def::Definition::Constant(def) => match def.value.trim().parse::<i64>() {
                Ok(id) => registry.ids.push(ProtoId { name: def.name, id }),
                Err(_) => debug!("skipping non-integer constant {} = {:?}", def.name, def.value),
            },

            registry_def::Definition::List(def) => {
                let values: std::result::Result<Vec<i64>, _> =
                    def.items.iter().map(|item| item.value.trim().parse::<i64>()).collect();

                match values {
                    Ok(values) => registry.lists.push(IdList { name: def.name, values }),
                    Err(_) => debug!("skipping list {} with non-integer items", def.name),
                }
            }

            registry_def::Definition::Helper(_) => continue,
        }
    }

    Ok(registry)
}
