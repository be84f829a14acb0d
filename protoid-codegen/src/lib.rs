mod codegen;
mod error;
mod registry_def;
mod repr;


pub use crate::{
    codegen::{GoCode, RustCode, DEFAULT_GO_PACKAGE},
    error::{Error, Result},
    repr::{normalize_name, IdList, ProtoId, Registry, PUSH_ID_LIST},
};

const PROTOID_DEF: &[u8] = include_bytes!("../protoid-def.xml");

/// Loads the registry bundled with this crate
pub fn load_registry() -> Result<Registry> {
    parse_registry(PROTOID_DEF)
}

pub fn parse_registry(data: &[u8]) -> Result<Registry> {
    let def = registry_def::parse(data).map_err(|e| Error::Xml(e.to_string()))?;
    repr::parse_registry(def)
}

pub fn generate_go(registry: &Registry, package: &str) -> Result<GoCode> {
    codegen::generate_go(registry, package)
}

pub fn generate_rust(registry: &Registry) -> Result<RustCode> {
    codegen::generate_rust(registry)
}
