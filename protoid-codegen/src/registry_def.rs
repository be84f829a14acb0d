//! Code for parsing the protocol identifier registry from an XML file

#[derive(Debug, serde::Deserialize)]
#[serde(rename = "protoIdRegistry")]
pub struct RegistryDef {
    #[serde(rename = "$value", default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, serde::Deserialize)]
pub enum Definition {
    #[serde(rename = "constant")]
    Constant(ConstantDefinition),

    #[serde(rename = "list")]
    List(ListDefinition),

    #[serde(rename = "helper")]
    Helper(HelperDefinition),
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::Constant(def) => &def.name,
            Definition::List(def) => &def.name,
            Definition::Helper(def) => &def.name,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ConstantDefinition {
    pub name: String,
    pub value: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListDefinition {
    pub name: String,

    #[serde(rename = "item", default)]
    pub items: Vec<ListItem>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListItem {
    pub value: String,
}

/// A named attribute of the registry that carries no data (e.g. a helper method)
#[derive(Debug, serde::Deserialize)]
pub struct HelperDefinition {
    pub name: String,
}

pub fn parse(data: &[u8]) -> Result<RegistryDef, serde_xml_rs::Error> {
    serde_xml_rs::from_reader(data)
}
