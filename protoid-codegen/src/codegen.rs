use std::{collections::HashMap, convert::TryFrom, fmt};

use heck::ShoutySnakeCase;
use log::info;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;

use crate::{
    error::{Error, Result},
    repr::{ProtoId, Registry, PUSH_ID_LIST},
};

pub const DEFAULT_GO_PACKAGE: &str = "main";

/// Go source declaring `protoid_id2name`, `protoid_name2id` and `protoid_push`
pub struct GoCode {
    pub(crate) package: String,
    pub(crate) id_to_name: Vec<String>,
    pub(crate) name_to_id: Vec<String>,
    pub(crate) push_ids: Vec<i64>,
}

impl fmt::Display for GoCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "package {}", self.package)?;

        writeln!(f, "var protoid_id2name = map[int]string{{")?;
        for line in &self.id_to_name {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "}}")?;

        writeln!(f, "var protoid_name2id = map[string]int{{")?;
        for line in &self.name_to_id {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "}}")?;

        let push_ids: Vec<String> = self.push_ids.iter().map(|id| id.to_string()).collect();
        writeln!(f, "var protoid_push = []int{{{}}}", push_ids.join(","))
    }
}

pub fn generate_go(registry: &Registry, package: &str) -> Result<GoCode> {
    let mut id_to_name = vec![];
    let mut name_to_id = vec![];

    for proto_id in &registry.ids {
        let name = proto_id.normalized_name();
        id_to_name.push(format!("{}: \"{}\",", proto_id.id, name));
        name_to_id.push(format!("\"{}\": {},", name, proto_id.id));
    }

    let push_ids = registry.push_ids()?.to_vec();
    info!("generated go maps for {} protocol ids ({} push ids)", id_to_name.len(), push_ids.len());

    Ok(GoCode { package: package.to_owned(), id_to_name, name_to_id, push_ids })
}

/// Rust source declaring an `ids` module of constants, lookup tables and lookup functions
pub struct RustCode {
    pub(crate) constants: Vec<TokenStream>,
    pub(crate) id_to_name: Vec<TokenStream>,
    pub(crate) name_to_id: Vec<TokenStream>,
    pub(crate) push_ids: Vec<Literal>,
}

impl fmt::Display for RustCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(include_str!("../base/lookup.rs"))?;

        let constants = &self.constants;
        let id_to_name = &self.id_to_name;
        let name_to_id = &self.name_to_id;
        let push_ids = &self.push_ids;
        let body = quote! {
            #[allow(dead_code)]
            pub mod ids {
                #(#constants)*
            }

            pub static ID_TO_NAME: &[(u32, &str)] = &[#(#id_to_name,)*];

            pub static NAME_TO_ID: &[(&str, u32)] = &[#(#name_to_id,)*];

            pub static PUSH_IDS: &[u32] = &[#(#push_ids,)*];
        };
        writeln!(f, "{}", body)
    }
}

pub fn generate_rust(registry: &Registry) -> Result<RustCode> {
    let mut code =
        RustCode { constants: vec![], id_to_name: vec![], name_to_id: vec![], push_ids: vec![] };

    // Maps each generated constant name to the registry name that produced it
    let mut defined: HashMap<String, &str> = HashMap::new();

    for proto_id in &registry.ids {
        let name = proto_id.normalized_name();
        let ident = constant_ident(proto_id)?;
        if let Some(first) = defined.insert(ident.to_string(), &proto_id.name) {
            return Err(Error::DuplicateName {
                first: first.to_owned(),
                second: proto_id.name.clone(),
                item: ident.to_string(),
            });
        }

        let value = Literal::u32_unsuffixed(id_to_u32(&proto_id.name, proto_id.id)?);
        let name = Literal::string(&name);

        code.constants.push(quote!(pub const #ident: u32 = #value;));
        code.id_to_name.push(quote!((#value, #name)));
        code.name_to_id.push(quote!((#name, #value)));
    }

    for id in registry.push_ids()? {
        code.push_ids.push(Literal::u32_unsuffixed(id_to_u32(PUSH_ID_LIST, *id)?));
    }

    info!(
        "generated rust tables for {} protocol ids ({} push ids)",
        code.constants.len(),
        code.push_ids.len()
    );

    Ok(code)
}

fn constant_ident(proto_id: &ProtoId) -> Result<Ident> {
    let ident = proto_id.normalized_name().to_shouty_snake_case();
    syn::parse_str::<Ident>(&ident)
        .map_err(|_| Error::InvalidIdent { name: proto_id.name.clone(), ident })
}

fn id_to_u32(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::IdOutOfRange { name: name.to_owned(), value })
}
