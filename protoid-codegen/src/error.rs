use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid registry definition: {0}")]
    Xml(String),

    #[error("registry entry '{0}' is defined more than once")]
    DuplicateEntry(String),

    #[error("registry has no integer list named '{0}'")]
    MissingList(&'static str),

    #[error("protocol id {value} of '{name}' does not fit in a u32")]
    IdOutOfRange { name: String, value: i64 },

    #[error("'{first}' and '{second}' both generate the item '{item}'")]
    DuplicateName { first: String, second: String, item: String },

    #[error("'{name}' does not produce a valid identifier ('{ident}')")]
    InvalidIdent { name: String, ident: String },
}

pub type Result<T> = std::result::Result<T, Error>;
