// Generated by protoid-gen from the protocol identifier registry. Do not edit.

/// Returns the name of a protocol id (with underscores removed)
pub fn name_of(id: u32) -> Option<&'static str> {
    ID_TO_NAME.iter().find(|(value, _)| *value == id).map(|(_, name)| *name)
}

/// Returns the protocol id registered under `name`
pub fn id_of(name: &str) -> Option<u32> {
    NAME_TO_ID.iter().find(|(key, _)| *key == name).map(|(_, id)| *id)
}

/// Returns true if `id` identifies a push notification
pub fn is_push(id: u32) -> bool {
    PUSH_IDS.contains(&id)
}

