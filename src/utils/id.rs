use uuid::Uuid;

/// Mint an opaque unique id. UUID v7 keeps ids time-ordered, which makes
/// item rows sort by creation when ids are compared.
pub fn mint() -> String {
    Uuid::now_v7().simple().to_string()
}
