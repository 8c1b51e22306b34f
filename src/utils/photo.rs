//! Photo ingestion: image files are stored base64-encoded inside the
//! item payload, like the camera capture blobs of the mobile app.

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;

pub fn encode_photo(file: &str) -> AppResult<String> {
    let bytes = fs::read(expand_tilde(file))?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_file_contents() {
        let mut path = std::env::temp_dir();
        path.push("equiptrack_photo_test.bin");
        fs::write(&path, b"hello").unwrap();

        let encoded = encode_photo(path.to_str().unwrap()).unwrap();
        assert_eq!(encoded, "aGVsbG8=");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(encode_photo("/definitely/not/here.jpg").is_err());
    }
}
