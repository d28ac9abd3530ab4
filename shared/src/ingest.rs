//! Turning an uploaded file into something we can ship in a JSON body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::AnalysisError;

/// An accepted image, held in memory as base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub mime_type: String,
    pub base64: String,
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Rejects anything whose declared media type is not `image/*`.
pub fn check_mime(mime_type: &str) -> Result<(), AnalysisError> {
    if is_image_mime(mime_type) { Ok(()) } else { Err(AnalysisError::not_an_image()) }
}

impl ImageData {
    /// Encode raw file bytes. No size cap is applied.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self, AnalysisError> {
        check_mime(mime_type)?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            base64: STANDARD.encode(bytes),
        })
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self, AnalysisError> {
        let invalid = || AnalysisError::InputValidation("Image data is not a base64 data URI.".into());

        let rest = uri.strip_prefix("data:").ok_or_else(invalid)?;
        let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(invalid)?;
        check_mime(mime_type)?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            base64: payload.to_string(),
        })
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }

    pub fn decode(&self) -> Result<Vec<u8>, AnalysisError> {
        STANDARD
            .decode(&self.base64)
            .map_err(|e| AnalysisError::InputValidation(format!("Image data is not valid base64: {}", e)))
    }

    pub fn is_empty(&self) -> bool {
        self.base64.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_image_types() {
        for mime in ["application/pdf", "text/plain", "", "video/mp4", "IMAGE/PNG"] {
            assert_eq!(ImageData::from_bytes(mime, b"abc"), Err(AnalysisError::not_an_image()));
        }
    }

    #[test]
    fn builds_data_uri() {
        let image = ImageData::from_bytes("image/png", b"hi").unwrap();
        assert_eq!(image.to_data_uri(), "data:image/png;base64,aGk=");
    }

    #[test]
    fn parses_data_uri() {
        let image = ImageData::from_data_uri("data:image/jpeg;base64,aGk=").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.decode().unwrap(), b"hi");
    }

    #[test]
    fn malformed_data_uri_is_input_error() {
        for uri in ["aGk=", "data:image/png,aGk=", "data:image/png;base64", "data:text/plain;base64,aGk="] {
            assert!(ImageData::from_data_uri(uri).unwrap_err().is_input_error());
        }
    }

    proptest! {
        #[test]
        fn data_uri_round_trips_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..2048),
                                      subtype in "[a-z]{1,8}") {
            let mime = format!("image/{}", subtype);
            let image = ImageData::from_bytes(&mime, &bytes).unwrap();
            let parsed = ImageData::from_data_uri(&image.to_data_uri()).unwrap();
            prop_assert_eq!(&parsed.mime_type, &mime);
            prop_assert_eq!(parsed.decode().unwrap(), bytes);
        }
    }
}
