use serde::de::DeserializeOwned;
use tracing::debug;

/// Decodes a JSON document into `T`.
///
/// JSON needs no tokenizing, interpolation or key generation; field names and
/// renames come from the type's `Deserialize` impl.
pub fn from_json<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    debug!(bytes = input.len(), "decoding config from json");
    serde_json::from_slice(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    crate::record! {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        struct Configuration {
            #[serde(rename = "USERNAME")]
            username: String => { key = "USERNAME" },
            #[serde(default)]
            timeout: u32,
        }
    }

    #[test]
    fn test_from_json() {
        let config: Configuration = from_json(br#"{"USERNAME": "msd", "timeout": 30}"#).unwrap();
        assert_eq!(config.username, "msd");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_from_json_missing_optional_field() {
        let config: Configuration = from_json(br#"{"USERNAME": "msd"}"#).unwrap();
        assert_eq!(config.timeout, 0);
    }

    #[test]
    fn test_from_json_error() {
        let err = from_json::<Configuration>(b"{not json").unwrap_err();
        assert!(err.is_syntax());

        let err = from_json::<Configuration>(br#"{"USERNAME": 1}"#).unwrap_err();
        assert!(err.is_data());
    }
}
