//! Serialization of fitted model state.
//!
//! The crate does no file I/O of its own. It hands a persistence layer plain data
//! ([`ModelSnapshot`]) and byte encodings of it; where those bytes go is the
//! caller's business.

use crate::config::GradientDescentConfig;
use crate::error::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A parameter representation that can be encoded to and decoded from bytes.
///
/// Implementors contain only plain numerical data (`Vec<f64>`, scalars, config),
/// never live model objects.
pub trait SerializableParams: Sized {
    fn to_bytes(&self) -> Result<Vec<u8>>;

    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<T> SerializableParams for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Everything needed to rebuild a fitted regressor: configuration, weights, bias.
///
/// The loss history is deliberately absent; it describes a training run, not the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub config: GradientDescentConfig,
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl ModelSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot and checks that its configuration is admissible.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.config.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegressionError;

    fn snapshot() -> ModelSnapshot {
        ModelSnapshot {
            config: GradientDescentConfig::new(0.05, 200, 1e-8),
            weights: vec![0.1, -0.2, 0.3],
            bias: 61.5,
        }
    }

    #[test]
    fn test_bincode_roundtrip_is_exact() {
        let original = snapshot();

        let bytes = original.to_bytes().unwrap();
        let restored = ModelSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = ModelSnapshot::from_bytes(&[0x01, 0x02]).unwrap_err();
        assert!(matches!(err, RegressionError::Serialization(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let original = snapshot();

        let json = original.to_json().unwrap();
        assert!(json.contains("\"learning_rate\""));

        assert_eq!(ModelSnapshot::from_json(&json).unwrap(), original);
    }

    #[test]
    fn test_from_json_rejects_invalid_config() {
        let mut bad = snapshot();
        bad.config.max_iterations = 0;
        let json = bad.to_json().unwrap();

        let err = ModelSnapshot::from_json(&json).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidParameter(_)));
    }
}
