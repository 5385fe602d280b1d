use serde::Serialize;

use crate::error::Result;
use crate::hash::{Hash, HashKind, Network};

/// Everything the tool prints about one hash.
#[derive(Debug, Serialize)]
pub struct HashReport {
    pub text: String,
    pub network: Network,
    pub version: u8,
    pub kind: Option<HashKind>,
    pub payload: String,
    pub value: String,
}

impl HashReport {
    pub fn new(hash: &Hash) -> Result<HashReport> {
        Ok(HashReport {
            text: hash.to_text()?,
            network: hash.network(),
            version: hash.version().0,
            kind: hash.kind(),
            payload: hash.to_hex(),
            value: hash.value().to_string(),
        })
    }

    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        let kind = self
            .kind
            .map(|k| k.to_string())
            .unwrap_or_else(|| "unregistered".to_string());
        Ok(format!(
            "Text:    {}\nNetwork: {}\nVersion: {} ({})\nPayload: {}\nValue:   {}",
            self.text, self.network, self.version, kind, self.payload, self.value
        ))
    }
}
