use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(value: i64) -> Result<Self, String> {
        Self::validate(value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    fn validate(value: i64) -> Result<(), String> {
        if value <= 0 {
            return Err("Product ID must be positive".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}
