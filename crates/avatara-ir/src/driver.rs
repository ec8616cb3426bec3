use serde::{Deserialize, Serialize};

/// A named set of parameter drivers. Carried through the IR for the host;
/// the lowering engine does not consume these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverGroup {
    pub name: String,
    /// Whether the drivers run only on the wearing client.
    #[serde(default)]
    pub local: bool,
    pub drivers: Vec<Driver>,
}

/// One parameter-driving operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum Driver {
    SetInt { parameter: String, value: i64 },
    SetFloat { parameter: String, value: f64 },
    SetBool { parameter: String, value: bool },
    AddInt { parameter: String, value: i64 },
    AddFloat { parameter: String, value: f64 },
    RandomInt { parameter: String, range: [i64; 2] },
    RandomFloat { parameter: String, range: [f64; 2] },
    RandomBool { parameter: String, chance: f64 },
    Copy { from: String, to: String },
    RangedCopy {
        from: String,
        to: String,
        from_range: [f64; 2],
        to_range: [f64; 2],
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_tagging() {
        let json = r#"{"type":"RandomFloat","content":{"parameter":"Blink","range":[0.0,1.0]}}"#;
        let driver: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(
            driver,
            Driver::RandomFloat {
                parameter: "Blink".into(),
                range: [0.0, 1.0]
            }
        );
    }
}
