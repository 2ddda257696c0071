use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Chat models supported by this client
///
/// The set is closed on purpose: a typo in a model name is a compile error
/// here instead of a 404 from the service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub enum Model {
    #[serde(rename = "gpt-4")]
    #[strum(serialize = "gpt-4")]
    Gpt4,

    #[serde(rename = "gpt-4-0613")]
    #[strum(serialize = "gpt-4-0613")]
    Gpt4_0613,

    #[serde(rename = "gpt-4-32k")]
    #[strum(serialize = "gpt-4-32k")]
    Gpt4_32k,

    #[serde(rename = "gpt-4-32k-0613")]
    #[strum(serialize = "gpt-4-32k-0613")]
    Gpt4_32k0613,

    #[serde(rename = "gpt-3.5-turbo")]
    #[strum(serialize = "gpt-3.5-turbo")]
    Gpt3_5Turbo,

    #[serde(rename = "gpt-3.5-turbo-0613")]
    #[strum(serialize = "gpt-3.5-turbo-0613")]
    Gpt3_5Turbo0613,

    #[serde(rename = "gpt-3.5-turbo-16k")]
    #[strum(serialize = "gpt-3.5-turbo-16k")]
    Gpt3_5Turbo16k,

    #[serde(rename = "gpt-3.5-turbo-16k-0613")]
    #[strum(serialize = "gpt-3.5-turbo-16k-0613")]
    Gpt3_5Turbo16k0613,
}

impl Model {
    /// Get the string representation of the model
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gpt4_0613 => "gpt-4-0613",
            Model::Gpt4_32k => "gpt-4-32k",
            Model::Gpt4_32k0613 => "gpt-4-32k-0613",
            Model::Gpt3_5Turbo => "gpt-3.5-turbo",
            Model::Gpt3_5Turbo0613 => "gpt-3.5-turbo-0613",
            Model::Gpt3_5Turbo16k => "gpt-3.5-turbo-16k",
            Model::Gpt3_5Turbo16k0613 => "gpt-3.5-turbo-16k-0613",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_projection_agrees() {
        for model in Model::iter() {
            let wire = serde_json::to_value(model).expect("serializable");
            assert_eq!(wire, serde_json::Value::from(model.as_str()));
            assert_eq!(model.to_string(), model.as_str());
            assert_eq!(Model::from_str(model.as_str()), Ok(model));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(Model::from_str("gpt-5-turbo").is_err());
        assert!(serde_json::from_str::<Model>("\"gpt4\"").is_err());
    }
}
