use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidBusinessDate;

/// Business-date wire format: "YYYY-MM-DD".
#[derive(Debug)]
pub(crate) struct BusinessDateModel(NaiveDate);
impl FromStr for BusinessDateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| InvalidBusinessDate::with_debug(s, &e))?;
        Ok(BusinessDateModel(d))
    }
}
impl From<BusinessDateModel> for NaiveDate {
    fn from(model: BusinessDateModel) -> Self {
        model.0
    }
}
impl<'de> Deserialize<'de> for BusinessDateModel {
    fn deserialize<D>(deserializer: D) -> Result<BusinessDateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BusinessDateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
