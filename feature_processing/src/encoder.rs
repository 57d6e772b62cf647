use std::collections::BTreeSet;

use crate::error::{FeatureError, Result};

/// Maps company names to integer codes `0..k`, assigned in sorted name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes = names
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn encode(&self, name: &str) -> Result<u32> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(name))
            .map(|i| i as u32)
            .map_err(|_| FeatureError::UnseenCompany(name.to_string()))
    }

    pub fn transform<'a, I>(&self, names: I) -> Result<Vec<u32>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|n| self.encode(n)).collect()
    }

    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sorted_names() {
        let encoder = LabelEncoder::fit(["Tesla", "Apple", "Netflix", "Apple"]);
        assert_eq!(encoder.classes(), ["Apple", "Netflix", "Tesla"]);
        assert_eq!(
            encoder.transform(["Tesla", "Apple", "Netflix", "Apple"]).unwrap(),
            vec![2, 0, 1, 0]
        );
        assert_eq!(encoder.decode(1), Some("Netflix"));
        assert_eq!(encoder.decode(3), None);
    }

    #[test]
    fn encoding_is_stable() {
        let encoder = LabelEncoder::fit(["META", "Amazon"]);
        let first = encoder.encode("META").unwrap();
        for _ in 0..5 {
            assert_eq!(encoder.encode("META").unwrap(), first);
        }
    }

    #[test]
    fn unseen_company_fails() {
        let encoder = LabelEncoder::fit(["Apple"]);
        match encoder.transform(["Apple", "Qualcomm"]) {
            Err(FeatureError::UnseenCompany(name)) => assert_eq!(name, "Qualcomm"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
