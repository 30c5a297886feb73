//! Query-string serialization
//!
//! Keys and values are encoded with the `application/x-www-form-urlencoded`
//! byte serializer: `A-Z a-z 0-9 * - . _` pass through, a space becomes `+`
//! and every other byte becomes `%XX`.

use url::Url;
use url::form_urlencoded;

use super::set::ParameterSet;

/// Serialize `parameters` in insertion order as `k1=v1&k2=v2`.
#[must_use]
pub fn encode_query(parameters: &ParameterSet) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(parameters.iter());
    serializer.finish()
}

/// Append `parameters` to the query of `base`.
///
/// Pairs already present on `base` are kept ahead of the new ones. An empty
/// parameter set leaves `base` untouched, so no dangling `?` is produced.
#[must_use]
pub fn build_url(base: &Url, parameters: &ParameterSet) -> Url {
    let mut url = base.clone();
    if !parameters.is_empty() {
        url.query_pairs_mut().extend_pairs(parameters.iter());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_are_escaped() {
        let mut parameters = ParameterSet::new();
        parameters.set("dp".into(), "/a b&c=d".into());
        parameters.set("ec".into(), "Café".into());

        assert_eq!(encode_query(&parameters), "dp=%2Fa+b%26c%3Dd&ec=Caf%C3%A9");
    }

    #[test]
    fn existing_base_query_is_kept() {
        let base = Url::parse("http://host/collect?x=1").unwrap();
        let mut parameters = ParameterSet::new();
        parameters.set("v".into(), "1".into());

        assert_eq!(build_url(&base, &parameters).as_str(), "http://host/collect?x=1&v=1");
    }

    #[test]
    fn empty_set_has_no_query() {
        let base = Url::parse("http://host/collect").unwrap();
        assert_eq!(build_url(&base, &ParameterSet::new()).as_str(), "http://host/collect");
    }
}
