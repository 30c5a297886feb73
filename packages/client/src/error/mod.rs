pub mod classification;
pub mod constructors;
pub mod types;

pub use constructors::*;
pub use types::{Error, Inner, Kind, Result};

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use http::StatusCode;
    use url::Url;

    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn validation_errors_convert_and_classify() {
        let err: Error = ValidationError::NegativeValue {
            field: "eventValue".to_string(),
            value: "-1".to_string(),
        }
        .into();

        assert!(err.is_validation());
        assert!(!err.is_post_failed());
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "the variable/parameter with name eventValue has a value -1 that is less than zero"
        );
    }

    #[test]
    fn post_failed_carries_status_and_url() {
        let url = Url::parse("http://host/collect?v=1").expect("valid url");
        let err = post_failed(url.clone(), StatusCode::CONFLICT);

        assert!(err.is_post_failed());
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert_eq!(err.url(), Some(&url));
        assert_eq!(
            err.to_string(),
            "the post failed for the URI http://host/collect?v=1 (http status: 409)"
        );
    }

    #[test]
    fn clone_drops_source_but_keeps_kind() {
        let err = transport(std::io::Error::other("connection refused"));
        let cloned = err.clone();

        assert!(err.source().is_some());
        assert!(cloned.source().is_none());
        assert_eq!(cloned.kind(), &Kind::Transport);
    }
}
