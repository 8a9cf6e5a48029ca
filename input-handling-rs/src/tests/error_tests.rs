//! Tests for the input handling error value
//!
//! These tests verify construction, cause access and chain inspection.

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use thiserror::Error as ThisError;

    use crate::error::{BoxedCause, FunctionInputHandlingError, InputFailureKind, Result};

    #[derive(ThisError, Debug)]
    #[error("could not decode request envelope")]
    struct EnvelopeError {
        #[source]
        source: serde_json::Error,
    }

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    fn data_ptr(err: &(dyn Error + 'static)) -> *const () {
        err as *const dyn Error as *const ()
    }

    #[test]
    fn test_message_only() {
        let err = FunctionInputHandlingError::new("no input coercion available for type Foo");

        assert_eq!(err.message(), "no input coercion available for type Foo");
        assert_eq!(err.to_string(), "no input coercion available for type Foo");
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
        assert!(!err.has_cause());
        assert_eq!(err.kind(), InputFailureKind::NoApplicableCoercion);
        assert_eq!(err.causes().count(), 0);
        assert!(err.root_cause().is_none());
    }

    #[test]
    fn test_blank_message_is_accepted() {
        let err = FunctionInputHandlingError::new("");
        assert_eq!(err.message(), "");
    }

    #[test]
    fn test_message_with_json_cause() {
        let err = FunctionInputHandlingError::with_cause("failed to coerce JSON body", json_error());

        assert_eq!(err.message(), "failed to coerce JSON body");
        assert_eq!(err.kind(), InputFailureKind::CoercionFailed);

        let cause = err.cause().expect("cause should be attached");
        let json = cause
            .downcast_ref::<serde_json::Error>()
            .expect("cause should be the JSON error");
        assert!(json.is_syntax());
        assert_eq!(json.to_string(), json_error().to_string());
    }

    #[test]
    fn test_boxed_cause_is_same_allocation() {
        let cause: BoxedCause = Box::new(io::Error::new(io::ErrorKind::UnexpectedEof, "body ended early"));
        let before = data_ptr(&*cause);

        let err = FunctionInputHandlingError::with_cause("failed to read input", cause);

        assert_eq!(data_ptr(err.source().unwrap()), before);
        let via_cause: &(dyn Error + 'static) = err.cause().unwrap();
        assert_eq!(data_ptr(via_cause), before);
    }

    #[test]
    fn test_typed_box_cause_keeps_type_and_allocation() {
        let cause = Box::new(io::Error::new(io::ErrorKind::InvalidData, "truncated frame"));
        let before = data_ptr(&*cause);

        let err = FunctionInputHandlingError::with_boxed_cause("failed to read input", cause);

        assert_eq!(err.kind(), InputFailureKind::CoercionFailed);
        assert_eq!(data_ptr(err.source().unwrap()), before);
        let io_err = err
            .cause()
            .unwrap()
            .downcast_ref::<io::Error>()
            .expect("cause should still be the io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_cause_unchanged_across_reads() {
        let err = FunctionInputHandlingError::with_cause(
            "failed to read input",
            io::Error::new(io::ErrorKind::InvalidData, "bad frame"),
        );

        let first = err.cause().unwrap().to_string();
        let _ = err.to_string();
        let _ = err.causes().count();
        let second = err.cause().unwrap().to_string();

        assert_eq!(first, "bad frame");
        assert_eq!(first, second);
        assert_eq!(data_ptr(err.source().unwrap()), data_ptr(err.source().unwrap()));
    }

    #[test]
    fn test_nested_chain_is_not_truncated() {
        let envelope = EnvelopeError { source: json_error() };
        let err = FunctionInputHandlingError::with_cause("failed to coerce invocation input", envelope);

        let chain: Vec<String> = err.causes().map(|e| e.to_string()).collect();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0], "could not decode request envelope");
        assert_eq!(chain[1], json_error().to_string());

        let root = err.root_cause().unwrap();
        assert!(root.downcast_ref::<serde_json::Error>().is_some());

        // the intermediate link is still reachable through plain source()
        let middle = err.source().unwrap();
        assert!(middle.downcast_ref::<EnvelopeError>().is_some());
        assert!(middle.source().is_some());
    }

    #[test]
    fn test_anyhow_cause_chain() {
        let cause = anyhow::Error::new(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            .context("reading request body");

        let err = FunctionInputHandlingError::with_cause("failed to read input", cause);

        let chain: Vec<String> = err.causes().map(|e| e.to_string()).collect();
        assert_eq!(chain, vec!["reading request body", "pipe closed"]);
    }

    #[test]
    fn test_string_cause() {
        let err = FunctionInputHandlingError::with_cause("failed to coerce header", "value was not ASCII");
        assert_eq!(err.cause().unwrap().to_string(), "value was not ASCII");
    }

    #[test]
    fn test_no_applicable_coercion() {
        let err = FunctionInputHandlingError::no_applicable_coercion("Foo");
        assert_eq!(err.message(), "no input coercion available for parameter of type Foo");
        assert!(!err.has_cause());

        let err = FunctionInputHandlingError::no_applicable_coercion_for::<Vec<u8>>();
        assert!(err.message().ends_with(std::any::type_name::<Vec<u8>>()));
        assert_eq!(err.kind(), InputFailureKind::NoApplicableCoercion);
    }

    #[test]
    fn test_from_serde_json_with_question_mark() {
        fn coerce(body: &str) -> Result<u64> {
            let value: u64 = serde_json::from_str(body)?;
            Ok(value)
        }

        assert_eq!(coerce("42").unwrap(), 42);

        let err = coerce("\"forty two\"").unwrap_err();
        assert_eq!(err.message(), "failed to coerce JSON input");
        assert_eq!(err.kind(), InputFailureKind::CoercionFailed);
        assert!(err.cause().unwrap().is::<serde_json::Error>());
    }

    #[test]
    fn test_from_utf8_error() {
        fn decode(bytes: Vec<u8>) -> Result<String> {
            Ok(String::from_utf8(bytes)?)
        }

        let err = decode(vec![0xff, 0xfe]).unwrap_err();
        assert_eq!(err.message(), "failed to decode input as UTF-8");
        assert!(err.cause().unwrap().is::<std::string::FromUtf8Error>());
    }

    #[test]
    fn test_into_parts() {
        let err = FunctionInputHandlingError::with_cause(
            "failed to read input",
            io::Error::new(io::ErrorKind::Other, "disk gone"),
        );

        let (message, cause) = err.into_parts();
        assert_eq!(message, "failed to read input");
        assert_eq!(cause.unwrap().to_string(), "disk gone");

        let (_, cause) = FunctionInputHandlingError::new("nothing applies").into_parts();
        assert!(cause.is_none());
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_value(InputFailureKind::NoApplicableCoercion).unwrap(),
            serde_json::json!("no_applicable_coercion")
        );
        assert_eq!(
            serde_json::to_value(InputFailureKind::CoercionFailed).unwrap(),
            serde_json::json!("coercion_failed")
        );
        assert_eq!(InputFailureKind::CoercionFailed.to_string(), "coercion_failed");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<FunctionInputHandlingError>();

        let err = FunctionInputHandlingError::with_cause("failed across threads", json_error());
        let handle = std::thread::spawn(move || err.message().to_string());
        assert_eq!(handle.join().unwrap(), "failed across threads");
    }
}
