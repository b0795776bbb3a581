use local_tz_plugin::channel::method_call::{MethodCall, MethodResponse};

#[cfg(test)]
mod method_call_tests {
    use super::*;

    #[test]
    fn test_method_call_exposes_name() {
        let call = MethodCall::new("getLocalTz");
        assert_eq!(call.method(), "getLocalTz");
    }

    #[test]
    fn test_success_response_carries_value() {
        let response = MethodResponse::Success("Europe/Madrid".to_string());
        assert!(!response.is_not_implemented());
        assert_eq!(response.value(), Some("Europe/Madrid"));
    }

    #[test]
    fn test_not_implemented_response_has_no_value() {
        let response = MethodResponse::NotImplemented;
        assert!(response.is_not_implemented());
        assert_eq!(response.value(), None);
    }

    #[test]
    fn test_response_variants_distinguishable_on_wire() {
        let success = serde_json::to_value(MethodResponse::Success("UTC".to_string())).unwrap();
        let not_implemented = serde_json::to_value(MethodResponse::NotImplemented).unwrap();

        assert_eq!(success["status"], "success");
        assert_eq!(success["value"], "UTC");
        assert_eq!(not_implemented["status"], "not_implemented");
        assert_ne!(success["status"], not_implemented["status"]);
    }

    #[test]
    fn test_method_call_round_trips_through_json() {
        let call = MethodCall::new("getLocalTz");
        let encoded = serde_json::to_string(&call).unwrap();
        let decoded: MethodCall = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, call);
    }

    #[test]
    fn test_response_round_trips_through_json() {
        let response = MethodResponse::Success("America/New_York".to_string());
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: MethodResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);
    }
}
