use serde::Serialize;

/// Uniform success envelope: `{success, count?, data?, message?}`.
/// The failure shape (`{success: false, error}`) lives in `errors.rs`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            count: None,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            count: None,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Listing envelope carrying the item count alongside the data.
    pub fn list(data: Vec<T>) -> Self {
        Envelope {
            success: true,
            count: Some(data.len()),
            data: Some(data),
            message: None,
        }
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            count: None,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let json = serde_json::to_string(&Envelope::ok(42)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":42}"#);
    }

    #[test]
    fn test_list_envelope_carries_count() {
        let json = serde_json::to_string(&Envelope::list(vec!["a", "b"])).unwrap();
        assert_eq!(json, r#"{"success":true,"count":2,"data":["a","b"]}"#);
    }

    #[test]
    fn test_message_envelope_omits_data() {
        let json = serde_json::to_string(&Envelope::message("done")).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"done"}"#);
    }
}
