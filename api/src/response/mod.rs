use serde::Serialize;

/// Standard envelope for JSON responses that are not raw data payloads
/// (health checks and error bodies):
///
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Invalid date: ..."
/// }
/// ```
///
/// The two metrics read endpoints return their payloads bare (the latest
/// sample as an object and the range query as an array) so consumers can
/// use the data without unwrapping an envelope.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Success envelope with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Error envelope; `data` falls back to `T::default()`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
