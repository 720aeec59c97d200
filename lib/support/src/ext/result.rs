pub trait ResultExt<T> {
    fn unwrap_or_warn(self, default: T, error_message: &str) -> T;
    fn ok_or_warn(self, error_message: &str) -> Option<T>;
}

impl<T> ResultExt<T> for anyhow::Result<T> {
    fn unwrap_or_warn(self, default: T, error_message: &str) -> T {
        self.ok_or_warn(error_message).unwrap_or(default)
    }

    fn ok_or_warn(self, error_message: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("{}: {:?}", error_message, e);
                None
            }
        }
    }
}
