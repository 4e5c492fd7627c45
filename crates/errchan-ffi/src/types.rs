use errchan_core::ChannelError;

/// Status codes returned by the initialization functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ECStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorAlreadyInitialized = 2,
    ErrorInternal = 3,
}

impl From<&ChannelError> for ECStatus {
    fn from(err: &ChannelError) -> Self {
        match err {
            ChannelError::InvalidCapacity { .. } | ChannelError::InvalidSeparator => {
                ECStatus::ErrorInvalidArgument
            }
            ChannelError::AlreadyInitialized { .. } => ECStatus::ErrorAlreadyInitialized,
            ChannelError::NotInitialized
            | ChannelError::SlotUnavailable
            | ChannelError::ContextActive => ECStatus::ErrorInternal,
        }
    }
}

/// Error-delivery hook signature expected by the native library.
pub type ECPutErrFn = Option<unsafe extern "C" fn(status: std::os::raw::c_int, message: *const std::os::raw::c_char)>;
