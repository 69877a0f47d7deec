use tracing::{error, info};

pub fn log_prompt_mounted(capability_present: bool) {
    info!(
        event = "core.prompt.mount_completed",
        version = env!("CARGO_PKG_VERSION"),
        capability_present = capability_present
    );
}

pub fn log_prompt_unmounted(was_polling: bool) {
    info!(event = "core.prompt.unmount_completed", was_polling = was_polling);
}

pub fn log_prompt_error(error: &dyn crate::errors::FreshenError) {
    error!(
        event = "core.prompt.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentError;

    #[test]
    fn test_prompt_events() {
        log_prompt_mounted(true);
        log_prompt_unmounted(false);

        let test_error = AgentError::RegistrationFailed {
            message: "script evaluation failed".to_string(),
        };
        log_prompt_error(&test_error);
    }
}
