use tracing::info;

use shared::{PinValidateRequest, PinValidateResponse};

/// PIN the admin view ships with until the operator changes it
const DEFAULT_ADMIN_PIN: &str = "8923";

/// Service for the admin-view PIN gate.
///
/// This is a UX convenience that keeps staff out of the supplier forms, not
/// an access control boundary: the PIN is compared locally and nothing it
/// guards is actually protected. Hardening (hashing, lockout, timing) is
/// deliberately out of scope.
#[derive(Clone)]
pub struct AdminGateService {
    pin: String,
}

impl AdminGateService {
    /// Create a new AdminGateService with the default PIN
    pub fn new() -> Self {
        Self {
            pin: DEFAULT_ADMIN_PIN.to_string(),
        }
    }

    /// Create a new AdminGateService with a custom PIN (for testing)
    pub fn with_pin(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    /// Check an entered PIN against the configured one
    pub fn validate(&self, request: PinValidateRequest) -> PinValidateResponse {
        let attempt = request.pin.trim();

        if attempt.len() != 4 || !attempt.chars().all(|c| c.is_ascii_digit()) {
            info!("Rejected malformed admin PIN attempt (length: {})", attempt.len());
            return PinValidateResponse {
                success: false,
                message: "PIN must be 4 digits.".to_string(),
            };
        }

        if attempt == self.pin {
            info!("Admin PIN accepted");
            PinValidateResponse {
                success: true,
                message: "Access granted! Welcome to supplier settings.".to_string(),
            }
        } else {
            info!("Admin PIN rejected");
            PinValidateResponse {
                success: false,
                message: "Incorrect PIN. Access denied.".to_string(),
            }
        }
    }
}

impl Default for AdminGateService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pin_is_accepted() {
        let service = AdminGateService::new();

        let response = service.validate(PinValidateRequest {
            pin: "8923".to_string(),
        });

        assert!(response.success);
        assert!(response.message.contains("Access granted"));
    }

    #[test]
    fn test_wrong_pin_is_rejected() {
        let service = AdminGateService::new();

        for pin in ["0000", "8922", "9823"] {
            let response = service.validate(PinValidateRequest {
                pin: pin.to_string(),
            });
            assert!(!response.success, "PIN '{}' should be rejected", pin);
            assert!(response.message.contains("Incorrect PIN"));
        }
    }

    #[test]
    fn test_malformed_pins_are_rejected() {
        let service = AdminGateService::new();

        for pin in ["", "892", "89234", "89a3", "ice cold"] {
            let response = service.validate(PinValidateRequest {
                pin: pin.to_string(),
            });
            assert!(!response.success, "PIN '{}' should be rejected", pin);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let service = AdminGateService::new();

        let response = service.validate(PinValidateRequest {
            pin: "  8923  ".to_string(),
        });

        assert!(response.success);
    }

    #[test]
    fn test_custom_pin() {
        let service = AdminGateService::with_pin("1111");

        assert!(service
            .validate(PinValidateRequest {
                pin: "1111".to_string()
            })
            .success);
        assert!(!service
            .validate(PinValidateRequest {
                pin: "8923".to_string()
            })
            .success);
    }
}
