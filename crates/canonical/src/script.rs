//! Script canonicalization capability.
//!
//! Place names arrive in whichever script variant the source happened to use.
//! A [`ScriptConverter`] maps them onto one canonical variant so that
//! "臺北" and "台北" compare as the same characters.

use std::sync::Arc;

use crate::error::CapabilityError;

/// Converts text into the canonical script variant.
///
/// Implementations must be deterministic within a process and total: every
/// Unicode string, including the empty string, has a defined output.
pub trait ScriptConverter: Send + Sync {
    fn to_canonical_script(&self, text: &str) -> Result<String, CapabilityError>;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScript;

impl ScriptConverter for IdentityScript {
    fn to_canonical_script(&self, text: &str) -> Result<String, CapabilityError> {
        Ok(text.to_string())
    }
}

/// Traditional to simplified Chinese conversion backed by `zhconv`.
#[cfg(feature = "zhconv")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedChinese;

#[cfg(feature = "zhconv")]
impl ScriptConverter for SimplifiedChinese {
    fn to_canonical_script(&self, text: &str) -> Result<String, CapabilityError> {
        Ok(zhconv::zhconv(text, zhconv::Variant::ZhHans))
    }
}

/// The converter used when the caller does not supply one: simplified Chinese
/// when the `zhconv` feature is enabled, identity otherwise.
pub fn default_script_converter() -> Arc<dyn ScriptConverter> {
    #[cfg(feature = "zhconv")]
    {
        Arc::new(SimplifiedChinese)
    }
    #[cfg(not(feature = "zhconv"))]
    {
        Arc::new(IdentityScript)
    }
}
