//! Selection of the encoder used by [`Bytes`](crate::Bytes) and friends.
//!
//! The process-wide encoder is write-once: [`install`] must run before the
//! first (de)serialization, since reading the slot freezes the hex default.
//! [`with_encoder`] overrides it for the current thread within a scope.

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

use tracing::{info, trace, warn};

use crate::encoder::ByteEncoder;
use crate::error::EncodingError;
use crate::hex_encoder::HexEncoder;

static GLOBAL: OnceLock<Arc<dyn ByteEncoder>> = OnceLock::new();

thread_local! {
    static SCOPED: RefCell<Vec<Arc<dyn ByteEncoder>>> = const { RefCell::new(Vec::new()) };
}

fn global() -> &'static Arc<dyn ByteEncoder> {
    GLOBAL.get_or_init(|| Arc::new(HexEncoder))
}

/// Installs the process-wide encoder.
///
/// Fails with [`EncodingError::AlreadyInstalled`] if an encoder was installed
/// before or the default has already been used.
pub fn install(encoder: Arc<dyn ByteEncoder>) -> Result<(), EncodingError> {
    let name = encoder.name();
    match GLOBAL.set(encoder) {
        Ok(()) => {
            info!(encoding = name, "bytes: encoder installed");
            Ok(())
        }
        Err(_) => {
            let current = global().name();
            warn!(encoding = name, current, "bytes: encoder already installed");
            Err(EncodingError::AlreadyInstalled { current })
        }
    }
}

/// Returns the encoder in effect on this thread.
pub fn active() -> Arc<dyn ByteEncoder> {
    SCOPED
        .with(|scoped| scoped.borrow().last().cloned())
        .unwrap_or_else(|| Arc::clone(global()))
}

/// Runs `f` with `encoder` active on the current thread.
///
/// Scopes nest; the previous encoder is restored when `f` returns or panics.
pub fn with_encoder<R>(encoder: Arc<dyn ByteEncoder>, f: impl FnOnce() -> R) -> R {
    trace!(encoding = encoder.name(), "bytes: scoped encoder");
    SCOPED.with(|scoped| scoped.borrow_mut().push(encoder));
    let _guard = ScopeGuard;
    f()
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let _ = SCOPED.try_with(|scoped| scoped.borrow_mut().pop());
    }
}
