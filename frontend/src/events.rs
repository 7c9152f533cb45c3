//! Window-level listeners with scoped ownership.
//!
//! Wheel, touch, scroll and pointer listeners live on `window`, which makes
//! them process-wide state. Each event type may only have one owner at a
//! time: a second owner would double-apply deltas. [`WindowListener`] claims
//! its event type on install and releases it, together with the JS closure,
//! when dropped.

use std::cell::RefCell;
use std::collections::HashSet;

use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, Window};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListenerError {
    #[error("a `{0}` listener is already installed on window")]
    AlreadyOwned(&'static str),
    #[error("no window available")]
    NoWindow,
    #[error("failed to attach `{0}` listener")]
    Attach(&'static str),
}

thread_local! {
    static CLAIMS: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
}

/// Registry of event types that currently have an owner on this thread.
pub struct ListenerClaims;

impl ListenerClaims {
    pub fn claim(kind: &'static str) -> Result<Claim, ListenerError> {
        CLAIMS.with(|claims| {
            if claims.borrow_mut().insert(kind) {
                Ok(Claim { kind })
            } else {
                Err(ListenerError::AlreadyOwned(kind))
            }
        })
    }

    #[cfg(test)]
    pub fn is_claimed(kind: &str) -> bool {
        CLAIMS.with(|claims| claims.borrow().contains(kind))
    }
}

/// Ownership of one event type; released on drop.
#[derive(Debug)]
pub struct Claim {
    kind: &'static str,
}

impl Claim {
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for Claim {
    fn drop(&mut self) {
        CLAIMS.with(|claims| {
            claims.borrow_mut().remove(self.kind);
        });
    }
}

/// A listener attached to `window` for as long as this value lives.
pub struct WindowListener {
    window: Window,
    callback: Closure<dyn FnMut(Event)>,
    claim: Claim,
}

impl WindowListener {
    /// Installs a passive listener.
    pub fn install<F>(kind: &'static str, handler: F) -> Result<Self, ListenerError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach(kind, true, handler)
    }

    /// Installs a listener that is allowed to call `prevent_default`.
    pub fn install_blocking<F>(kind: &'static str, handler: F) -> Result<Self, ListenerError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach(kind, false, handler)
    }

    fn attach<F>(kind: &'static str, passive: bool, handler: F) -> Result<Self, ListenerError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        let claim = ListenerClaims::claim(kind)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| ListenerError::Attach(kind))?;

        Ok(Self { window, callback, claim })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if self
            .window
            .remove_event_listener_with_callback(self.claim.kind(), self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("failed to detach `{}` listener", self.claim.kind());
        }
    }
}

/// Installs every listener or none of them.
pub fn install_all(
    listeners: Vec<Result<WindowListener, ListenerError>>,
) -> Result<Vec<WindowListener>, ListenerError> {
    listeners.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_owner_is_rejected() {
        let first = ListenerClaims::claim("wheel").unwrap();
        assert_eq!(
            ListenerClaims::claim("wheel").unwrap_err(),
            ListenerError::AlreadyOwned("wheel")
        );
        drop(first);
        assert!(ListenerClaims::claim("wheel").is_ok());
    }

    #[test]
    fn claims_release_on_drop() {
        {
            let _claim = ListenerClaims::claim("touchmove").unwrap();
            assert!(ListenerClaims::is_claimed("touchmove"));
        }
        assert!(!ListenerClaims::is_claimed("touchmove"));
    }

    #[test]
    fn distinct_kinds_do_not_conflict() {
        let _scroll = ListenerClaims::claim("scroll").unwrap();
        let _mouse = ListenerClaims::claim("mousemove").unwrap();
        assert!(ListenerClaims::is_claimed("scroll"));
        assert!(ListenerClaims::is_claimed("mousemove"));
    }
}
