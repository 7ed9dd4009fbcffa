use std::sync::atomic::{AtomicBool, Ordering};

use leptos::document;
use wasm_bindgen_futures::wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::{
    app::{log, App},
    styles::{load_global_styles, DocumentHead},
};

pub const MOUNT_POINT_SELECTOR: &str = "#app";

static APP_MOUNT: MountGuard = MountGuard::new();

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("The application was already mounted")]
    AlreadyMounted,
    #[error("No element matches the mount point selector `{0}`")]
    MountPointMissing(String),
    #[error("The mount point `{0}` is not an HTML element")]
    NotAnHtmlElement(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Lets exactly one caller through, for the lifetime of the process.
pub struct MountGuard {
    mounted: AtomicBool,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self {
            mounted: AtomicBool::new(false),
        }
    }

    pub fn acquire(&self) -> Result<(), BootstrapError> {
        self.mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| BootstrapError::AlreadyMounted)
    }
}

/// The document-side effects of starting the app.
pub(crate) trait BootstrapHost {
    type MountPoint;

    fn load_global_styles(&mut self) -> Result<(), BootstrapError>;
    fn find_mount_point(&mut self, selector: &str) -> Result<Self::MountPoint, BootstrapError>;
    fn mount(&mut self, mount_point: Self::MountPoint);
}

struct DomHost {
    document: Document,
}

impl BootstrapHost for DomHost {
    type MountPoint = HtmlElement;

    fn load_global_styles(&mut self) -> Result<(), BootstrapError> {
        load_global_styles(&mut DocumentHead::new(self.document.clone())?)
    }

    fn find_mount_point(&mut self, selector: &str) -> Result<HtmlElement, BootstrapError> {
        self.document
            .query_selector(selector)
            .map_err(|e| BootstrapError::Dom(js_error_to_string(&e)))?
            .ok_or_else(|| BootstrapError::MountPointMissing(selector.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BootstrapError::NotAnHtmlElement(selector.to_string()))
    }

    fn mount(&mut self, mount_point: HtmlElement) {
        log(&format!("Mounting application at {MOUNT_POINT_SELECTOR}"));
        leptos::mount_to(mount_point, App);
    }
}

/// Loads the global styles, then mounts the root component at [`MOUNT_POINT_SELECTOR`].
pub fn bootstrap() -> Result<(), BootstrapError> {
    bootstrap_with(&APP_MOUNT, &mut DomHost {
        document: document(),
    })
}

/// The guard is taken before anything touches the host, so a refused start has no side effects.
pub(crate) fn bootstrap_with<H: BootstrapHost>(
    guard: &MountGuard,
    host: &mut H,
) -> Result<(), BootstrapError> {
    guard.acquire()?;

    host.load_global_styles()?;

    let mount_point = host.find_mount_point(MOUNT_POINT_SELECTOR)?;
    host.mount(mount_point);

    Ok(())
}

pub(crate) fn js_error_to_string(e: &wasm_bindgen_futures::wasm_bindgen::JsValue) -> String {
    e.as_string()
        .unwrap_or("<Could not extract error as string>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum HostEvent {
        Styles,
        Lookup(String),
        Mount,
    }

    #[derive(Default)]
    struct RecordingHost {
        events: Vec<HostEvent>,
        missing_mount_point: bool,
    }

    impl BootstrapHost for RecordingHost {
        type MountPoint = ();

        fn load_global_styles(&mut self) -> Result<(), BootstrapError> {
            self.events.push(HostEvent::Styles);
            Ok(())
        }

        fn find_mount_point(&mut self, selector: &str) -> Result<(), BootstrapError> {
            self.events.push(HostEvent::Lookup(selector.to_string()));
            if self.missing_mount_point {
                Err(BootstrapError::MountPointMissing(selector.to_string()))
            } else {
                Ok(())
            }
        }

        fn mount(&mut self, _mount_point: ()) {
            self.events.push(HostEvent::Mount);
        }
    }

    #[test]
    fn guard_admits_only_first_mount() {
        let guard = MountGuard::new();

        assert_eq!(guard.acquire(), Ok(()));
        assert_eq!(guard.acquire(), Err(BootstrapError::AlreadyMounted));
        assert_eq!(guard.acquire(), Err(BootstrapError::AlreadyMounted));
    }

    #[test]
    fn concurrent_acquires_let_one_through() {
        let guard = std::sync::Arc::new(MountGuard::new());

        let successes = (0..8)
            .map(|_| {
                let guard = guard.clone();
                std::thread::spawn(move || guard.acquire().is_ok())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|admitted| *admitted)
            .count();

        assert_eq!(successes, 1);
    }

    #[test]
    fn styles_load_before_lookup_and_single_mount() {
        let guard = MountGuard::new();
        let mut host = RecordingHost::default();

        assert_eq!(bootstrap_with(&guard, &mut host), Ok(()));

        assert_eq!(
            host.events,
            vec![
                HostEvent::Styles,
                HostEvent::Lookup(MOUNT_POINT_SELECTOR.to_string()),
                HostEvent::Mount,
            ]
        );
    }

    #[test]
    fn second_bootstrap_touches_nothing() {
        let guard = MountGuard::new();
        let mut first = RecordingHost::default();
        let mut second = RecordingHost::default();

        bootstrap_with(&guard, &mut first).unwrap();

        assert_eq!(
            bootstrap_with(&guard, &mut second),
            Err(BootstrapError::AlreadyMounted)
        );
        assert!(second.events.is_empty());
        assert_eq!(
            first.events.iter().filter(|e| **e == HostEvent::Mount).count(),
            1
        );
    }

    #[test]
    fn missing_mount_point_stops_before_mount() {
        let guard = MountGuard::new();
        let mut host = RecordingHost {
            missing_mount_point: true,
            ..Default::default()
        };

        assert_eq!(
            bootstrap_with(&guard, &mut host),
            Err(BootstrapError::MountPointMissing(
                MOUNT_POINT_SELECTOR.to_string()
            ))
        );
        assert!(!host.events.contains(&HostEvent::Mount));
    }
}
