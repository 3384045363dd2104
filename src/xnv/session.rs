//! Real NV-CONTROL backend over an X display connection
//!
//! Loads libX11 and libXNVCtrl at runtime with libloading, so the crate
//! builds and its tests run on machines without the NVIDIA userspace
//! libraries. Load failures surface as ordinary errors at open time.

use crate::error::ControlError;
use crate::xnv::attributes::{IntAttribute, StringAttribute, Target, XNV_OK};
use crate::xnv::traits::AttributeSource;

use libloading::{Library, Symbol};

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_uint, c_void};
use std::ptr;

const LIB_X11: &str = "libX11.so.6";
const LIB_XNVCTRL: &str = "libXNVCtrl.so.0";

type XOpenDisplayFn = unsafe extern "C" fn(*const c_char) -> *mut c_void;
type XCloseDisplayFn = unsafe extern "C" fn(*mut c_void) -> c_int;
type XFreeFn = unsafe extern "C" fn(*mut c_void) -> c_int;

type QueryTargetAttributeFn =
    unsafe extern "C" fn(*mut c_void, c_int, c_int, c_uint, c_uint, *mut c_int) -> c_int;
type QueryTargetStringAttributeFn =
    unsafe extern "C" fn(*mut c_void, c_int, c_int, c_uint, c_uint, *mut *mut c_char) -> c_int;
type SetTargetAttributeAndGetStatusFn =
    unsafe extern "C" fn(*mut c_void, c_int, c_int, c_uint, c_uint, c_int) -> c_int;

/// Live connection to the NV-CONTROL service
///
/// Owns the loaded libraries and one open display handle. The handle is
/// closed on drop, so replacing a session never leaks the previous
/// connection. Raw pointer inside: not `Send`/`Sync`, which matches the
/// single-threaded contract of the underlying protocol.
pub struct Session {
    x11: Library,
    xnv: Library,
    display: *mut c_void,
    display_name: Option<String>,
}

impl Session {
    /// Open a connection to the given display, or the default local one
    ///
    /// # Errors
    /// `LibraryNotFound` when libX11/libXNVCtrl cannot be loaded,
    /// `DisplayOpenFailed` when the display cannot be opened.
    pub fn open(display: Option<&str>) -> Result<Self, ControlError> {
        let x11 = unsafe { Library::new(LIB_X11) }
            .map_err(|e| ControlError::LibraryNotFound(format!("{}: {}", LIB_X11, e)))?;
        let xnv = unsafe { Library::new(LIB_XNVCTRL) }
            .map_err(|e| ControlError::LibraryNotFound(format!("{}: {}", LIB_XNVCTRL, e)))?;

        let name_cstr = match display {
            Some(name) => Some(
                CString::new(name)
                    .map_err(|_| ControlError::DisplayOpenFailed(Some(name.to_string())))?,
            ),
            None => None,
        };

        let dpy = {
            let open: Symbol<XOpenDisplayFn> = unsafe { x11.get(b"XOpenDisplay") }
                .map_err(|_| ControlError::SymbolNotFound("XOpenDisplay".to_string()))?;
            let name_ptr = name_cstr
                .as_ref()
                .map_or(ptr::null(), |name| name.as_ptr());
            unsafe { open(name_ptr) }
        };

        if dpy.is_null() {
            return Err(ControlError::DisplayOpenFailed(
                display.map(str::to_string),
            ));
        }

        log::debug!(
            "opened NV-CONTROL session on display {}",
            display.unwrap_or("(default)")
        );

        Ok(Self {
            x11,
            xnv,
            display: dpy,
            display_name: display.map(str::to_string),
        })
    }

    /// Name of the display this session is connected to, if one was given
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn xnv_sym<T>(&self, name: &'static str) -> Result<Symbol<T>, ControlError> {
        unsafe { self.xnv.get(name.as_bytes()) }
            .map_err(|_| ControlError::SymbolNotFound(name.to_string()))
    }

    /// Release a buffer the native library allocated for a string result
    fn free_native(&self, buf: *mut c_char) {
        if let Ok(xfree) = unsafe { self.x11.get::<XFreeFn>(b"XFree") } {
            unsafe { xfree(buf as *mut c_void) };
        }
    }
}

impl AttributeSource for Session {
    fn query_int(
        &self,
        target: Target,
        index: u32,
        attr: IntAttribute,
    ) -> Result<i32, ControlError> {
        let query: Symbol<QueryTargetAttributeFn> =
            self.xnv_sym("XNVCTRLQueryTargetAttribute")?;

        let mut value: c_int = -1;
        let status = unsafe {
            query(
                self.display,
                target as c_int,
                index as c_int,
                0,
                attr as c_uint,
                &mut value,
            )
        };

        if status != XNV_OK {
            let err = ControlError::QueryFailed {
                target: target.name(),
                index,
                attribute: attr.name(),
                status,
            };
            log::error!("{}", err);
            return Err(err);
        }

        Ok(value)
    }

    fn query_string(
        &self,
        target: Target,
        index: u32,
        attr: StringAttribute,
    ) -> Result<String, ControlError> {
        let query: Symbol<QueryTargetStringAttributeFn> =
            self.xnv_sym("XNVCTRLQueryTargetStringAttribute")?;

        let mut buf: *mut c_char = ptr::null_mut();
        let status = unsafe {
            query(
                self.display,
                target as c_int,
                index as c_int,
                0,
                attr as c_uint,
                &mut buf,
            )
        };

        if status != XNV_OK {
            let err = ControlError::QueryFailed {
                target: target.name(),
                index,
                attribute: attr.name(),
                status,
            };
            log::error!("{}", err);
            return Err(err);
        }

        if buf.is_null() {
            return Err(ControlError::EmptyStringResult(attr.name()));
        }

        let result = unsafe { CStr::from_ptr(buf) }
            .to_str()
            .map(str::to_owned)
            .map_err(|_| ControlError::InvalidStringResult(attr.name()));
        self.free_native(buf);
        result
    }

    fn set_int(
        &mut self,
        target: Target,
        index: u32,
        attr: IntAttribute,
        value: i32,
    ) -> Result<i32, ControlError> {
        let set: Symbol<SetTargetAttributeAndGetStatusFn> =
            self.xnv_sym("XNVCTRLSetTargetAttributeAndGetStatus")?;

        // Status passed through unmodified; callers decide what failure means.
        let status = unsafe {
            set(
                self.display,
                target as c_int,
                index as c_int,
                0,
                attr as c_uint,
                value,
            )
        };

        Ok(status)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Ok(close) = unsafe { self.x11.get::<XCloseDisplayFn>(b"XCloseDisplay") } {
            unsafe { close(self.display) };
        }
    }
}
