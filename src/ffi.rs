//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using unresume from other
//! languages such as C#, Python, and Node.js.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::recognition::parse_words_json;
use crate::render::JsonFormat;
use crate::{analyze_recognition, render, Unresume};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct UnresumeFfiResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `unresume_free_string`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `unresume_free_string`.
    pub error: *mut c_char,
}

impl UnresumeFfiResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }

    fn from_result(result: crate::Result<String>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, UnresumeFfiResult> {
    if ptr.is_null() {
        return Err(UnresumeFfiResult::error(format!("{} cannot be null", what)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| UnresumeFfiResult::error(format!("Invalid UTF-8 {}", what.to_lowercase())))
}

fn json_format(pretty: bool) -> JsonFormat {
    if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    }
}

/// Analyze a saved recognition file (`.tsv` or `.json`) and return the
/// document as JSON.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unresume_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unresume_analyze_file(path: *const c_char, pretty: bool) -> UnresumeFfiResult {
    let path_str = match read_str(path, "Path") {
        Ok(s) => s,
        Err(result) => return result,
    };

    UnresumeFfiResult::from_result(
        Unresume::new()
            .parse_file(Path::new(path_str))
            .and_then(|r| r.to_json(json_format(pretty))),
    )
}

/// Analyze a word-list JSON string and return the document as JSON.
///
/// A `width` that is not a positive finite number falls back to the width
/// carried in the JSON.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unresume_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unresume_analyze_words_json(
    json: *const c_char,
    width: f32,
    pretty: bool,
) -> UnresumeFfiResult {
    let json_str = match read_str(json, "JSON") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let width = Some(width).filter(|w| w.is_finite() && *w > 0.0);
    UnresumeFfiResult::from_result(
        parse_words_json(json_str)
            .and_then(|recognition| analyze_recognition(&recognition, width))
            .and_then(|doc| render::to_json(&doc, json_format(pretty))),
    )
}

/// Analyze a saved recognition file and render the form as Markdown.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unresume_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unresume_to_markdown(path: *const c_char) -> UnresumeFfiResult {
    let path_str = match read_str(path, "Path") {
        Ok(s) => s,
        Err(result) => return result,
    };

    UnresumeFfiResult::from_result(crate::to_markdown(Path::new(path_str)))
}

/// Check if a file is an image or PDF upload.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn unresume_is_supported_upload(path: *const c_char) -> bool {
    match read_str(path, "Path") {
        Ok(s) => crate::detect::is_supported_upload(Path::new(s)),
        Err(result) => {
            unresume_free_result(result);
            false
        }
    }
}

/// Free a result returned by any unresume function.
///
/// # Safety
///
/// The `result` must have been returned by an unresume function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn unresume_free_result(result: UnresumeFfiResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by unresume.
///
/// # Safety
///
/// The `ptr` must have been allocated by unresume.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn unresume_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the unresume library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn unresume_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
