//! FFI interface for C/C++ interop
//!
//! Records are returned as JSON strings owned by Rust; every result must be
//! released with `free_extraction_result`.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::config::FetchConfig;
use crate::error::ExtractError;
use crate::extractors::{extract_product, ProductRecord};
use crate::fetch::scrape_product;

/// Result struct returned across the C boundary.
/// Exactly one pointer is non-null.
#[repr(C)]
pub struct ExtractionResultFFI {
    /// JSON-serialized ProductRecord (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message (null-terminated)
    pub error_ptr: *mut c_char,
}

/// Extract a product record from an HTML buffer.
///
/// A null pointer or zero length is treated as an empty page.
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - Caller must free the result via `free_extraction_result`
#[no_mangle]
pub unsafe extern "C" fn extract_product_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> ExtractionResultFFI {
    let html = match html_from_raw(html_ptr, html_len) {
        Ok(s) => s,
        Err(e) => return make_error_result(&e.to_string()),
    };

    make_record_result(&extract_product(html))
}

/// Fetch a product page and extract its record.
///
/// Fetch settings come from the `PRODUCT_PARSER_*` environment variables. A
/// failed fetch still yields a JSON record describing the failure.
///
/// # Safety
/// - `url` must be a valid null-terminated C string
/// - Caller must free the result via `free_extraction_result`
#[no_mangle]
pub unsafe extern "C" fn scrape_product_ffi(url: *const c_char) -> ExtractionResultFFI {
    let url_str = if url.is_null() {
        return make_error_result(&ExtractError::NullArgument("URL").to_string());
    } else {
        match CStr::from_ptr(url).to_str() {
            Ok(s) => s,
            Err(_) => return make_error_result(&ExtractError::InvalidUtf8("URL").to_string()),
        }
    };

    make_record_result(&scrape_product(url_str, &FetchConfig::from_env()))
}

/// Free an ExtractionResultFFI returned by this library
///
/// # Safety
/// - `result` must have been returned by one of the `*_ffi` functions
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_extraction_result(result: ExtractionResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn html_from_raw<'a>(html_ptr: *const c_char, html_len: usize) -> Result<&'a str, ExtractError> {
    if html_ptr.is_null() || html_len == 0 {
        return Ok("");
    }
    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    std::str::from_utf8(slice).map_err(|_| ExtractError::InvalidUtf8("HTML content"))
}

fn make_record_result(record: &ProductRecord) -> ExtractionResultFFI {
    match serde_json::to_string(record) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ExtractionResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize result: {}", e)),
    }
}

fn make_error_result(msg: &str) -> ExtractionResultFFI {
    // Interior NULs are stripped so the message itself can always be built
    let error_cstr = CString::new(msg.replace('\0', "")).unwrap_or_default();
    ExtractionResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
