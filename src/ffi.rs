//! FFI bindings for Plant Flux
//!
//! C-compatible entry points for calling the engine from other languages.
//! Strings cross the boundary as null-terminated UTF-8; every string returned
//! here is heap-allocated and must be released with `plant_flux_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::pipeline::{readings_to_report, PlantProcessor};
use crate::window::DEFAULT_WINDOW_CAPACITY;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => {
            set_last_error("Output contains an interior NUL byte");
            ptr::null_mut()
        }
    }
}

const NO_READINGS: &str = "No readings ingested";

// ============================================================================
// One-shot API
// ============================================================================

/// Derive a report from a JSON array of records; the newest record is the
/// latest reading.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `plant_flux_free_string`.
/// - Returns NULL on error (or for an empty array); call `plant_flux_last_error`.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_readings_to_report(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match readings_to_report(json_str) {
        Ok(Some(report)) => string_to_cstr(&report),
        Ok(None) => {
            set_last_error(NO_READINGS);
            ptr::null_mut()
        }
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Stateful Processor API
// ============================================================================

/// Opaque handle to a PlantProcessor
pub struct PlantProcessorHandle {
    processor: PlantProcessor,
}

/// Create a processor with the default 288-entry window.
///
/// # Safety
/// - Returns a pointer that must be freed with `plant_flux_processor_free`.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_new() -> *mut PlantProcessorHandle {
    plant_flux_processor_with_capacity(DEFAULT_WINDOW_CAPACITY as i32)
}

/// Create a processor with the given window capacity; non-positive values
/// fall back to the default.
///
/// # Safety
/// - Returns a pointer that must be freed with `plant_flux_processor_free`.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_with_capacity(
    capacity: i32,
) -> *mut PlantProcessorHandle {
    clear_last_error();

    let capacity = if capacity <= 0 {
        DEFAULT_WINDOW_CAPACITY
    } else {
        capacity as usize
    };

    let handle = Box::new(PlantProcessorHandle {
        processor: PlantProcessor::with_window_capacity(capacity),
    });
    Box::into_raw(handle)
}

/// Free a processor.
///
/// # Safety
/// - `processor` must be a pointer returned by `plant_flux_processor_new`
///   or `plant_flux_processor_with_capacity`, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_free(processor: *mut PlantProcessorHandle) {
    if !processor.is_null() {
        drop(Box::from_raw(processor));
    }
}

/// Ingest one JSON record.
///
/// # Safety
/// - `processor` must be a valid processor pointer.
/// - `record_json` must be a valid null-terminated C string.
/// - Returns the number of readings evicted (>= 0), or -1 on error.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_ingest(
    processor: *mut PlantProcessorHandle,
    record_json: *const c_char,
) -> i32 {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return -1;
    }
    let handle = &*processor;

    let json_str = match cstr_to_string(record_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return -1;
        }
    };

    match handle.processor.ingest_json(&json_str) {
        Ok(evicted) => i32::try_from(evicted).unwrap_or(i32::MAX),
        Err(e) => {
            set_last_error(&e.to_string());
            -1
        }
    }
}

/// Report JSON for the latest reading.
///
/// # Safety
/// - `processor` must be a valid processor pointer.
/// - Returns a newly allocated string that must be freed with `plant_flux_free_string`.
/// - Returns NULL on error or before the first ingest.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_report(
    processor: *mut PlantProcessorHandle,
) -> *mut c_char {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return ptr::null_mut();
    }
    let handle = &*processor;

    match handle.processor.report() {
        Ok(Some(report)) => string_to_cstr(&report),
        Ok(None) => {
            set_last_error(NO_READINGS);
            ptr::null_mut()
        }
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Save the processor window to JSON.
///
/// # Safety
/// - `processor` must be a valid processor pointer.
/// - Returns a newly allocated string that must be freed with `plant_flux_free_string`.
/// - Returns NULL on error.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_save_window(
    processor: *mut PlantProcessorHandle,
) -> *mut c_char {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return ptr::null_mut();
    }
    let handle = &*processor;

    match handle.processor.save_window() {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Replace the processor window with one saved by `plant_flux_processor_save_window`.
///
/// # Safety
/// - `processor` must be a valid processor pointer.
/// - `json` must be a valid null-terminated C string.
/// - Returns 0 on success, -1 on error.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_processor_load_window(
    processor: *mut PlantProcessorHandle,
    json: *const c_char,
) -> i32 {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return -1;
    }
    let handle = &*processor;

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return -1;
        }
    };

    match handle.processor.load_window(&json_str) {
        Ok(()) => 0,
        Err(e) => {
            set_last_error(&e.to_string());
            -1
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by a Plant Flux function.
///
/// # Safety
/// - `ptr` must be a pointer returned by a Plant Flux function, or NULL.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message on this thread.
///
/// # Safety
/// - The pointer stays valid until the next Plant Flux call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if the last call succeeded.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn plant_flux_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
