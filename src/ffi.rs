use crate::Core::Rack;
use std::ptr;

// Error codes
const RXP_SUCCESS: i32 = 0;
const RXP_ERROR_NULL_POINTER: i32 = -1;
const RXP_ERROR_OUT_OF_RANGE: i32 = -3;
const RXP_ERROR_NOT_A_CENSUS: i32 = -4;
const RXP_ERROR_EMPTY_SLOT: i32 = -5;

/// Handle to a rack instance (opaque pointer)
pub struct RackHandle {
    inner: Rack,
}

// -----------------------------------------------------------------------------
// Rack lifecycle
// -----------------------------------------------------------------------------

/// Create a new rack.
///
/// # Arguments
/// * `sample_rate` - Cycles per second the host will run at. Must be positive.
///
/// # Returns
/// * Pointer to `RackHandle`, or NULL on failure.
#[no_mangle]
pub extern "C" fn rxp_rack_new(sample_rate: f32) -> *mut RackHandle {
    match Rack::new(sample_rate) {
        Ok(rack) => {
            let handle = Box::new(RackHandle { inner: rack });
            Box::into_raw(handle)
        }
        Err(e) => {
            eprintln!("FFI Error: Failed to create rack: {}", e);
            ptr::null_mut()
        }
    }
}

/// Free a rack handle.
#[no_mangle]
pub extern "C" fn rxp_rack_free(handle: *mut RackHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle); // Dropped automatically
        }
    }
}

// -----------------------------------------------------------------------------
// Topology
// -----------------------------------------------------------------------------

/// Splice in a census module at `position`.
///
/// # Returns
/// * The new module's id (>= 1), or a negative error code.
#[no_mangle]
pub extern "C" fn rxp_rack_insert_census(handle: *mut RackHandle, position: u32) -> i64 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER as i64;
    }

    let rack = unsafe { &(*handle).inner };
    match rack.insert_census(position as usize) {
        Ok(id) => id as i64,
        Err(_) => RXP_ERROR_OUT_OF_RANGE as i64,
    }
}

/// Splice in a non-cooperating blank module at `position`.
///
/// # Returns
/// * The new module's id (>= 1), or a negative error code.
#[no_mangle]
pub extern "C" fn rxp_rack_insert_blank(handle: *mut RackHandle, position: u32) -> i64 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER as i64;
    }

    let rack = unsafe { &(*handle).inner };
    match rack.insert_blank(position as usize) {
        Ok(id) => id as i64,
        Err(_) => RXP_ERROR_OUT_OF_RANGE as i64,
    }
}

/// Splice in an empty slot at `position`, pushing the row apart.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn rxp_rack_insert_gap(handle: *mut RackHandle, position: u32) -> i32 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    match rack.insert_gap(position as usize) {
        Ok(()) => RXP_SUCCESS,
        Err(_) => RXP_ERROR_OUT_OF_RANGE,
    }
}

/// Take the module out of `position`, leaving the slot empty. A chain broken
/// this way splits and re-stabilizes as two chains.
///
/// # Returns
/// * 0 on success.
/// * RXP_ERROR_OUT_OF_RANGE if no such slot.
/// * RXP_ERROR_EMPTY_SLOT if the slot was already empty.
#[no_mangle]
pub extern "C" fn rxp_rack_remove(handle: *mut RackHandle, position: u32) -> i32 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    if position as usize >= rack.len() {
        return RXP_ERROR_OUT_OF_RANGE;
    }
    match rack.remove(position as usize) {
        Ok(_) => RXP_SUCCESS,
        Err(_) => RXP_ERROR_EMPTY_SLOT,
    }
}

/// Delete the slot at `position` entirely, closing the gap so its two sides
/// become adjacent.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn rxp_rack_extract(handle: *mut RackHandle, position: u32) -> i32 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    match rack.extract(position as usize) {
        Ok(_) => RXP_SUCCESS,
        Err(_) => RXP_ERROR_OUT_OF_RANGE,
    }
}

// -----------------------------------------------------------------------------
// Cycle and queries
// -----------------------------------------------------------------------------

/// Run one processing cycle over the whole row, left to right.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn rxp_rack_cycle(handle: *mut RackHandle) -> i32 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    rack.process_cycle();
    RXP_SUCCESS
}

/// Number of slots in the row, empty ones included.
///
/// # Returns
/// * Slot count (>= 0), or a negative error code.
#[no_mangle]
pub extern "C" fn rxp_rack_len(handle: *mut RackHandle) -> i64 {
    if handle.is_null() {
        return RXP_ERROR_NULL_POINTER as i64;
    }

    let rack = unsafe { &(*handle).inner };
    rack.len() as i64
}

/// Id of the module at `position`.
///
/// # Arguments
/// * `out_id` - Output: the module id.
///
/// # Returns
/// * 0 on success.
/// * RXP_ERROR_OUT_OF_RANGE if no such slot.
/// * RXP_ERROR_EMPTY_SLOT if the slot is empty.
#[no_mangle]
pub extern "C" fn rxp_rack_module_id(
    handle: *mut RackHandle,
    position: u32,
    out_id: *mut u64,
) -> i32 {
    if handle.is_null() || out_id.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    if position as usize >= rack.len() {
        return RXP_ERROR_OUT_OF_RANGE;
    }
    match rack.module(position as usize) {
        Some(module) => {
            unsafe { *out_id = module.id() };
            RXP_SUCCESS
        }
        None => RXP_ERROR_EMPTY_SLOT,
    }
}

/// Published rank of the census module at `position`.
///
/// # Arguments
/// * `out_rank` - Output: the 1-indexed rank (0 before the first cycle).
///
/// # Returns
/// * 0 on success.
/// * RXP_ERROR_OUT_OF_RANGE if no such slot.
/// * RXP_ERROR_EMPTY_SLOT if the slot is empty.
/// * RXP_ERROR_NOT_A_CENSUS if the occupant is a non-cooperating module.
#[no_mangle]
pub extern "C" fn rxp_rack_rank(handle: *mut RackHandle, position: u32, out_rank: *mut u32) -> i32 {
    if handle.is_null() || out_rank.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    if position as usize >= rack.len() {
        return RXP_ERROR_OUT_OF_RANGE;
    }
    let Some(module) = rack.module(position as usize) else {
        return RXP_ERROR_EMPTY_SLOT;
    };
    match module.as_census() {
        Some(census) => {
            unsafe { *out_rank = census.rank() };
            RXP_SUCCESS
        }
        None => RXP_ERROR_NOT_A_CENSUS,
    }
}

/// Published chain total of the census module at `position`.
///
/// # Returns
/// * 0 on success, same error codes as `rxp_rack_rank`.
#[no_mangle]
pub extern "C" fn rxp_rack_total(
    handle: *mut RackHandle,
    position: u32,
    out_total: *mut u32,
) -> i32 {
    if handle.is_null() || out_total.is_null() {
        return RXP_ERROR_NULL_POINTER;
    }

    let rack = unsafe { &(*handle).inner };
    if position as usize >= rack.len() {
        return RXP_ERROR_OUT_OF_RANGE;
    }
    let Some(module) = rack.module(position as usize) else {
        return RXP_ERROR_EMPTY_SLOT;
    };
    match module.as_census() {
        Some(census) => {
            unsafe { *out_total = census.total() };
            RXP_SUCCESS
        }
        None => RXP_ERROR_NOT_A_CENSUS,
    }
}
