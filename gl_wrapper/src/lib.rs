pub mod buffer;
pub mod program;
pub mod renderer;

/// Version string reported by the current context, if any.
pub fn version() -> Option<String> {
    let ptr = unsafe { gl::GetString(gl::VERSION) };

    if ptr.is_null() {
        return None;
    }

    let c_str = unsafe { std::ffi::CStr::from_ptr(ptr as *const std::ffi::c_char) };
    Some(c_str.to_string_lossy().into_owned())
}
