//! GL function loading
//!
//! Resolves OpenGL entry points once a context is current.

use super::error::InitError;
use glow::HasContext;
use glutin::display::{Display, GlDisplay};

/// Minimum context version the embedded shaders are written for.
pub const REQUIRED_GL_VERSION: (u32, u32) = (3, 3);

/// Resolve GL entry points through `display` and check the reported version.
///
/// # Safety
///
/// A context created on `display` must be current on the calling thread.
pub unsafe fn load_functions(display: &Display) -> Result<glow::Context, InitError> {
    let gl =
        unsafe { glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol)) };

    let version = gl.version();
    check_version(version.major, version.minor)?;

    let renderer = unsafe { gl.get_parameter_string(glow::RENDERER) };
    tracing::info!(
        "OpenGL {}.{} loaded ({}), renderer: {}",
        version.major,
        version.minor,
        version.vendor_info,
        renderer
    );

    Ok(gl)
}

/// Reject contexts older than [`REQUIRED_GL_VERSION`].
pub fn check_version(major: u32, minor: u32) -> Result<(), InitError> {
    let (required_major, required_minor) = REQUIRED_GL_VERSION;
    if (major, minor) < (required_major, required_minor) {
        return Err(InitError::Version {
            found_major: major,
            found_minor: minor,
            required_major,
            required_minor,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_required_and_newer() {
        assert!(check_version(3, 3).is_ok());
        assert!(check_version(4, 1).is_ok());
        assert!(check_version(4, 0).is_ok());
    }

    #[test]
    fn test_rejects_older() {
        let err = check_version(3, 2).unwrap_err();
        assert!(matches!(
            err,
            InitError::Version {
                found_major: 3,
                found_minor: 2,
                ..
            }
        ));
        assert!(check_version(2, 1).is_err());
    }

    #[test]
    fn test_version_error_message() {
        let err = check_version(2, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "OpenGL 2.1 is too old, 3.3 core is required"
        );
    }
}
