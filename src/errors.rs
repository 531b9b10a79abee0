//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! All failure modes are startup failures: event loop creation, window
//! creation, GPU adapter/device acquisition, surface configuration, and
//! shadow bitmap decoding. The per-frame paths (layout recomputation and
//! hit classification) are total functions and cannot fail.
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, CasementError>`.

use thiserror::Error;

/// The main error type for casement.
///
/// Every variant represents a fatal startup condition; the binary reports
/// it and exits nonzero.
#[derive(Error, Debug)]
pub enum CasementError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create or configure the window surface.
    #[error("Surface error: {0}")]
    SurfaceCreateFailed(String),

    // ========================================================================
    // Windowing Errors
    // ========================================================================
    /// Window creation error.
    #[error("Failed to create window: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// Shadow bitmap decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),
}

impl From<image::ImageError> for CasementError {
    fn from(err: image::ImageError) -> Self {
        CasementError::ImageDecodeError(err.to_string())
    }
}

/// Alias for `Result<T, CasementError>`.
pub type Result<T> = std::result::Result<T, CasementError>;
