//! Fixed-capacity pixel storage for one strip segment

use core::fmt;
use core::ops::{Deref, DerefMut};

use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// Errors raised when buffers are created or paired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Requested length is larger than the buffer capacity
    CapacityExceeded { requested: usize, capacity: usize },
    /// Back and front buffers of a layer differ in length
    LengthMismatch { back: usize, front: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "buffer of {requested} pixels exceeds capacity of {capacity}"
            ),
            Self::LengthMismatch { back, front } => write!(
                f,
                "back buffer has {back} pixels but front buffer has {front}"
            ),
        }
    }
}

/// Ordered run of pixels with a length fixed at construction
///
/// `N` is the maximum number of pixels; the actual length may be smaller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: Vec<Rgb, N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a black buffer of `len` pixels
    pub fn new(len: usize) -> Result<Self, BufferError> {
        let mut pixels = Vec::new();
        pixels
            .resize(len, BLACK)
            .map_err(|()| BufferError::CapacityExceeded {
                requested: len,
                capacity: N,
            })?;
        Ok(Self { pixels })
    }

    /// Create a black buffer using the full capacity
    pub fn full() -> Self {
        let mut pixels = Vec::new();
        let resized = pixels.resize(N, BLACK);
        debug_assert!(resized.is_ok(), "length equals capacity");
        Self { pixels }
    }

    /// Create a buffer from existing colors
    pub fn from_slice(colors: &[Rgb]) -> Result<Self, BufferError> {
        let pixels = Vec::from_slice(colors).map_err(|()| BufferError::CapacityExceeded {
            requested: colors.len(),
            capacity: N,
        })?;
        Ok(Self { pixels })
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the color at `index`, if it is in range
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Set the color at `index`; out-of-range writes are ignored
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl<const N: usize> Deref for PixelBuffer<N> {
    type Target = [Rgb];

    fn deref(&self) -> &Self::Target {
        &self.pixels
    }
}

impl<const N: usize> DerefMut for PixelBuffer<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pixels
    }
}
