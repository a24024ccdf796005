/// CPU feature detection for runtime width selection.
/// Available SIMD instruction sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    /// No SIMD, use scalar lanes.
    Scalar,
    /// SSE2 (128-bit, available on all x86-64).
    Sse2,
    /// AVX (256-bit).
    Avx,
    /// AVX2 (256-bit integer).
    Avx2,
    /// AVX-512 (512-bit).
    Avx512,
    /// ARM NEON (128-bit).
    Neon,
}

impl SimdLevel {
    /// Detect the best available SIMD level at runtime.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx512f") {
                return SimdLevel::Avx512;
            }
            if is_x86_feature_detected!("avx2") {
                return SimdLevel::Avx2;
            }
            if is_x86_feature_detected!("avx") {
                return SimdLevel::Avx;
            }
            // SSE2 is always available on x86-64
            SimdLevel::Sse2
        }

        #[cfg(target_arch = "aarch64")]
        {
            // NEON is always available on AArch64
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::Scalar
        }
    }

    /// Get the SIMD width in bytes.
    pub fn width_bytes(&self) -> usize {
        match self {
            SimdLevel::Scalar => 1,
            SimdLevel::Sse2 | SimdLevel::Neon => 16,
            SimdLevel::Avx | SimdLevel::Avx2 => 32,
            SimdLevel::Avx512 => 64,
        }
    }

    /// Number of i16 elements that fit in one register at this level.
    pub fn i16_lanes(&self) -> usize {
        self.width_bytes() / 2
    }

    /// Number of i32 elements that fit in one register at this level.
    pub fn i32_lanes(&self) -> usize {
        self.width_bytes() / 4
    }

    /// Number of i64 elements that fit in one register at this level.
    pub fn i64_lanes(&self) -> usize {
        self.width_bytes() / 8
    }
}

/// Global cached SIMD level.
static SIMD_LEVEL: std::sync::OnceLock<SimdLevel> = std::sync::OnceLock::new();

/// Get the detected SIMD level (cached).
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(SimdLevel::detect)
}
