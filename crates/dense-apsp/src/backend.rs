use dense_apsp_simd::{simd_level, SimdLevel};

/// Available execution backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Scalar lanes only.
    Portable,
    /// SIMD lanes (SSE2/AVX2/AVX-512/NEON widths).
    Simd,
}

impl Backend {
    /// Get the currently active backend based on CPU features.
    pub fn current() -> Self {
        match simd_level() {
            SimdLevel::Scalar => Backend::Portable,
            _ => Backend::Simd,
        }
    }

    /// Get a description of the current SIMD capabilities.
    pub fn description() -> String {
        match simd_level() {
            SimdLevel::Scalar => "Portable (no SIMD)".to_string(),
            SimdLevel::Sse2 => "x86-64 SSE2 (128-bit)".to_string(),
            SimdLevel::Avx => "x86-64 AVX (256-bit)".to_string(),
            SimdLevel::Avx2 => "x86-64 AVX2 (256-bit)".to_string(),
            SimdLevel::Avx512 => "x86-64 AVX-512 (512-bit)".to_string(),
            SimdLevel::Neon => "ARM NEON (128-bit)".to_string(),
        }
    }
}

/// Get information about the library configuration.
pub fn version_info() -> String {
    format!(
        "dense-apsp v{}\nBackend: {}\nSIMD Level: {:?}",
        env!("CARGO_PKG_VERSION"),
        Backend::description(),
        simd_level()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_detection() {
        let backend = Backend::current();
        println!("Current backend: {:?}", backend);
        println!("Description: {}", Backend::description());

        assert!(backend == Backend::Portable || backend == Backend::Simd);
    }

    #[test]
    fn test_backend_description_not_empty() {
        let desc = Backend::description();
        assert!(!desc.is_empty());
        assert!(
            desc.contains("Portable")
                || desc.contains("SSE2")
                || desc.contains("AVX")
                || desc.contains("NEON")
        );
    }

    #[test]
    fn test_version_info_format() {
        let info = version_info();
        assert!(info.contains("dense-apsp v"));
        assert!(info.contains("Backend:"));
        assert!(info.contains("SIMD Level:"));
    }
}
