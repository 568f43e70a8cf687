// File: crates/barchart-core/build.rs
// Summary: Build script to link Windows system libraries that Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
