//! Build script for softwire-sh1106-fw
//!
//! memory.x comes from embassy-stm32 (`memory-x` feature); this only adds
//! the linker scripts for the binary.

fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=build.rs");
}
