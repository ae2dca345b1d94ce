use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only compile the hardware-independent library
    if env::var("CARGO_FEATURE_RT").is_err() {
        return;
    }

    // Ensure target is correct
    let target = env::var("TARGET").unwrap();
    if !target.contains("avr") {
        panic!("The `rt` feature only supports AVR targets!");
    }

    // Configure for ATtiny85
    println!("cargo:rustc-link-arg=-mmcu=attiny85");
    println!("cargo:warning=Building for ATtiny85 at 1MHz");
}
