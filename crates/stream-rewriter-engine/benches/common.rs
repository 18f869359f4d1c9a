// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_c_source(functions: usize) -> String {
    let mut source = String::from("#include <stdint.h>\n\n");
    for n in 0..functions {
        source.push_str(&format!(
            "/* handler {n} */\nstatic uint8_t handler_{n}(uint8_t count) {{\n    // scale\n    return count * {n} + 0x1F;\n}}\n\n"
        ));
    }
    source
}
