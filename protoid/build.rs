use std::{error::Error, io::Write};

fn main() -> Result<(), Box<dyn Error>> {
    let registry = protoid_codegen::load_registry()?;
    let code = protoid_codegen::generate_rust(&registry)?;

    let out_dir = std::env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?;
    let out_path = std::path::Path::new(&out_dir).join("protoid_generated.rs");

    let mut output = std::fs::File::create(&out_path)?;
    write!(output, "{}", code)?;
    output.flush()?;

    Ok(())
}
