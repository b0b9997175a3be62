use anyhow::Result;
use citadel_config::{
    codegen::{generate_config_module, generate_linker_script},
    Configuration,
};
use std::{
    env,
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};

fn main() -> Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let configuration = process_configuration_file()?;
    generate_config_module(&out_dir, &configuration)?;
    generate_linker_script(&out_dir, &configuration)?;

    if env::var("CARGO_CFG_TARGET_ARCH").as_deref() == Ok("arm") {
        // cortex-m-rt's `link.x` pulls `memory.x` from the linker search path.
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        if env::var("CARGO_FEATURE_DEFMT").is_ok() {
            println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
        }
    }
    Ok(())
}

fn process_configuration_file() -> Result<Configuration> {
    println!("cargo:rerun-if-env-changed=CITADEL_CONFIG");
    println!("cargo:rerun-if-changed=build.rs");

    let configuration = match env::var("CITADEL_CONFIG") {
        Ok(filename) if !filename.is_empty() => {
            println!("cargo:rerun-if-changed={}", filename);
            let file = File::open(filename)?;
            let mut buf_reader = BufReader::new(file);
            let mut contents = String::new();
            buf_reader.read_to_string(&mut contents)?;
            ron::from_str(&contents)?
        }
        _ => Configuration::default(),
    };

    configuration.validate()?;
    Ok(configuration)
}
