use crate::codegen::{GENERATED_ZONE_COUNT, generate_keyboard_layout_code};
use anyhow::Result;
use log::info;

pub fn execute() -> Result<()> {
    info!("Generating visualizer code for zones 0..{}", GENERATED_ZONE_COUNT);
    println!("{}", generate_keyboard_layout_code());
    Ok(())
}
