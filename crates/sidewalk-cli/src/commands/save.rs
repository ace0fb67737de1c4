//! Save command
//!
//! Round-trips an image through the save operation.

use crate::SaveArgs;
use anyhow::{bail, Result};

pub fn run(args: SaveArgs) -> Result<()> {
    let bitmap = super::load_image(&args.input)?;

    if !sidewalk_io::save_to_file(&bitmap, &args.filename, &args.format)? {
        bail!("Failed to save {}.{}", args.filename, args.format);
    }
    println!("Saved {}.{}", args.filename, args.format);
    Ok(())
}
