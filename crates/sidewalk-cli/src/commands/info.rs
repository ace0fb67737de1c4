//! Info command
//!
//! Prints what a profile says about itself.

use crate::InfoArgs;
use anyhow::{Context, Result};
use sidewalk_icc::Profile;

pub fn run(args: InfoArgs) -> Result<()> {
    let profile = Profile::from_file(&args.profile)
        .with_context(|| format!("Failed to load profile: {}", args.profile.display()))?;

    println!("{}", args.profile.display());
    println!("  Description: {}", profile.description());
    println!("  Color space: {}", profile.color_space());
    let copyright = profile.copyright();
    if !copyright.is_empty() {
        println!("  Copyright:   {}", copyright);
    }
    println!(
        "  Usable:      {}",
        if profile.is_cmyk() { "yes (CMYK output)" } else { "no, not a CMYK profile" }
    );
    Ok(())
}
