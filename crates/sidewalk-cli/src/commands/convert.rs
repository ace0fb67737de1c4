//! Convert command
//!
//! Load, scale to print width, convert to CMYK, optionally export.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use sidewalk_convert::{ConversionCache, ConvertConfig, ImageConverter, TracingObserver};
use sidewalk_ops::{resize_to_print_width, Filter};
use tracing::{debug, info};

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    let config = load_config(&args)?;
    let filter: Filter = args.filter.parse()?;

    let source = super::load_image(&args.input)?;
    let bitmap = if args.no_resize {
        source
    } else {
        resize_to_print_width(&source, &config.printer, filter)
            .with_context(|| format!("Failed to resize to {} px", config.printer.target_width()))?
    };

    // the loaded image stays usable if the profile is not
    let converter = ImageConverter::from_config(&config)
        .context("CMYK conversion unavailable, image left unconverted")?;
    let converter = if verbose > 1 {
        converter.with_observer(TracingObserver)
    } else {
        converter
    };

    let cache = ConversionCache::new();
    let cmyka = converter
        .convert_with_cache(&bitmap, &cache)
        .with_context(|| format!("Failed to convert: {}", args.input.display()))?;

    let stats = cache.stats();
    info!(
        width = cmyka.width(),
        height = cmyka.height(),
        distinct = stats.entries,
        conversions = stats.misses,
        "converted"
    );
    println!(
        "Converted {}x{}: {} distinct colors, {} profile conversions",
        cmyka.width(),
        cmyka.height(),
        stats.entries,
        stats.misses
    );

    if let Some(output) = &args.output {
        sidewalk_io::write_cmyk_tiff(output, &cmyka)
            .with_context(|| format!("Failed to save: {}", output.display()))?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}

/// Config file first, then command-line overrides.
fn load_config(args: &ConvertArgs) -> Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::from_file(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?,
        None => ConvertConfig::default(),
    };

    if let Some(profile) = &args.profile {
        config.profile = Some(profile.clone());
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(width) = args.width_inches {
        config.printer.width_inches = width;
    }
    if let Some(dpi) = args.dpi {
        config.printer.dpi = dpi;
    }

    debug!(?config, "effective config");
    Ok(config)
}
