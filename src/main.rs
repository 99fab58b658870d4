use anyhow::{Context, Result};
use lfp_raw::light_field::{DecodeConfig, FrameReferenceNames, LightFieldFile, LightFieldPipeline, SampleNormalization};
use lfp_raw::logger;

use tracing::{info, warn};

fn main() -> Result<()> {
    logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: lfp_raw <file.lfp>")?;

    info!("Starting lfp_raw...");

    let config = DecodeConfig::builder()
        .normalization(SampleNormalization::Levels)
        .debayer(true)
        .build();
    let pipeline = LightFieldPipeline::new(config);

    info!("Light field pipeline initialized");
    info!("Normalization: {:?}", pipeline.config().normalization);

    let mut file = LightFieldFile::open(&path).with_context(|| format!("opening {path}"))?;
    match file.read_private_metadata() {
        Ok(private) => info!(
            camera = %private.camera.serial_number,
            sensor = %private.devices.sensor.serial_number,
            "Serial numbers"
        ),
        Err(e) => warn!("No {}: {}", FrameReferenceNames::PRIVATE_METADATA_REF, e),
    }

    let decoded = pipeline
        .decode(&mut file)
        .with_context(|| format!("decoding {path}"))?;
    file.close();

    let image = &decoded.metadata.image;
    info!(
        width = image.width,
        height = image.height,
        bits_per_pixel = image.pixel_packing.bits_per_pixel,
        tile = %image.mosaic.tile,
        "Decoded raw mosaic"
    );

    let raw_max = decoded.raw.data.iter().copied().max().unwrap_or(0);
    let raw_min = decoded.raw.data.iter().copied().min().unwrap_or(0);
    info!("Raw sample range: {}..={} (of {})", raw_min, raw_max, decoded.raw.max_value());

    if let Some(rgb) = &decoded.rgb {
        let pixels = (rgb.width * rgb.height).max(1) as u64;
        let mut sums = [0u64; 3];
        for pixel in rgb.data.chunks_exact(3) {
            for (sum, &value) in sums.iter_mut().zip(pixel) {
                *sum += u64::from(value);
            }
        }
        info!(
            "Mean RGB: [{}, {}, {}]",
            sums[0] / pixels,
            sums[1] / pixels,
            sums[2] / pixels
        );
    }

    Ok(())
}
