use wad_logging::wad_warn;
use wadreader_engine::{NamedImage, PipelineOutcome, PipelineReport};

/// The result-rendering boundary: consumes one settled gesture's report.
///
/// Invoked exactly once per drop gesture, after the drop target has returned
/// to Idle.
pub trait ResultPresenter {
    fn present(&self, report: &PipelineReport, label: &str);
}

/// Console renderer mirroring the page renderer this shell stands in for.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ResultPresenter for ConsolePresenter {
    fn present(&self, report: &PipelineReport, label: &str) {
        match &report.outcome {
            PipelineOutcome::Failure { reason } => {
                wad_warn!("gesture failed: {reason}");
                println!(
                    "An error was encountered while processing the data you submitted! \
                     Perhaps the data wasn't a WAD file intended for Doom 1?"
                );
            }
            PipelineOutcome::Success { images, timings } => {
                println!("{label}");
                println!("---");
                let mut any = false;
                any |= print_section("sprites", "objects that appear inside a map", &images.sprites);
                any |= print_section("flats", "used on ceilings and floors", &images.flats);
                any |= print_section("textures", "used on walls", &images.textures);
                any |= print_section(
                    "other graphics",
                    "UI elements and miscellaneous other images",
                    &images.other_graphics,
                );
                if !any {
                    // Valid WAD with no new graphics; distinct from a failure.
                    println!(
                        "No images were found while processing the WAD you submitted. \
                         This is unfortunate, but not unexpected because many Doom WADs only \
                         introduce new maps using all the original image/texture assets from Doom."
                    );
                }
                println!("Stats");
                println!(
                    "Total time seen by browser: {} seconds",
                    report.elapsed_ms as f64 / 1000.0
                );
                if let Some(timings) = timings {
                    println!(
                        "  time spent parsing file: {} seconds",
                        timings.parse_ms as f64 / 1000.0
                    );
                    println!(
                        "  time spent building images: {} seconds",
                        timings.build_ms as f64 / 1000.0
                    );
                }
            }
        }
    }
}

fn print_section(title: &str, description: &str, images: &[NamedImage]) -> bool {
    if images.is_empty() {
        return false;
    }
    println!("{title} - {description}");
    for image in images {
        println!("  {} ({} base64 bytes)", image.name, image.png_base64.len());
    }
    true
}
