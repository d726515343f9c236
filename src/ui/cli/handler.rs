// Mon Oct 19 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::firmware::FirmwareAnalyzer;
use crate::image::{EntryFilter, ImageLoader};
use crate::output::{ConsoleRenderer, ImageOutcome, ImageReport, JsonSerializer};
use crate::pattern::PatternError;
use log::{error, info, warn};
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = args.to_config()?;
        let inputs = existing_inputs(&args.inputs);
        let outcomes = self.analyze_all(&inputs, &config)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if config.json_output {
            writeln!(out, "{}", JsonSerializer::new().serialize(&outcomes)?)?;
        } else {
            let renderer = ConsoleRenderer::new(config.use_color && atty::is(atty::Stream::Stdout));
            for outcome in &outcomes {
                renderer.render(&mut out, outcome)?;
            }
            renderer.render_done(&mut out)?;
        }
        drop(out);

        if config.pause_on_exit {
            io::stdin().read_line(&mut String::new())?;
        }

        Ok(())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()?;

        Ok(())
    }

    /// Compiles the signatures once and analyzes every input, in parallel when
    /// the config allows it. Outcomes keep the order of `inputs`.
    pub fn analyze_all(&self, inputs: &[PathBuf], config: &Config) -> anyhow::Result<Vec<ImageOutcome>> {
        let analyzer = FirmwareAnalyzer::new()?;
        let loader = ImageLoader::new(EntryFilter::new(config.entry_blacklist.clone()));

        let outcomes = if config.parallel && inputs.len() > 1 {
            info!("Analyzing {} images on {} threads", inputs.len(), config.max_threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.max_threads)
                .build()?;
            pool.install(|| {
                inputs
                    .par_iter()
                    .map(|path| analyze_input(path, &loader, &analyzer))
                    .collect::<Result<Vec<_>, _>>()
            })?
        } else {
            inputs
                .iter()
                .map(|path| analyze_input(path, &loader, &analyzer))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(outcomes)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Loading failures become a reportable outcome; only a broken analyzer
/// contract is returned as an error.
pub fn analyze_input(path: &Path, loader: &ImageLoader, analyzer: &FirmwareAnalyzer) -> Result<ImageOutcome, PatternError> {
    let image = match loader.load(path) {
        Ok(image) => image,
        Err(e) => {
            error!("{}: {}", path.display(), e);
            return Ok(ImageOutcome::Failed {
                source: path.display().to_string(),
                error: e.to_string(),
            });
        }
    };

    let report = analyzer.analyze(image.as_bytes())?;
    info!(
        "{}: AGESA {}, {} SMU modules",
        image.name(),
        if report.agesa.is_some() { "found" } else { "missing" },
        report.smu_modules.len()
    );

    Ok(ImageOutcome::Analyzed(ImageReport {
        name: image.name().to_string(),
        size: image.len(),
        report,
    }))
}

pub fn existing_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    inputs
        .iter()
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                warn!("Skipping {}: not a file", path.display());
            }
            exists
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_image(dir: &Path, name: &str, major: u8) -> PathBuf {
        let mut data = vec![0u8; 0x200];
        data[0x40..0x49].copy_from_slice(&[0x3D, 0x9B, 0x25, 0x70, 0x41, 0x47, 0x45, 0x53, 0x41]);
        data[0x4D..0x55].copy_from_slice(b"V9 1.0\0\0");
        data[0x110..0x116].copy_from_slice(&[0x24, 0x50, 0x53, 0x31, 0x00, 0x00]);
        data[0x100 + 0x62] = major;
        data[0x100 + 0x6C..0x100 + 0x70].copy_from_slice(&0x8000u32.to_le_bytes());

        let path = dir.join(name);
        std::fs::write(&path, &data).unwrap();
        path
    }

    #[test]
    fn test_analyze_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), "bios.CAP", 46);

        let outcome = analyze_input(&path, &ImageLoader::default(), &FirmwareAnalyzer::new().unwrap()).unwrap();
        match outcome {
            ImageOutcome::Analyzed(report) => {
                assert_eq!(report.name, "bios.CAP");
                assert_eq!(report.size, 0x200);
                assert_eq!(report.report.agesa.unwrap().as_str(), "V9 1.0");
                assert_eq!(report.report.smu_modules.len(), 1);
                assert_eq!(report.report.smu_modules[0].version.to_string(), "46.0.0");
                assert_eq!(report.report.smu_modules[0].end, 0x8100);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_load_failure_is_an_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"garbage").unwrap();

        let outcome = analyze_input(&path, &ImageLoader::default(), &FirmwareAnalyzer::new().unwrap()).unwrap();
        assert!(matches!(outcome, ImageOutcome::Failed { .. }));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let inputs: Vec<PathBuf> = (0..6u8)
            .map(|i| write_image(dir.path(), &format!("bios{}.bin", i), 40 + i))
            .collect();
        let handler = CommandHandler::new();

        let parallel = handler.analyze_all(&inputs, &Config::new().with_max_threads(3)).unwrap();
        let sequential = handler.analyze_all(&inputs, &Config::new().with_parallel(false)).unwrap();

        assert_eq!(parallel, sequential);
        for (i, outcome) in parallel.iter().enumerate() {
            match outcome {
                ImageOutcome::Analyzed(report) => assert_eq!(report.name, format!("bios{}.bin", i)),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_existing_inputs_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let present = write_image(dir.path(), "bios.bin", 1);
        let inputs = vec![dir.path().join("missing.bin"), present.clone(), dir.path().to_path_buf()];

        assert_eq!(existing_inputs(&inputs), vec![present]);
    }
}
