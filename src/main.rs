use std::io::{self, Write};
use std::process::ExitCode;

use ppmtone_rs::image_pipeline::{ConversionConfig, ConversionError, ToneMode, TonePipeline};
use ppmtone_rs::logger;

use tracing::error;

const USAGE: &str = "Usage: ppmtone_rs <1|2>
    1 - convert to greyscale
    2 - convert to sepia
";

const HEADER_ERROR: u8 = 1;
const VERSION_ERROR: u8 = 2;
const PARAM_ERROR: u8 = 3;
const CORRUPT_ERROR: u8 = 4;

fn exit_code(err: &ConversionError) -> ExitCode {
    let code = match err {
        ConversionError::InvalidMode(_) => PARAM_ERROR,
        ConversionError::HeaderParse(_) | ConversionError::InvalidDimensions(_, _) => HEADER_ERROR,
        ConversionError::UnsupportedVersion(_) => VERSION_ERROR,
        ConversionError::CorruptPayload(_, _) | ConversionError::IoError(_) => CORRUPT_ERROR,
    };
    ExitCode::from(code)
}

fn main() -> ExitCode {
    logger::init();

    let mut args = std::env::args().skip(1);
    let mode = match (args.next(), args.next()) {
        (Some(param), None) => match ToneMode::from_param(&param) {
            Ok(mode) => mode,
            Err(e) => {
                error!("{}", e);
                eprint!("{}", USAGE);
                return ExitCode::from(PARAM_ERROR);
            }
        },
        _ => {
            eprint!("{}", USAGE);
            return ExitCode::from(PARAM_ERROR);
        }
    };

    let config = ConversionConfig::builder().mode(mode).build();
    let pipeline = TonePipeline::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result = pipeline
        .convert(&mut input, &mut output)
        .and_then(|()| output.flush().map_err(ConversionError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {}", e);
            exit_code(&e)
        }
    }
}
